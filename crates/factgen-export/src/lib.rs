//! Spreadsheet export for collected statements
//!
//! Writes a single-sheet `.xlsx` file with one row per statement:
//!
//! | Fact_Number | Fact | Keyword | Character_Count |
//! |---|---|---|---|
//! | 1-based index | statement text | topic | length in characters |
//!
//! Column widths follow the longest cell in each column (header included),
//! plus two characters of padding, capped at 100.

use factgen_domain::Statement;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Header row, in column order
pub const COLUMNS: [&str; 4] = ["Fact_Number", "Fact", "Keyword", "Character_Count"];

/// Widest a column is ever made, in character widths
pub const MAX_COLUMN_WIDTH: usize = 100;

/// Longest sheet name Excel accepts
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Data rows available below the header
const MAX_DATA_ROWS: usize = 1_048_575;

/// Errors that can occur while writing the spreadsheet
#[derive(Error, Debug)]
pub enum ExportError {
    /// The workbook could not be built or saved
    #[error("Failed to write XLSX file: {0}")]
    Xlsx(#[from] XlsxError),

    /// More statements than a sheet can hold
    #[error("Too many statements for one sheet: {0} (max: {MAX_DATA_ROWS})")]
    TooManyRows(usize),
}

/// Result of a successful export
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    /// Where the file was written
    pub path: PathBuf,

    /// Name of the single sheet
    pub sheet_name: String,

    /// Data rows written (header excluded)
    pub rows_written: usize,
}

/// File name used when the caller does not supply one
///
/// # Examples
///
/// ```
/// assert_eq!(factgen_export::default_file_name("space"), "space_facts_ollama.xlsx");
/// ```
pub fn default_file_name(topic: &str) -> String {
    format!("{}_facts_ollama.xlsx", topic)
}

/// Sheet name for a topic, made safe for Excel
///
/// Characters Excel rejects (`[ ] : * ? / \`) become `_`, the name is cut
/// to 31 characters, and apostrophes left at either end are dropped.
pub fn sheet_name(topic: &str) -> String {
    let raw = format!("{}_Facts", topic);
    let cut: String = raw
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    let name = cut.trim_matches('\'');
    if name.is_empty() {
        "Facts".to_string()
    } else {
        name.to_string()
    }
}

/// Column widths for the four columns
pub fn column_widths(statements: &[Statement], topic: &str) -> [f64; 4] {
    let mut longest = COLUMNS.map(|header| header.chars().count());

    let topic_len = topic.chars().count();
    for (idx, statement) in statements.iter().enumerate() {
        longest[0] = longest[0].max((idx + 1).to_string().len());
        longest[1] = longest[1].max(statement.char_count());
        longest[2] = longest[2].max(topic_len);
        longest[3] = longest[3].max(statement.char_count().to_string().len());
    }

    longest.map(|len| (len + 2).min(MAX_COLUMN_WIDTH) as f64)
}

/// Write statements to an `.xlsx` file at `path`
///
/// An empty slice still produces a valid file holding only the header row.
///
/// # Errors
///
/// Returns error if the sheet would overflow or the file cannot be written.
pub fn export_statements(
    statements: &[Statement],
    topic: &str,
    path: &Path,
) -> Result<ExportSummary, ExportError> {
    if statements.len() > MAX_DATA_ROWS {
        return Err(ExportError::TooManyRows(statements.len()));
    }

    let sheet = sheet_name(topic);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet)?;

    let header_format = Format::new().set_bold();
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, statement) in statements.iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_number(row, 0, (idx + 1) as f64)?;
        worksheet.write_string(row, 1, statement.text())?;
        worksheet.write_string(row, 2, topic)?;
        worksheet.write_number(row, 3, statement.char_count() as f64)?;
    }

    for (col, width) in column_widths(statements, topic).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    debug!("Saving {} rows to sheet '{}'", statements.len(), sheet);
    workbook.save(path)?;
    info!("Facts saved to: {}", path.display());

    Ok(ExportSummary {
        path: path.to_path_buf(),
        sheet_name: sheet,
        rows_written: statements.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn statements(texts: &[&str]) -> Vec<Statement> {
        texts.iter().map(|t| Statement::new(*t)).collect()
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name("black holes"), "black holes_facts_ollama.xlsx");
    }

    #[test]
    fn test_sheet_name_sanitizing() {
        assert_eq!(sheet_name("space"), "space_Facts");
        assert_eq!(sheet_name("a/b:c?"), "a_b_c__Facts");
        assert_eq!(sheet_name("'quoted'"), "'quoted'_Facts".trim_matches('\''));
        let long = sheet_name(&"x".repeat(50));
        assert_eq!(long.chars().count(), 31);
    }

    #[test]
    fn test_sheet_name_never_ends_in_apostrophe_after_cut() {
        let topic = format!("{}'s moons", "a".repeat(30));
        let name = sheet_name(&topic);
        assert_eq!(name, "a".repeat(30));
        assert!(!name.ends_with('\''));

        assert_eq!(sheet_name(&"'".repeat(40)), "Facts");
    }

    #[test]
    fn test_export_with_long_possessive_topic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moons.xlsx");
        let topic = format!("{}'s moons", "a".repeat(30));

        let summary = export_statements(&statements(&["Io is volcanically active."]), &topic, &path)
            .unwrap();
        assert_eq!(summary.sheet_name, "a".repeat(30));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range(&summary.sheet_name).unwrap();
        assert_eq!(range.get_value((1, 2)), Some(&Data::String(topic)));
    }

    #[test]
    fn test_column_widths_for_empty_export_follow_headers() {
        let widths = column_widths(&[], "space");
        assert_eq!(widths, [13.0, 6.0, 9.0, 17.0]);
    }

    #[test]
    fn test_column_widths_cap_at_100() {
        let long = "z".repeat(250);
        let widths = column_widths(&statements(&[long.as_str()]), "space");
        assert_eq!(widths[1], 100.0);
        assert_eq!(widths[2], 9.0);
    }

    #[test]
    fn test_column_widths_follow_content() {
        let widths = column_widths(
            &statements(&["Thirty characters of text here"]),
            "a rather long topic name",
        );
        assert_eq!(widths[1], 32.0);
        assert_eq!(widths[2], 26.0);
    }

    #[test]
    fn test_export_writes_four_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_file_name("space"));
        let rows = statements(&[
            "Saturn's rings are made mostly of water ice.",
            "A day on Venus is longer than its year.",
        ]);

        let summary = export_statements(&rows, "space", &path).unwrap();
        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.sheet_name, "space_Facts");
        assert!(path.exists());

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["space_Facts".to_string()]);
        let range = workbook.worksheet_range("space_Facts").unwrap();
        assert_eq!(range.get_size(), (3, 4));

        for (col, header) in COLUMNS.iter().enumerate() {
            assert_eq!(
                range.get_value((0, col as u32)),
                Some(&Data::String(header.to_string()))
            );
        }
        assert_eq!(range.get_value((1, 0)), Some(&Data::Float(1.0)));
        assert_eq!(
            range.get_value((1, 1)),
            Some(&Data::String("Saturn's rings are made mostly of water ice.".to_string()))
        );
        assert_eq!(range.get_value((2, 2)), Some(&Data::String("space".to_string())));
        assert_eq!(range.get_value((2, 3)), Some(&Data::Float(39.0)));
    }

    #[test]
    fn test_export_empty_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        let summary = export_statements(&[], "space", &path).unwrap();
        assert_eq!(summary.rows_written, 0);

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("space_Facts").unwrap();
        assert_eq!(range.get_size(), (1, 4));
        assert_eq!(
            range.get_value((0, 3)),
            Some(&Data::String("Character_Count".to_string()))
        );
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.xlsx");

        let result = export_statements(&statements(&["A statement long enough."]), "space", &path);
        assert!(matches!(result, Err(ExportError::Xlsx(_))));
        assert!(!path.exists());
    }
}
