//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use factgen_collector::{CollectionReport, StopReason};
use factgen_domain::PromptStyle;
use factgen_export::ExportSummary;
use factgen_llm::ollama::model_matches;
use colored::*;
use std::path::PathBuf;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// What a generate run is about to do, shown before the first backend call.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Topic of the statements
    pub topic: String,
    /// Ollama model name
    pub model: String,
    /// Facts or myths
    pub style: PromptStyle,
    /// Unique statements wanted
    pub target: usize,
    /// Statements asked for per call
    pub batch_size: usize,
    /// Spreadsheet to write
    pub output: PathBuf,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the run settings. Empty for non-table formats.
    pub fn run_settings(&self, settings: &RunSettings) -> String {
        if self.format != OutputFormat::Table {
            return String::new();
        }

        let mut builder = Builder::default();
        builder.push_record(["Setting", "Value"]);
        builder.push_record(["Topic", settings.topic.as_str()]);
        builder.push_record(["Model", settings.model.as_str()]);
        builder.push_record(["Style", settings.style.as_str()]);
        builder.push_record(["Target".to_string(), settings.target.to_string()]);
        builder.push_record(["Batch size".to_string(), settings.batch_size.to_string()]);
        builder.push_record(["Output".to_string(), settings.output.display().to_string()]);

        self.render(builder)
    }

    /// Format the outcome of a run.
    ///
    /// `report` is `None` when the run was interrupted; `export` is `None`
    /// when nothing was saved.
    pub fn run_result(
        &self,
        report: Option<&CollectionReport>,
        export: Option<&ExportSummary>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "interrupted": report.is_none(),
                    "report": report,
                    "export": export,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(export
                .map(|summary| summary.path.display().to_string())
                .unwrap_or_default()),
            OutputFormat::Table => Ok(self.run_result_table(report, export)),
        }
    }

    fn run_result_table(
        &self,
        report: Option<&CollectionReport>,
        export: Option<&ExportSummary>,
    ) -> String {
        let mut lines = Vec::new();

        if let Some(report) = report {
            let mut builder = Builder::default();
            builder.push_record(["Iterations", "Added", "Total", "Failed calls", "Stopped", "Elapsed"]);
            builder.push_record([
                report.iterations.to_string(),
                report.added.to_string(),
                report.total.to_string(),
                report.failed_calls.to_string(),
                stop_reason_label(report.stop_reason).to_string(),
                format!("{:.1}s", report.elapsed_ms as f64 / 1000.0),
            ]);
            lines.push(self.render(builder));

            if let Some(failure) = &report.last_failure {
                lines.push(self.warning(&format!("Last backend failure: {}", failure)));
            }
        }

        match export {
            Some(summary) => lines.push(self.success(&format!(
                "Saved {} statements to {} (sheet '{}')",
                summary.rows_written,
                summary.path.display(),
                summary.sheet_name
            ))),
            None => lines.push(self.info("Nothing saved")),
        }

        lines.join("\n")
    }

    /// Format a model listing, marking the selected model.
    pub fn models(&self, models: &[String], selected: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "models": models,
                "selected": selected,
                "selected_available": models.iter().any(|m| model_matches(m, selected)),
            }))?),
            OutputFormat::Quiet => Ok(models.join("\n")),
            OutputFormat::Table => {
                if models.is_empty() {
                    return Ok(self.colorize("No models installed.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Model", "Selected"]);
                for model in models {
                    let mark = if model_matches(model, selected) {
                        "✓"
                    } else {
                        ""
                    };
                    builder.push_record([model.as_str(), mark]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn stop_reason_label(reason: StopReason) -> &'static str {
    match reason {
        StopReason::TargetReached => "target reached",
        StopReason::IterationLimit => "iteration limit",
        StopReason::TimeLimit => "time limit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CollectionReport {
        CollectionReport {
            iterations: 12,
            added: 100,
            total: 104,
            failed_calls: 1,
            last_failure: Some("Backend produced no output".to_string()),
            stop_reason: StopReason::TargetReached,
            elapsed_ms: 15_250,
        }
    }

    fn export() -> ExportSummary {
        ExportSummary {
            path: PathBuf::from("space_facts_ollama.xlsx"),
            sheet_name: "space_Facts".to_string(),
            rows_written: 100,
        }
    }

    #[test]
    fn test_table_result() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.run_result(Some(&report()), Some(&export())).unwrap();
        assert!(output.contains("Iterations"));
        assert!(output.contains("target reached"));
        assert!(output.contains("15.2s") || output.contains("15.3s"));
        assert!(output.contains("⚠ Last backend failure: Backend produced no output"));
        assert!(output.contains("✓ Saved 100 statements to space_facts_ollama.xlsx (sheet 'space_Facts')"));
    }

    #[test]
    fn test_interrupted_unsaved_table_result() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.run_result(None, None).unwrap();
        assert_eq!(output, "ℹ Nothing saved");
    }

    #[test]
    fn test_json_result() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.run_result(Some(&report()), Some(&export())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["interrupted"], false);
        assert_eq!(value["report"]["stop_reason"], "target_reached");
        assert_eq!(value["export"]["rows_written"], 100);
    }

    #[test]
    fn test_quiet_result_is_path_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.run_result(Some(&report()), Some(&export())).unwrap();
        assert_eq!(output, "space_facts_ollama.xlsx");
    }

    #[test]
    fn test_run_settings_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.run_settings(&RunSettings {
            topic: "space".to_string(),
            model: "llama3".to_string(),
            style: PromptStyle::Myths,
            target: 1500,
            batch_size: 10,
            output: PathBuf::from("space_facts_ollama.xlsx"),
        });
        assert!(output.contains("llama3"));
        assert!(output.contains("myths"));
        assert!(output.contains("1500"));

        let quiet = Formatter::new(OutputFormat::Quiet, false);
        assert!(quiet
            .run_settings(&RunSettings {
                topic: "space".to_string(),
                model: "llama3".to_string(),
                style: PromptStyle::Facts,
                target: 1,
                batch_size: 10,
                output: PathBuf::from("x.xlsx"),
            })
            .is_empty());
    }

    #[test]
    fn test_models_table_marks_selected() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let models = vec!["llama3:latest".to_string(), "mistral:7b".to_string()];
        let output = formatter.models(&models, "llama3").unwrap();
        assert!(output.contains("llama3:latest"));
        assert!(output.contains("✓"));

        let empty = formatter.models(&[], "llama3").unwrap();
        assert!(empty.contains("No models installed"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
