//! Clean raw backend lines into candidate statements
//!
//! Models number and bullet their output even when told not to. A line is
//! cleaned by stripping leading enumeration markers (`3.`, `3)`) and bullets
//! (`-`, `*`, `•`), collapsing whitespace runs, and trimming. Markers are
//! stripped until none is left, so `normalize_line` is idempotent.

use factgen_domain::Statement;
use regex::Regex;
use std::sync::LazyLock;

static NUMBER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s*").expect("valid number marker pattern"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s*").expect("valid bullet marker pattern"));

/// Clean a single raw line
///
/// # Examples
///
/// ```
/// use factgen_collector::normalize_line;
///
/// assert_eq!(normalize_line("3) Saturn has rings."), "Saturn has rings.");
/// assert_eq!(normalize_line("  *  Mars   is red "), "Mars is red");
/// ```
pub fn normalize_line(raw: &str) -> String {
    let mut line = raw;
    loop {
        let before = line.len();
        line = strip_marker(&NUMBER_MARKER, line);
        line = strip_marker(&BULLET_MARKER, line);
        if line.len() == before {
            break;
        }
    }
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean every line of a batch and keep those longer than `min_chars`
pub fn normalize_batch<S: AsRef<str>>(lines: &[S], min_chars: usize) -> Vec<Statement> {
    lines
        .iter()
        .map(|line| Statement::new(normalize_line(line.as_ref())))
        .filter(|statement| statement.exceeds(min_chars))
        .collect()
}

fn strip_marker<'a>(marker: &Regex, line: &'a str) -> &'a str {
    match marker.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_paren_number() {
        assert_eq!(normalize_line("3) Saturn has rings."), "Saturn has rings.");
    }

    #[test]
    fn test_strips_dot_number() {
        assert_eq!(
            normalize_line("12. The Sun is a G-type star."),
            "The Sun is a G-type star."
        );
    }

    #[test]
    fn test_strips_bullet_and_collapses_whitespace() {
        assert_eq!(
            normalize_line("- The sky is blue   today\tand stays  that way."),
            "The sky is blue today and stays that way."
        );
    }

    #[test]
    fn test_strips_each_bullet_kind() {
        for raw in ["- Comets", "* Comets", "• Comets", "   •Comets"] {
            assert_eq!(normalize_line(raw), "Comets", "input {:?}", raw);
        }
    }

    #[test]
    fn test_strips_stacked_markers() {
        assert_eq!(normalize_line("- 1. Venus spins backwards"), "Venus spins backwards");
        assert_eq!(normalize_line("1. - Venus spins backwards"), "Venus spins backwards");
    }

    #[test]
    fn test_keeps_inner_numbers_and_dashes() {
        assert_eq!(
            normalize_line("The Moon is 384,400 km away - on average."),
            "The Moon is 384,400 km away - on average."
        );
    }

    #[test]
    fn test_number_without_delimiter_is_kept() {
        assert_eq!(normalize_line("1969 was the year of Apollo 11"), "1969 was the year of Apollo 11");
    }

    #[test]
    fn test_marker_only_line_becomes_empty() {
        assert_eq!(normalize_line("4."), "");
        assert_eq!(normalize_line(" - "), "");
    }

    #[test]
    fn test_batch_first_stage_threshold() {
        let lines = [
            "1. Ten chars",    // "Ten chars" = 9 chars, dropped
            "2. Elevenchars",  // "Elevenchars" = 11 chars, kept
            "3. exactly10c",   // "exactly10c" = 10 chars, dropped
            "- ",
        ];
        let batch = normalize_batch(&lines, 10);
        let texts: Vec<&str> = batch.iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["Elevenchars"]);
    }

    #[test]
    fn test_batch_preserves_order_and_duplicates() {
        let lines = vec![
            "1. Jupiter has a great red spot".to_string(),
            "2. Jupiter has a great red spot".to_string(),
            "3. Neptune has supersonic winds".to_string(),
        ];
        let batch = normalize_batch(&lines, 10);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].text(), batch[1].text());
        assert_eq!(batch[2].text(), "Neptune has supersonic winds");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "[0-9a-z .)*•\\-\t\n]{0,40}") {
            let once = normalize_line(&raw);
            let twice = normalize_line(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_normalized_has_no_edge_or_double_whitespace(raw in "[a-z \t\n]{0,40}") {
            let out = normalize_line(&raw);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('\t'));
        }
    }
}
