//! Interactive prompts for values not given on the command line.

use crate::error::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Line editor wrapper for one-off questions.
pub struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    /// Create a prompter on the current terminal.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Ask for a value, falling back to `default` on blank input.
    ///
    /// Ctrl+C and Ctrl+D also accept the default.
    pub fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        let prompt = format!("{} (default: {}): ", question, default);
        match self.editor.readline(&prompt) {
            Ok(line) => Ok(resolve_input(&line, default)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(default.to_string()),
            Err(e) => Err(e.into()),
        }
    }

    /// Ask a yes/no question. Anything but `y`/`yes` means no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{} [y/N] ", question);
        match self.editor.readline(&prompt) {
            Ok(line) => Ok(is_yes(&line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Trimmed input, or `default` when the input is blank.
pub fn resolve_input(line: &str, default: &str) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether an answer means yes.
pub fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_uses_default() {
        assert_eq!(resolve_input("", "space"), "space");
        assert_eq!(resolve_input("   \t", "llama3"), "llama3");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(resolve_input("  deep sea  ", "space"), "deep sea");
    }

    #[test]
    fn test_yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y "));
        assert!(is_yes("yes"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
