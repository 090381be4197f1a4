//! Statement module - a single generated sentence about a topic

use std::fmt;

/// A candidate statement produced by the normalizer
///
/// The length is counted in characters (Unicode scalar values), not bytes,
/// so it matches what is exported in the `Character_Count` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    text: String,
    char_count: usize,
}

impl Statement {
    /// Create a statement from already-normalized text
    ///
    /// # Examples
    ///
    /// ```
    /// use factgen_domain::Statement;
    ///
    /// let s = Statement::new("Saturn has rings.");
    /// assert_eq!(s.char_count(), 17);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self { text, char_count }
    }

    /// The statement text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the text
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Whether the statement is strictly longer than `min_chars`
    pub fn exceeds(&self, min_chars: usize) -> bool {
        self.char_count > min_chars
    }

    /// The first `max_chars` characters, with `...` appended when cut
    pub fn preview(&self, max_chars: usize) -> String {
        if self.char_count <= max_chars {
            return self.text.clone();
        }
        let cut: String = self.text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
