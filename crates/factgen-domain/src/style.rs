//! Prompt style - what kind of statements are requested

/// Kind of statements the backend is asked to produce
///
/// - Facts: verifiable real-world statements
/// - Myths: invented legends and folk beliefs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptStyle {
    /// Factual statements, 250-500 characters each
    #[default]
    Facts,

    /// Fictional myths, 400-700 characters each
    Myths,
}

impl PromptStyle {
    /// Get the style name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptStyle::Facts => "facts",
            PromptStyle::Myths => "myths",
        }
    }

    /// Parse a style from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "facts" | "fact" => Some(PromptStyle::Facts),
            "myths" | "myth" => Some(PromptStyle::Myths),
            _ => None,
        }
    }

    /// Requested character range for each statement
    pub fn length_range(&self) -> (usize, usize) {
        match self {
            PromptStyle::Facts => (250, 500),
            PromptStyle::Myths => (400, 700),
        }
    }
}

impl std::str::FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid prompt style: {}", s))
    }
}

impl std::fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
