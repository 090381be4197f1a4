//! Prompt construction for statement generation

use factgen_domain::PromptStyle;

/// Builds the instruction sent to the backend on every iteration
///
/// The prompt is fixed for a run: the same topic, style, and count are asked
/// for again and again, and deduplication happens on our side.
pub struct PromptBuilder {
    topic: String,
    style: PromptStyle,
    count: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder for a topic
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            style: PromptStyle::default(),
            count: 10,
        }
    }

    /// Choose facts or myths
    pub fn with_style(mut self, style: PromptStyle) -> Self {
        self.style = style;
        self
    }

    /// Number of statements to request
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let (min_chars, max_chars) = self.style.length_range();
        let mut prompt = String::new();

        match self.style {
            PromptStyle::Facts => {
                prompt.push_str(&format!(
                    "Generate exactly {} unique, interesting, and factual statements about \"{}\".\n",
                    self.count, self.topic
                ));
                prompt.push_str(&format!(
                    "Each statement should be a standalone, complete sentence between {} and {} characters long.\n",
                    min_chars, max_chars
                ));
                prompt.push_str(FACT_RULES);
            }
            PromptStyle::Myths => {
                prompt.push_str(&format!(
                    "Generate exactly {} unique and imaginative myths or legendary fake beliefs related to \"{}\".\n",
                    self.count, self.topic
                ));
                prompt.push_str(&format!(
                    "Each myth must be a complete sentence between {} and {} characters long.\n",
                    min_chars, max_chars
                ));
                prompt.push_str(MYTH_RULES);
            }
        }

        prompt.push_str(&format!(
            "Only output the {} sentences, each on a new line.\n",
            self.count
        ));
        prompt
    }
}

const FACT_RULES: &str = "Do not use numbers, bullets, or any formatting; return plain text only.
Do not repeat statements. Each statement must be verifiable and reflect real-world knowledge.
";

const MYTH_RULES: &str = "Do not include any heading, numbering, or formatting; return plain text only.
Avoid repetition. Myths should feel mysterious, culturally inspired, and entirely fictional.
";
