//! FactSet module - the unique statement accumulator
//!
//! A `FactSet` pairs a hash set keyed by exact text with an ordered list, so
//! membership checks are O(1) and output order is first-seen order. It is
//! created empty by the caller, handed to the collection loop by `&mut`, and
//! only ever grows until it is finalized.

use crate::Statement;
use std::collections::HashSet;

/// Insertion-ordered set of unique statements
#[derive(Debug, Clone, Default)]
pub struct FactSet {
    seen: HashSet<String>,
    ordered: Vec<Statement>,
}

impl FactSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement unless an identical text is already present
    ///
    /// Returns `true` when the statement was added.
    ///
    /// # Examples
    ///
    /// ```
    /// use factgen_domain::{FactSet, Statement};
    ///
    /// let mut facts = FactSet::new();
    /// assert!(facts.insert(Statement::new("Mars has two moons.")));
    /// assert!(!facts.insert(Statement::new("Mars has two moons.")));
    /// assert_eq!(facts.len(), 1);
    /// ```
    pub fn insert(&mut self, statement: Statement) -> bool {
        if self.seen.contains(statement.text()) {
            return false;
        }
        self.seen.insert(statement.text().to_string());
        self.ordered.push(statement);
        true
    }

    /// Whether the exact text is already present
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    /// Number of unique statements
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Statements in first-seen order
    pub fn statements(&self) -> &[Statement] {
        &self.ordered
    }

    /// Iterate statements in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.ordered.iter()
    }

    /// Consume the set and return at most `target` statements
    ///
    /// The last collection round can overshoot the target; the extra
    /// statements are dropped from the end.
    pub fn finalize(mut self, target: usize) -> Vec<Statement> {
        self.ordered.truncate(target);
        self.ordered
    }

    /// Consume the set and return every statement
    pub fn into_statements(self) -> Vec<Statement> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_preserves_first_seen_order() {
        let mut facts = FactSet::new();
        facts.insert("gamma ray bursts are brief".into());
        facts.insert("alpha centauri is a triple system".into());
        facts.insert("gamma ray bursts are brief".into());
        facts.insert("beta pictoris has a debris disk".into());

        let texts: Vec<&str> = facts.iter().map(|s| s.text()).collect();
        assert_eq!(
            texts,
            vec![
                "gamma ray bursts are brief",
                "alpha centauri is a triple system",
                "beta pictoris has a debris disk",
            ]
        );
    }

    #[test]
    fn test_exact_match_only() {
        let mut facts = FactSet::new();
        assert!(facts.insert("The Moon is drifting away.".into()));
        assert!(facts.insert("the Moon is drifting away.".into()));
        assert!(facts.insert("The Moon is drifting away. ".into()));
        assert_eq!(facts.len(), 3);
    }

    #[test]
    fn test_finalize_truncates_overshoot() {
        let mut facts = FactSet::new();
        for i in 0..7 {
            facts.insert(Statement::new(format!("statement number {}", i)));
        }
        let finalized = facts.finalize(5);
        assert_eq!(finalized.len(), 5);
        assert_eq!(finalized[4].text(), "statement number 4");
    }

    #[test]
    fn test_finalize_below_target_keeps_everything() {
        let mut facts = FactSet::new();
        facts.insert("only one".into());
        assert_eq!(facts.finalize(10).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_no_duplicates_in_output(texts in proptest::collection::vec("[a-c]{0,3}", 0..50)) {
            let mut facts = FactSet::new();
            for text in &texts {
                facts.insert(Statement::new(text.clone()));
            }
            let out = facts.into_statements();
            let unique: HashSet<&str> = out.iter().map(|s| s.text()).collect();
            prop_assert_eq!(unique.len(), out.len());
        }

        #[test]
        fn prop_len_matches_distinct_inputs(texts in proptest::collection::vec("[a-z]{1,4}", 0..40)) {
            let mut facts = FactSet::new();
            for text in &texts {
                facts.insert(Statement::new(text.clone()));
            }
            let distinct: HashSet<&String> = texts.iter().collect();
            prop_assert_eq!(facts.len(), distinct.len());
        }
    }
}
