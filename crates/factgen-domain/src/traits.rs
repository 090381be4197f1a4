//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Trait for text-generation backends
///
/// Implemented by the infrastructure layer (factgen-llm). The model identifier
/// and any per-call bound belong to the implementation; a call either yields
/// the backend's raw text or an error describing why it produced nothing.
pub trait TextSource {
    /// Error type for generation failures
    type Error: std::fmt::Display;

    /// Submit a prompt and return the raw generated text
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
