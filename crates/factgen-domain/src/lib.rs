//! factgen Domain Layer
//!
//! Core model for topic statement generation. Like the rest of the domain
//! layer this crate has no external dependencies; backends, normalization,
//! and export live in other crates and plug in through the traits here.
//!
//! ## Key Concepts
//!
//! - **Statement**: one candidate sentence about a topic, with its length
//! - **FactSet**: the unique statement set, in first-seen order
//! - **PromptStyle**: what kind of statements the backend is asked for
//! - **TextSource**: the boundary to a text-generation backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fact_set;
pub mod statement;
pub mod style;
pub mod traits;

// Re-exports for convenience
pub use fact_set::FactSet;
pub use statement::Statement;
pub use style::PromptStyle;
pub use traits::TextSource;
