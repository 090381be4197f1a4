//! factgen Collector
//!
//! Drives a text-generation backend until a target number of unique,
//! cleaned statements about a topic has been gathered.
//!
//! # Architecture
//!
//! ```text
//! Topic → PromptBuilder → TextSource → raw lines → normalizer → FactSet
//!                ↑                                                 │
//!                └──────────── pause, repeat until target ─────────┘
//! ```
//!
//! # Key Features
//!
//! - **Normalization**: enumeration markers and bullets stripped, whitespace collapsed
//! - **Two-stage filtering**: lines of 10 chars or fewer are dropped from a batch;
//!   statements of 20 chars or fewer are never admitted
//! - **Exact deduplication**: first-seen order preserved
//! - **Failure tolerance**: empty, failed, or timed-out calls are retried forever
//!   unless `RunLimits` say otherwise
//!
//! # Example Usage
//!
//! ```no_run
//! use factgen_collector::{CollectionRequest, Collector, CollectorConfig};
//! use factgen_domain::FactSet;
//! use factgen_llm::OllamaCli;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CollectorConfig::default();
//! let source = OllamaCli::new("llama3").with_timeout(config.call_timeout());
//! let collector = Collector::new(source, config);
//!
//! let mut facts = FactSet::new();
//! let request = CollectionRequest::new("space", 100);
//! let report = collector.collect(&request, &mut facts).await?;
//!
//! println!("{} statements after {} iterations", report.total, report.iterations);
//! let statements = facts.finalize(request.target_count);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod collector;
mod config;
mod error;
mod normalize;
mod parser;
mod prompt;
mod types;


pub use collector::Collector;
pub use config::CollectorConfig;
pub use error::CollectorError;
pub use normalize::{normalize_batch, normalize_line};
pub use parser::raw_lines;
pub use prompt::PromptBuilder;
pub use types::{CollectionReport, CollectionRequest, RunLimits, StopReason};
