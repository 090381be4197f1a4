//! Error types for the Collector

use thiserror::Error;

/// Errors that stop a collection run before it starts
///
/// Backend failures during a run are not errors at this level: they are
/// logged, counted in the report, and the loop carries on.
#[derive(Error, Debug)]
pub enum CollectorError {
    /// The request cannot be served (e.g. empty topic)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
