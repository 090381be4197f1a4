//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ollama could not be reached before generation started
    #[error("Ollama is not available: {0}")]
    Unavailable(String),

    /// Collection error
    #[error("Collection error: {0}")]
    Collector(#[from] factgen_collector::CollectorError),

    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] factgen_export::ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal input error
    #[error("Input error: {0}")]
    Input(#[from] rustyline::error::ReadlineError),
}
