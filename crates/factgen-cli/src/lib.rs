//! factgen CLI library.
//!
//! Configuration management, command execution, interactive prompts and
//! output formatting for the `factgen` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
