//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use factgen_domain::PromptStyle;
use std::path::PathBuf;

/// factgen - Build spreadsheets of unique statements about a topic with a local Ollama model.
#[derive(Debug, Parser)]
#[command(name = "factgen")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Generation options when no subcommand is given
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, defaulting to `generate`
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Generate(self.generate))
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (file path only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate statements and save them to a spreadsheet (default)
    Generate(GenerateArgs),

    /// Check that Ollama answers and list its local models
    Models(ModelsArgs),
}

/// Arguments for the generate command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Topic of the statements (prompted for when omitted)
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Ollama model name (prompted for when omitted)
    #[arg(short, long, env = "FACTGEN_MODEL")]
    pub model: Option<String>,

    /// Number of unique statements to collect
    #[arg(short = 'n', long)]
    pub target: Option<usize>,

    /// Kind of statements to ask for
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Spreadsheet to write (default: <topic>_facts_ollama.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop after this many backend calls
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Stop after this many seconds
    #[arg(long)]
    pub max_duration_secs: Option<u64>,
}

/// Arguments for the models command.
#[derive(Debug, Clone, Default, Args)]
pub struct ModelsArgs {
    /// Model to look for in the listing (default: configured model)
    #[arg(short, long, env = "FACTGEN_MODEL")]
    pub model: Option<String>,
}

/// Style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleArg {
    /// Verifiable facts
    Facts,
    /// Invented myths and legends
    Myths,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StyleArg> for PromptStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Facts => PromptStyle::Facts,
            StyleArg::Myths => PromptStyle::Myths,
        }
    }
}
