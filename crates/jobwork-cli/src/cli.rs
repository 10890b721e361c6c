//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Jobwork CLI - Supplier directory for job-work vouchers.
#[derive(Debug, Parser)]
#[command(name = "jobwork")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "JOBWORK_CONFIG")]
    pub config: Option<String>,

    /// Supplier store path (overrides the config file)
    #[arg(short, long, global = true, env = "JOBWORK_STORE")]
    pub store: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a supplier used on a saved voucher
    Record(RecordArgs),

    /// List the ranked supplier directory
    List,

    /// Suggest supplier names for a partial name
    Suggest(SuggestArgs),

    /// Erase the supplier directory
    Clear(ClearArgs),

    /// Format an amount or quantity for display
    Format(FormatArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the record command.
#[derive(Debug, Parser)]
pub struct RecordArgs {
    /// Supplier name (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Partial supplier name
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Arguments for the clear command.
#[derive(Debug, Parser)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the format command.
#[derive(Debug, Parser)]
pub struct FormatArgs {
    /// What kind of value to format
    #[arg(value_enum)]
    pub kind: FormatKind,

    /// Numeric value
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Value kinds understood by the format command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatKind {
    /// Rupee amount, two decimals
    Currency,
    /// Piece or metre count
    Quantity,
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
