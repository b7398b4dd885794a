//! Clap argument definitions for the `cuke` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "cuke")]
#[command(about = "Explore Cucumber test-run reports from the command line")]
pub struct Cli {
    /// Report file (NDJSON stream of Cucumber messages); falls back to the
    /// CUKE_REPORT environment variable
    #[arg(short = 'r', long, global = true)]
    pub report: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `cuke` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search scenarios by name
    Search(SearchCommand),

    /// List every scenario in the report
    Ls(LsCommand),

    /// Show execution statistics for the run
    Summary(SummaryCommand),
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Include scenario ids and keywords
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for `cuke search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words; a scenario matches when every word is a
    /// case-insensitive substring of some word of its name
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `cuke ls`.
#[derive(Args, Debug, Clone, Default)]
pub struct LsCommand {
    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `cuke summary`.
#[derive(Args, Debug, Clone, Default)]
pub struct SummaryCommand {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
