pub mod check;
pub mod parse;
pub mod schema;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tidy-adapter")]
#[command(
    author,
    version,
    about = "Run clang-tidy on C/C++ sources and report file-grouped diagnostics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the analyzer on source files and print their diagnostics
    Check(CheckArgs),

    /// Parse a captured tool report into diagnostics
    Parse(ParseArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Clone)]
pub struct CheckArgs {
    /// Files or directories to check (default: sources.paths from config)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "tidy-adapter.yaml")]
    pub config: PathBuf,

    /// Override max parallel tool runs
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Override output directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Do not write report files
    #[arg(long)]
    pub no_report: bool,

    /// Output format for diagnostics on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit 1 if any error diagnostics (CI mode)
    #[arg(long)]
    pub fail_on_error: bool,

    /// Show plan without executing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// Captured report (reads stdin when omitted or `-`)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
