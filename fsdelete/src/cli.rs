// fsdelete/src/cli.rs
//! This file defines the command-line interface (CLI) for the fsdelete
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "fsdelete",
    version = env!("CARGO_PKG_VERSION"),
    about = "Delete regex-matching files from a fileset directory after a successful pipeline run",
    long_about = "fsdelete is the post-run cleanup step of a data pipeline. Once a run has finished, it deletes every entry directly inside a fileset directory whose name matches a regular expression, and leaves everything alone when the run failed.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages and logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `fsdelete` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates a deployment file without touching any fileset.
    #[command(about = "Validate a deployment file, including its delete pattern.")]
    Validate(ValidateCommand),

    /// Runs the post-action for one completed pipeline run.
    #[command(about = "Run the post-action for a completed pipeline run.")]
    Run(RunCommand),

    /// Prints the plugin registration record as JSON.
    #[command(about = "Print the plugin registration record as JSON.")]
    Describe,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Path to the deployment file (YAML).
    #[arg(long, short = 'c', value_name = "FILE", env = "FSDELETE_CONFIG", help = "Path to the deployment file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunCommand {
    /// Path to the deployment file (YAML).
    #[arg(long, short = 'c', value_name = "FILE", env = "FSDELETE_CONFIG", help = "Path to the deployment file (YAML).")]
    pub config: Option<PathBuf>,

    /// Outcome of the pipeline run.
    #[arg(long, short = 's', value_enum, help = "Outcome of the pipeline run.")]
    pub status: RunStatus,

    /// Runtime arguments used to resolve `${key}` placeholders.
    #[arg(
        long = "arg",
        short = 'a',
        value_name = "KEY=VALUE",
        value_parser = parse_runtime_argument,
        help = "Runtime argument used to resolve ${key} placeholders (repeatable)."
    )]
    pub args: Vec<(String, String)>,

    /// Print the deletion report as JSON on stdout.
    #[arg(long = "json", help = "Print the deletion report as JSON on stdout.")]
    pub json: bool,
}

/// Outcome of the pipeline run the post-action is invoked for.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunStatus {
    /// The run completed successfully.
    Succeeded,
    /// The run failed.
    Failed,
}

impl RunStatus {
    pub fn is_successful(self) -> bool {
        self == RunStatus::Succeeded
    }
}

/// Parses a `KEY=VALUE` runtime argument. The value may be empty and may
/// itself contain `=`.
pub fn parse_runtime_argument(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}
