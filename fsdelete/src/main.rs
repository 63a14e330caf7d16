// fsdelete/src/main.rs
//! fsdelete entry point.

use anyhow::Error;
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use fsdelete::cli::{Cli, Commands};
use fsdelete::commands::{describe, run, validate};
use fsdelete::logger;
use fsdelete::ui::output_format;
use fsdelete_core::{ConfigError, ExecutionError};

/// Exit code for configuration problems, which block deployment.
const EXIT_CONFIG: u8 = 2;
/// Exit code for a failed post-action.
const EXIT_EXECUTION: u8 = 1;

/// Finds the structured error kind anywhere in the chain.
fn classify(err: &Error) -> (&'static str, u8) {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            return (e.kind(), EXIT_CONFIG);
        }
        if let Some(e) = cause.downcast_ref::<ExecutionError>() {
            let code = match e {
                ExecutionError::Config(_) => EXIT_CONFIG,
                _ => EXIT_EXECUTION,
            };
            return (e.kind(), code);
        }
    }
    ("internal", EXIT_EXECUTION)
}

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let result = match &args.command {
        Commands::Validate(cmd) => validate::run_validate(cmd, args.quiet),
        Commands::Run(cmd) => run::run_cleanup(cmd, args.quiet).map(|_| ()),
        Commands::Describe => describe::run_describe(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (kind, code) = classify(&err);
            let supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(&mut io::stderr(), kind, &format!("{:#}", err), supports_color);
            ExitCode::from(code)
        }
    }
}
