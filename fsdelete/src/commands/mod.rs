//! Implementations of the `fsdelete` subcommands.

pub mod describe;
pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use fsdelete_core::config_candidate_paths;

use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Picks the deployment file: the explicit path if given, otherwise the first
/// existing candidate location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!("Using deployment file given on the command line: {}", path.display());
        return Ok(path.to_path_buf());
    }
    config_candidate_paths()
        .into_iter()
        .find(|p| p.is_file())
        .context("No deployment file given and none found in the default locations (./fsdelete.yaml, <config dir>/fsdelete/config.yaml)")
}
