//! `fsdelete run`: the post-action itself.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};

use fsdelete_core::{run_post_action, DeletionReport, DeploymentConfig, RuntimeArguments};

use crate::cli::RunCommand;
use crate::commands::{info_msg, resolve_config_path};
use crate::ui::output_format;

pub fn run_cleanup(cmd: &RunCommand, quiet: bool) -> Result<DeletionReport> {
    let path = resolve_config_path(cmd.config.as_deref())?;
    let config = DeploymentConfig::load_from_file(&path)?;
    let overrides: RuntimeArguments = cmd.args.iter().cloned().collect();
    debug!("Run status {:?}, {} runtime argument override(s).", cmd.status, overrides.len());

    let report = run_post_action(&config, cmd.status.is_successful(), &overrides)?;
    info!(
        "Post-action for fileset '{}' finished: {} scanned, {} deleted.",
        config.post_action.fileset_name, report.entries_scanned, report.entries_deleted
    );

    if cmd.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize the deletion report")?;
        writeln!(io::stdout().lock(), "{}", json)?;
    } else if !quiet {
        if cmd.status.is_successful() {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            output_format::print_report(&mut stdout.lock(), &report, supports_color)?;
        } else {
            info_msg("Run did not succeed; nothing was deleted.");
        }
    }
    Ok(report)
}
