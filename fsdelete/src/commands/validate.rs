//! `fsdelete validate`: checks a deployment file the way a host would before
//! accepting the pipeline.

use anyhow::Result;
use log::info;

use fsdelete_core::{ConditionalRegexCleaner, DeploymentConfig};

use crate::cli::ValidateCommand;
use crate::commands::{info_msg, resolve_config_path, warn_msg};

pub fn run_validate(cmd: &ValidateCommand, quiet: bool) -> Result<()> {
    let path = resolve_config_path(cmd.config.as_deref())?;
    let config = DeploymentConfig::load_from_file(&path)?;
    let cleaner = ConditionalRegexCleaner::new(config.post_action.clone())?;
    let post_action = cleaner.config();
    info!("Deployment file {} is valid.", path.display());

    if quiet {
        return Ok(());
    }
    if !config.filesets.contains_key(&post_action.fileset_name) {
        warn_msg(format!(
            "fileset '{}' is not listed under `filesets`; runs will fail unless it is added.",
            post_action.fileset_name
        ));
    }
    if post_action.directory.is_deferred() {
        info_msg(format!(
            "Directory '{}' is resolved from runtime arguments at run time.",
            post_action.directory
        ));
    }
    info_msg(format!("Configuration in {} is valid.", path.display()));
    Ok(())
}
