// File: fsdelete-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running the post-action without a host platform.
//! A deployment document stands in for the host: it names the filesets and
//! the default runtime arguments, and the caller supplies the run outcome.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::cleaner::{ConditionalRegexCleaner, DeletionReport};
use crate::config::{DeploymentConfig, RuntimeArguments};
use crate::errors::ExecutionError;
use crate::fileset::FilesetRegistry;

/// Runs the post-action described by `config` for one completed run.
///
/// `overrides` take precedence over the document's `runtimeArguments`.
pub fn run_post_action(
    config: &DeploymentConfig,
    run_succeeded: bool,
    overrides: &RuntimeArguments,
) -> Result<DeletionReport, ExecutionError> {
    let registry = FilesetRegistry::from_config(config);
    let mut args = config.runtime_arguments.clone();
    args.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    debug!(target: "fsdelete_core::headless", "Running post-action with {} runtime argument(s).", args.len());

    let cleaner = ConditionalRegexCleaner::new(config.post_action.clone())?;
    cleaner.run(run_succeeded, &registry, &args)
}

/// Loads a deployment file and runs its post-action in one call.
pub fn run_post_action_from_file<P: AsRef<Path>>(
    path: P,
    run_succeeded: bool,
    overrides: &RuntimeArguments,
) -> Result<DeletionReport> {
    let path = path.as_ref();
    let config = DeploymentConfig::load_from_file(path)?;
    run_post_action(&config, run_succeeded, overrides)
        .with_context(|| format!("Post-action from {} failed", path.display()))
}
