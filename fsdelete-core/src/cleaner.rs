// fsdelete-core/src/cleaner.rs
//! The conditional regex cleaner.
//!
//! After a pipeline run finishes, the cleaner deletes every entry directly
//! inside `<fileset base>/<directory>` whose name matches the delete pattern,
//! and does nothing at all when the run did not succeed.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{CleanerConfig, RuntimeArguments};
use crate::errors::{ConfigError, ExecutionError};
use crate::fileset::{DirectoryHandle, FilesetResolver};
use crate::pattern::{compile_pattern, validate_config as validate_pattern};

/// What a single invocation did.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionReport {
    pub entries_scanned: usize,
    pub entries_deleted: usize,
    /// Names of the deleted entries, in deletion order.
    pub deleted: Vec<String>,
}

impl DeletionReport {
    /// `true` when nothing was scanned and nothing was deleted.
    pub fn is_empty(&self) -> bool {
        self.entries_scanned == 0 && self.entries_deleted == 0
    }
}

/// Configure-time validation of a delete pattern.
pub fn validate_config(delete_regex: &str) -> Result<(), ConfigError> {
    validate_pattern(delete_regex)
}

/// Deletes every entry under `base_location/directory` whose name contains a
/// match for `delete_regex`, if `run_succeeded`.
///
/// The first failed deletion aborts the pass; entries already deleted stay
/// deleted and the remaining matches are left in place.
pub fn execute(
    run_succeeded: bool,
    base_location: &dyn DirectoryHandle,
    directory: &str,
    delete_regex: &str,
) -> Result<DeletionReport, ExecutionError> {
    if !run_succeeded {
        info!(target: "fsdelete_core::cleaner", "Run did not succeed; skipping fileset cleanup.");
        return Ok(DeletionReport::default());
    }

    let pattern = compile_pattern(delete_regex)?;
    let target = base_location.join(directory);

    let entries = base_location
        .list(directory)
        .map_err(|source| ExecutionError::DirectoryUnavailable { path: target.clone(), source })?;

    let mut report = DeletionReport {
        entries_scanned: entries.len(),
        ..DeletionReport::default()
    };

    for entry in entries.iter().filter(|e| pattern.is_match(e.name())) {
        let kind = if entry.is_directory() { "directory" } else { "file" };
        debug!(target: "fsdelete_core::cleaner", "Deleting {} '{}' from {}", kind, entry.name(), target.display());
        if let Err(source) = entry.delete() {
            warn!(
                target: "fsdelete_core::cleaner",
                "Deleting '{}' failed after {} deletion(s); aborting cleanup of {}.",
                entry.name(),
                report.entries_deleted,
                target.display()
            );
            return Err(ExecutionError::DeletePartialFailure {
                deleted_so_far: report.entries_deleted,
                entry: entry.name().to_string(),
                source,
            });
        }
        report.entries_deleted += 1;
        report.deleted.push(entry.name().to_string());
    }

    info!(
        target: "fsdelete_core::cleaner",
        "Cleaned {}: scanned {} entries, deleted {}.",
        target.display(),
        report.entries_scanned,
        report.entries_deleted
    );
    Ok(report)
}

/// A validated post-action, built once at deployment and reused for every run.
#[derive(Debug, Clone)]
pub struct ConditionalRegexCleaner {
    config: CleanerConfig,
}

impl ConditionalRegexCleaner {
    /// Validates `config` and builds the cleaner.
    pub fn new(config: CleanerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            target: "fsdelete_core::cleaner",
            "Configured cleaner for fileset '{}' (directory '{}', pattern '{}').",
            config.fileset_name, config.directory, config.delete_regex
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Runs the post-action for one completed run.
    ///
    /// Deferred values are resolved before the outcome is looked at, so an
    /// unresolved placeholder, or one resolving to an empty directory, fails
    /// every run. The fileset is only looked up when the run succeeded.
    pub fn run(
        &self,
        run_succeeded: bool,
        filesets: &dyn FilesetResolver,
        args: &RuntimeArguments,
    ) -> Result<DeletionReport, ExecutionError> {
        let directory = self.config.directory.resolve(args)?;
        if directory.trim().is_empty() {
            return Err(ConfigError::MissingField("directory").into());
        }
        if !run_succeeded {
            info!(target: "fsdelete_core::cleaner", "Run did not succeed; skipping cleanup of fileset '{}'.", self.config.fileset_name);
            return Ok(DeletionReport::default());
        }

        let base = filesets
            .resolve(&self.config.fileset_name)
            .ok_or_else(|| ExecutionError::FilesetNotFound(self.config.fileset_name.clone()))?;
        execute(true, base, &directory, &self.config.delete_regex)
    }
}
