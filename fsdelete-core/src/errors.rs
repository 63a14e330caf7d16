//! errors.rs - Custom error types for the fsdelete-core library.
//!
//! Configuration problems surface as [`ConfigError`] and block deployment.
//! Anything that goes wrong while a post-action is running surfaces as
//! [`ExecutionError`]. Both expose a stable `kind()` identifier so a host can
//! report them without parsing messages.
//!
//! License: MIT OR APACHE 2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or validating a cleaner configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Invalid delete pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Delete pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternTooLong(usize, usize),

    #[error("Required property '{0}' is missing or empty")]
    MissingField(&'static str),

    #[error("No runtime argument provided for placeholder '${{{0}}}'")]
    UnresolvedPlaceholder(String),

    #[error("Failed to load configuration from {path}: {message}")]
    Load { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::InvalidPattern { .. } => "invalid_pattern",
            ConfigError::PatternTooLong(..) => "pattern_too_long",
            ConfigError::MissingField(_) => "missing_field",
            ConfigError::UnresolvedPlaceholder(_) => "unresolved_placeholder",
            ConfigError::Load { .. } => "config_load",
        }
    }
}

/// Errors raised by a single post-action invocation. All of them are terminal.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExecutionError {
    #[error("Directory {path} is not available: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete '{entry}' after {deleted_so_far} successful deletion(s): {source}")]
    DeletePartialFailure {
        deleted_so_far: usize,
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("Fileset '{0}' is not registered")]
    FilesetNotFound(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ExecutionError {
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionError::DirectoryUnavailable { .. } => "directory_unavailable",
            ExecutionError::DeletePartialFailure { .. } => "delete_partial_failure",
            ExecutionError::FilesetNotFound(_) => "fileset_not_found",
            ExecutionError::Config(inner) => inner.kind(),
        }
    }
}
