// fsdelete-core/src/lib.rs
//! # fsdelete Core Library
//!
//! `fsdelete-core` implements a pipeline post-action: once a run has finished,
//! it deletes every entry of a fileset directory whose name matches a regular
//! expression, but only if the run succeeded.
//!
//! The library owns no state between invocations. The host supplies the run
//! outcome, resolves fileset names to directory handles, and calls the cleaner
//! once per completed run.
//!
//! ## Modules
//!
//! * `config`: `CleanerConfig`, deferred `ConfigValue`s and the YAML `DeploymentConfig`.
//! * `pattern`: Compilation and validation of the delete pattern.
//! * `fileset`: The `DirectoryHandle`/`Location` storage abstraction and a local implementation.
//! * `cleaner`: `ConditionalRegexCleaner`, `execute` and the `DeletionReport`.
//! * `plugin`: The registration record handed to plugin discovery.
//! * `headless`: One-shot helpers for running without a host platform.
//! * `errors`: `ConfigError` and `ExecutionError`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use fsdelete_core::{CleanerConfig, ConditionalRegexCleaner, FilesetRegistry, RuntimeArguments};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut filesets = FilesetRegistry::new();
//!     filesets.register("staging", "/data/staging");
//!
//!     // Validated once, at deployment.
//!     let cleaner = ConditionalRegexCleaner::new(
//!         CleanerConfig::new("staging", r"report_.*\.csv", "${outputDir}"),
//!     )?;
//!
//!     // Invoked once per completed run.
//!     let mut args = RuntimeArguments::new();
//!     args.insert("outputDir".to_string(), "2024-05-01".to_string());
//!     let report = cleaner.run(true, &filesets, &args)?;
//!     println!("deleted {} of {} entries", report.entries_deleted, report.entries_scanned);
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod cleaner;
pub mod config;
pub mod errors;
pub mod fileset;
pub mod headless;
pub mod pattern;
pub mod plugin;

pub use cleaner::{execute, validate_config, ConditionalRegexCleaner, DeletionReport};
pub use config::{config_candidate_paths, CleanerConfig, ConfigValue, DeploymentConfig, RuntimeArguments};
pub use errors::{ConfigError, ExecutionError};
pub use fileset::{DirectoryHandle, FilesetRegistry, FilesetResolver, LocalFileset, Location};
pub use headless::{run_post_action, run_post_action_from_file};
pub use pattern::{compile_pattern, MAX_PATTERN_LENGTH};
pub use plugin::{descriptor, PluginDescriptor, PropertySpec};
