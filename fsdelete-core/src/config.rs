//! Configuration management for `fsdelete-core`.
//!
//! This module defines the post-action configuration (the three properties the
//! operator supplies), the deferred-value type used for properties that may only
//! be known at run time, and the deployment document a standalone host reads
//! from YAML.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::pattern::validate_config;

/// Key/value pairs supplied by the host for a single run.
pub type RuntimeArguments = BTreeMap<String, String>;

/// Matches a `${key}` reference inside a configuration value.
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^{}]+)\}").unwrap());

/// A configuration value that is either fixed at deployment or resolved from
/// the runtime arguments of a run.
///
/// A raw string of the exact form `${key}` becomes a [`ConfigValue::Placeholder`].
/// A string mixing literal text with one or more `${key}` references becomes a
/// [`ConfigValue::Template`]. Everything else is a [`ConfigValue::Literal`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ConfigValue {
    Literal(String),
    Placeholder(String),
    Template(String),
}

impl ConfigValue {
    /// Resolves the value against `args`. Literals never fail.
    pub fn resolve(&self, args: &RuntimeArguments) -> Result<String, ConfigError> {
        match self {
            ConfigValue::Literal(value) => Ok(value.clone()),
            ConfigValue::Placeholder(key) => args
                .get(key)
                .cloned()
                .ok_or_else(|| ConfigError::UnresolvedPlaceholder(key.clone())),
            ConfigValue::Template(raw) => {
                let mut resolved = String::with_capacity(raw.len());
                let mut last_end = 0;
                for caps in PLACEHOLDER_REGEX.captures_iter(raw) {
                    let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else { continue };
                    let value = args
                        .get(key.as_str())
                        .ok_or_else(|| ConfigError::UnresolvedPlaceholder(key.as_str().to_string()))?;
                    resolved.push_str(&raw[last_end..whole.start()]);
                    resolved.push_str(value);
                    last_end = whole.end();
                }
                resolved.push_str(&raw[last_end..]);
                Ok(resolved)
            }
        }
    }

    /// Returns `true` when the value cannot be known before run time.
    pub fn is_deferred(&self) -> bool {
        !matches!(self, ConfigValue::Literal(_))
    }

    /// The value as the operator wrote it.
    pub fn raw(&self) -> String {
        match self {
            ConfigValue::Literal(value) | ConfigValue::Template(value) => value.clone(),
            ConfigValue::Placeholder(key) => format!("${{{}}}", key),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(raw: String) -> Self {
        let (first, count) = {
            let mut refs = PLACEHOLDER_REGEX.captures_iter(&raw);
            let first = refs.next().map(|caps| (caps[0].len(), caps[1].to_string()));
            let count = first.iter().count() + refs.count();
            (first, count)
        };
        match first {
            None => ConfigValue::Literal(raw),
            Some((len, key)) if count == 1 && len == raw.len() => ConfigValue::Placeholder(key),
            Some(_) => ConfigValue::Template(raw),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(raw: &str) -> Self {
        ConfigValue::from(raw.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.raw()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

/// The three properties of the fileset delete post-action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerConfig {
    /// The fileset to delete files from.
    pub fileset_name: String,
    /// Delete files whose name matches this regex anywhere.
    pub delete_regex: String,
    /// The fileset directory to delete files from. May be deferred.
    pub directory: ConfigValue,
}

impl CleanerConfig {
    pub fn new(
        fileset_name: impl Into<String>,
        delete_regex: impl Into<String>,
        directory: impl Into<ConfigValue>,
    ) -> Self {
        Self {
            fileset_name: fileset_name.into(),
            delete_regex: delete_regex.into(),
            directory: directory.into(),
        }
    }

    /// Checks the invariants that can be checked before any run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fileset_name.trim().is_empty() {
            return Err(ConfigError::MissingField("filesetName"));
        }
        if self.delete_regex.is_empty() {
            return Err(ConfigError::MissingField("deleteRegex"));
        }
        if self.directory.raw().trim().is_empty() {
            return Err(ConfigError::MissingField("directory"));
        }
        validate_config(&self.delete_regex)
    }
}

/// The document a standalone host is deployed with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Fileset name to base directory.
    #[serde(default)]
    pub filesets: BTreeMap<String, PathBuf>,
    /// Default runtime arguments, overridable per run.
    #[serde(default)]
    pub runtime_arguments: RuntimeArguments,
    pub post_action: CleanerConfig,
}

impl DeploymentConfig {
    /// Loads and validates a deployment file. Relative fileset paths are taken
    /// relative to the directory containing the file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(target: "fsdelete_core::config", "Loading deployment configuration from: {}", path.display());
        let load_err = |message: String| ConfigError::Load { path: path.to_path_buf(), message };

        let text = std::fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let mut config: DeploymentConfig = serde_yml::from_str(&text).map_err(|e| load_err(e.to_string()))?;

        if let Some(parent) = path.parent() {
            for base in config.filesets.values_mut() {
                if base.is_relative() {
                    *base = parent.join(&*base);
                }
            }
        }

        config.post_action.validate()?;
        debug!(
            target: "fsdelete_core::config",
            "Loaded {} fileset(s) and {} runtime argument(s) from {}.",
            config.filesets.len(),
            config.runtime_arguments.len(),
            path.display()
        );
        Ok(config)
    }
}

/// Locations searched for a deployment file when none is given explicitly.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    vec![
        Some(PathBuf::from("./fsdelete.yaml")),
        dirs::config_dir().map(|p| p.join("fsdelete").join("config.yaml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> RuntimeArguments {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_config_value_classification() {
        assert_eq!(ConfigValue::from("output"), ConfigValue::Literal("output".into()));
        assert_eq!(ConfigValue::from("${outputDir}"), ConfigValue::Placeholder("outputDir".into()));
        assert_eq!(ConfigValue::from("runs/${date}"), ConfigValue::Template("runs/${date}".into()));
        assert_eq!(ConfigValue::from("${a}${b}"), ConfigValue::Template("${a}${b}".into()));
        assert_eq!(ConfigValue::from("${}"), ConfigValue::Literal("${}".into()));
    }

    #[test]
    fn test_placeholder_resolution() {
        let value = ConfigValue::from("${outputDir}");
        assert!(value.is_deferred());
        assert_eq!(value.resolve(&args(&[("outputDir", "daily")])).unwrap(), "daily");
        assert!(matches!(
            value.resolve(&args(&[])),
            Err(ConfigError::UnresolvedPlaceholder(key)) if key == "outputDir"
        ));
    }

    #[test]
    fn test_template_resolution() {
        let value = ConfigValue::from("runs/${year}/${month}-final");
        let resolved = value.resolve(&args(&[("year", "2024"), ("month", "05")])).unwrap();
        assert_eq!(resolved, "runs/2024/05-final");
        assert!(value.resolve(&args(&[("year", "2024")])).is_err());
    }

    #[test]
    fn test_raw_round_trips_through_string() {
        for raw in ["plain", "${key}", "a/${key}/b"] {
            assert_eq!(String::from(ConfigValue::from(raw)), raw);
        }
    }

    #[test]
    fn test_candidate_paths_prefer_working_directory() {
        let paths = config_candidate_paths();
        assert_eq!(paths[0], PathBuf::from("./fsdelete.yaml"));
        assert!(paths.len() <= 2);
        assert!(paths[1..].iter().all(|p| p.ends_with("fsdelete/config.yaml")));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        assert!(matches!(
            CleanerConfig::new(" ", "x", "dir").validate(),
            Err(ConfigError::MissingField("filesetName"))
        ));
        assert!(matches!(
            CleanerConfig::new("fs", "", "dir").validate(),
            Err(ConfigError::MissingField("deleteRegex"))
        ));
        assert!(matches!(
            CleanerConfig::new("fs", "x", "").validate(),
            Err(ConfigError::MissingField("directory"))
        ));
        assert!(matches!(
            CleanerConfig::new("fs", "(x", "dir").validate(),
            Err(ConfigError::InvalidPattern { .. })
        ));
        assert!(CleanerConfig::new("fs", r"\.tmp$", "${dir}").validate().is_ok());
    }
}
