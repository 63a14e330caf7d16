//! plugin.rs - Registration record for host plugin discovery.
//!
//! Hosts that discover post-actions by metadata get everything they need from
//! [`descriptor`]: the plugin's name and type, a description, and the schema of
//! its configurable properties.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

pub const PLUGIN_NAME: &str = "FilesetDelete";
pub const PLUGIN_TYPE: &str = "postaction";

pub const FILESET_NAME: &str = "filesetName";
pub const DELETE_REGEX: &str = "deleteRegex";
pub const DIRECTORY: &str = "directory";

/// One configurable property of the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Whether the property may be a `${key}` placeholder resolved per run.
    pub macro_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
    pub name: String,
    pub plugin_type: String,
    pub description: String,
    pub version: String,
    pub properties: Vec<PropertySpec>,
}

impl PluginDescriptor {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn property(name: &str, description: &str, macro_enabled: bool) -> PropertySpec {
    PropertySpec {
        name: name.to_string(),
        description: description.to_string(),
        required: true,
        macro_enabled,
    }
}

/// The registration record of the fileset delete post-action.
pub fn descriptor() -> PluginDescriptor {
    PluginDescriptor {
        name: PLUGIN_NAME.to_string(),
        plugin_type: PLUGIN_TYPE.to_string(),
        description: "Post run action that deletes files in a FileSet that match a configurable regex if the run succeeded.".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        properties: vec![
            property(FILESET_NAME, "The fileset to delete files from.", false),
            property(DELETE_REGEX, "Delete files that match this regex.", false),
            property(DIRECTORY, "The fileset directory to delete files from.", true),
        ],
    }
}
