//! fileset.rs - The storage abstraction the cleaner operates on.
//!
//! A fileset is a logical name mapped to a base directory. The cleaner never
//! touches the filesystem directly: it asks a [`DirectoryHandle`] for the
//! entries below a relative path and calls [`Location::delete`] on the ones it
//! wants gone. [`LocalFileset`] backs a handle with the local filesystem and
//! [`FilesetRegistry`] plays the host's part of resolving names to handles.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::config::DeploymentConfig;

/// A single entry of a directory listing.
pub trait Location: fmt::Debug {
    /// The entry's file name, without any directory part.
    fn name(&self) -> &str;

    fn is_directory(&self) -> bool;

    /// Removes the entry. Directories are removed non-recursively.
    fn delete(&self) -> io::Result<()>;
}

/// A base location capable of listing directories below it.
pub trait DirectoryHandle: Send + Sync {
    /// The full path of `relative` below the base, for reporting.
    fn join(&self, relative: &str) -> PathBuf;

    /// Lists the entries directly under `relative`. Not recursive.
    fn list(&self, relative: &str) -> io::Result<Vec<Box<dyn Location>>>;
}

/// Resolves a logical fileset name to a handle. Supplied by the host.
pub trait FilesetResolver {
    fn resolve(&self, name: &str) -> Option<&dyn DirectoryHandle>;
}

/// An entry of a [`LocalFileset`] listing.
#[derive(Debug, Clone)]
pub struct LocalLocation {
    path: PathBuf,
    name: String,
    is_dir: bool,
}

impl Location for LocalLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_directory(&self) -> bool {
        self.is_dir
    }

    fn delete(&self) -> io::Result<()> {
        if self.is_dir {
            fs::remove_dir(&self.path)
        } else {
            fs::remove_file(&self.path)
        }
    }
}

/// A fileset whose base location is a directory on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileset {
    base: PathBuf,
}

impl LocalFileset {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

/// Rejects relative paths that would leave the fileset's base directory.
fn check_relative(relative: &str) -> io::Result<()> {
    let escapes = Path::new(relative).components().any(|c| {
        matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
    });
    if escapes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a path inside the fileset", relative),
        ));
    }
    Ok(())
}

impl DirectoryHandle for LocalFileset {
    fn join(&self, relative: &str) -> PathBuf {
        self.base.join(relative)
    }

    fn list(&self, relative: &str) -> io::Result<Vec<Box<dyn Location>>> {
        check_relative(relative)?;
        let dir = self.join(relative);
        debug!(target: "fsdelete_core::fileset", "Listing {}", dir.display());

        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            entries.push(LocalLocation {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
                path: entry.path(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries
            .into_iter()
            .map(|e| Box::new(e) as Box<dyn Location>)
            .collect())
    }
}

/// Name to fileset map, the standalone host's fileset resolution.
#[derive(Debug, Default, Clone)]
pub struct FilesetRegistry {
    filesets: BTreeMap<String, LocalFileset>,
}

impl FilesetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, base: impl Into<PathBuf>) {
        self.filesets.insert(name.into(), LocalFileset::new(base));
    }

    pub fn from_config(config: &DeploymentConfig) -> Self {
        let mut registry = Self::new();
        for (name, base) in &config.filesets {
            registry.register(name.clone(), base.clone());
        }
        registry
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filesets.keys().map(String::as_str)
    }
}

impl FilesetResolver for FilesetRegistry {
    fn resolve(&self, name: &str) -> Option<&dyn DirectoryHandle> {
        self.filesets.get(name).map(|f| f as &dyn DirectoryHandle)
    }
}
