//! Reader and writer configuration.
//!
//! `includes`/`excludes` are `None` when the document declared no filter of
//! that kind, which is different from an explicit filter list.

use super::Parameters;
use crate::error::{ConfigError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Where and how a chain reads its input artifacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub path: Option<String>,
    /// Implementation name; `None` selects the host's default reader.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub parameters: Parameters,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

impl ReaderConfig {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Compile the include/exclude wildcards.
    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(self.includes.as_deref(), self.excludes.as_deref())
    }
}

/// Where and how a chain writes its results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub path: Option<String>,
    /// Implementation name; `None` selects the host's default writer.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub parameters: Parameters,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

impl WriterConfig {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// The writer a chain gets when it declares none: same path as the reader.
    pub fn from_reader(reader: &ReaderConfig) -> Self {
        Self {
            path: reader.path.clone(),
            ..Self::default()
        }
    }

    /// Whether this writer is exactly what [`WriterConfig::from_reader`] yields.
    pub fn is_default_for(&self, reader: &ReaderConfig) -> bool {
        *self == Self::from_reader(reader)
    }

    /// Compile the include/exclude wildcards.
    pub fn file_filter(&self) -> Result<FileFilter> {
        FileFilter::new(self.includes.as_deref(), self.excludes.as_deref())
    }
}

/// Compiled include/exclude wildcards of a reader or writer.
#[derive(Debug, Clone)]
pub struct FileFilter {
    includes: Option<GlobSet>,
    excludes: Option<GlobSet>,
}

impl FileFilter {
    fn new(includes: Option<&[String]>, excludes: Option<&[String]>) -> Result<Self> {
        Ok(Self {
            includes: includes.map(build_globset).transpose()?,
            excludes: excludes.map(build_globset).transpose()?,
        })
    }

    /// Whether `path` passes the filter.
    ///
    /// Excluded paths never match. Without an include list every other path
    /// matches; with one, the path must match one of its patterns.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.replace('\\', "/");
        if self.excludes.as_ref().is_some_and(|set| set.is_match(&path)) {
            return false;
        }
        match &self.includes {
            Some(set) => set.is_match(&path),
            None => true,
        }
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = pattern.trim().replace('\\', "/");
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(&normalized).map_err(|e| {
            ConfigError::invalid(format!("Invalid wildcard '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ConfigError::invalid(format!("Invalid wildcard set: {}", e)))
}
