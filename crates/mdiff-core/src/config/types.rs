//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonMode;
use crate::error::{Error, Result};

/// Directory name that marks a migrations folder when none is configured
pub const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Files never copied into snapshots
pub const DEFAULT_SKIP_FILES: &[&str] = &["__init__.py"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where snapshots are stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshots_dir: Option<PathBuf>,

    /// How same-named files are compared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonMode>,

    /// Name of the directories holding migration files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrations_dir: Option<String>,

    /// Gitignore-style patterns excluded when capturing
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Extra file names never copied into snapshots
    #[serde(default)]
    pub skip_files: Vec<String>,
}

impl Config {
    /// Effective comparison mode
    #[must_use]
    pub fn comparison_mode(&self) -> ComparisonMode {
        self.comparison.unwrap_or_default()
    }

    /// Effective migrations directory name
    #[must_use]
    pub fn migrations_dir_name(&self) -> &str {
        self.migrations_dir
            .as_deref()
            .unwrap_or(DEFAULT_MIGRATIONS_DIR)
    }

    /// Built-in and configured file names skipped during capture
    #[must_use]
    pub fn skipped_files(&self) -> Vec<&str> {
        DEFAULT_SKIP_FILES
            .iter()
            .copied()
            .chain(self.skip_files.iter().map(String::as_str))
            .collect()
    }

    /// Configured snapshots directory, or the per-user default
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform has no
    /// local data directory.
    pub fn resolve_snapshots_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.snapshots_dir {
            return Ok(dir.clone());
        }

        dirs::data_local_dir()
            .map(|dir| dir.join("mdiff").join("snapshots"))
            .ok_or_else(|| {
                Error::config("cannot determine a data directory, set snapshots_dir explicitly")
            })
    }
}
