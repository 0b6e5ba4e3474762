//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! - **Arrays** (`ignore`, `skip_files`): additive, values from all configs are combined
//! - **Optional scalars**: the highest-precedence config that sets a value wins
//!
//! A relative `snapshots_dir` is resolved against the directory of the file
//! that sets it.

use std::fs;
use std::path::Path;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::{Error, Result};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple config files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .mdiff.toml
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        // Load and merge in reverse precedence order (lowest to highest)
        for path in [&files.global, &files.project, &files.cli].into_iter().flatten() {
            Self::merge_into(&mut merged, path)?;
        }

        Ok(merged)
    }

    /// Load and merge a single config file into the existing config
    fn merge_into(base: &mut Config, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: format!("failed to read file: {e}"),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| Error::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string().trim_end().to_string(),
        })?;

        if let Some(dir) = config.snapshots_dir {
            let dir = match path.parent() {
                Some(parent) if dir.is_relative() => parent.join(dir),
                _ => dir,
            };
            base.snapshots_dir = Some(dir);
        }
        if config.comparison.is_some() {
            base.comparison = config.comparison;
        }
        if config.migrations_dir.is_some() {
            base.migrations_dir = config.migrations_dir;
        }

        base.ignore.extend(config.ignore);
        base.skip_files.extend(config.skip_files);

        Ok(())
    }
}
