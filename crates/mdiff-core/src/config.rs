//! Configuration file parsing, merging, and pattern matching
//!
//! This module handles:
//! - Config file discovery from multiple locations
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Gitignore-style pattern matching for snapshot capture
//! - Validation and error reporting

mod discovery;
mod merge;
mod patterns;
mod types;
mod validation;


use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, PROJECT_CONFIG_NAME};
pub use merge::ConfigMerger;
pub use patterns::PatternMatcher;
pub use types::{Config, DEFAULT_MIGRATIONS_DIR, DEFAULT_SKIP_FILES};
pub use validation::ConfigValidator;

use crate::error::{Error, Result};

/// Coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if the CLI config file is missing, or if any config
    /// file is invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        Self::load_files(&ConfigDiscovery::discover(cli_config_path))
    }

    /// Merge and validate an explicit set of config files
    ///
    /// # Errors
    ///
    /// Same as [`ConfigManager::load`].
    pub fn load_files(files: &ConfigFiles) -> Result<Config> {
        if let Some(cli) = &files.cli {
            if !cli.is_file() {
                return Err(Error::Config {
                    path: Some(cli.clone()),
                    message: "config file not found".to_string(),
                });
            }
        }

        let merged = ConfigMerger::merge(files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }
}
