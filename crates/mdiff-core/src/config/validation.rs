//! Configuration validation and error reporting

use super::types::Config;
use crate::error::{Error, Result};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(dir) = &config.migrations_dir {
            if dir.trim().is_empty() {
                return Err(Error::config("migrations_dir cannot be empty"));
            }
            if dir.contains(['/', '\\']) || matches!(dir.trim(), "." | "..") {
                return Err(Error::config(format!(
                    "migrations_dir must be a single directory name, got '{dir}'"
                )));
            }
        }

        if config.ignore.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::config("Ignore pattern cannot be empty"));
        }

        if config.skip_files.iter().any(|f| f.trim().is_empty()) {
            return Err(Error::config("Skipped file name cannot be empty"));
        }

        if let Some(dir) = &config.snapshots_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::config("snapshots_dir cannot be empty"));
            }
        }

        Ok(())
    }
}
