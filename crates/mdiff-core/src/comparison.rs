//! File and directory comparison
//!
//! This module provides read-only analysis of snapshot directories:
//! - Content equality via SHA-256 hashing
//! - Optional shallow equality via size and modification time
//! - Flat classification of two directories into left-only, right-only,
//!   differing and identical file names

mod directory;
mod hash;


use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use directory::{DirectoryComparator, DirectoryComparison};
pub use hash::{FileHash, FileHasher};

use crate::error::Result;
use crate::fs::FileSystem;

/// How two files with the same name are judged identical
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonMode {
    /// Compare full content
    #[default]
    Content,
    /// Treat equal size and modification time as identical, otherwise
    /// compare content
    Shallow,
}

impl ComparisonMode {
    /// Name as written in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Shallow => "shallow",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two files according to a [`ComparisonMode`]
pub struct FileComparator;

impl FileComparator {
    /// Whether `left` and `right` hold the same bytes
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn is_same<F: FileSystem + ?Sized>(
        fs: &F,
        left: &Path,
        right: &Path,
        mode: ComparisonMode,
    ) -> Result<bool> {
        if mode == ComparisonMode::Shallow {
            let left_sig = fs.signature(left)?;
            let right_sig = fs.signature(right)?;

            if left_sig == right_sig {
                return Ok(true);
            }
            if left_sig.len != right_sig.len {
                return Ok(false);
            }
        }

        let left_hash = FileHasher::hash(fs, left)?;
        let right_hash = FileHasher::hash(fs, right)?;

        Ok(left_hash == right_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_mode_default_is_content() {
        assert_eq!(ComparisonMode::default(), ComparisonMode::Content);
    }

    #[test]
    fn test_comparison_mode_serde() {
        let content = serde_json::to_string(&ComparisonMode::Content).unwrap();
        let shallow = serde_json::to_string(&ComparisonMode::Shallow).unwrap();

        assert_eq!(content, r#""content""#);
        assert_eq!(shallow, r#""shallow""#);

        let parsed: ComparisonMode = serde_json::from_str(r#""shallow""#).unwrap();
        assert_eq!(parsed, ComparisonMode::Shallow);
    }

    #[test]
    fn test_comparison_mode_display_matches_config_spelling() {
        for mode in [ComparisonMode::Content, ComparisonMode::Shallow] {
            let serialized = serde_json::to_string(&mode).unwrap();
            assert_eq!(serialized, format!("\"{mode}\""));
        }
    }
}
