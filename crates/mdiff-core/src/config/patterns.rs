//! Gitignore-style pattern matching using the ignore crate

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::{Error, Result};

/// Matches project-relative paths against ignore patterns
pub struct PatternMatcher {
    gitignore: Option<Gitignore>,
}

impl PatternMatcher {
    /// Matcher that ignores nothing
    #[must_use]
    pub const fn new() -> Self {
        Self { gitignore: None }
    }

    /// Build a matcher from gitignore-style patterns
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a pattern cannot be parsed.
    pub fn with_patterns(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self::new());
        }

        let mut builder = GitignoreBuilder::new("");
        for pattern in patterns {
            builder
                .add_line(None, pattern)
                .map_err(|e| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }

        let gitignore = builder.build().map_err(|e| Error::InvalidPattern {
            pattern: patterns.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            gitignore: Some(gitignore),
        })
    }

    /// Whether a relative path is excluded
    #[must_use]
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore
            .as_ref()
            .is_some_and(|gi| gi.matched(path, is_dir).is_ignore())
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}
