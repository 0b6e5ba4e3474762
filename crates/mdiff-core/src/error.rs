//! Core error types for the mdiff library

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while storing, capturing or comparing snapshots
#[derive(Debug, Error)]
pub enum Error {
    /// A snapshot requested for comparison does not exist
    #[error("Snapshot {name} doesn't exist")]
    SnapshotNotFound {
        /// Snapshot name as requested
        name: String,
    },

    /// A path expected to be a directory is not one
    #[error("Not a directory: {}", .path.display())]
    InvalidPath {
        /// Offending path
        path: PathBuf,
    },

    /// A snapshot name that cannot be used as a directory name
    #[error("Invalid snapshot name: '{name}'")]
    InvalidSnapshotName {
        /// Name as given by the caller
        name: String,
    },

    /// No migration files were found while capturing
    #[error("Can't find any migration in {}", .path.display())]
    NoMigrations {
        /// Project directory that was scanned
        path: PathBuf,
    },

    /// Two migrations directories map to the same component name
    #[error(
        "Component {component} is produced by both {} and {}",
        .first.display(),
        .second.display()
    )]
    ComponentCollision {
        /// Shared component name
        component: String,
        /// Directory that claimed the name first
        first: PathBuf,
        /// Directory that claimed it again
        second: PathBuf,
    },

    /// A configuration file is unreadable or invalid
    #[error("Invalid configuration{}: {message}", display_origin(.path.as_deref()))]
    Config {
        /// Config file the problem comes from, if any
        path: Option<PathBuf>,
        /// Description of the problem
        message: String,
    },

    /// An ignore pattern failed to compile
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Pattern text
        pattern: String,
        /// Parser message
        message: String,
    },

    /// The user declined a confirmation
    #[error("Operation cancelled")]
    Cancelled,

    /// Filesystem failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Build an [`Error::Io`] for `path`
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`Error::Config`] not tied to a file
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            path: None,
            message: message.into(),
        }
    }
}

fn display_origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Attach a path to `std::io` results
pub(crate) trait IoResultExt<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|source| Error::io(path, source))
    }
}
