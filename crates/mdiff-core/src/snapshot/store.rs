//! Named snapshots under a snapshots directory

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, IoResultExt, Result};

/// Aggregate figures of one stored snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// Snapshot name
    pub name: String,
    /// Component directories holding at least one file
    pub components: usize,
    /// Total number of files
    pub files: usize,
    /// Total size of all files
    pub size_bytes: u64,
    /// Creation time, when the platform reports one
    pub created: Option<SystemTime>,
}

/// Outcome of removing a single snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The snapshot was deleted
    Deleted,
    /// No snapshot with that name
    NotFound,
}

/// Resolves snapshot names to directories under a fixed root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Store rooted at `root`; nothing is created until needed
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Snapshots directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Turn user input into a directory-safe snapshot name
    ///
    /// Slashes become dashes, so `feature/login` is stored as `feature-login`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshotName`] for empty, `.` or `..` names.
    pub fn sanitize_name(name: &str) -> Result<String> {
        let sanitized = name.trim().replace(['/', '\\'], "-");

        if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
            return Err(Error::InvalidSnapshotName {
                name: name.to_string(),
            });
        }

        Ok(sanitized)
    }

    /// Directory of the snapshot called `name`
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid snapshot name.
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join(Self::sanitize_name(name)?))
    }

    /// Whether a snapshot called `name` is stored
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid snapshot name.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_of(name)?.is_dir())
    }

    /// Create the snapshots directory if it is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).at(&self.root)
    }

    /// Names of all stored snapshots, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshots directory cannot be read.
    pub fn names(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).at(&self.root)? {
            let entry = entry.at(&self.root)?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Count components, files and bytes of one snapshot
    ///
    /// # Errors
    ///
    /// Returns [`Error::SnapshotNotFound`] if the snapshot does not exist, or
    /// an I/O error if it cannot be walked.
    pub fn summary(&self, name: &str) -> Result<SnapshotSummary> {
        let dir = self.path_of(name)?;
        if !dir.is_dir() {
            return Err(Error::SnapshotNotFound {
                name: name.to_string(),
            });
        }

        let mut summary = SnapshotSummary {
            name: name.to_string(),
            components: 0,
            files: 0,
            size_bytes: 0,
            created: fs::metadata(&dir)
                .and_then(|meta| meta.created().or_else(|_| meta.modified()))
                .ok(),
        };

        for entry in WalkDir::new(&dir).min_depth(1) {
            let entry = entry.map_err(|e| walk_error(&dir, e))?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let mut has_files = false;
            for file in fs::read_dir(entry.path()).at(entry.path())? {
                let file = file.at(entry.path())?;
                let metadata = file.metadata().at(&file.path())?;
                if metadata.is_file() {
                    has_files = true;
                    summary.files += 1;
                    summary.size_bytes += metadata.len();
                }
            }

            if has_files {
                summary.components += 1;
            }
        }

        Ok(summary)
    }

    /// Summaries of all stored snapshots, sorted by name
    ///
    /// # Errors
    ///
    /// Returns an error if any snapshot cannot be read.
    pub fn summaries(&self) -> Result<Vec<SnapshotSummary>> {
        self.names()?
            .iter()
            .map(|name| self.summary(name))
            .collect()
    }

    /// Remove the named snapshots, reporting each outcome in input order
    ///
    /// # Errors
    ///
    /// Returns an error if a name is invalid or a snapshot cannot be deleted.
    pub fn remove(&self, names: &[String]) -> Result<Vec<(String, RemoveOutcome)>> {
        let mut outcomes = Vec::with_capacity(names.len());

        for name in names {
            let sanitized = Self::sanitize_name(name)?;
            let dir = self.root.join(&sanitized);

            let outcome = if dir.is_dir() {
                fs::remove_dir_all(&dir).at(&dir)?;
                info!(snapshot = %sanitized, "removed snapshot");
                RemoveOutcome::Deleted
            } else {
                debug!(snapshot = %sanitized, "snapshot not found");
                RemoveOutcome::NotFound
            };

            outcomes.push((sanitized, outcome));
        }

        Ok(outcomes)
    }

    /// Remove every snapshot after `confirm` approves the list of names
    ///
    /// Returns the number of removed snapshots. When nothing is stored the
    /// callback is not invoked and `0` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `confirm` declines, or an I/O error if
    /// the snapshots directory cannot be deleted.
    pub fn remove_all(&self, confirm: impl FnOnce(&[String]) -> bool) -> Result<usize> {
        let names = self.names()?;
        if names.is_empty() {
            return Ok(0);
        }

        if !confirm(&names) {
            return Err(Error::Cancelled);
        }

        fs::remove_dir_all(&self.root).at(&self.root)?;
        info!(count = names.len(), root = %self.root.display(), "removed all snapshots");

        Ok(names.len())
    }
}

/// Convert a walkdir failure into a crate error
pub(crate) fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    Error::io(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(snapshots: &[(&str, &str, &str)]) -> (TempDir, SnapshotStore) {
        let tmp = TempDir::new().unwrap();
        let store = SnapshotStore::new(tmp.path().join("snapshots"));

        for (snapshot, component, file) in snapshots {
            let dir = store.root().join(snapshot).join(component);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(file), "operations = []\n").unwrap();
        }

        (tmp, store)
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(
            SnapshotStore::sanitize_name("feature/login").unwrap(),
            "feature-login"
        );
        assert_eq!(SnapshotStore::sanitize_name("dev").unwrap(), "dev");
        assert!(SnapshotStore::sanitize_name("").is_err());
        assert!(SnapshotStore::sanitize_name("..").is_err());
        assert!(SnapshotStore::sanitize_name("  ").is_err());
    }

    #[test]
    fn test_names_sorted_and_missing_root() {
        let (_tmp, store) = store_with(&[
            ("master", "users", "0001_initial.py"),
            ("dev", "users", "0001_initial.py"),
        ]);
        assert_eq!(store.names().unwrap(), vec!["dev", "master"]);

        let empty = SnapshotStore::new(store.root().join("nowhere"));
        assert!(empty.names().unwrap().is_empty());
    }

    #[test]
    fn test_names_skip_stray_files() {
        let (_tmp, store) = store_with(&[("dev", "users", "0001_initial.py")]);
        fs::write(store.root().join("notes.txt"), "x").unwrap();

        assert_eq!(store.names().unwrap(), vec!["dev"]);
    }

    #[test]
    fn test_exists_uses_sanitized_name() {
        let (_tmp, store) = store_with(&[("feature-login", "users", "0001_initial.py")]);

        assert!(store.exists("feature/login").unwrap());
        assert!(!store.exists("master").unwrap());
    }

    #[test]
    fn test_summary_counts() {
        let (_tmp, store) = store_with(&[
            ("dev", "users", "0001_initial.py"),
            ("dev", "users", "0002_add_email.py"),
            ("dev", "orders", "0001_initial.py"),
        ]);
        fs::create_dir_all(store.root().join("dev").join("empty_app")).unwrap();

        let summary = store.summary("dev").unwrap();

        assert_eq!(summary.components, 2);
        assert_eq!(summary.files, 3);
        assert_eq!(summary.size_bytes, 3 * "operations = []\n".len() as u64);
    }

    #[test]
    fn test_summary_missing_snapshot() {
        let (_tmp, store) = store_with(&[]);

        let result = store.summary("dev");

        assert!(matches!(result, Err(Error::SnapshotNotFound { name }) if name == "dev"));
    }

    #[test]
    fn test_remove_specific() {
        let (_tmp, store) = store_with(&[
            ("dev", "users", "0001_initial.py"),
            ("master", "users", "0001_initial.py"),
        ]);

        let outcomes = store
            .remove(&["dev".to_string(), "ghost".to_string()])
            .unwrap();

        assert_eq!(
            outcomes,
            vec![
                ("dev".to_string(), RemoveOutcome::Deleted),
                ("ghost".to_string(), RemoveOutcome::NotFound),
            ]
        );
        assert_eq!(store.names().unwrap(), vec!["master"]);
    }

    #[test]
    fn test_remove_all_confirmed() {
        let (_tmp, store) = store_with(&[
            ("dev", "users", "0001_initial.py"),
            ("master", "users", "0001_initial.py"),
        ]);

        let mut seen = Vec::new();
        let removed = store
            .remove_all(|names| {
                seen = names.to_vec();
                true
            })
            .unwrap();

        assert_eq!(removed, 2);
        assert_eq!(seen, vec!["dev", "master"]);
        assert!(!store.root().exists());
    }

    #[test]
    fn test_remove_all_declined() {
        let (_tmp, store) = store_with(&[("dev", "users", "0001_initial.py")]);

        let result = store.remove_all(|_| false);

        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(store.exists("dev").unwrap());
    }

    #[test]
    fn test_remove_all_without_snapshots_skips_prompt() {
        let (_tmp, store) = store_with(&[]);

        let removed = store
            .remove_all(|_| panic!("confirmation should not be requested"))
            .unwrap();

        assert_eq!(removed, 0);
    }
}
