//! Flat directory comparison
//!
//! Only the direct child files of each directory take part. Nested
//! directories are neither descended into nor reported.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};
use crate::fs::{EntryKind, FileSystem};

use super::{ComparisonMode, FileComparator};

/// Result of comparing the files of two directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryComparison {
    /// Files present in the left directory only
    pub left_only: BTreeSet<String>,
    /// Files present in the right directory only
    pub right_only: BTreeSet<String>,
    /// Files present in both with different content
    pub differing: BTreeSet<String>,
    /// Files present in both with identical content
    pub same: BTreeSet<String>,
}

impl DirectoryComparison {
    /// Check if directories are identical (no changes)
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.left_only.is_empty() && self.right_only.is_empty() && self.differing.is_empty()
    }

    /// Count total number of changes
    #[must_use]
    pub fn change_count(&self) -> usize {
        self.left_only.len() + self.right_only.len() + self.differing.len()
    }
}

/// Directory comparator
pub struct DirectoryComparator;

impl DirectoryComparator {
    /// Compare the files directly inside `left` and `right`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if either path is not a directory, or an
    /// I/O error if listing or reading fails.
    pub fn compare<F: FileSystem + ?Sized>(
        fs: &F,
        left: &Path,
        right: &Path,
        mode: ComparisonMode,
    ) -> Result<DirectoryComparison> {
        let left_files = Self::list_files(fs, left)?;
        let right_files = Self::list_files(fs, right)?;

        let mut comparison = DirectoryComparison {
            left_only: left_files.difference(&right_files).cloned().collect(),
            right_only: right_files.difference(&left_files).cloned().collect(),
            ..DirectoryComparison::default()
        };

        for name in left_files.intersection(&right_files) {
            if FileComparator::is_same(fs, &left.join(name), &right.join(name), mode)? {
                comparison.same.insert(name.clone());
            } else {
                comparison.differing.insert(name.clone());
            }
        }

        trace!(
            left = %left.display(),
            right = %right.display(),
            changes = comparison.change_count(),
            "compared directories"
        );

        Ok(comparison)
    }

    /// Names of the regular files directly inside `dir`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `dir` is not a directory.
    pub fn list_files<F: FileSystem + ?Sized>(fs: &F, dir: &Path) -> Result<BTreeSet<String>> {
        if !fs.is_dir(dir) {
            return Err(Error::InvalidPath {
                path: dir.to_path_buf(),
            });
        }

        Ok(fs
            .list_dir(dir)?
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::File)
            .map(|entry| entry.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let tmp = TempDir::new().unwrap();
        let left = tmp.path().join("left");
        let right = tmp.path().join("right");
        fs::create_dir(&left).unwrap();
        fs::create_dir(&right).unwrap();
        (tmp, left, right)
    }

    fn compare(left: &Path, right: &Path) -> DirectoryComparison {
        DirectoryComparator::compare(&LocalFileSystem::new(), left, right, ComparisonMode::Content)
            .unwrap()
    }

    #[test]
    fn test_compare_identical_directories() {
        let (_tmp, left, right) = setup();
        fs::write(left.join("0001_initial.py"), "content").unwrap();
        fs::write(right.join("0001_initial.py"), "content").unwrap();

        let result = compare(&left, &right);

        assert!(result.is_identical());
        assert!(result.same.contains("0001_initial.py"));
    }

    #[test]
    fn test_compare_one_sided_files() {
        let (_tmp, left, right) = setup();
        fs::write(left.join("0002_add_email.py"), "a").unwrap();
        fs::write(right.join("0003_rename.py"), "b").unwrap();

        let result = compare(&left, &right);

        assert_eq!(result.left_only.len(), 1);
        assert!(result.left_only.contains("0002_add_email.py"));
        assert!(result.right_only.contains("0003_rename.py"));
        assert_eq!(result.change_count(), 2);
    }

    #[test]
    fn test_compare_differing_content() {
        let (_tmp, left, right) = setup();
        fs::write(left.join("0001_initial.py"), "operations = []\n").unwrap();
        fs::write(right.join("0001_initial.py"), "operations = []\n\n").unwrap();

        let result = compare(&left, &right);

        assert!(result.differing.contains("0001_initial.py"));
        assert!(result.same.is_empty());
    }

    #[test]
    fn test_compare_ignores_nested_directories() {
        let (_tmp, left, right) = setup();
        fs::create_dir(left.join("__pycache__")).unwrap();
        fs::write(left.join("__pycache__").join("x.pyc"), "bytecode").unwrap();

        let result = compare(&left, &right);

        assert!(result.is_identical());
        assert!(result.same.is_empty());
    }

    #[test]
    fn test_compare_file_instead_of_directory() {
        let (tmp, left, _right) = setup();
        let not_a_dir = tmp.path().join("file.txt");
        fs::write(&not_a_dir, "oops").unwrap();

        let result = DirectoryComparator::compare(
            &LocalFileSystem::new(),
            &left,
            &not_a_dir,
            ComparisonMode::Content,
        );

        assert!(matches!(result, Err(Error::InvalidPath { path }) if path == not_a_dir));
    }

    #[test]
    fn test_compare_does_not_modify_directories() {
        let (_tmp, left, right) = setup();
        fs::write(left.join("a.py"), "left").unwrap();
        fs::write(right.join("a.py"), "right").unwrap();

        let _ = compare(&left, &right);

        assert_eq!(fs::read_to_string(left.join("a.py")).unwrap(), "left");
        assert_eq!(fs::read_to_string(right.join("a.py")).unwrap(), "right");
    }
}
