//! Two-way snapshot comparison grouped by component

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::comparison::{ComparisonMode, DirectoryComparator};
use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::report::{ComparisonReport, EntryPair};

use super::store::SnapshotStore;

/// Compares two snapshots of a [`SnapshotStore`]
pub struct SnapshotDiffer<F: FileSystem = LocalFileSystem> {
    store: SnapshotStore,
    fs: F,
    mode: ComparisonMode,
}

impl SnapshotDiffer<LocalFileSystem> {
    /// Differ reading snapshots from the local filesystem
    #[must_use]
    pub const fn new(store: SnapshotStore) -> Self {
        Self::with_file_system(store, LocalFileSystem::new())
    }
}

impl<F: FileSystem> SnapshotDiffer<F> {
    /// Differ reading snapshots through `fs`
    #[must_use]
    pub const fn with_file_system(store: SnapshotStore, fs: F) -> Self {
        Self {
            store,
            fs,
            mode: ComparisonMode::Content,
        }
    }

    /// Use `mode` to decide whether same-named files are identical
    #[must_use]
    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compare the snapshots called `left` and `right`
    ///
    /// # Errors
    ///
    /// Returns [`Error::SnapshotNotFound`] if either snapshot is missing,
    /// [`Error::InvalidPath`] if a component is not a directory, or any I/O
    /// error met while reading. No partial report is ever returned.
    pub fn diff(&self, left: &str, right: &str) -> Result<ComparisonReport> {
        let left_name = SnapshotStore::sanitize_name(left)?;
        let right_name = SnapshotStore::sanitize_name(right)?;

        let left_root = self.store.root().join(&left_name);
        let right_root = self.store.root().join(&right_name);

        for (name, root) in [(&left_name, &left_root), (&right_name, &right_root)] {
            if !self.fs.is_dir(root) {
                return Err(Error::SnapshotNotFound { name: name.clone() });
            }
        }

        let mut report = ComparisonReport::new(left_name, right_name);
        self.fill_report(&mut report, &left_root, &right_root)?;
        Ok(report)
    }

    /// Compare two snapshot directories directly
    ///
    /// Report labels are the directory names.
    ///
    /// # Errors
    ///
    /// Same as [`SnapshotDiffer::diff`].
    pub fn diff_roots(&self, left_root: &Path, right_root: &Path) -> Result<ComparisonReport> {
        for root in [left_root, right_root] {
            if !self.fs.is_dir(root) {
                return Err(Error::SnapshotNotFound { name: label(root) });
            }
        }

        let mut report = ComparisonReport::new(label(left_root), label(right_root));
        self.fill_report(&mut report, left_root, right_root)?;
        Ok(report)
    }

    fn fill_report(
        &self,
        report: &mut ComparisonReport,
        left_root: &Path,
        right_root: &Path,
    ) -> Result<()> {
        let components: BTreeSet<String> = self
            .fs
            .list_dir(left_root)?
            .into_iter()
            .chain(self.fs.list_dir(right_root)?)
            .map(|entry| entry.name)
            .collect();

        for component in components {
            let entries = self.component_entries(
                &left_root.join(&component),
                &right_root.join(&component),
            )?;

            debug!(component = %component, entries = entries.len(), "compared component");
            report.insert(component, entries);
        }

        Ok(())
    }

    fn component_entries(&self, left_dir: &Path, right_dir: &Path) -> Result<Vec<EntryPair>> {
        if !self.fs.exists(left_dir) {
            let files = DirectoryComparator::list_files(&self.fs, right_dir)?;
            return Ok(files.into_iter().map(EntryPair::right_only).collect());
        }

        if !self.fs.exists(right_dir) {
            let files = DirectoryComparator::list_files(&self.fs, left_dir)?;
            return Ok(files.into_iter().map(EntryPair::left_only).collect());
        }

        let comparison = DirectoryComparator::compare(&self.fs, left_dir, right_dir, self.mode)?;

        Ok(comparison
            .left_only
            .into_iter()
            .map(EntryPair::left_only)
            .chain(comparison.right_only.into_iter().map(EntryPair::right_only))
            .chain(comparison.differing.into_iter().map(EntryPair::changed))
            .collect())
    }
}

fn label(root: &Path) -> String {
    root.file_name().map_or_else(
        || root.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
