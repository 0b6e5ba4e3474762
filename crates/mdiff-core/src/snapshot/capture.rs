//! Capturing migration files of a project into a snapshot

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{Config, PatternMatcher};
use crate::error::{Error, IoResultExt, Result};

use super::store::{SnapshotStore, walk_error};

/// Component name used for a migrations directory at the project root
const ROOT_COMPONENT: &str = "root";

/// What a capture wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSummary {
    /// Stored snapshot name
    pub name: String,
    /// Number of component directories written
    pub components: usize,
    /// Number of migration files copied
    pub files: usize,
    /// Whether an existing snapshot was replaced
    pub replaced: bool,
}

/// Copies migration directories of a project into a [`SnapshotStore`]
pub struct SnapshotCapture<'a> {
    store: &'a SnapshotStore,
    migrations_dir: String,
    skip_files: Vec<String>,
    matcher: PatternMatcher,
}

impl<'a> SnapshotCapture<'a> {
    /// Capture into `store` using the directory name, skip list and ignore
    /// patterns of `config`
    ///
    /// # Errors
    ///
    /// Returns an error if an ignore pattern is invalid.
    pub fn new(store: &'a SnapshotStore, config: &Config) -> Result<Self> {
        Ok(Self {
            store,
            migrations_dir: config.migrations_dir_name().to_string(),
            skip_files: config
                .skipped_files()
                .into_iter()
                .map(str::to_string)
                .collect(),
            matcher: PatternMatcher::with_patterns(&config.ignore)?,
        })
    }

    /// Snapshot every migrations directory found under `project_dir` as `name`
    ///
    /// If the snapshot already exists, `confirm` is asked with the stored
    /// name before it is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMigrations`] if nothing would be captured,
    /// [`Error::Cancelled`] if replacement is declined, or an I/O error.
    pub fn capture(
        &self,
        project_dir: &Path,
        name: &str,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<CaptureSummary> {
        let name = SnapshotStore::sanitize_name(name)?;
        let components = self.collect(project_dir)?;

        if components.is_empty() {
            return Err(Error::NoMigrations {
                path: project_dir.to_path_buf(),
            });
        }

        let snapshot_dir = self.store.root().join(&name);
        let replaced = snapshot_dir.exists();
        if replaced {
            if !confirm(&name) {
                return Err(Error::Cancelled);
            }
            fs::remove_dir_all(&snapshot_dir).at(&snapshot_dir)?;
        }

        self.store.ensure_root()?;
        fs::create_dir(&snapshot_dir).at(&snapshot_dir)?;

        let mut files = 0;
        for (component, sources) in &components {
            let destination_dir = snapshot_dir.join(component);
            fs::create_dir(&destination_dir).at(&destination_dir)?;

            for source in sources {
                let Some(file_name) = source.file_name() else {
                    continue;
                };
                let destination = destination_dir.join(file_name);
                fs::copy(source, &destination).at(source)?;
                files += 1;
            }
        }

        info!(
            snapshot = %name,
            components = components.len(),
            files,
            replaced,
            "captured snapshot"
        );

        Ok(CaptureSummary {
            name,
            components: components.len(),
            files,
            replaced,
        })
    }

    /// Migration files to copy, grouped by component name
    fn collect(&self, project_dir: &Path) -> Result<BTreeMap<String, Vec<PathBuf>>> {
        if !project_dir.is_dir() {
            return Err(Error::InvalidPath {
                path: project_dir.to_path_buf(),
            });
        }

        let project_root = normalized(project_dir)?;
        let store_root = normalized(self.store.root())?;
        let mut components: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();

        let walker = WalkDir::new(&project_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if !entry.file_type().is_dir() || entry.depth() == 0 {
                    return true;
                }
                // Never snapshot the snapshots themselves
                if entry.path().starts_with(&store_root) {
                    return false;
                }
                let relative = entry.path().strip_prefix(&project_root).unwrap_or(entry.path());
                !self.matcher.is_ignored(relative, true)
            });

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(project_dir, e))?;
            if !entry.file_type().is_dir() || entry.file_name() != self.migrations_dir.as_str() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&project_root)
                .unwrap_or(entry.path());
            let files = self.migration_files(entry.path(), relative)?;
            if files.is_empty() {
                debug!(dir = %entry.path().display(), "no migration files");
                continue;
            }

            let component = component_name(relative);
            if let Some(first) = sources.get(&component) {
                return Err(Error::ComponentCollision {
                    component,
                    first: first.clone(),
                    second: entry.path().to_path_buf(),
                });
            }

            debug!(component = %component, files = files.len(), "found migrations");
            sources.insert(component.clone(), entry.path().to_path_buf());
            components.insert(component, files);
        }

        Ok(components)
    }

    /// Regular files directly inside a migrations directory, sorted
    fn migration_files(&self, dir: &Path, relative_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir).at(dir)? {
            let entry = entry.at(dir)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if self.skip_files.iter().any(|skip| *skip == file_name) {
                continue;
            }
            if self.matcher.is_ignored(&relative_dir.join(&file_name), false) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }
}

/// Absolute form of `path` with `.` and `..` folded away, without touching
/// the filesystem
fn normalized(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).at(path)?;
    let mut normalized = PathBuf::new();

    for part in absolute.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    Ok(normalized)
}

/// Dotted component name of a migrations directory relative to the project
///
/// `src/apps/users/migrations` becomes `src.apps.users`.
fn component_name(migrations_dir: &Path) -> String {
    let parts: Vec<_> = migrations_dir
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|part| match part {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ROOT_COMPONENT.to_string()
    } else {
        parts.join(".")
    }
}
