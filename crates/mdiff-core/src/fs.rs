//! Read-only filesystem access for the comparison engine
//!
//! The differ and the directory comparator only ever talk to a
//! [`FileSystem`], so the engine can run against any backing store.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::SystemTime;

use crate::error::{IoResultExt, Result};

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file
    File,
    /// Directory
    Dir,
    /// Anything else (sockets, broken symlinks, ...)
    Other,
}

/// Direct child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry
    pub name: String,
    /// What the entry is
    pub kind: EntryKind,
}

/// Cheap identity of a file used by shallow comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSignature {
    /// Size in bytes
    pub len: u64,
    /// Last modification time
    pub modified: SystemTime,
}

/// Filesystem operations needed to compare snapshots
pub trait FileSystem {
    /// List direct children of `path`, in no particular order
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Open a file for streaming reads
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open(&self, path: &Path) -> Result<Box<dyn Read + '_>>;

    /// Size and modification time of a file
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read.
    fn signature(&self, path: &Path) -> Result<FileSignature>;
}

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Create a local filesystem handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(path).at(path)? {
            let entry = entry.at(path)?;
            // Follow symlinks so a linked migration counts as a file
            let kind = match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => EntryKind::Dir,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };

            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn open(&self, path: &Path) -> Result<Box<dyn Read + '_>> {
        let file = File::open(path).at(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn signature(&self, path: &Path) -> Result<FileSignature> {
        let metadata = fs::metadata(path).at(path)?;
        let modified = metadata.modified().at(path)?;

        Ok(FileSignature {
            len: metadata.len(),
            modified,
        })
    }
}
