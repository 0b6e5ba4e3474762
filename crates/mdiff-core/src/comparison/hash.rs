//! File hashing for content comparison using SHA-256

use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{IoResultExt, Result};
use crate::fs::FileSystem;

/// File hash result
pub type FileHash = [u8; 32];

/// File hasher
pub struct FileHasher;

impl FileHasher {
    /// Compute SHA-256 hash of a file by streaming its contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn hash<F: FileSystem + ?Sized>(fs: &F, path: &Path) -> Result<FileHash> {
        let mut reader = fs.open(path)?;
        Self::hash_reader(&mut reader).at(path)
    }

    /// Compute SHA-256 hash of everything `reader` yields
    fn hash_reader(reader: &mut dyn Read) -> std::io::Result<FileHash> {
        let mut hasher = Sha256::new();
        let mut buffer = [0; 8192]; // 8KB buffer for streaming

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::LocalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_identical_files() {
        let tmp = TempDir::new().unwrap();
        let file1 = tmp.path().join("0001_initial.py");
        let file2 = tmp.path().join("0001_copy.py");

        fs::write(&file1, "same content").unwrap();
        fs::write(&file2, "same content").unwrap();

        let fs = LocalFileSystem::new();
        assert_eq!(
            FileHasher::hash(&fs, &file1).unwrap(),
            FileHasher::hash(&fs, &file2).unwrap()
        );
    }

    #[test]
    fn test_hash_whitespace_difference() {
        let tmp = TempDir::new().unwrap();
        let file1 = tmp.path().join("a.py");
        let file2 = tmp.path().join("b.py");

        fs::write(&file1, "operations = []\n").unwrap();
        fs::write(&file2, "operations = [] \n").unwrap();

        let fs = LocalFileSystem::new();
        assert_ne!(
            FileHasher::hash(&fs, &file1).unwrap(),
            FileHasher::hash(&fs, &file2).unwrap()
        );
    }

    #[test]
    fn test_hash_large_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("large.bin");

        // Spans many read buffers
        let content = vec![7u8; 1024 * 1024 + 13];
        fs::write(&file, &content).unwrap();

        let expected: FileHash = Sha256::digest(&content).into();
        let hash = FileHasher::hash(&LocalFileSystem::new(), &file).unwrap();

        assert_eq!(hash, expected);
    }

    #[test]
    fn test_hash_missing_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.py");

        let result = FileHasher::hash(&LocalFileSystem::new(), &missing);

        assert!(result.is_err());
    }
}
