//! File-backed storage backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// failed write never leaves a half-written slot behind. The directory is
/// created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the data directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| io_error(key, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("cart").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));
        storage.set("cart", "[]").unwrap();
        storage.set("cart", "[{}]").unwrap();
        assert_eq!(storage.get("cart").unwrap().as_deref(), Some("[{}]"));
        assert!(dir.path().join("nested/cart.json").exists());
        assert!(!dir.path().join("nested/cart.json.tmp").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("codOrders", "[]").unwrap();
        storage.remove("codOrders").unwrap();
        storage.remove("codOrders").unwrap();
        assert_eq!(storage.get("codOrders").unwrap(), None);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let storage = FileStorage::new(&blocker);
        assert!(matches!(
            storage.set("cart", "[]"),
            Err(StorageError::Io { .. })
        ));
    }
}
