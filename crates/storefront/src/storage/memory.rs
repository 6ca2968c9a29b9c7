//! In-process storage backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Storage, StorageError};

/// Map-backed storage. Clones share the same slots.
///
/// Writes can be switched off with [`MemoryStorage::set_read_only`], which
/// behaves like a browser whose storage quota is exhausted: reads keep
/// working, every `set`/`remove` fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable()?;
        self.slots()?.remove(key);
        Ok(())
    }
}
