//! Key/value persistence slots.
//!
//! The browser storefront keeps its cart, catalog, and order log in local
//! storage as JSON strings under fixed keys. [`Storage`] is that contract:
//! whole-value reads and writes of a string slot, nothing more.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - in-process map, shared between clones
//! - [`FileStorage`] - one JSON file per key under a data directory

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Fixed storage keys.
pub mod keys {
    /// Serialized cart line items.
    pub const CART: &str = "cart";

    /// Standalone product catalog.
    pub const PRODUCTS: &str = "products";

    /// Simulated cash-on-delivery order log.
    pub const COD_ORDERS: &str = "codOrders";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be decoded.
    #[error("Corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded before writing.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend refused the write.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-valued key/value store.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails. The previous value is
    /// left in place in that case.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot exists but cannot be removed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
