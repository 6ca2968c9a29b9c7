//! Standalone product catalog.
//!
//! The non-database code path keeps its product list in the
//! [`keys::PRODUCTS`] slot. On first run the slot is seeded with the
//! built-in sample products; reads fall back to that seed whenever the
//! slot is empty or unreadable.

mod seed;

use std::collections::BTreeSet;

use maison_core::{Product, ProductId};
use tracing::{info, warn};

use crate::storage::{Storage, StorageError, keys};

pub use seed::sample_products;

/// Product list persisted under a fixed key.
#[derive(Debug)]
pub struct Catalog<S: Storage> {
    storage: S,
}

impl<S: Storage> Catalog<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Seed the catalog if nothing is stored yet.
    ///
    /// Returns `true` when the seed was written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read or written.
    pub fn initialize(&self) -> Result<bool, StorageError> {
        if self.storage.get(keys::PRODUCTS)?.is_some() {
            return Ok(false);
        }
        let seed = sample_products();
        self.save(&seed)?;
        info!(products = seed.len(), "Seeded product catalog");
        Ok(true)
    }

    /// All products, or the sample products when none are stored.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        match self.storage.get(keys::PRODUCTS) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Malformed product catalog, using sample products");
                sample_products()
            }),
            Ok(None) => sample_products(),
            Err(e) => {
                warn!(error = %e, "Failed to read product catalog, using sample products");
                sample_products()
            }
        }
    }

    /// Find one product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| &p.id == id)
    }

    /// Replace the stored product list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or writing fails.
    pub fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(products)?;
        self.storage.set(keys::PRODUCTS, &raw)
    }

    /// Distinct brand names, sorted.
    #[must_use]
    pub fn brands(&self) -> Vec<String> {
        distinct(self.products().into_iter().map(|p| p.brand))
    }

    /// Distinct category names, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct(self.products().into_iter().map(|p| p.category))
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}
