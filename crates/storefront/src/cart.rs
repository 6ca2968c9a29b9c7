//! Session cart store.
//!
//! [`CartStore`] is the single source of truth for the cart contents of one
//! storefront session. Every operation is total: out-of-range quantities are
//! clamped, unknown ids are ignored, and persistence failures are logged and
//! swallowed so the in-memory state stays authoritative.
//!
//! # Invariants
//!
//! - Lines are unique by product id and keep first-insertion order.
//! - Every line has `1 <= quantity <= stock`.
//! - `is_open` is UI state only and is never persisted.
//!
//! # Persistence
//!
//! After each mutating call the line items are written as a JSON array to
//! the [`keys::CART`] slot. [`CartStore::load`] reads that slot once; a
//! missing or malformed snapshot yields an empty cart.
//!
//! Two stores pointed at the same slot (two browser tabs) overwrite each
//! other without detection.

use maison_core::{CartLineItem, Price, Product, ProductId};
use tracing::{debug, instrument, warn};

use crate::storage::{Storage, StorageError, keys};

/// Cart contents plus the panel visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartLineItem>,
    is_open: bool,
}

impl CartState {
    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }
}

/// The session cart, bound to a storage backend.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    state: CartState,
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Create an empty cart without reading any snapshot.
    pub fn new(storage: S) -> Self {
        Self {
            state: CartState::default(),
            storage,
        }
    }

    /// Create a cart hydrated from the persisted snapshot.
    ///
    /// The panel always starts closed.
    #[instrument(skip(storage))]
    pub fn load(storage: S) -> Self {
        let items = match storage.get(keys::CART) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(items) => normalize(items),
                Err(e) => {
                    warn!(error = %e, "Malformed cart snapshot, starting with an empty cart");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart snapshot, starting with an empty cart");
                Vec::new()
            }
        };

        debug!(lines = items.len(), "Cart loaded");
        Self {
            state: CartState {
                items,
                is_open: false,
            },
            storage,
        }
    }

    /// Current state (read-only).
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn item(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.state.items.iter().find(|line| &line.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.items.is_empty()
    }

    /// Whether the cart panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, dropping the in-memory state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same id is incremented, never past its
    /// stored stock. A new line is appended with quantity 1 and a copy of
    /// the product's display fields. A product with no stock is not added.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            if line.can_increment() {
                line.quantity += 1;
                debug!(quantity = line.quantity, "Incremented cart line");
            } else {
                debug!(stock = line.stock, "Cart line already at stock limit");
            }
        } else if product.in_stock() {
            self.state.items.push(CartLineItem::from_product(product));
            debug!("Added cart line");
        } else {
            debug!("Product out of stock, not added");
        }
        self.commit();
    }

    /// Remove the line for `id`. Unknown ids are ignored.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.state.items.len();
        self.state.items.retain(|line| &line.id != id);
        if self.state.items.len() < before {
            debug!("Removed cart line");
        }
        self.commit();
    }

    /// Set the quantity of the line for `id`.
    ///
    /// `quantity <= 0` removes the line; anything else is clamped into
    /// `1..=stock`. Unknown ids are ignored.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(line) = self.line_mut(id) {
            let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
            line.quantity = requested.min(line.stock).max(1);
            debug!(requested = quantity, quantity = line.quantity, "Set cart line quantity");
        }
        self.commit();
    }

    /// Remove every line. Used once an order is placed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.state.items.clear();
        debug!("Cleared cart");
        self.commit();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state
            .items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.state.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Flip panel visibility and return the new value.
    pub const fn toggle_panel(&mut self) -> bool {
        self.state.is_open = !self.state.is_open;
        self.state.is_open
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLineItem> {
        self.state.items.iter_mut().find(|line| &line.id == id)
    }

    /// Write the snapshot, logging instead of propagating failures.
    fn commit(&self) {
        if let Err(e) = self.try_commit() {
            warn!(error = %e, "Failed to persist cart snapshot");
        }
    }

    fn try_commit(&self) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.state.items)?;
        self.storage.set(keys::CART, &snapshot)
    }
}

/// Repair a snapshot that breaks the line invariants.
///
/// The first line for an id wins, quantities are clamped into `1..=stock`,
/// and lines with no stock are dropped.
fn normalize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut lines: Vec<CartLineItem> = Vec::with_capacity(items.len());
    for mut line in items {
        if line.stock == 0 || lines.iter().any(|seen| seen.id == line.id) {
            warn!(product_id = %line.id, "Dropping invalid cart snapshot line");
            continue;
        }
        line.quantity = line.quantity.clamp(1, line.stock);
        lines.push(line);
    }
    lines
}
