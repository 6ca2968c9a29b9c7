//! Catalog commands.

use maison_storefront::{Catalog, FileStorage, StorageError};
use tracing::info;

/// List products with price and stock.
pub fn list(storage: FileStorage) {
    for product in Catalog::new(storage).products() {
        let stock = if product.in_stock() {
            format!("{} in stock", product.stock)
        } else {
            "out of stock".to_string()
        };
        let sale = product
            .original_price
            .filter(|_| product.is_on_sale)
            .map(|original| format!(" (was {original})"))
            .unwrap_or_default();
        info!(
            "  [{}] {} by {} - {}{} - {}",
            product.id, product.name, product.brand, product.price, sale, stock
        );
    }
}

/// Seed the catalog if it is empty.
///
/// # Errors
///
/// Returns `StorageError` if the catalog slot cannot be read or written.
pub fn seed(storage: FileStorage) -> Result<(), StorageError> {
    if Catalog::new(storage).initialize()? {
        info!("Catalog seeded with sample products");
    } else {
        info!("Catalog already present, nothing to do");
    }
    Ok(())
}

/// List distinct brands.
pub fn brands(storage: FileStorage) {
    for brand in Catalog::new(storage).brands() {
        info!("  {brand}");
    }
}

/// List distinct categories.
pub fn categories(storage: FileStorage) {
    for category in Catalog::new(storage).categories() {
        info!("  {category}");
    }
}
