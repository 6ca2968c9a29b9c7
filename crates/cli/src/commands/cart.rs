//! Cart commands.
//!
//! Each invocation hydrates the cart from its snapshot, applies one
//! operation, and relies on the store to write the snapshot back.

use maison_core::ProductId;
use maison_storefront::{CartStore, Catalog, CheckoutVariant, FileStorage, StorefrontConfig};
use tracing::info;

use super::CommandError;

/// Print cart lines and totals.
pub fn show(storage: FileStorage, config: &StorefrontConfig) {
    let cart = CartStore::load(storage);
    if cart.is_empty() {
        info!("Your cart is empty");
        return;
    }

    for line in cart.items() {
        info!(
            "  [{}] {} ({}) {} x {} = {}",
            line.id,
            line.name,
            line.brand,
            line.quantity,
            line.price,
            line.line_total()
        );
    }
    let quote = config.checkout.quote(&cart, CheckoutVariant::CartPanel);
    info!("Items: {}", cart.total_items());
    info!("Subtotal: {}", quote.subtotal);
}

/// Add one unit of a catalog product.
///
/// # Errors
///
/// Returns `CommandError::UnknownProduct` if the id is not in the catalog.
pub fn add(storage: FileStorage, product_id: &str) -> Result<(), CommandError> {
    let catalog = Catalog::new(storage.clone());
    let product = catalog
        .product(&ProductId::new(product_id))
        .ok_or_else(|| CommandError::UnknownProduct(product_id.to_string()))?;

    let mut cart = CartStore::load(storage);
    let before = cart.total_items();
    cart.add_item(&product);

    if cart.total_items() == before {
        info!("{} not added: no more stock available", product.name);
    } else {
        info!("Added {} to cart ({} items)", product.name, cart.total_items());
    }
    Ok(())
}

/// Remove a line.
pub fn remove(storage: FileStorage, product_id: &str) {
    let mut cart = CartStore::load(storage);
    cart.remove_item(&ProductId::new(product_id));
    info!("Cart has {} items", cart.total_items());
}

/// Set a line's quantity.
pub fn set(storage: FileStorage, product_id: &str, quantity: i64) {
    let id = ProductId::new(product_id);
    let mut cart = CartStore::load(storage);
    cart.set_quantity(&id, quantity);
    match cart.item(&id) {
        Some(line) => info!("{} quantity is now {}", line.name, line.quantity),
        None => info!("{product_id} is not in the cart"),
    }
}

/// Empty the cart.
pub fn clear(storage: FileStorage) {
    let mut cart = CartStore::load(storage);
    cart.clear();
    info!("Cart cleared");
}
