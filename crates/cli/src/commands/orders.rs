//! Order log commands.

use maison_storefront::{FileStorage, OrderLog, StorageError};
use tracing::info;

/// List recorded cash-on-delivery orders.
///
/// # Errors
///
/// Returns `StorageError` if the order log cannot be read.
pub fn list(storage: FileStorage) -> Result<(), StorageError> {
    let orders = OrderLog::new(storage).orders()?;
    if orders.is_empty() {
        info!("No orders recorded");
        return Ok(());
    }

    for order in &orders {
        info!(
            "  {} {} {} - {} line(s), {} [{:?}]",
            order.id,
            order.order_date.format("%Y-%m-%d %H:%M"),
            order.customer.full_name,
            order.items.len(),
            order.total,
            order.status
        );
    }
    info!("{} order(s)", orders.len());
    Ok(())
}
