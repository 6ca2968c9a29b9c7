//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

use thiserror::Error;

/// Errors specific to CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}
