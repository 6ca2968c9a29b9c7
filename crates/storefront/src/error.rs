//! Checkout error handling.
//!
//! The cart store itself never fails; everything that can go wrong for a
//! shopper happens while placing an order. All of it surfaces as
//! [`CheckoutError`], and none of it mutates the cart.

use maison_core::EmailError;
use thiserror::Error;

use crate::storage::StorageError;

/// Reasons an order could not be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// Required customer fields were left blank.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The phone number is not a valid Pakistani number.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The optional email was given but is malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The order log could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CheckoutError {
    /// Whether the shopper can fix this by editing the form.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFields(_) | Self::InvalidPhone(_) | Self::InvalidEmail(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = CheckoutError::MissingFields(vec!["fullName", "city"]);
        assert_eq!(err.to_string(), "Missing required fields: fullName, city");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_storage_is_not_user_error() {
        let err = CheckoutError::from(StorageError::Unavailable("quota".to_string()));
        assert_eq!(err.to_string(), "Storage error: Storage unavailable: quota");
        assert!(!err.is_user_error());
        assert!(!CheckoutError::EmptyCart.is_user_error());
    }
}
