//! Status enums for orders.
//!
//! Wire spellings match the simulated order log the browser storefront
//! keeps, so existing logs deserialize unchanged.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a locally recorded order.
///
/// The simulated checkout only ever records confirmed orders; the other
/// states exist so a log edited by staff still parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Payment collected by the courier on delivery.
    #[default]
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spellings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"Cash on Delivery\""
        );
        assert_eq!(PaymentMethod::CashOnDelivery.label(), "Cash on Delivery");
    }
}
