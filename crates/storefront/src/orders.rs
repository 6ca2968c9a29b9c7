//! Cash-on-delivery orders.
//!
//! There is no payment or fulfillment backend: placing a cash-on-delivery
//! order validates the customer form, waits out a simulated network delay,
//! appends the order to the [`keys::COD_ORDERS`] log, and clears the cart.
//! If any step fails the cart is left untouched.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, Utc};
use maison_core::{CartLineItem, Email, OrderId, OrderStatus, PaymentMethod, Price};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::cart::CartStore;
use crate::error::CheckoutError;
use crate::storage::{Storage, StorageError, keys};

/// Pakistani mobile or landline number, with optional `+92` or `0` prefix.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+92|0)?[0-9]{10}$").expect("Invalid regex"));

/// Raw cash-on-delivery form input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub street_address: String,
    pub apartment_number: String,
    pub colony: String,
    pub city: String,
    pub postal_code: String,
    pub complete_address: String,
}

/// Validated customer details, as recorded on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    /// Phone number with whitespace removed.
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    pub street_address: String,
    #[serde(default)]
    pub apartment_number: String,
    pub colony: String,
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub complete_address: String,
}

impl CustomerForm {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// - `MissingFields` if any of name, phone, street, colony, or city is blank
    /// - `InvalidPhone` if the phone number is not a Pakistani number
    /// - `InvalidEmail` if an email was entered and is malformed
    pub fn validate(self) -> Result<CustomerDetails, CheckoutError> {
        let required = [
            ("fullName", &self.full_name),
            ("phoneNumber", &self.phone_number),
            ("streetAddress", &self.street_address),
            ("colony", &self.colony),
            ("city", &self.city),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        let phone: String = self
            .phone_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !PHONE_RE.is_match(&phone) {
            return Err(CheckoutError::InvalidPhone(self.phone_number));
        }

        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(Email::parse(&self.email)?)
        };

        Ok(CustomerDetails {
            full_name: self.full_name.trim().to_string(),
            phone_number: phone,
            email,
            street_address: self.street_address.trim().to_string(),
            apartment_number: self.apartment_number.trim().to_string(),
            colony: self.colony.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            complete_address: self.complete_address.trim().to_string(),
        })
    }
}

/// A recorded cash-on-delivery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodOrder {
    /// `COD-<unix millis>`.
    pub id: OrderId,
    pub customer: CustomerDetails,
    pub items: Vec<CartLineItem>,
    /// Cart subtotal, excluding shipping.
    pub total: Price,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
}

/// Append-only order log.
#[derive(Debug)]
pub struct OrderLog<S: Storage> {
    storage: S,
}

impl<S: Storage> OrderLog<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All recorded orders, oldest first.
    ///
    /// A malformed log reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be read.
    pub fn orders(&self) -> Result<Vec<CodOrder>, StorageError> {
        match self.read() {
            Err(StorageError::Corrupt { source, .. }) => {
                warn!(error = %source, "Malformed order log");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Append one order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read, is malformed, or
    /// cannot be written. A malformed log is never overwritten.
    pub fn append(&self, order: &CodOrder) -> Result<(), StorageError> {
        let mut orders = self.read()?;
        orders.push(order.clone());
        let raw = serde_json::to_string(&orders)?;
        self.storage.set(keys::COD_ORDERS, &raw)
    }

    fn read(&self) -> Result<Vec<CodOrder>, StorageError> {
        let Some(raw) = self.storage.get(keys::COD_ORDERS)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: keys::COD_ORDERS.to_string(),
            source,
        })
    }
}

/// Place a cash-on-delivery order for the current cart.
///
/// `latency` is an artificial delay standing in for a network round trip.
///
/// # Errors
///
/// Returns `CheckoutError` if the form is invalid, the cart is empty, or the
/// order log cannot be written. The cart is unchanged in every error case.
#[instrument(skip_all, fields(lines = cart.items().len()))]
pub async fn place_cod_order<S: Storage, L: Storage>(
    cart: &mut CartStore<S>,
    log: &OrderLog<L>,
    form: CustomerForm,
    latency: Duration,
) -> Result<CodOrder, CheckoutError> {
    let customer = form.validate()?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    tokio::time::sleep(latency).await;

    let placed_at = Utc::now();
    let order = CodOrder {
        id: OrderId::new(format!("COD-{}", placed_at.timestamp_millis())),
        customer,
        items: cart.items().to_vec(),
        total: cart.total_price(),
        order_date: placed_at,
        status: OrderStatus::Confirmed,
        payment_method: PaymentMethod::CashOnDelivery,
    };

    log.append(&order)?;
    cart.clear();

    info!(order_id = %order.id, total = %order.total, "Cash-on-delivery order placed");
    Ok(order)
}
