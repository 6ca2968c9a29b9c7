//! Integration tests for Maison.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maison-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart snapshots across simulated page reloads
//! - `checkout_flow` - Catalog to cart to order, on file-backed storage
//!
//! Shared fixtures live here so each test file builds products the same way.

use maison_core::{Price, Product, ProductId};

/// A product with the given id, price in cents, and stock.
#[must_use]
pub fn product(id: &str, cents: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Price::from_cents(cents),
        original_price: None,
        image: format!("https://cdn.example.com/{id}.jpg"),
        brand: "Maison".to_string(),
        category: "Ready to Wear".to_string(),
        description: String::new(),
        stock,
        is_new: false,
        is_on_sale: false,
        discount: None,
        rating: 4.0,
    }
}
