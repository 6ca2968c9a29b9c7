//! Maison Storefront library.
//!
//! Client-side commerce state for the Maison storefront: the cart store
//! and its persisted snapshot, the standalone product catalog, checkout
//! quoting, and the simulated cash-on-delivery order log.
//!
//! # Architecture
//!
//! - [`storage`] - key/value slots standing in for browser local storage
//! - [`cart`] - the session cart, persisted after every mutation
//! - [`catalog`] - seeded product list kept under its own key
//! - [`checkout`] - shipping, tax, coupon, and cart-panel order placement
//! - [`orders`] - cash-on-delivery customer validation and order log
//! - [`config`] - environment-driven checkout settings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod orders;
pub mod storage;

pub use cart::{CartState, CartStore};
pub use catalog::Catalog;
pub use checkout::{
    CheckoutPolicy, CheckoutVariant, CouponOutcome, PlacedOrder, Quote, place_cart_order,
};
pub use config::{ConfigError, StorefrontConfig};
pub use error::CheckoutError;
pub use orders::{CodOrder, CustomerDetails, CustomerForm, OrderLog, place_cod_order};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
