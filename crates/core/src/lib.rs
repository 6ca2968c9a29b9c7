//! Maison Core - Shared domain types.
//!
//! This crate provides the types used across all Maison components:
//! - `storefront` - Cart store, catalog, checkout and order log
//! - `cli` - Command-line driver for the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! Product and line-item shapes mirror the JSON the browser storefront
//! keeps in local storage, so snapshots written by either side read back
//! unchanged.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, statuses, and
//!   the catalog/cart item shapes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
