//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MAISON_DATA_DIR` - Directory holding the storage slots (default: `.maison`)
//! - `MAISON_SHIPPING_FEE` - Flat shipping fee (default: 9.99)
//! - `MAISON_FREE_SHIPPING_THRESHOLD` - Subtotals above this ship free (default: 50)
//! - `MAISON_TAX_RATE` - Cart-panel tax rate (default: 0.08)
//! - `MAISON_COUPON_CODE` - Accepted coupon code (default: WELCOME10)
//! - `MAISON_CHECKOUT_LATENCY_MS` - Simulated order latency (default: 2000)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use maison_core::Price;
use thiserror::Error;

use crate::checkout::CheckoutPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory for file-backed storage
    pub data_dir: PathBuf,
    /// Shipping, tax, and coupon settings
    pub checkout: CheckoutPolicy,
    /// Artificial delay before a cash-on-delivery order is recorded
    pub checkout_latency: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".maison"),
            checkout: CheckoutPolicy::default(),
            checkout_latency: Duration::from_millis(2000),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed, or
    /// if an amount or rate is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let policy = defaults.checkout;

        let data_dir = lookup("MAISON_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);

        let flat_shipping_fee = parse_or(
            &lookup,
            "MAISON_SHIPPING_FEE",
            policy.flat_shipping_fee.amount(),
        )?;
        let free_shipping_threshold = parse_or(
            &lookup,
            "MAISON_FREE_SHIPPING_THRESHOLD",
            policy.free_shipping_threshold.amount(),
        )?;
        let tax_rate = parse_or(&lookup, "MAISON_TAX_RATE", policy.tax_rate)?;
        for (key, value) in [
            ("MAISON_SHIPPING_FEE", flat_shipping_fee),
            ("MAISON_FREE_SHIPPING_THRESHOLD", free_shipping_threshold),
            ("MAISON_TAX_RATE", tax_rate),
        ] {
            if value.is_sign_negative() {
                return Err(ConfigError::InvalidEnvVar(
                    key.to_string(),
                    "must not be negative".to_string(),
                ));
            }
        }

        let coupon_code = lookup("MAISON_COUPON_CODE")
            .filter(|code| !code.trim().is_empty())
            .unwrap_or(policy.coupon_code);

        let latency_ms: u64 = parse_or(
            &lookup,
            "MAISON_CHECKOUT_LATENCY_MS",
            u64::try_from(defaults.checkout_latency.as_millis()).unwrap_or(u64::MAX),
        )?;

        Ok(Self {
            data_dir,
            checkout: CheckoutPolicy {
                flat_shipping_fee: Price::new(flat_shipping_fee),
                free_shipping_threshold: Price::new(free_shipping_threshold),
                tax_rate,
                coupon_code,
                coupon_percent: policy.coupon_percent,
            },
            checkout_latency: Duration::from_millis(latency_ms),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::Decimal;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".maison"));
        assert_eq!(config.checkout, CheckoutPolicy::default());
        assert_eq!(config.checkout_latency, Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("MAISON_DATA_DIR", "/tmp/shop"),
            ("MAISON_SHIPPING_FEE", "250"),
            ("MAISON_FREE_SHIPPING_THRESHOLD", " 5000 "),
            ("MAISON_TAX_RATE", "0.17"),
            ("MAISON_COUPON_CODE", "EID25"),
            ("MAISON_CHECKOUT_LATENCY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.checkout.flat_shipping_fee, Price::from_cents(25_000));
        assert_eq!(config.checkout.free_shipping_threshold, Price::from_cents(500_000));
        assert_eq!(config.checkout.tax_rate, Decimal::new(17, 2));
        assert_eq!(config.checkout.coupon_code, "EID25");
        assert_eq!(config.checkout_latency, Duration::ZERO);
    }

    #[test]
    fn test_blank_coupon_keeps_default() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("MAISON_COUPON_CODE", "  ")])).unwrap();
        assert_eq!(config.checkout.coupon_code, "WELCOME10");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[("MAISON_TAX_RATE", "eight")]));
        assert!(matches!(err, Err(ConfigError::InvalidEnvVar(key, _)) if key == "MAISON_TAX_RATE"));

        let err = StorefrontConfig::from_lookup(lookup(&[("MAISON_SHIPPING_FEE", "-1")]));
        assert!(matches!(err, Err(ConfigError::InvalidEnvVar(key, _)) if key == "MAISON_SHIPPING_FEE"));

        let err = StorefrontConfig::from_lookup(lookup(&[("MAISON_CHECKOUT_LATENCY_MS", "-5")]));
        assert!(err.is_err());
    }
}
