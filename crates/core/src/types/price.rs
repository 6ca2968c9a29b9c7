//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept in the currency's standard unit (e.g. dollars, not
//! cents) and never rounded until they are displayed. On the wire a price
//! is a plain JSON number, which is how the browser storefront writes it.
//!
//! Arithmetic saturates at [`Price::MAX`] instead of overflowing.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative amount of money in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest representable amount.
    pub const MAX: Self = Self(Decimal::MAX);

    /// Create a price from a decimal amount.
    ///
    /// Negative amounts are floored to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(amount.max(Decimal::ZERO))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a rate such as a tax rate (`0.08`).
    #[must_use]
    pub fn scale(self, rate: Decimal) -> Self {
        self.0.checked_mul(rate).map_or(Self::MAX, Self::new)
    }

    /// Add, saturating at [`Price::MAX`].
    #[must_use]
    pub fn saturating_add(self, rhs: Self) -> Self {
        self.0.checked_add(rhs.0).map_or(Self::MAX, Self)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map_or(Self::MAX, Self)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    /// Writes the JSON number closest to the decimal amount.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount: f64 = self
            .0
            .to_string()
            .parse()
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_f64(amount)
    }
}

impl<'de> Deserialize<'de> for Price {
    /// Accepts JSON numbers as well as decimal strings.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Self::new)
    }
}

impl fmt::Display for Price {
    /// Formats as `$19.99`, rounding half away from zero to cents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${cents:.2}")
    }
}
