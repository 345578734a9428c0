//! Type-safe price representation using decimal arithmetic.
//!
//! All money in the engine goes through [`Price`]: catalog prices, cart
//! line snapshots, subtotals, and the grand total. `Decimal` keeps the
//! arithmetic exact; binary floating point never enters the money path.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`] from form input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input does not parse as a number.
    #[error("price is not a number")]
    NotANumber,
    /// The input parses but is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount of money in the store's display currency.
///
/// Display formatting uses two decimal places with a comma as the decimal
/// separator (e.g. `1499,90`) - a display convention, not a correctness
/// invariant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Parse a price from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] when the trimmed input does not
    /// parse as a decimal, and [`PriceError::Negative`] when it is below
    /// zero.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| PriceError::NotANumber)?;
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line subtotal for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two decimal places, comma as the decimal separator.
        let fixed = format!("{:.2}", self.0);
        write!(f, "{}", fixed.replace('.', ","))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let price = Price::parse("19.90").unwrap();
        assert_eq!(price.amount(), Decimal::new(1990, 2));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(Price::parse("  12.5 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse(""), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(Price::parse("-1"), Err(PriceError::Negative));
    }

    #[test]
    fn test_display_two_places_comma_separator() {
        assert_eq!(Price::parse("1499.9").unwrap().to_string(), "1499,90");
        assert_eq!(Price::parse("5").unwrap().to_string(), "5,00");
        assert_eq!(Price::ZERO.to_string(), "0,00");
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::parse("10").unwrap();
        assert_eq!(unit.times(3), Price::parse("30").unwrap());

        let total: Price = [unit.times(2), Price::parse("5").unwrap()]
            .into_iter()
            .sum();
        assert_eq!(total, Price::parse("25").unwrap());
    }

    #[test]
    fn test_serde_round_trip_is_exact() {
        let price = Price::parse("0.1").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
