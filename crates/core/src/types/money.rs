//! Price normalization.
//!
//! Catalog data carries prices in a heterogeneous shape: either a plain
//! JSON number (`45`) or a currency-formatted string (`"$49.99"`). The
//! union is resolved here, at the boundary, so everything downstream of
//! the store works with a single canonical [`Decimal`] amount.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors that can occur when parsing a [`RawPrice`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The numeric value is NaN or infinite.
    #[error("price is not a finite number")]
    NotFinite,
    /// The value parsed but is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The string value could not be parsed as an amount.
    #[error("unparseable price: {0:?}")]
    Unparseable(String),
}

/// A price as it appears in catalog data.
///
/// Deserializes from either a JSON number or a string, and serializes
/// back to the same shape, so persisted product snapshots round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// A plain numeric amount, e.g. `45` or `49.99`.
    Amount(f64),
    /// A formatted amount with an optional leading currency symbol,
    /// e.g. `"$49.99"`.
    Text(String),
}

impl RawPrice {
    /// Parse the price into a canonical non-negative [`Decimal`].
    ///
    /// String values have any leading non-numeric characters (currency
    /// symbol, whitespace) stripped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError`] if the value is non-finite, negative, or
    /// cannot be parsed as a number.
    pub fn parse(&self) -> Result<Decimal, PriceError> {
        let amount = match self {
            Self::Amount(v) => {
                if !v.is_finite() {
                    return Err(PriceError::NotFinite);
                }
                // f64 Display is the shortest round-trip representation,
                // so "49.99" parses to exactly 49.99.
                Decimal::from_str(&v.to_string())
                    .map_err(|_| PriceError::Unparseable(v.to_string()))?
            }
            Self::Text(s) => {
                let trimmed = s.trim();
                let start = trimmed
                    .find(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
                    .ok_or_else(|| PriceError::Unparseable(s.clone()))?;
                let digits = trimmed.get(start..).unwrap_or_default();
                Decimal::from_str(digits).map_err(|_| PriceError::Unparseable(s.clone()))?
            }
        };

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }

        Ok(amount)
    }

    /// Display-safe amount used by total computations.
    ///
    /// Any parse failure degrades to zero with a warning rather than
    /// propagating into derived totals. This is a defensive fallback for
    /// UI-facing math, not a correctness guarantee; the warning exists so
    /// malformed catalog data gets investigated.
    #[must_use]
    pub fn normalize(&self) -> Decimal {
        match self.parse() {
            Ok(amount) => amount,
            Err(e) => {
                warn!(price = ?self, error = %e, "Unparseable price normalized to zero");
                Decimal::ZERO
            }
        }
    }
}

impl From<f64> for RawPrice {
    fn from(v: f64) -> Self {
        Self::Amount(v)
    }
}

impl From<&str> for RawPrice {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(RawPrice::Amount(45.0).parse().unwrap(), dec("45"));
        assert_eq!(RawPrice::Amount(49.99).parse().unwrap(), dec("49.99"));
        assert_eq!(RawPrice::Amount(0.0).parse().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_currency_string() {
        assert_eq!(RawPrice::from("$49.99").parse().unwrap(), dec("49.99"));
        assert_eq!(RawPrice::from("49.99").parse().unwrap(), dec("49.99"));
        assert_eq!(RawPrice::from("  $120").parse().unwrap(), dec("120"));
        assert_eq!(RawPrice::from("€35.50").parse().unwrap(), dec("35.50"));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(
            RawPrice::Amount(-5.0).parse(),
            Err(PriceError::Negative(_))
        ));
        assert!(matches!(
            RawPrice::from("$-5.00").parse(),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_not_finite() {
        assert_eq!(RawPrice::Amount(f64::NAN).parse(), Err(PriceError::NotFinite));
        assert_eq!(
            RawPrice::Amount(f64::INFINITY).parse(),
            Err(PriceError::NotFinite)
        );
    }

    #[test]
    fn test_parse_garbage_string() {
        assert!(matches!(
            RawPrice::from("free").parse(),
            Err(PriceError::Unparseable(_))
        ));
        assert!(matches!(
            RawPrice::from("").parse(),
            Err(PriceError::Unparseable(_))
        ));
    }

    #[test]
    fn test_normalize_falls_back_to_zero() {
        assert_eq!(RawPrice::from("free").normalize(), Decimal::ZERO);
        assert_eq!(RawPrice::Amount(f64::NAN).normalize(), Decimal::ZERO);
        assert_eq!(RawPrice::Amount(-10.0).normalize(), Decimal::ZERO);
    }

    #[test]
    fn test_normalize_valid_passthrough() {
        assert_eq!(RawPrice::from("$49.99").normalize(), dec("49.99"));
        assert_eq!(RawPrice::Amount(45.0).normalize(), dec("45"));
    }

    #[test]
    fn test_serde_untagged() {
        let number: RawPrice = serde_json::from_str("45").unwrap();
        assert_eq!(number, RawPrice::Amount(45.0));

        let text: RawPrice = serde_json::from_str("\"$49.99\"").unwrap();
        assert_eq!(text, RawPrice::from("$49.99"));

        // Round-trips preserve the original shape
        assert_eq!(serde_json::to_string(&number).unwrap(), "45.0");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"$49.99\"");
    }
}
