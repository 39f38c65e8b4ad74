//! Unit price value object.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A non-negative monetary amount in source currency units.
///
/// The catalog transports prices as decimal strings (`"109.95"`), so `Price`
/// serializes to and from the string form and keeps exact decimal arithmetic
/// internally. Totals computed from prices are exact sums, never floats.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Wrap an amount, rejecting negative values.
    pub fn new(amount: Decimal) -> Result<Self, DomainError> {
        if amount.is_sign_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for Price {}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s)
            .map_err(|e| DomainError::validation(format!("price: {e}")))?;
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    /// Two decimal places, the way unit prices are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings_exactly() {
        let price: Price = "10.00".parse().unwrap();
        assert_eq!(price.amount(), Decimal::new(1000, 2));

        let price: Price = "5.50".parse().unwrap();
        assert_eq!(price.amount(), Decimal::new(550, 2));
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = "-1.00".parse::<Price>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!("free".parse::<Price>().is_err());
    }

    #[test]
    fn displays_two_decimal_places() {
        let price: Price = "5.5".parse().unwrap();
        assert_eq!(price.to_string(), "5.50");
    }
}
