//! Currency identifiers.

use crate::types::error::CurrencyError;
use std::fmt;
use std::str::FromStr;

/// ISO 4217 currency codes supported by the pricer.
///
/// # Examples
/// ```
/// use pricer_core::types::Currency;
///
/// let ccy: Currency = "EUR".parse().unwrap();
/// assert_eq!(ccy, Currency::EUR);
/// assert_eq!(ccy.code(), "EUR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States dollar
    USD,
    /// Euro
    EUR,
    /// British pound sterling
    GBP,
    /// Japanese yen
    JPY,
    /// Swiss franc
    CHF,
}

impl Currency {
    /// Return the three-letter ISO 4217 code.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }

    /// Number of decimal places conventionally quoted for the currency.
    #[inline]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            _ => Err(CurrencyError::UnknownCurrency {
                code: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for ccy in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::CHF,
        ] {
            let parsed: Currency = ccy.code().parse().unwrap();
            assert_eq!(parsed, ccy);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let result = "XAU".parse::<Currency>();
        match result {
            Err(CurrencyError::UnknownCurrency { code }) => assert_eq!(code, "XAU"),
            other => panic!("Expected UnknownCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Currency::GBP), "GBP");
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::USD.decimal_places(), 2);
    }
}
