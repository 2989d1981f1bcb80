//! Monetary amounts.

use crate::types::Currency;
use num_traits::Float;
use std::fmt;
use std::ops::Neg;

/// A monetary amount tagged with its currency.
///
/// Present values returned by the pricers carry their currency so that
/// results from different instruments cannot be mixed by accident.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::types::{Currency, CurrencyAmount};
///
/// let pv = CurrencyAmount::new(1234.5_f64, Currency::EUR);
/// assert_eq!(pv.amount(), 1234.5);
/// assert_eq!(pv.currency(), Currency::EUR);
/// assert_eq!((-pv).amount(), -1234.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount<T: Float> {
    /// The signed amount
    amount: T,
    /// The currency of the amount
    currency: Currency,
}

impl<T: Float> CurrencyAmount<T> {
    /// Construct an amount in the given currency.
    #[inline]
    pub fn new(amount: T, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Return the signed amount.
    #[inline]
    pub fn amount(&self) -> T {
        self.amount
    }

    /// Return the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl<T: Float> Neg for CurrencyAmount<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for CurrencyAmount<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let a = CurrencyAmount::new(100.0_f64, Currency::USD);
        assert_eq!(a.amount(), 100.0);
        assert_eq!(a.currency(), Currency::USD);
    }

    #[test]
    fn test_negation() {
        let a = CurrencyAmount::new(42.0_f64, Currency::JPY);
        let b = -a;
        assert_eq!(b.amount(), -42.0);
        assert_eq!(b.currency(), Currency::JPY);
    }

    #[test]
    fn test_display() {
        let a = CurrencyAmount::new(1.5_f64, Currency::CHF);
        assert_eq!(format!("{}", a), "1.5 CHF");
    }
}
