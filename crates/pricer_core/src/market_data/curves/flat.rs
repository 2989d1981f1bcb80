//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with a single continuously-compounded rate.
///
/// Every maturity discounts at the same rate. Used for prototyping, for
/// tests, and as the simplest curve the swaption pricers accept.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
///
/// let curve = FlatCurve::new(0.03_f64);
///
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - (-0.06_f64).exp()).abs() < 1e-12);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant continuously-compounded rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// `D(t) = exp(-r * t)` for `t >= 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((-self.rate * t).exp())
    }

    /// The zero rate is the constant rate for any `t > 0`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }

    /// The forward rate is the constant rate for any `t2 > t1`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor_at_zero_is_one() {
        let curve = FlatCurve::new(0.05_f64);
        assert_relative_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_values() {
        let curve = FlatCurve::new(0.03_f64);
        for t in [0.5, 1.0, 2.0, 6.0, 10.0] {
            assert_relative_eq!(
                curve.discount_factor(t).unwrap(),
                (-0.03 * t).exp(),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_negative_rate_allowed() {
        let curve = FlatCurve::new(-0.005_f64);
        let df = curve.discount_factor(1.0).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn test_negative_maturity_rejected() {
        let curve = FlatCurve::new(0.05_f64);
        match curve.discount_factor(-1.0) {
            Err(MarketDataError::InvalidMaturity { t }) => assert_eq!(t, -1.0),
            other => panic!("Expected InvalidMaturity, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_constant() {
        let curve = FlatCurve::new(0.04_f64);
        for t in [0.25, 1.0, 7.5] {
            assert_eq!(curve.zero_rate(t).unwrap(), 0.04);
        }
        assert!(curve.zero_rate(0.0).is_err());
    }

    #[test]
    fn test_forward_rate_constant() {
        let curve = FlatCurve::new(0.04_f64);
        assert_eq!(curve.forward_rate(1.0, 2.0).unwrap(), 0.04);
        assert!(curve.forward_rate(2.0, 2.0).is_err());
    }
}
