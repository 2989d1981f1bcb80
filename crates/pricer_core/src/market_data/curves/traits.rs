//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// A deterministic yield curve quoted in continuously-compounded terms.
///
/// Pricers consume curves through this trait so that any implementation
/// (flat, interpolated, bootstrapped) can be injected.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
pub trait YieldCurve<T: Float> {
    /// Return the discount factor `D(t)` for maturity `t >= 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the zero rate for maturity `t > 0`.
    ///
    /// The default implementation inverts the discount factor:
    /// `r(t) = -ln(D(t)) / t`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }

    /// Return the forward rate between `t1` and `t2 > t1`.
    ///
    /// The default implementation uses the discount factor ratio:
    /// `f(t1, t2) = ln(D(t1) / D(t2)) / (t2 - t1)`.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(f64::NAN),
            });
        }
        let d1 = self.discount_factor(t1)?;
        let d2 = self.discount_factor(t2)?;
        Ok((d1 / d2).ln() / (t2 - t1))
    }
}
