//! Pillar-based yield curve with log-linear discount factor interpolation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Yield curve defined by zero-rate pillars.
///
/// Discount factors are interpolated log-linearly between pillars, which is
/// equivalent to linear interpolation of `r(t) * t`. Before the first pillar
/// the curve is anchored at `D(0) = 1`; beyond the last pillar the final zero
/// rate is extrapolated flat.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{InterpolatedCurve, YieldCurve};
///
/// let curve = InterpolatedCurve::new(
///     vec![1.0_f64, 2.0, 5.0],
///     vec![0.02, 0.025, 0.03],
/// ).unwrap();
///
/// // At a pillar the quoted zero rate is recovered exactly.
/// assert!((curve.zero_rate(2.0).unwrap() - 0.025).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve<T: Float> {
    /// Pillar maturities, strictly increasing and positive
    times: Vec<T>,
    /// Zero rates at the pillars (continuously compounded)
    rates: Vec<T>,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct a curve from pillar maturities and zero rates.
    ///
    /// # Errors
    ///
    /// * [`MarketDataError::InsufficientData`] - fewer than two pillars or
    ///   mismatched input lengths
    /// * [`MarketDataError::NonIncreasingPillars`] - maturities not strictly
    ///   increasing, or first maturity not positive
    pub fn new(times: Vec<T>, rates: Vec<T>) -> Result<Self, MarketDataError> {
        if times.len() < 2 || times.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: times.len().min(rates.len()),
                need: 2,
            });
        }
        if times[0] <= T::zero() {
            return Err(MarketDataError::NonIncreasingPillars { index: 0 });
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(MarketDataError::NonIncreasingPillars { index: i });
            }
        }
        Ok(Self { times, rates })
    }

    /// Return the pillar maturities.
    #[inline]
    pub fn times(&self) -> &[T] {
        &self.times
    }

    /// Return the pillar zero rates.
    #[inline]
    pub fn rates(&self) -> &[T] {
        &self.rates
    }

    /// Linear interpolation of `r(t) * t`, the log-discount.
    fn log_discount(&self, t: T) -> T {
        let n = self.times.len();
        if t <= self.times[0] {
            // Anchored at D(0) = 1, so the log-discount is linear from zero.
            return self.rates[0] * t;
        }
        if t >= self.times[n - 1] {
            return self.rates[n - 1] * t;
        }
        let mut i = 1;
        while t > self.times[i] {
            i += 1;
        }
        let (t0, t1) = (self.times[i - 1], self.times[i]);
        let y0 = self.rates[i - 1] * t0;
        let y1 = self.rates[i] * t1;
        let w = (t - t0) / (t1 - t0);
        y0 + w * (y1 - y0)
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((-self.log_discount(t)).exp())
    }
}
