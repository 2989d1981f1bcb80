//! Fixed-for-Ibor interest rate swap.

use crate::instruments::error::InstrumentError;
use num_traits::Float;
use pricer_core::types::Currency;

/// Which leg of the swap is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Pay the fixed leg, receive the floating leg.
    PayFixed,
    /// Receive the fixed leg, pay the floating leg.
    ReceiveFixed,
}

/// A fixed-for-Ibor interest rate swap.
///
/// The floating leg spans `[float_start, float_end]` and pays Ibor flat; the
/// fixed leg pays `fixed_rate` on the given schedule of payment times with
/// the given accrual fractions. All times are year fractions from valuation.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
/// use pricer_core::types::Currency;
///
/// // Two-year payer swap starting in one year, annual fixed payments.
/// let swap = FixedIborSwap::from_tenor(
///     1_000_000.0_f64,
///     0.03,
///     1.0,
///     3.0,
///     1,
///     SwapDirection::PayFixed,
///     Currency::EUR,
/// ).unwrap();
///
/// assert_eq!(swap.fixed_payment_times(), &[2.0, 3.0]);
/// assert_eq!(swap.float_end(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedIborSwap<T: Float> {
    /// Notional amount, strictly positive
    notional: T,
    /// Fixed leg coupon rate
    fixed_rate: T,
    /// Fixed leg payment times, strictly increasing
    fixed_payment_times: Vec<T>,
    /// Fixed leg accrual fractions, one per payment
    fixed_accruals: Vec<T>,
    /// Floating leg start time
    float_start: T,
    /// Floating leg end time
    float_end: T,
    /// Which leg is paid
    direction: SwapDirection,
    /// Settlement currency
    currency: Currency,
}

impl<T: Float> FixedIborSwap<T> {
    /// Construct a swap from explicit schedules.
    ///
    /// # Errors
    ///
    /// * [`InstrumentError::InvalidNotional`] - `notional <= 0`
    /// * [`InstrumentError::EmptySchedule`] - no fixed payments, or
    ///   `float_end <= float_start`
    /// * [`InstrumentError::ScheduleMismatch`] - payment times and accruals
    ///   differ in number
    /// * [`InstrumentError::NonIncreasingSchedule`] - payment times not
    ///   strictly increasing or not after `float_start`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        notional: T,
        fixed_rate: T,
        fixed_payment_times: Vec<T>,
        fixed_accruals: Vec<T>,
        float_start: T,
        float_end: T,
        direction: SwapDirection,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        if notional <= T::zero() {
            return Err(InstrumentError::InvalidNotional {
                value: notional.to_f64().unwrap_or(f64::NAN),
            });
        }
        if fixed_payment_times.is_empty() || float_end <= float_start {
            return Err(InstrumentError::EmptySchedule);
        }
        if fixed_payment_times.len() != fixed_accruals.len() {
            return Err(InstrumentError::ScheduleMismatch {
                times: fixed_payment_times.len(),
                accruals: fixed_accruals.len(),
            });
        }
        if fixed_payment_times[0] <= float_start {
            return Err(InstrumentError::NonIncreasingSchedule { index: 0 });
        }
        for i in 1..fixed_payment_times.len() {
            if fixed_payment_times[i] <= fixed_payment_times[i - 1] {
                return Err(InstrumentError::NonIncreasingSchedule { index: i });
            }
        }
        Ok(Self {
            notional,
            fixed_rate,
            fixed_payment_times,
            fixed_accruals,
            float_start,
            float_end,
            direction,
            currency,
        })
    }

    /// Construct a swap with an evenly spaced fixed schedule.
    ///
    /// Builds `payments_per_year` fixed payments per year from `start` to
    /// `end`, each with accrual fraction `1 / payments_per_year`, with the
    /// floating leg spanning the same interval.
    pub fn from_tenor(
        notional: T,
        fixed_rate: T,
        start: T,
        end: T,
        payments_per_year: usize,
        direction: SwapDirection,
        currency: Currency,
    ) -> Result<Self, InstrumentError> {
        if payments_per_year == 0 || end <= start {
            return Err(InstrumentError::EmptySchedule);
        }
        let tenor = (end - start).to_f64().unwrap_or(0.0);
        let n = (tenor * payments_per_year as f64).round() as usize;
        if n == 0 {
            return Err(InstrumentError::EmptySchedule);
        }
        let accrual = T::one() / T::from(payments_per_year).unwrap();
        let times: Vec<T> = (1..=n)
            .map(|i| start + accrual * T::from(i).unwrap())
            .collect();
        let accruals = vec![accrual; n];
        Self::new(
            notional, fixed_rate, times, accruals, start, end, direction, currency,
        )
    }

    /// Return the notional.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Return the fixed leg coupon rate.
    #[inline]
    pub fn fixed_rate(&self) -> T {
        self.fixed_rate
    }

    /// Return the fixed leg payment times.
    #[inline]
    pub fn fixed_payment_times(&self) -> &[T] {
        &self.fixed_payment_times
    }

    /// Return the fixed leg accrual fractions.
    #[inline]
    pub fn fixed_accruals(&self) -> &[T] {
        &self.fixed_accruals
    }

    /// Return the floating leg start time.
    #[inline]
    pub fn float_start(&self) -> T {
        self.float_start
    }

    /// Return the floating leg end time.
    #[inline]
    pub fn float_end(&self) -> T {
        self.float_end
    }

    /// Return which leg is paid.
    #[inline]
    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Return the settlement currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payer_swap() -> FixedIborSwap<f64> {
        FixedIborSwap::from_tenor(
            1_000_000.0,
            0.03,
            1.0,
            6.0,
            1,
            SwapDirection::PayFixed,
            Currency::EUR,
        )
        .unwrap()
    }

    #[test]
    fn test_from_tenor_annual_schedule() {
        let swap = payer_swap();
        assert_eq!(swap.fixed_payment_times(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(swap.fixed_accruals(), &[1.0; 5]);
        assert_eq!(swap.float_start(), 1.0);
        assert_eq!(swap.float_end(), 6.0);
    }

    #[test]
    fn test_from_tenor_semiannual_schedule() {
        let swap = FixedIborSwap::from_tenor(
            100.0_f64,
            0.02,
            0.5,
            1.5,
            2,
            SwapDirection::ReceiveFixed,
            Currency::USD,
        )
        .unwrap();
        assert_eq!(swap.fixed_payment_times(), &[1.0, 1.5]);
        assert_eq!(swap.fixed_accruals(), &[0.5, 0.5]);
    }

    #[test]
    fn test_rejects_non_positive_notional() {
        let result = FixedIborSwap::new(
            0.0_f64,
            0.03,
            vec![2.0],
            vec![1.0],
            1.0,
            2.0,
            SwapDirection::PayFixed,
            Currency::EUR,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::InvalidNotional { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_fixed_schedule() {
        let result = FixedIborSwap::new(
            100.0_f64,
            0.03,
            vec![],
            vec![],
            1.0,
            2.0,
            SwapDirection::PayFixed,
            Currency::EUR,
        );
        assert_eq!(result, Err(InstrumentError::EmptySchedule));
    }

    #[test]
    fn test_rejects_schedule_mismatch() {
        let result = FixedIborSwap::new(
            100.0_f64,
            0.03,
            vec![2.0, 3.0],
            vec![1.0],
            1.0,
            3.0,
            SwapDirection::PayFixed,
            Currency::EUR,
        );
        assert_eq!(
            result,
            Err(InstrumentError::ScheduleMismatch {
                times: 2,
                accruals: 1
            })
        );
    }

    #[test]
    fn test_rejects_non_increasing_times() {
        let result = FixedIborSwap::new(
            100.0_f64,
            0.03,
            vec![2.0, 2.0],
            vec![1.0, 1.0],
            1.0,
            3.0,
            SwapDirection::PayFixed,
            Currency::EUR,
        );
        assert_eq!(result, Err(InstrumentError::NonIncreasingSchedule { index: 1 }));
    }

    #[test]
    fn test_rejects_payment_before_float_start() {
        let result = FixedIborSwap::new(
            100.0_f64,
            0.03,
            vec![1.0],
            vec![1.0],
            1.0,
            2.0,
            SwapDirection::PayFixed,
            Currency::EUR,
        );
        assert_eq!(result, Err(InstrumentError::NonIncreasingSchedule { index: 0 }));
    }
}
