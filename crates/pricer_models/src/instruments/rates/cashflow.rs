//! Cash-flow-equivalent projection of swaps.

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::swap::{FixedIborSwap, SwapDirection};
use num_traits::Float;
use pricer_core::market_data::curves::YieldCurve;

/// A deterministic cash flow: a signed amount paid at a known time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlow<T: Float> {
    /// Payment time in year fractions
    time: T,
    /// Signed amount
    amount: T,
}

impl<T: Float> CashFlow<T> {
    /// Construct a cash flow.
    #[inline]
    pub fn new(time: T, amount: T) -> Self {
        Self { time, amount }
    }

    /// Return the payment time.
    #[inline]
    pub fn time(&self) -> T {
        self.time
    }

    /// Return the signed amount.
    #[inline]
    pub fn amount(&self) -> T {
        self.amount
    }
}

/// Projection of a swap onto an equivalent strip of fixed cash flows.
///
/// Implementations reduce both legs of a [`FixedIborSwap`] to deterministic
/// flows, signed from the point of view of the swap holder.
pub trait CashFlowProjector<T: Float> {
    /// Project `swap` onto fixed cash flows, sorted by payment time.
    fn project<C: YieldCurve<T>>(
        &self,
        swap: &FixedIborSwap<T>,
        curve: &C,
    ) -> Result<Vec<CashFlow<T>>, InstrumentError>;
}

/// The standard cash-flow-equivalent decomposition.
///
/// A flat Ibor leg paying over `[s, e]` is worth the notional exchange
/// `+N at s, -N at e`, so a payer swap (pay fixed, receive float) projects to
///
/// ```text
/// +N at float_start,  -N·c·δ_i at each fixed payment,  -N at float_end
/// ```
///
/// and a receiver swap to the negation. A final fixed coupon paying at
/// `float_end` is merged with the notional return into a single flow.
///
/// # Examples
/// ```
/// use pricer_models::instruments::rates::cashflow::{CashFlowEquivalentProjector, CashFlowProjector};
/// use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_core::types::Currency;
///
/// let swap = FixedIborSwap::from_tenor(
///     100.0_f64, 0.05, 1.0, 2.0, 1, SwapDirection::PayFixed, Currency::USD,
/// ).unwrap();
/// let curve = FlatCurve::new(0.03_f64);
///
/// let flows = CashFlowEquivalentProjector.project(&swap, &curve).unwrap();
/// assert_eq!(flows.len(), 2);
/// assert_eq!(flows[0].amount(), 100.0);    // notional in at start
/// assert_eq!(flows[1].amount(), -105.0);   // notional + coupon out at end
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowEquivalentProjector;

impl<T: Float> CashFlowProjector<T> for CashFlowEquivalentProjector {
    fn project<C: YieldCurve<T>>(
        &self,
        swap: &FixedIborSwap<T>,
        _curve: &C,
    ) -> Result<Vec<CashFlow<T>>, InstrumentError> {
        let notional = swap.notional();
        let rate = swap.fixed_rate();
        let times = swap.fixed_payment_times();
        let accruals = swap.fixed_accruals();

        let mut flows: Vec<CashFlow<T>> = Vec::with_capacity(times.len() + 2);
        flows.push(CashFlow::new(swap.float_start(), notional));
        for (t, delta) in times.iter().zip(accruals.iter()) {
            flows.push(CashFlow::new(*t, -notional * rate * *delta));
        }

        // Merge the notional return into a final coupon paying at the same time.
        let merged = flows
            .last()
            .map_or(false, |last| last.time() == swap.float_end());
        if merged {
            let last = flows.len() - 1;
            flows[last] = CashFlow::new(flows[last].time(), flows[last].amount() - notional);
        } else {
            flows.push(CashFlow::new(swap.float_end(), -notional));
        }

        if swap.direction() == SwapDirection::ReceiveFixed {
            for flow in flows.iter_mut() {
                *flow = CashFlow::new(flow.time(), -flow.amount());
            }
        }

        if flows.is_empty() {
            return Err(InstrumentError::EmptyCashFlows);
        }
        Ok(flows)
    }
}
