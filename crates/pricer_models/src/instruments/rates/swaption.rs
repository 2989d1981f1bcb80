//! Bermudan swaption on a fixed-for-Ibor swap.

use crate::instruments::error::InstrumentError;
use crate::instruments::rates::swap::{FixedIborSwap, SwapDirection};
use num_traits::Float;
use pricer_core::types::Currency;

/// Whether the option holder pays or receives fixed upon exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwaptionType {
    /// Exercise into paying the fixed leg.
    Payer,
    /// Exercise into receiving the fixed leg.
    Receiver,
}

/// Long or short the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Holding the option.
    Long,
    /// Having written the option.
    Short,
}

/// A Bermudan swaption: the right to enter a swap at any one of several
/// exercise dates.
///
/// Each exercise date carries the swap that would be entered when exercising
/// on that date (for the usual co-terminal structure these are the remaining
/// tails of a single master swap, but any per-date underlying is accepted).
/// All underlying swaps must share a direction and currency, and each must
/// start no earlier than its exercise date.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
/// use pricer_models::instruments::rates::swaption::{BermudanSwaption, Position, SwaptionType};
/// use pricer_core::types::Currency;
///
/// let tails: Vec<_> = [1.0, 2.0]
///     .iter()
///     .map(|&start| {
///         FixedIborSwap::from_tenor(
///             100.0_f64, 0.03, start, 6.0, 1, SwapDirection::PayFixed, Currency::EUR,
///         )
///         .unwrap()
///     })
///     .collect();
///
/// let swaption = BermudanSwaption::new(vec![1.0, 2.0], tails, Position::Long).unwrap();
/// assert_eq!(swaption.swaption_type(), SwaptionType::Payer);
/// assert_eq!(swaption.last_exercise(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BermudanSwaption<T: Float> {
    /// Exercise dates, strictly increasing, first one strictly positive
    exercise_times: Vec<T>,
    /// Underlying swap per exercise date
    underlying: Vec<FixedIborSwap<T>>,
    /// Long or short the option
    position: Position,
}

impl<T: Float> BermudanSwaption<T> {
    /// Construct a Bermudan swaption.
    ///
    /// # Errors
    ///
    /// * [`InstrumentError::EmptySchedule`] - no exercise dates
    /// * [`InstrumentError::LengthMismatch`] - dates and underlyings differ
    ///   in number
    /// * [`InstrumentError::FirstExerciseNotPositive`] - first date not
    ///   strictly positive
    /// * [`InstrumentError::NonIncreasingSchedule`] - dates not strictly
    ///   increasing
    /// * [`InstrumentError::InconsistentUnderlyings`] - mixed direction or
    ///   currency across underlyings
    /// * [`InstrumentError::UnderlyingStartsBeforeExercise`] - a swap starts
    ///   before its exercise date
    pub fn new(
        exercise_times: Vec<T>,
        underlying: Vec<FixedIborSwap<T>>,
        position: Position,
    ) -> Result<Self, InstrumentError> {
        if exercise_times.is_empty() {
            return Err(InstrumentError::EmptySchedule);
        }
        if exercise_times.len() != underlying.len() {
            return Err(InstrumentError::LengthMismatch {
                expiries: exercise_times.len(),
                swaps: underlying.len(),
            });
        }
        if exercise_times[0] <= T::zero() {
            return Err(InstrumentError::FirstExerciseNotPositive {
                time: exercise_times[0].to_f64().unwrap_or(f64::NAN),
            });
        }
        for i in 1..exercise_times.len() {
            if exercise_times[i] <= exercise_times[i - 1] {
                return Err(InstrumentError::NonIncreasingSchedule { index: i });
            }
        }
        let direction = underlying[0].direction();
        let currency = underlying[0].currency();
        for (i, swap) in underlying.iter().enumerate() {
            if swap.direction() != direction || swap.currency() != currency {
                return Err(InstrumentError::InconsistentUnderlyings { index: i });
            }
            if swap.float_start() < exercise_times[i] {
                return Err(InstrumentError::UnderlyingStartsBeforeExercise { index: i });
            }
        }
        Ok(Self {
            exercise_times,
            underlying,
            position,
        })
    }

    /// Return the exercise dates.
    #[inline]
    pub fn exercise_times(&self) -> &[T] {
        &self.exercise_times
    }

    /// Return the underlying swap for each exercise date.
    #[inline]
    pub fn underlying(&self) -> &[FixedIborSwap<T>] {
        &self.underlying
    }

    /// Return the last exercise date.
    #[inline]
    pub fn last_exercise(&self) -> T {
        self.exercise_times[self.exercise_times.len() - 1]
    }

    /// Return the position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the holder pays or receives fixed upon exercise.
    #[inline]
    pub fn swaption_type(&self) -> SwaptionType {
        match self.underlying[0].direction() {
            SwapDirection::PayFixed => SwaptionType::Payer,
            SwapDirection::ReceiveFixed => SwaptionType::Receiver,
        }
    }

    /// Return the settlement currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.underlying[0].currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(start: f64, direction: SwapDirection) -> FixedIborSwap<f64> {
        FixedIborSwap::from_tenor(100.0, 0.03, start, 6.0, 1, direction, Currency::EUR).unwrap()
    }

    fn payer_bermudan() -> BermudanSwaption<f64> {
        BermudanSwaption::new(
            vec![1.0, 2.0],
            vec![
                tail(1.0, SwapDirection::PayFixed),
                tail(2.0, SwapDirection::PayFixed),
            ],
            Position::Long,
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let swaption = payer_bermudan();
        assert_eq!(swaption.exercise_times(), &[1.0, 2.0]);
        assert_eq!(swaption.last_exercise(), 2.0);
        assert_eq!(swaption.position(), Position::Long);
        assert_eq!(swaption.swaption_type(), SwaptionType::Payer);
        assert_eq!(swaption.currency(), Currency::EUR);
        assert_eq!(swaption.underlying().len(), 2);
    }

    #[test]
    fn test_receiver_type() {
        let swaption = BermudanSwaption::new(
            vec![1.0],
            vec![tail(1.0, SwapDirection::ReceiveFixed)],
            Position::Short,
        )
        .unwrap();
        assert_eq!(swaption.swaption_type(), SwaptionType::Receiver);
    }

    #[test]
    fn test_rejects_empty_schedule() {
        let result = BermudanSwaption::<f64>::new(vec![], vec![], Position::Long);
        assert_eq!(result, Err(InstrumentError::EmptySchedule));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let result = BermudanSwaption::new(
            vec![1.0, 2.0],
            vec![tail(1.0, SwapDirection::PayFixed)],
            Position::Long,
        );
        assert_eq!(
            result,
            Err(InstrumentError::LengthMismatch {
                expiries: 2,
                swaps: 1
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_first_exercise() {
        let result = BermudanSwaption::new(
            vec![0.0, 2.0],
            vec![
                tail(1.0, SwapDirection::PayFixed),
                tail(2.0, SwapDirection::PayFixed),
            ],
            Position::Long,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::FirstExerciseNotPositive { .. })
        ));
    }

    #[test]
    fn test_rejects_non_increasing_dates() {
        let result = BermudanSwaption::new(
            vec![2.0, 2.0],
            vec![
                tail(2.0, SwapDirection::PayFixed),
                tail(2.0, SwapDirection::PayFixed),
            ],
            Position::Long,
        );
        assert_eq!(result, Err(InstrumentError::NonIncreasingSchedule { index: 1 }));
    }

    #[test]
    fn test_rejects_mixed_directions() {
        let result = BermudanSwaption::new(
            vec![1.0, 2.0],
            vec![
                tail(1.0, SwapDirection::PayFixed),
                tail(2.0, SwapDirection::ReceiveFixed),
            ],
            Position::Long,
        );
        assert_eq!(
            result,
            Err(InstrumentError::InconsistentUnderlyings { index: 1 })
        );
    }

    #[test]
    fn test_rejects_underlying_starting_before_exercise() {
        let result = BermudanSwaption::new(
            vec![1.0, 3.0],
            vec![
                tail(1.0, SwapDirection::PayFixed),
                tail(2.0, SwapDirection::PayFixed),
            ],
            Position::Long,
        );
        assert_eq!(
            result,
            Err(InstrumentError::UnderlyingStartsBeforeExercise { index: 1 })
        );
    }
}
