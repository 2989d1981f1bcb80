//! Error types for the pricing engine.

use pricer_core::market_data::MarketDataError;
use pricer_models::instruments::InstrumentError;
use pricer_models::models::ModelError;
use thiserror::Error;

/// Errors surfaced by the Bermudan pricing engine.
///
/// Everything fails synchronously: no retries, no partial results.
///
/// # Examples
/// ```
/// use pricer_pricing::error::PricerError;
///
/// let err = PricerError::InvalidInstrument {
///     reason: "schedule has a single exercise date".to_string(),
/// };
/// assert!(format!("{}", err).contains("instrument"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricerError {
    /// The instrument was rejected before any computation.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// What was wrong with the instrument
        reason: String,
    },

    /// Model parameters or derived quantities were rejected.
    #[error("Invalid model: {reason}")]
    InvalidModel {
        /// What was wrong with the model
        reason: String,
    },

    /// A numeric step produced an unusable result.
    #[error("Numeric degeneracy: {reason}")]
    NumericDegeneracy {
        /// What degenerated
        reason: String,
    },

    /// Market data lookup failed.
    #[error("Market data failure: {0}")]
    MarketData(#[from] MarketDataError),
}

impl From<InstrumentError> for PricerError {
    fn from(err: InstrumentError) -> Self {
        PricerError::InvalidInstrument {
            reason: err.to_string(),
        }
    }
}

impl From<ModelError> for PricerError {
    fn from(err: ModelError) -> Self {
        PricerError::InvalidModel {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PricerError::NumericDegeneracy {
            reason: "no crossing root in straddle cell".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Numeric degeneracy: no crossing root in straddle cell"
        );
    }

    #[test]
    fn test_from_instrument_error() {
        let err: PricerError = InstrumentError::EmptySchedule.into();
        assert!(matches!(err, PricerError::InvalidInstrument { .. }));
    }

    #[test]
    fn test_from_model_error() {
        let err: PricerError = ModelError::InvalidVolatility { value: 0.0 }.into();
        assert!(matches!(err, PricerError::InvalidModel { .. }));
    }

    #[test]
    fn test_from_market_data_error() {
        let err: PricerError = MarketDataError::InvalidMaturity { t: -1.0 }.into();
        assert!(matches!(err, PricerError::MarketData(_)));
    }
}
