//! Error types for analytic pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytic pricing errors.
///
/// The Black-Scholes formula divides by σ√T, so inputs that make that
/// product zero are rejected up front rather than clamped: σ = 0 and
/// T = 0 are defined failures of the analytic path.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value.
        spot: f64,
    },

    /// Non-positive strike.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value.
        strike: f64,
    },

    /// Non-positive volatility (σ√T = 0 divides by zero in d1/d2).
    #[error("Invalid volatility: σ = {volatility} (σ√T must be positive)")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Non-positive maturity (σ√T = 0 divides by zero in d1/d2).
    #[error("Invalid maturity: T = {maturity} (σ√T must be positive)")]
    InvalidMaturity {
        /// The invalid maturity value.
        maturity: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidModelParameters(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");

        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        assert!(format!("{}", err).contains("σ√T must be positive"));
    }

    #[test]
    fn test_maps_to_invalid_model_parameters() {
        let err: PricingError = AnalyticalError::InvalidMaturity { maturity: 0.0 }.into();
        assert_eq!(err.kind(), "invalid_model_parameters");
        assert!(err.to_string().contains("maturity"));
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = AnalyticalError::InvalidStrike { strike: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
