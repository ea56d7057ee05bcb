//! Error types for simulation configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::{MAX_PATHS, MAX_STEPS};

/// Configuration errors for the path generators.
///
/// Raised before any random draw happens: a request with out-of-range
/// simulation dimensions performs no work.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside the valid range.
    ///
    /// For the trading-day scheme this includes a derived step count of
    /// zero, which happens when `maturity × 252` rounds down to nothing.
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidModelParameters(err.to_string())
    }
}
