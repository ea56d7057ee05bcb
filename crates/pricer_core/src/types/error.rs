//! Error types for structured error handling.
//!
//! This module provides `PricingError`, the workspace-level error taxonomy.
//! Layer-specific errors (feed errors, analytical errors, simulation
//! configuration errors) convert into `PricingError` at the service
//! boundary, so callers always observe one of the three kinds below.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure a pricing request can produce collapses into one of these
/// variants. Failures are local to a single request; there is no shared
/// state to quarantine and no retry policy at this level.
///
/// # Variants
/// - `InvalidModelParameters`: Non-positive strike/maturity/spot, negative
///   volatility, a degenerate analytic input (σ√T = 0), or out-of-range
///   simulation dimensions
/// - `DataUnavailable`: The external spot-price feed failed; no
///   computation is attempted once this occurs
/// - `NumericalInstability`: Advisory kind for discretisation artefacts
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidModelParameters("strike must be positive".to_string());
/// assert_eq!(err.kind(), "invalid_model_parameters");
/// assert!(format!("{}", err).contains("strike"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Model or simulation parameters violate an invariant.
    #[error("Invalid model parameters: {0}")]
    InvalidModelParameters(String),

    /// The external market-data collaborator failed to produce a spot price.
    #[error("Market data unavailable: {0}")]
    DataUnavailable(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Machine-readable error kind, stable across message changes.
    ///
    /// Intended for the HTTP boundary, which reports an error description
    /// plus this kind to clients.
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidModelParameters(_) => "invalid_model_parameters",
            PricingError::DataUnavailable(_) => "data_unavailable",
            PricingError::NumericalInstability(_) => "numerical_instability",
        }
    }
}
