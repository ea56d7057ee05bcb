//! Option contract parameters.
//!
//! `ContractParams` is the single parameter bundle shared by the analytic
//! pricer and both simulation schemes. The spot price is deliberately not
//! part of the contract: it is supplied per request by the market-data
//! collaborator.

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// European option style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option: payoff max(S − K, 0).
    Call,
    /// Put option: payoff max(K − S, 0).
    Put,
}

/// Parameters of a European option contract.
///
/// # Invariants
///
/// - `strike > 0`
/// - `maturity > 0` (years)
/// - `volatility >= 0` (annualised; the analytic pricer additionally
///   requires it to be strictly positive)
///
/// `rate` is unconstrained; negative risk-free rates are valid inputs.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ContractParams, OptionType};
///
/// let contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();
/// assert!(contract.validate().is_ok());
///
/// // Zero strike is rejected
/// assert!(ContractParams::new(0.0, 0.05, 0.2, 1.0, OptionType::Call).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractParams {
    /// Strike price (K).
    pub strike: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl ContractParams {
    /// Creates contract parameters, validating the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidModelParameters`] if `strike` or
    /// `maturity` is non-positive, if `volatility` is negative, or if any
    /// numeric field is non-finite.
    pub fn new(
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> Result<Self, PricingError> {
        let contract = Self {
            strike,
            rate,
            volatility,
            maturity,
            option_type,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Validates the contract invariants.
    ///
    /// Deserialised requests bypass [`ContractParams::new`], so the service
    /// layer re-validates before pricing.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidModelParameters(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidModelParameters(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(PricingError::InvalidModelParameters(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(PricingError::InvalidModelParameters(format!(
                "maturity must be positive, got {}",
                self.maturity
            )));
        }
        Ok(())
    }
}
