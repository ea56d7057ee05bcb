//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::types::{ContractParams, OptionType};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Black-Scholes valuation of a European option.
///
/// Binds a spot price to a contract and prices it in closed form, with no
/// simulation error. Construction rejects every input that would make the
/// formula degenerate, so the pricing methods themselves are infallible.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{ContractParams, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// let bs = BlackScholes::new(100.0, contract).unwrap();
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = bs.call_value() - bs.put_value() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes {
    /// Spot price (S).
    spot: f64,
    /// Contract parameters (K, r, σ, T, call/put).
    contract: ContractParams,
}

impl BlackScholes {
    /// Creates a Black-Scholes pricer for a spot/contract pair.
    ///
    /// # Errors
    ///
    /// - [`AnalyticalError::InvalidSpot`] if `spot <= 0`
    /// - [`AnalyticalError::InvalidStrike`] if `contract.strike <= 0`
    /// - [`AnalyticalError::InvalidVolatility`] if `contract.volatility <= 0`
    /// - [`AnalyticalError::InvalidMaturity`] if `contract.maturity <= 0`
    ///
    /// σ = 0 and T = 0 are rejected rather than clamped: both make
    /// σ√T = 0, which divides by zero in d₁/d₂.
    pub fn new(spot: f64, contract: ContractParams) -> Result<Self, AnalyticalError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !contract.strike.is_finite() || contract.strike <= 0.0 {
            return Err(AnalyticalError::InvalidStrike {
                strike: contract.strike,
            });
        }
        if !contract.volatility.is_finite() || contract.volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: contract.volatility,
            });
        }
        if !contract.maturity.is_finite() || contract.maturity <= 0.0 {
            return Err(AnalyticalError::InvalidMaturity {
                maturity: contract.maturity,
            });
        }

        Ok(Self { spot, contract })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the contract parameters.
    #[inline]
    pub fn contract(&self) -> &ContractParams {
        &self.contract
    }

    /// Computes the d₁ term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let c = &self.contract;
        let vol_sqrt_t = c.volatility * c.maturity.sqrt();

        let log_moneyness = (self.spot / c.strike).ln();
        let drift = (c.rate + 0.5 * c.volatility * c.volatility) * c.maturity;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d₂ term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        let c = &self.contract;
        self.d1() - c.volatility * c.maturity.sqrt()
    }

    /// European call price: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂).
    #[inline]
    pub fn call_value(&self) -> f64 {
        let c = &self.contract;
        let d1 = self.d1();
        let d2 = self.d2();
        let discount = (-c.rate * c.maturity).exp();

        self.spot * norm_cdf(d1) - c.strike * discount * norm_cdf(d2)
    }

    /// European put price: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁).
    #[inline]
    pub fn put_value(&self) -> f64 {
        let c = &self.contract;
        let d1 = self.d1();
        let d2 = self.d2();
        let discount = (-c.rate * c.maturity).exp();

        c.strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices the contract according to its option type.
    #[inline]
    pub fn value(&self) -> f64 {
        match self.contract.option_type {
            OptionType::Call => self.call_value(),
            OptionType::Put => self.put_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn pricer(spot: f64, strike: f64, rate: f64, vol: f64, maturity: f64) -> BlackScholes {
        let contract = ContractParams::new(strike, rate, vol, maturity, OptionType::Call).unwrap();
        BlackScholes::new(spot, contract).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = pricer(100.0, 100.0, 0.05, 0.2, 1.0);
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.contract().strike, 100.0);
    }

    #[test]
    fn test_new_invalid_spot() {
        let contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        for spot in [0.0, -100.0] {
            match BlackScholes::new(spot, contract) {
                Err(AnalyticalError::InvalidSpot { spot: s }) => assert_eq!(s, spot),
                other => panic!("expected InvalidSpot, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_volatility_is_a_defined_failure() {
        // σ = 0 makes σ√T = 0: rejected, never clamped
        let mut contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        contract.volatility = 0.0;
        match BlackScholes::new(100.0, contract) {
            Err(AnalyticalError::InvalidVolatility { volatility }) => assert_eq!(volatility, 0.0),
            other => panic!("expected InvalidVolatility, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_maturity_is_a_defined_failure() {
        let mut contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        contract.maturity = 0.0;
        match BlackScholes::new(100.0, contract) {
            Err(AnalyticalError::InvalidMaturity { maturity }) => assert_eq!(maturity, 0.0),
            other => panic!("expected InvalidMaturity, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_strike_rejected_before_computation() {
        let mut contract = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        contract.strike = -50.0;
        assert!(matches!(
            BlackScholes::new(100.0, contract),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_negative_rate_allowed() {
        let bs = pricer(100.0, 100.0, -0.02, 0.2, 1.0);
        assert!(bs.call_value() > 0.0);
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = pricer(100.0, 100.0, 0.0, 0.2, 1.0);
        assert_relative_eq!(bs.d1(), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = pricer(100.0, 105.0, 0.05, 0.2, 0.5);
        let expected_d2 = bs.d1() - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(bs.d2(), expected_d2, epsilon = 1e-10);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → C ≈ 10.45
        let bs = pricer(100.0, 100.0, 0.05, 0.2, 1.0);
        assert_relative_eq!(bs.call_value(), 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Known reference: S=100, K=100, r=0.05, σ=0.2, T=1 → P ≈ 5.57
        let bs = pricer(100.0, 100.0, 0.05, 0.2, 1.0);
        assert_relative_eq!(bs.put_value(), 5.5735, epsilon = 0.001);
    }

    #[test]
    fn test_value_dispatches_on_option_type() {
        let call = ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        let put = ContractParams {
            option_type: OptionType::Put,
            ..call
        };

        let call_bs = BlackScholes::new(100.0, call).unwrap();
        let put_bs = BlackScholes::new(100.0, put).unwrap();

        assert_eq!(call_bs.value(), call_bs.call_value());
        assert_eq!(put_bs.value(), put_bs.put_value());
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        // Deep ITM call ≈ S - K·e^(-rT)
        let bs = pricer(200.0, 100.0, 0.05, 0.2, 1.0);
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(bs.call_value() >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_approaches_zero() {
        let bs = pricer(50.0, 100.0, 0.05, 0.2, 1.0);
        assert!(bs.call_value() < 0.01);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K·e^(-rT)
        let bs = pricer(100.0, 100.0, 0.05, 0.2, 1.0);
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(bs.call_value() - bs.put_value(), forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let bs = pricer(100.0, strike, 0.05, 0.2, 1.0);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(bs.call_value() - bs.put_value(), forward, epsilon = 1e-10);
        }
    }

    proptest! {
        #[test]
        fn test_put_call_parity_property(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            rate in -0.05_f64..0.15,
            vol in 0.01_f64..1.0,
            maturity in 0.05_f64..5.0,
        ) {
            let contract =
                ContractParams::new(strike, rate, vol, maturity, OptionType::Call).unwrap();
            let bs = BlackScholes::new(spot, contract).unwrap();

            let forward = spot - strike * (-rate * maturity).exp();
            let parity = bs.call_value() - bs.put_value() - forward;
            prop_assert!(
                parity.abs() < 1e-6,
                "parity violated: {} (S={}, K={}, r={}, σ={}, T={})",
                parity, spot, strike, rate, vol, maturity
            );
        }

        #[test]
        fn test_prices_are_non_negative(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            rate in 0.0_f64..0.15,
            vol in 0.01_f64..1.0,
            maturity in 0.05_f64..5.0,
        ) {
            let contract =
                ContractParams::new(strike, rate, vol, maturity, OptionType::Call).unwrap();
            let bs = BlackScholes::new(spot, contract).unwrap();
            // Tolerance covers the 1.5e-7 erfc approximation error scaled
            // by strike/spot
            let tol = 1e-3;
            prop_assert!(bs.call_value() >= -tol);
            prop_assert!(bs.put_value() >= -tol);
        }
    }
}
