//! Discounted payoff aggregation.
//!
//! Reduces the terminal column of a path matrix to a single price via
//! risk-neutral expectation: clamp payoffs elementwise, average, discount
//! by `e^(−rT)`. Pure and deterministic; a fixed input always produces a
//! bit-identical result.

use pricer_core::types::OptionType;

/// Elementwise raw payoffs for a terminal price column.
///
/// `max(S_T − K, 0)` for calls, `max(K − S_T, 0)` for puts. The option
/// type is matched once, outside the loop; every element goes through the
/// same clamped map.
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_pricing::payoff::raw_payoffs;
///
/// let payoffs = raw_payoffs(&[90.0, 110.0], 100.0, OptionType::Call);
/// assert_eq!(payoffs, vec![0.0, 10.0]);
/// ```
pub fn raw_payoffs(terminals: &[f64], strike: f64, option_type: OptionType) -> Vec<f64> {
    match option_type {
        OptionType::Call => terminals.iter().map(|&s| (s - strike).max(0.0)).collect(),
        OptionType::Put => terminals.iter().map(|&s| (strike - s).max(0.0)).collect(),
    }
}

/// Discounted mean payoff: `e^(−rT) · mean(raw payoffs)`.
///
/// # Panics
///
/// Debug-asserts that `terminals` is non-empty; the path generators
/// guarantee at least one path.
pub fn discounted_mean_payoff(
    terminals: &[f64],
    strike: f64,
    option_type: OptionType,
    rate: f64,
    maturity: f64,
) -> f64 {
    debug_assert!(!terminals.is_empty(), "terminal column must be non-empty");

    let payoffs = raw_payoffs(terminals, strike, option_type);
    let mean = payoffs.iter().sum::<f64>() / payoffs.len() as f64;

    (-rate * maturity).exp() * mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_call_payoffs() {
        let payoffs = raw_payoffs(&[80.0, 100.0, 125.0], 100.0, OptionType::Call);
        assert_eq!(payoffs, vec![0.0, 0.0, 25.0]);
    }

    #[test]
    fn test_put_payoffs() {
        let payoffs = raw_payoffs(&[80.0, 100.0, 125.0], 100.0, OptionType::Put);
        assert_eq!(payoffs, vec![20.0, 0.0, 0.0]);
    }

    #[test]
    fn test_payoffs_clamp_negative_terminals() {
        // Euler-Maruyama can hand over non-positive terminals; the clamp
        // still applies elementwise
        let payoffs = raw_payoffs(&[-5.0, 0.0], 100.0, OptionType::Put);
        assert_eq!(payoffs, vec![105.0, 100.0]);

        let payoffs = raw_payoffs(&[-5.0, 0.0], 100.0, OptionType::Call);
        assert_eq!(payoffs, vec![0.0, 0.0]);
    }

    #[test]
    fn test_discounting() {
        // Single in-the-money terminal: price = e^(−rT)·payoff
        let price = discounted_mean_payoff(&[120.0], 100.0, OptionType::Call, 0.05, 1.0);
        assert_relative_eq!(price, 20.0 * (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_mean_over_paths() {
        let price = discounted_mean_payoff(&[90.0, 110.0, 130.0], 100.0, OptionType::Call, 0.0, 1.0);
        // payoffs 0, 10, 30 → mean 40/3, no discounting at r=0
        assert_relative_eq!(price, 40.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_deep_out_of_the_money_prices_to_zero() {
        let terminals = [95.0, 101.0, 110.0];
        let price = discounted_mean_payoff(&terminals, 1.0e6, OptionType::Call, 0.05, 1.0);
        assert_eq!(price, 0.0);
    }

    #[test]
    fn test_aggregation_is_bit_identical() {
        let terminals: Vec<f64> = (0..1000).map(|i| 80.0 + (i as f64) * 0.05).collect();
        let first = discounted_mean_payoff(&terminals, 100.0, OptionType::Put, 0.03, 2.0);
        for _ in 0..10 {
            let again = discounted_mean_payoff(&terminals, 100.0, OptionType::Put, 0.03, 2.0);
            assert_eq!(first.to_bits(), again.to_bits());
        }
    }

    proptest! {
        #[test]
        fn test_raw_payoffs_are_non_negative(
            terminals in proptest::collection::vec(-1000.0_f64..10_000.0, 1..200),
            strike in 0.01_f64..10_000.0,
        ) {
            for option_type in [OptionType::Call, OptionType::Put] {
                let payoffs = raw_payoffs(&terminals, strike, option_type);
                prop_assert_eq!(payoffs.len(), terminals.len());
                for p in payoffs {
                    prop_assert!(p >= 0.0);
                }
            }
        }
    }
}
