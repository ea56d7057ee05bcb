//! Pricing service orchestration.
//!
//! [`PricingEngine`] is the root of the workspace: it resolves the spot
//! price through the [`SpotFeed`] collaborator, dispatches on the
//! requested pricing method, and packages the scalar price (plus, for the
//! simulation methods, the full trajectory matrix) into a
//! [`PricingResult`].
//!
//! Every request is an independent computation: a fresh RNG, fresh
//! buffers, nothing cached or shared between requests.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use adapter_feeds::SpotFeed;
use pricer_core::types::{ContractParams, OptionType, PricingError};
use pricer_models::analytical::BlackScholes;

use crate::payoff::discounted_mean_payoff;
use crate::rng::{NormalSource, SimRng};
use crate::simulate::{EulerMaruyamaScheme, LognormalScheme, PathMatrix, PathScheme};

/// Pricing method selector.
///
/// Serialises with an internal `method` tag, so a request body reads
/// `{"method": "monteCarlo", "pathCount": 10000, ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PricingMethod {
    /// Closed-form Black-Scholes valuation; no simulation, no matrix.
    Analytic,
    /// Lognormal-step Monte Carlo on the trading-day grid.
    MonteCarlo {
        /// Number of simulated trajectories.
        #[serde(rename = "pathCount")]
        n_paths: usize,
    },
    /// Additive Euler-Maruyama simulation with explicit subdivisions.
    EulerMaruyama {
        /// Number of simulated trajectories.
        #[serde(rename = "pathCount")]
        n_paths: usize,
        /// Number of subdivisions of the maturity interval.
        #[serde(rename = "stepCount")]
        n_steps: usize,
    },
}

/// A single pricing request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Ticker symbol resolved through the spot feed.
    pub symbol: String,
    /// Contract parameters shared by every method.
    pub contract: ContractParams,
    /// Which pricer to run.
    #[serde(flatten)]
    pub method: PricingMethod,
}

/// The outcome of a pricing request.
///
/// Created fresh per request and returned by value; the engine keeps no
/// reference to it. `path_matrix` is populated only for the simulation
/// methods and serialises as a nested numeric array for visualisation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Echo of the requested symbol.
    pub symbol: String,
    /// Spot price the valuation was based on.
    pub spot_price: f64,
    /// Echo of the contract's option type.
    pub option_type: OptionType,
    /// The valuation.
    pub option_price: f64,
    /// Full trajectory matrix for the simulation methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_matrix: Option<PathMatrix>,
}

/// Pricing service over a spot-price feed.
///
/// # Examples
///
/// ```
/// use adapter_feeds::StaticFeed;
/// use pricer_core::types::{ContractParams, OptionType};
/// use pricer_pricing::engine::{PricingEngine, PricingMethod, PricingRequest};
///
/// let feed = StaticFeed::new().with_close("AAPL", 100.0);
/// let engine = PricingEngine::new(feed);
///
/// let request = PricingRequest {
///     symbol: "AAPL".to_string(),
///     contract: ContractParams::new(100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap(),
///     method: PricingMethod::Analytic,
/// };
///
/// let result = engine.price(&request).unwrap();
/// assert!((result.option_price - 10.45).abs() < 0.01);
/// ```
pub struct PricingEngine<F: SpotFeed> {
    feed: F,
}

impl<F: SpotFeed> PricingEngine<F> {
    /// Creates an engine over the given feed.
    pub fn new(feed: F) -> Self {
        Self { feed }
    }

    /// Prices a request end to end.
    ///
    /// The spot price is acquired exactly once, before any simulation. A
    /// feed failure surfaces as [`PricingError::DataUnavailable`] with no
    /// partial computation.
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidModelParameters`] for contract or
    ///   simulation-dimension violations
    /// - [`PricingError::DataUnavailable`] if the feed fails
    pub fn price(&self, request: &PricingRequest) -> Result<PricingResult, PricingError> {
        request.contract.validate()?;

        let spot = self.feed.latest_close(&request.symbol)?;
        info!(symbol = %request.symbol, spot, "spot price acquired");

        let mut rng = SimRng::from_entropy();
        self.price_with_spot(spot, request, &mut rng)
    }

    /// Prices a request against an already-acquired spot price.
    ///
    /// The noise source is injected, which makes the simulation methods
    /// deterministic under a seeded [`SimRng`].
    ///
    /// # Errors
    ///
    /// Same as [`PricingEngine::price`], minus the feed failure.
    pub fn price_with_spot(
        &self,
        spot: f64,
        request: &PricingRequest,
        source: &mut dyn NormalSource,
    ) -> Result<PricingResult, PricingError> {
        let contract = &request.contract;
        contract.validate()?;

        let (option_price, path_matrix) = match request.method {
            PricingMethod::Analytic => {
                let pricer = BlackScholes::new(spot, *contract)?;
                (pricer.value(), None)
            }
            PricingMethod::MonteCarlo { n_paths } => {
                let matrix = LognormalScheme.generate(spot, contract, n_paths, source)?;
                let price = self.aggregate(&matrix, contract);
                (price, Some(matrix))
            }
            PricingMethod::EulerMaruyama { n_paths, n_steps } => {
                let scheme = EulerMaruyamaScheme::new(n_steps);
                let matrix = scheme.generate(spot, contract, n_paths, source)?;

                let degenerate = matrix
                    .terminal_prices()
                    .iter()
                    .filter(|&&s| s <= 0.0)
                    .count();
                if degenerate > 0 {
                    // First-order discretisation bias; propagated, not masked
                    warn!(
                        degenerate,
                        n_paths, "Euler-Maruyama produced non-positive terminal prices"
                    );
                }

                let price = self.aggregate(&matrix, contract);
                (price, Some(matrix))
            }
        };

        debug!(method = ?request.method, option_price, "pricing complete");

        Ok(PricingResult {
            symbol: request.symbol.clone(),
            spot_price: spot,
            option_type: contract.option_type,
            option_price,
            path_matrix,
        })
    }

    fn aggregate(&self, matrix: &PathMatrix, contract: &ContractParams) -> f64 {
        discounted_mean_payoff(
            &matrix.terminal_prices(),
            contract.strike,
            contract.option_type,
            contract.rate,
            contract.maturity,
        )
    }
}
