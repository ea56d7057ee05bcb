//! Path generation schemes.
//!
//! Both schemes simulate geometric Brownian motion under the risk-neutral
//! measure, `dS = r·S·dt + σ·S·dW`, but discretise it differently:
//!
//! - [`LognormalScheme`] uses the exact log-space solution
//!   `S(t+dt) = S(t)·exp((r − σ²/2)dt + σ√dt·Z)` on a trading-day grid.
//!   Prices stay strictly positive at every step.
//! - [`EulerMaruyamaScheme`] uses the first-order additive update
//!   `S(t+dt) = S(t) + r·S(t)·dt + σ·S(t)·√dt·Z` on a caller-specified
//!   grid. Large `dt`/σ can drive prices non-positive; that discretisation
//!   bias is part of the method and is propagated as-is.
//!
//! Noise for the whole matrix is drawn up front from the injected
//! [`NormalSource`], then the per-path update loop runs rayon-parallel
//! over rows. Paths never read each other's state, so parallelism cannot
//! change any trajectory, and a seeded source reproduces matrices exactly.

use rayon::prelude::*;

use pricer_core::types::ContractParams;

use crate::rng::NormalSource;

use super::error::ConfigError;
use super::matrix::PathMatrix;
use super::{MAX_PATHS, MAX_STEPS};

/// Trading days per year, the step-count convention of the lognormal
/// scheme.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Strategy interface for trajectory generation.
///
/// Implementations differ only in time-stepping semantics; the contract is
/// shared: a matrix with one row per path, column 0 pinned to `spot`, and
/// one fresh standard-normal draw per (path, step) taken from `source`.
pub trait PathScheme {
    /// Generates `n_paths` trajectories of the underlying.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `n_paths` or the scheme's step count is
    /// outside its valid range. No draws are consumed on failure.
    fn generate(
        &self,
        spot: f64,
        contract: &ContractParams,
        n_paths: usize,
        source: &mut dyn NormalSource,
    ) -> Result<PathMatrix, ConfigError>;
}

fn validate_dimensions(n_paths: usize, n_steps: usize) -> Result<(), ConfigError> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(ConfigError::InvalidPathCount(n_paths));
    }
    if n_steps == 0 || n_steps > MAX_STEPS {
        return Err(ConfigError::InvalidStepCount(n_steps));
    }
    Ok(())
}

/// Multiplicative (lognormal) stepping on a trading-day grid.
///
/// The step count is derived from the contract, not supplied by the
/// caller: `round(maturity × 252)` columns, with column 0 holding the spot
/// and the remaining columns evolved by the exact log-space update. Every
/// entry is a product of positive factors, so the whole matrix is strictly
/// positive.
#[derive(Clone, Copy, Debug, Default)]
pub struct LognormalScheme;

impl LognormalScheme {
    /// Step count for a maturity under the 252-trading-day convention.
    #[inline]
    pub fn trading_day_steps(maturity: f64) -> usize {
        (maturity * TRADING_DAYS_PER_YEAR).round() as usize
    }
}

impl PathScheme for LognormalScheme {
    fn generate(
        &self,
        spot: f64,
        contract: &ContractParams,
        n_paths: usize,
        source: &mut dyn NormalSource,
    ) -> Result<PathMatrix, ConfigError> {
        let n_cols = Self::trading_day_steps(contract.maturity);
        validate_dimensions(n_paths, n_cols)?;

        let dt = contract.maturity / n_cols as f64;
        let drift_dt = (contract.rate - 0.5 * contract.volatility * contract.volatility) * dt;
        let vol_sqrt_dt = contract.volatility * dt.sqrt();

        let mut matrix = PathMatrix::zeroed(n_paths, n_cols);
        let updates = n_cols - 1;
        if updates == 0 {
            // Sub-day maturity rounds to a single column: every path is
            // just the pinned spot.
            matrix.data_mut().fill(spot);
            return Ok(matrix);
        }

        let mut randoms = vec![0.0; n_paths * updates];
        source.fill_standard_normal(&mut randoms);

        matrix
            .data_mut()
            .par_chunks_mut(n_cols)
            .zip(randoms.par_chunks(updates))
            .for_each(|(path, noise)| {
                path[0] = spot;
                for (step, &z) in noise.iter().enumerate() {
                    let increment = drift_dt + vol_sqrt_dt * z;
                    path[step + 1] = path[step] * increment.exp();
                }
            });

        Ok(matrix)
    }
}

/// Additive Euler-Maruyama stepping on a caller-specified grid.
///
/// Produces `n_steps + 1` columns: the pinned spot plus one column per
/// subdivision. No positivity guarantee; see the module docs.
#[derive(Clone, Copy, Debug)]
pub struct EulerMaruyamaScheme {
    /// Number of subdivisions of the maturity interval.
    pub n_steps: usize,
}

impl EulerMaruyamaScheme {
    /// Creates a scheme with the given subdivision count.
    ///
    /// The count is validated at generation time so that a deserialised
    /// request carrying a bad value fails the same way.
    #[inline]
    pub fn new(n_steps: usize) -> Self {
        Self { n_steps }
    }
}

impl PathScheme for EulerMaruyamaScheme {
    fn generate(
        &self,
        spot: f64,
        contract: &ContractParams,
        n_paths: usize,
        source: &mut dyn NormalSource,
    ) -> Result<PathMatrix, ConfigError> {
        validate_dimensions(n_paths, self.n_steps)?;

        let n_steps = self.n_steps;
        let n_cols = n_steps + 1;
        let dt = contract.maturity / n_steps as f64;
        let sqrt_dt = dt.sqrt();
        let rate = contract.rate;
        let volatility = contract.volatility;

        let mut randoms = vec![0.0; n_paths * n_steps];
        source.fill_standard_normal(&mut randoms);

        let mut matrix = PathMatrix::zeroed(n_paths, n_cols);
        matrix
            .data_mut()
            .par_chunks_mut(n_cols)
            .zip(randoms.par_chunks(n_steps))
            .for_each(|(path, noise)| {
                path[0] = spot;
                for (step, &z) in noise.iter().enumerate() {
                    let prev = path[step];
                    path[step + 1] = prev + rate * prev * dt + volatility * prev * sqrt_dt * z;
                }
            });

        Ok(matrix)
    }
}
