//! Standard normal distribution functions.
//!
//! Provides `norm_cdf`, the standard normal cumulative distribution
//! function, generic over `T: Float` so it works with `f64` and `f32`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) with a
/// maximum error of 1.5e-7 for all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    // For negative x, use erfc(-x) = 2 - erfc(x)
    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    let two = T::from(2.0).unwrap();
    if x < zero {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via
/// Φ(x) = (1/2) · erfc(-x / √2).
///
/// # Accuracy
///
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use pricer_models::analytical::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    let arg = -x / sqrt_2;

    half * erfc_approx(arg)
}
