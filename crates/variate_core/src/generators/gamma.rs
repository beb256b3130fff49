//! Gamma(k, θ) sampling.
//!
//! ## Algorithm
//!
//! For shape `k ≥ 1` the Marsaglia–Tsang squeeze method is used:
//!
//! ```text
//! d = k − 1/3,  c = 1/√(9d)
//! repeat:
//!     x ~ N(0, 1),  t = 1 + c·x      (reject if t ≤ 0)
//!     v = t³,  u ~ U(0, 1)
//!     accept if u < 1 − 0.0331·x⁴
//!         or ln u < x²/2 + d·(1 − v + ln v)
//! return θ·d·v
//! ```
//!
//! For `k < 1` a Gamma(1 + k) variate is drawn with the loop above and
//! multiplied by `U^(1/k)` for a fresh uniform `U`. Since `1 + k ≥ 1` this
//! takes exactly one reduction step.
//!
//! ## Reference
//!
//! - Marsaglia, G. & Tsang, W. W. (2000). "A Simple Method for Generating
//!   Gamma Variables". ACM Transactions on Mathematical Software 26(3).

use crate::catalog::Distribution;
use crate::error::ValidationError;
use crate::rng::UniformSource;
use crate::validation::validate;

/// Squeeze constant of the fast acceptance test.
const SQUEEZE: f64 = 0.0331;

/// Gamma(k, θ) with shape `k` and scale `θ`; the result is positive.
///
/// Expected iterations of the rejection loop are below 1.1 for every
/// shape, but the loop has no cap. It only fails to terminate if the
/// normal source is faulty (for example, constant and always rejected).
///
/// For very small shapes (`k` around `0.01`) the `U^(1/k)` factor can
/// underflow, so a result may round to `0`.
///
/// # Examples
///
/// ```rust
/// use variate_core::generators::gamma;
/// use variate_core::VariateRng;
///
/// let mut rng = VariateRng::from_seed(17);
/// assert!(gamma(&[0.5, 2.0], &mut rng).unwrap() > 0.0);
/// assert!(gamma(&[9.0, 0.5], &mut rng).unwrap() > 0.0);
/// ```
pub fn gamma<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Gamma)?;
    let (shape, scale) = (params[0], params[1]);

    Ok(scale * standard_gamma(shape, rng))
}

/// Gamma(k, 1) for any `k > 0`.
fn standard_gamma<R: UniformSource + ?Sized>(shape: f64, rng: &mut R) -> f64 {
    if shape < 1.0 {
        let boosted = marsaglia_tsang(shape + 1.0, rng);
        let u = rng.next_uniform();
        return boosted * u.powf(1.0 / shape);
    }
    marsaglia_tsang(shape, rng)
}

/// Marsaglia–Tsang rejection loop; requires `shape ≥ 1`.
fn marsaglia_tsang<R: UniformSource + ?Sized>(shape: f64, rng: &mut R) -> f64 {
    let d = shape - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let x = rng.next_normal();
        let t = 1.0 + c * x;
        if t <= 0.0 {
            continue;
        }
        let v = t * t * t;
        let u = rng.next_uniform();

        let x2 = x * x;
        if u < 1.0 - SQUEEZE * x2 * x2 {
            return d * v;
        }
        if u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
            return d * v;
        }
    }
}
