//! Discrete distributions: Bernoulli, Binomial, Geometric and Poisson.
//!
//! All results are integer-valued `f64`s.

use crate::catalog::Distribution;
use crate::error::ValidationError;
use crate::rng::UniformSource;
use crate::validation::validate;

/// One Bernoulli trial; `u == 1 - p` counts as a failure.
#[inline]
fn trial<R: UniformSource + ?Sized>(p: f64, rng: &mut R) -> f64 {
    if rng.next_uniform() > 1.0 - p {
        1.0
    } else {
        0.0
    }
}

/// Bernoulli(p): returns `1` with probability `p`, else `0`.
///
/// Consumes one uniform draw.
pub fn bernoulli<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Bernoulli)?;
    Ok(trial(params[0], rng))
}

/// Binomial(n, p): the number of successes in `n` Bernoulli(p) trials.
///
/// **Parameter order is `[n, p]`**, the reverse of the classical
/// `B(p, n)` notation. `n` must be a non-negative whole number.
///
/// Consumes exactly `n` uniform draws, so cost is linear in `n`. Whole
/// values of `n` beyond `u64::MAX` saturate to `u64::MAX` trials, which is
/// never reached in practice.
///
/// # Examples
///
/// ```rust
/// use variate_core::generators::binomial;
/// use variate_core::VariateRng;
///
/// let mut rng = VariateRng::from_seed(5);
/// let successes = binomial(&[10.0, 0.5], &mut rng).unwrap();
/// assert!((0.0..=10.0).contains(&successes));
/// ```
pub fn binomial<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Binomial)?;
    let (n, p) = (params[0] as u64, params[1]);

    let mut successes = 0.0;
    for _ in 0..n {
        successes += trial(p, rng);
    }
    Ok(successes)
}

/// Geometric(p): the number of failures before the first success.
///
/// Inverse transform `floor(ln u / ln(1 - p))` on one uniform draw; the
/// support is `{0, 1, 2, ...}` and `p = 1` always yields `0`.
///
/// For subnormal `p` (around `1e-320`) the ratio overflows; the result then
/// saturates at `f64::MAX`, which is still a whole number.
pub fn geometric<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Geometric)?;
    let p = params[0];

    let u = rng.next_uniform();
    // ln(1 - p) is -inf at p = 1, giving ln(u) / -inf = +0.
    Ok((u.ln() / (-p).ln_1p()).floor().min(f64::MAX))
}

/// Poisson(λ) by the multiplicative method.
///
/// Multiplies uniforms until the running product falls below `e^{-λ}` and
/// returns how many factors were needed beyond the first. The product is
/// kept as a sum of logarithms, which is the same acceptance test without
/// underflow for large `λ`.
///
/// Draws `X + 1` uniforms for a result `X`, so the expected cost grows
/// linearly with `λ`. There is no iteration cap.
pub fn poisson<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Poisson)?;
    let threshold = -params[0];

    let mut count = 0.0;
    let mut log_product = rng.next_uniform().ln();
    while log_product >= threshold {
        count += 1.0;
        log_product += rng.next_uniform().ln();
    }
    Ok(count)
}
