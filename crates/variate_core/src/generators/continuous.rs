//! Continuous distributions sampled in closed form: Exponential, Normal,
//! Triangular and Weibull.

use std::f64::consts::TAU;

use crate::catalog::Distribution;
use crate::error::ValidationError;
use crate::rng::UniformSource;
use crate::validation::validate;

/// Exponential(λ) by inverse transform: `-ln(1 - u) / λ`.
///
/// Consumes one uniform draw.
///
/// # Examples
///
/// ```rust
/// use variate_core::generators::exponential;
/// use variate_core::VariateRng;
///
/// let mut rng = VariateRng::from_seed(3);
/// assert!(exponential(&[2.5], &mut rng).unwrap() >= 0.0);
/// ```
pub fn exponential<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Exponential)?;
    let lambda = params[0];

    let u = rng.next_uniform();
    Ok(-(-u).ln_1p() / lambda)
}

/// Normal(μ, σ) by the Box–Muller transform.
///
/// Consumes exactly two uniform draws `u, v` and returns
/// `μ + σ·√(−2 ln u)·cos(2πv)`. The sine partner is not returned.
pub fn normal<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Normal)?;
    let (mu, sigma) = (params[0], params[1]);

    let u = rng.next_uniform();
    let v = rng.next_uniform();
    let radius = (-2.0 * u.ln()).sqrt();
    Ok(mu + sigma * radius * (TAU * v).cos())
}

/// Triangular(a, b, c) with minimum `a`, maximum `b` and mode `c`.
///
/// Piecewise inverse CDF on one uniform draw `u`, with `h = (c − a)/(b − a)`:
///
/// ```text
/// u <  h:  a + √(u (b − a)(c − a))
/// u >= h:  b − √((1 − u)(b − a)(b − c))
/// ```
///
/// The formula is evaluated on half-widths, so ranges whose width exceeds
/// `f64::MAX` (e.g. `[-1e308, 1e308]`) sample correctly. A degenerate range
/// `a == b` still consumes its draw and returns `a`.
pub fn triangular<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Triangular)?;
    let (a, b, c) = (params[0], params[1], params[2]);

    let u = rng.next_uniform();
    let half = b / 2.0 - a / 2.0;
    if half == 0.0 {
        return Ok(a);
    }
    let lower = c / 2.0 - a / 2.0;
    let upper = b / 2.0 - c / 2.0;

    // x = 2·(a/2 + √(u·half·lower)) or 2·(b/2 − √((1 − u)·half·upper))
    let x = if u < lower / half {
        2.0 * (a / 2.0 + u.sqrt() * half.sqrt() * lower.sqrt())
    } else {
        2.0 * (b / 2.0 - (1.0 - u).sqrt() * half.sqrt() * upper.sqrt())
    };
    // Rounding may land one ulp outside the range.
    Ok(x.clamp(a, b))
}

/// Weibull(λ, k) by inverse transform: `λ·(−ln u)^(1/k)`.
///
/// Consumes one uniform draw.
pub fn weibull<R: UniformSource + ?Sized>(
    params: &[f64],
    rng: &mut R,
) -> Result<f64, ValidationError> {
    validate(params, Distribution::Weibull)?;
    let (lambda, k) = (params[0], params[1]);

    let u = rng.next_uniform();
    Ok(lambda * (-u.ln()).powf(1.0 / k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSource;
    use crate::rng::VariateRng;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn moments(samples: &[f64]) -> (f64, f64) {
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, variance.sqrt())
    }

    #[test]
    fn test_exponential_fixed_draw() {
        let mut source = ScriptedSource::constant(0.5);
        let x = exponential(&[1.0], &mut source).unwrap();
        assert_relative_eq!(x, std::f64::consts::LN_2, epsilon = 1e-12);
        assert_relative_eq!(x, 0.6931, epsilon = 1e-4);
    }

    #[test]
    fn test_exponential_rate_scales() {
        let mut source = ScriptedSource::constant(0.5);
        let x = exponential(&[2.0], &mut source).unwrap();
        assert_relative_eq!(x, std::f64::consts::LN_2 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_mean() {
        let mut rng = VariateRng::from_seed(42);
        let samples: Vec<f64> = (0..20_000)
            .map(|_| exponential(&[2.0], &mut rng).unwrap())
            .collect();

        assert!(samples.iter().all(|&x| x >= 0.0));
        let (mean, _) = moments(&samples);
        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.02);
    }

    #[test]
    fn test_normal_uses_two_uniforms() {
        let mut source = ScriptedSource::new(&[0.5, 0.25], &[0.0]);
        let x = normal(&[3.0, 2.0], &mut source).unwrap();

        // cos(π/2) = 0, so only μ remains.
        assert_abs_diff_eq!(x, 3.0, epsilon = 1e-12);
        assert_eq!(source.uniform_calls, 2);
        assert_eq!(source.normal_calls, 0);
    }

    #[test]
    fn test_normal_fixed_draws() {
        let u = (-0.5f64).exp();
        let mut source = ScriptedSource::new(&[u, 0.0], &[0.0]);
        // √(−2 ln u) = 1 and cos(0) = 1.
        let x = normal(&[1.0, 2.0], &mut source).unwrap();
        assert_relative_eq!(x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_moments() {
        let mut rng = VariateRng::from_seed(42);
        let samples: Vec<f64> = (0..10_000)
            .map(|_| normal(&[5.0, 2.0], &mut rng).unwrap())
            .collect();

        let (mean, std_dev) = moments(&samples);
        assert_abs_diff_eq!(mean, 5.0, epsilon = 0.1);
        assert_abs_diff_eq!(std_dev, 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_triangular_minimum_at_zero_draw() {
        let mut source = ScriptedSource::constant(0.0);
        assert_eq!(triangular(&[0.0, 2.0, 1.0], &mut source), Ok(0.0));
    }

    #[test]
    fn test_triangular_branches() {
        // Lower branch: u = 0.125 < h = 0.5 → 0 + √(0.125·2·1) = 0.5
        let mut source = ScriptedSource::constant(0.125);
        assert_relative_eq!(
            triangular(&[0.0, 2.0, 1.0], &mut source).unwrap(),
            0.5,
            epsilon = 1e-12
        );

        // Upper branch: u = 0.875 → 2 − √(0.125·2·1) = 1.5
        let mut source = ScriptedSource::constant(0.875);
        assert_relative_eq!(
            triangular(&[0.0, 2.0, 1.0], &mut source).unwrap(),
            1.5,
            epsilon = 1e-12
        );

        // Mode at the minimum: h = 0, always upper branch.
        let mut source = ScriptedSource::constant(0.75);
        assert_relative_eq!(
            triangular(&[0.0, 1.0, 0.0], &mut source).unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_triangular_degenerate() {
        let mut source = ScriptedSource::constant(0.4);
        assert_eq!(triangular(&[3.0, 3.0, 3.0], &mut source), Ok(3.0));
        assert_eq!(source.uniform_calls, 1);
    }

    #[test]
    fn test_triangular_mean() {
        let mut rng = VariateRng::from_seed(42);
        let samples: Vec<f64> = (0..10_000)
            .map(|_| triangular(&[1.0, 4.0, 2.5], &mut rng).unwrap())
            .collect();

        assert!(samples.iter().all(|&x| (1.0..=4.0).contains(&x)));
        let (mean, _) = moments(&samples);
        assert_abs_diff_eq!(mean, 2.5, epsilon = 0.05);
    }

    #[test]
    fn test_triangular_range_wider_than_f64_max() {
        let (a, b) = (-1e308, 1e308);
        let mut rng = VariateRng::from_seed(42);
        let scaled: Vec<f64> = (0..10_000)
            .map(|_| triangular(&[a, b, 0.0], &mut rng).unwrap() / b)
            .collect();

        assert!(scaled.iter().all(|&x| (-1.0..=1.0).contains(&x)));
        assert!(scaled.iter().filter(|&&x| x == -1.0).count() < 10);
        let (mean, std_dev) = moments(&scaled);
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.02);
        // Symmetric triangular on [-1, 1]: σ = 1/√6
        assert_abs_diff_eq!(std_dev, 1.0 / 6f64.sqrt(), epsilon = 0.02);
    }

    #[test]
    fn test_triangular_extreme_mode_at_maximum() {
        let mut source = ScriptedSource::constant(0.25);
        // h = 1, lower branch: 2·(−1e308/2 + 0.5·1e308) = 0
        let x = triangular(&[-1e308, 1e308, 1e308], &mut source).unwrap();
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e295);
    }

    #[test]
    fn test_weibull_fixed_draw() {
        let mut source = ScriptedSource::constant((-1.0f64).exp());
        let x = weibull(&[1.0, 1.0], &mut source).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_weibull_scale() {
        let mut source = ScriptedSource::constant((-1.0f64).exp());
        let x = weibull(&[3.0, 0.5], &mut source).unwrap();
        assert_relative_eq!(x, 3.0, epsilon = 1e-12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_exponential_non_negative(seed in any::<u64>(), lambda in 1e-4f64..1e3) {
            let mut rng = VariateRng::from_seed(seed);
            prop_assert!(exponential(&[lambda], &mut rng).unwrap() >= 0.0);
        }

        #[test]
        fn prop_weibull_non_negative(seed in any::<u64>(), lambda in 1e-3f64..1e3, k in 0.1f64..10.0) {
            let mut rng = VariateRng::from_seed(seed);
            prop_assert!(weibull(&[lambda, k], &mut rng).unwrap() >= 0.0);
        }

        #[test]
        fn prop_triangular_in_range(
            seed in any::<u64>(),
            a in -100.0f64..100.0,
            span in 0.0f64..50.0,
            mode in 0.0f64..=1.0,
        ) {
            let b = a + span;
            let c = a + mode * span;
            prop_assume!(a <= c && c <= b);

            let mut rng = VariateRng::from_seed(seed);
            let x = triangular(&[a, b, c], &mut rng).unwrap();
            prop_assert!(x >= a && x <= b, "{} outside [{}, {}]", x, a, b);
        }
    }
}
