//! Name-based generator lookup.
//!
//! A thin string-keyed adapter over [`Distribution`] for front ends that
//! pick a distribution from user input. Inside the library, prefer
//! [`Distribution::sample`].

use crate::catalog::Distribution;
use crate::error::{SampleError, ValidationError};
use crate::generators;
use crate::rng::UniformSource;

/// A generator as a plain function pointer.
pub type GeneratorFn = fn(&[f64], &mut dyn UniformSource) -> Result<f64, ValidationError>;

/// Returns the generator registered for `distribution`.
pub fn generator_for(distribution: Distribution) -> GeneratorFn {
    match distribution {
        Distribution::Bernoulli => |params, rng| generators::bernoulli(params, rng),
        Distribution::Binomial => |params, rng| generators::binomial(params, rng),
        Distribution::Exponential => |params, rng| generators::exponential(params, rng),
        Distribution::Gamma => |params, rng| generators::gamma(params, rng),
        Distribution::Geometric => |params, rng| generators::geometric(params, rng),
        Distribution::Normal => |params, rng| generators::normal(params, rng),
        Distribution::Poisson => |params, rng| generators::poisson(params, rng),
        Distribution::Triangular => |params, rng| generators::triangular(params, rng),
        Distribution::Weibull => |params, rng| generators::weibull(params, rng),
    }
}

/// Looks up a generator by identifier, ignoring ASCII case.
///
/// Returns `None` for identifiers not in the catalogue.
pub fn get(id: &str) -> Option<GeneratorFn> {
    Distribution::from_id(id).map(generator_for)
}

/// Resolves `id` and draws one variate.
///
/// # Errors
///
/// - [`SampleError::UnknownDistribution`] if `id` is not in the catalogue
/// - [`SampleError::Validation`] if the parameters are rejected
///
/// # Examples
///
/// ```rust
/// use variate_core::registry::generate;
/// use variate_core::{SampleError, VariateRng};
///
/// let mut rng = VariateRng::from_seed(9);
/// assert!(generate("poisson", &[3.0], &mut rng).is_ok());
/// assert!(matches!(
///     generate("cauchy", &[0.0, 1.0], &mut rng),
///     Err(SampleError::UnknownDistribution(_))
/// ));
/// ```
pub fn generate(
    id: &str,
    params: &[f64],
    rng: &mut dyn UniformSource,
) -> Result<f64, SampleError> {
    let generator = get(id).ok_or_else(|| SampleError::UnknownDistribution(id.to_string()))?;
    Ok(generator(params, rng)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::VariateRng;

    #[test]
    fn test_every_catalogue_entry_registered() {
        for spec in crate::catalog::entries() {
            assert!(get(spec.id).is_some(), "{} missing", spec.id);
            assert!(get(&spec.id.to_uppercase()).is_some());
        }
    }

    #[test]
    fn test_unknown_identifier() {
        assert!(get("uniform").is_none());

        let mut rng = VariateRng::from_seed(0);
        let err = generate("uniform", &[0.0, 1.0], &mut rng).unwrap_err();
        assert_eq!(err, SampleError::UnknownDistribution("uniform".to_string()));
    }

    #[test]
    fn test_registry_matches_direct_dispatch() {
        for distribution in Distribution::ALL {
            let params: &[f64] = match distribution.num_params() {
                1 => &[0.4],
                2 => &[2.0, 0.5],
                _ => &[0.0, 1.0, 0.5],
            };
            let mut via_registry = VariateRng::from_seed(31);
            let mut direct = VariateRng::from_seed(31);

            let generator = generator_for(distribution);
            for _ in 0..50 {
                assert_eq!(
                    generator(params, &mut via_registry),
                    distribution.sample(params, &mut direct)
                );
            }
        }
    }

    #[test]
    fn test_validation_error_propagates() {
        let mut rng = VariateRng::from_seed(0);
        let err = generate("Bernoulli", &[1.5], &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SampleError::Validation(ValidationError::Domain { .. })
        ));
    }
}
