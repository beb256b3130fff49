//! Parameter validation against the catalogue.
//!
//! Arity is always checked before the domain predicate, so a predicate
//! never sees a vector of the wrong length.

use crate::catalog::Distribution;
use crate::error::ValidationError;

/// Checks `params` against the catalogue entry for `distribution`.
///
/// # Errors
///
/// - [`ValidationError::Arity`] if `params.len()` differs from the
///   distribution's parameter count, whatever the values are
/// - [`ValidationError::Domain`] if the count matches but a value is out of
///   range or not finite
///
/// # Examples
///
/// ```rust
/// use variate_core::catalog::Distribution;
/// use variate_core::validation::validate;
///
/// assert!(validate(&[0.0, 2.0, 1.0], Distribution::Triangular).is_ok());
/// assert!(validate(&[1.5], Distribution::Bernoulli).unwrap_err().is_domain());
/// ```
pub fn validate(params: &[f64], distribution: Distribution) -> Result<(), ValidationError> {
    let spec = distribution.spec();

    if params.len() != spec.num_params {
        return Err(ValidationError::Arity {
            distribution,
            expected: spec.num_params,
            got: params.len(),
        });
    }

    if !spec.is_valid(params) {
        return Err(ValidationError::Domain {
            distribution,
            supplied: params.to_vec(),
            expected_bounds: spec.bounds,
        });
    }

    Ok(())
}
