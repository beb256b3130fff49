//! Error types for parameter validation and name-based dispatch.
//!
//! - [`ValidationError`]: wrong parameter count or out-of-domain values
//! - [`SampleError`]: unknown distribution identifier, or a validation error
//!
//! Both carry structured context; the `Display` output is built from those
//! fields and is for presentation only.

use std::fmt;

use thiserror::Error;

use crate::catalog::{supported_ids, Distribution};

/// Rejection of a parameter vector by the validator.
///
/// Produced only by [`crate::validation::validate`]. Errors are a pure
/// function of the input, so retrying the same call is pointless.
///
/// # Examples
///
/// ```rust
/// use variate_core::catalog::Distribution;
/// use variate_core::error::ValidationError;
/// use variate_core::validation::validate;
///
/// let err = validate(&[0.5], Distribution::Binomial).unwrap_err();
/// assert_eq!(
///     err,
///     ValidationError::Arity { distribution: Distribution::Binomial, expected: 2, got: 1 }
/// );
/// assert!(err.to_string().starts_with("Too few arguments"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// Wrong number of parameters.
    Arity {
        /// Distribution being validated.
        distribution: Distribution,
        /// Required parameter count.
        expected: usize,
        /// Supplied parameter count.
        got: usize,
    },
    /// Correct count, but at least one value lies outside the domain.
    Domain {
        /// Distribution being validated.
        distribution: Distribution,
        /// The rejected parameter vector.
        supplied: Vec<f64>,
        /// The bound descriptions the values were checked against.
        expected_bounds: &'static [&'static str],
    },
}

impl ValidationError {
    /// Returns the distribution that rejected the parameters.
    pub fn distribution(&self) -> Distribution {
        match self {
            Self::Arity { distribution, .. } | Self::Domain { distribution, .. } => *distribution,
        }
    }

    /// Returns `true` for [`ValidationError::Arity`].
    pub fn is_arity(&self) -> bool {
        matches!(self, Self::Arity { .. })
    }

    /// Returns `true` for [`ValidationError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity {
                distribution,
                expected,
                got,
            } => {
                let quantity = if got < expected { "Too few" } else { "Too many" };
                write!(
                    f,
                    "{} arguments were supplied for the {} distribution. Expected: {} Got: {}",
                    quantity, distribution, expected, got
                )
            }
            Self::Domain {
                distribution,
                supplied,
                expected_bounds,
            } => {
                let got = distribution
                    .spec()
                    .symbols
                    .iter()
                    .zip(supplied.iter())
                    .map(|(symbol, value)| format!("{} = {:.2}", symbol, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Invalid parameters supplied for the {} distribution. Expected: {} Got: {}",
                    distribution.name(),
                    expected_bounds.join(", "),
                    got
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure of a name-based generation request.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SampleError {
    /// The identifier names no catalogue entry.
    #[error("Unknown distribution '{0}'. Supported: {supported}", supported = supported_ids())]
    UnknownDistribution(String),

    /// The distribution exists but rejected the parameters.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
