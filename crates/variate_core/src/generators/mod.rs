//! # Variate Generators
//!
//! One sampling function per distribution. Every generator has the shape
//!
//! ```text
//! fn(params: &[f64], rng: &mut R) -> Result<f64, ValidationError>
//! ```
//!
//! and validates `params` before touching `rng`: a rejected request
//! consumes no draws. On success the generator runs its algorithm to
//! completion synchronously and keeps no state between calls.
//!
//! ## Module Structure
//!
//! - [`discrete`]: Bernoulli, Binomial, Geometric, Poisson
//! - [`continuous`]: Exponential, Normal, Triangular, Weibull
//! - [`gamma`]: Gamma (Marsaglia–Tsang with the shape boost for `k < 1`)
//!
//! ## Termination
//!
//! Poisson and Gamma loop until acceptance. Both terminate with
//! probability one under a well-behaved [`UniformSource`], but neither has
//! an iteration cap. Callers needing a latency bound must impose it
//! externally.

pub mod continuous;
pub mod discrete;
pub mod gamma;

pub use continuous::{exponential, normal, triangular, weibull};
pub use discrete::{bernoulli, binomial, geometric, poisson};
pub use gamma::gamma;

use crate::catalog::Distribution;
use crate::error::ValidationError;
use crate::rng::UniformSource;

impl Distribution {
    /// Draws one variate from this distribution.
    ///
    /// Dispatches to the generator in [`crate::generators`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::{Distribution, VariateRng};
    ///
    /// let mut rng = VariateRng::from_seed(1);
    /// let x = Distribution::Triangular.sample(&[0.0, 2.0, 1.0], &mut rng).unwrap();
    /// assert!((0.0..=2.0).contains(&x));
    /// ```
    pub fn sample<R: UniformSource + ?Sized>(
        self,
        params: &[f64],
        rng: &mut R,
    ) -> Result<f64, ValidationError> {
        match self {
            Distribution::Bernoulli => bernoulli(params, rng),
            Distribution::Binomial => binomial(params, rng),
            Distribution::Exponential => exponential(params, rng),
            Distribution::Gamma => gamma(params, rng),
            Distribution::Geometric => geometric(params, rng),
            Distribution::Normal => normal(params, rng),
            Distribution::Poisson => poisson(params, rng),
            Distribution::Triangular => triangular(params, rng),
            Distribution::Weibull => weibull(params, rng),
        }
    }
}
