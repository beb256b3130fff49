//! # Variate Core
//!
//! Pseudo-random variate generation for a fixed catalogue of probability
//! distributions, with strict parameter validation against each
//! distribution's mathematical domain.
//!
//! ## Supported Distributions
//!
//! | Identifier    | Parameters  | Algorithm                          |
//! |---------------|-------------|------------------------------------|
//! | `bernoulli`   | `p`         | Inverse transform                  |
//! | `binomial`    | `n, p`      | Sum of `n` Bernoulli trials        |
//! | `exponential` | `λ`         | Inverse transform                  |
//! | `gamma`       | `k, θ`      | Marsaglia–Tsang squeeze (+ boost)  |
//! | `geometric`   | `p`         | Inverse transform                  |
//! | `normal`      | `μ, σ`      | Box–Muller (cosine branch)         |
//! | `poisson`     | `λ`         | Multiplicative acceptance loop     |
//! | `triangular`  | `a, b, c`   | Piecewise inverse transform        |
//! | `weibull`     | `λ, k`      | Inverse transform                  |
//!
//! Note that the binomial parameter order is `(n, p)`, not the classical
//! `(p, n)`.
//!
//! ## Module Structure
//!
//! - [`rng`]: [`UniformSource`] capability and the seeded [`VariateRng`]
//! - [`catalog`]: the closed [`Distribution`] enum and its [`DistributionSpec`] entries
//! - [`validation`]: arity and domain checks
//! - [`error`]: [`ValidationError`] and [`SampleError`]
//! - [`generators`]: one sampling function per distribution
//! - [`registry`]: name-based dispatch for front ends
//! - [`batch`]: filling buffers of variates, optionally in parallel
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::registry;
//! use variate_core::rng::VariateRng;
//!
//! let mut rng = VariateRng::from_seed(42);
//!
//! let generate = registry::get("Normal").expect("normal is registered");
//! let x = generate(&[0.0, 1.0], &mut rng).expect("valid parameters");
//! assert!(x.is_finite());
//!
//! // Wrong arity is reported before any draw is consumed.
//! assert!(generate(&[0.0], &mut rng).is_err());
//! ```
//!
//! ## Uniform Source Precondition
//!
//! Generators take logarithms of uniform draws. A [`UniformSource`] must
//! return values strictly inside `(0, 1)`; [`VariateRng`] guarantees this.

pub mod batch;
pub mod catalog;
pub mod error;
pub mod generators;
pub mod registry;
pub mod rng;
#[doc(hidden)]
pub mod testing;
pub mod validation;

pub use catalog::{Distribution, DistributionSpec};
pub use error::{SampleError, ValidationError};
pub use rng::{UniformSource, VariateRng};
