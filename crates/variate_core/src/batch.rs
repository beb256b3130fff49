//! Filling buffers with independent variates.
//!
//! Two entry points:
//!
//! - [`sample_n`]: sequential, drawing from a caller-supplied source
//! - [`par_sample_n`]: chunked fill from a single seed; with the `parallel`
//!   feature, large requests are spread over the Rayon thread pool
//!
//! Both validate once before any draw, so an invalid request consumes no
//! randomness and allocates nothing.
//!
//! # Determinism
//!
//! [`par_sample_n`] splits positions into fixed-size chunks and gives chunk
//! `j` its own [`VariateRng`] seeded from `(seed, j)`. Position `i` always
//! receives the same value for a given seed, chunk size and request,
//! whether the chunks run in parallel or not.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::catalog::Distribution;
use crate::error::ValidationError;
use crate::rng::{UniformSource, VariateRng};
use crate::validation::validate;

/// Default number of variates per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default minimum request size before parallel execution is used.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Chunking and parallelism settings for [`par_sample_n`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Variates per chunk; each chunk has its own generator.
    pub chunk_size: usize,
    /// Minimum request size before chunks run in parallel.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BatchConfig {
    /// Creates a configuration; a zero chunk size is raised to one.
    pub fn new(chunk_size: usize, parallel_threshold: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            parallel_threshold,
        }
    }

    /// Returns whether a request of `n` variates runs in parallel.
    #[inline]
    pub fn should_parallelize(&self, n: usize) -> bool {
        cfg!(feature = "parallel") && n >= self.parallel_threshold
    }
}

/// Draws `n` variates sequentially from `rng`.
///
/// Element `i` is the result of the `i`-th generator call.
///
/// # Errors
///
/// Returns the [`ValidationError`] for `params` before drawing anything.
pub fn sample_n<R: UniformSource + ?Sized>(
    distribution: Distribution,
    params: &[f64],
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>, ValidationError> {
    validate(params, distribution)?;

    let mut samples = Vec::with_capacity(n);
    for _ in 0..n {
        samples.push(distribution.sample(params, rng)?);
    }
    Ok(samples)
}

/// Draws `n` variates in independently seeded chunks.
///
/// # Errors
///
/// Returns the [`ValidationError`] for `params` before drawing anything.
///
/// # Examples
///
/// ```rust
/// use variate_core::batch::{par_sample_n, BatchConfig};
/// use variate_core::Distribution;
///
/// let config = BatchConfig::new(256, 0);
/// let a = par_sample_n(Distribution::Exponential, &[1.5], 1_000, 42, &config).unwrap();
/// let b = par_sample_n(Distribution::Exponential, &[1.5], 1_000, 42, &config).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn par_sample_n(
    distribution: Distribution,
    params: &[f64],
    n: usize,
    seed: u64,
    config: &BatchConfig,
) -> Result<Vec<f64>, ValidationError> {
    validate(params, distribution)?;

    let chunk_size = config.chunk_size.max(1);
    let parallel = config.should_parallelize(n);
    debug!(
        distribution = distribution.id(),
        n,
        seed,
        chunks = n.div_ceil(chunk_size),
        parallel,
        "generating variates"
    );

    let fill = |(index, chunk): (usize, &mut [f64])| -> Result<(), ValidationError> {
        let mut rng = VariateRng::from_seed(chunk_seed(seed, index as u64));
        for slot in chunk.iter_mut() {
            *slot = distribution.sample(params, &mut rng)?;
        }
        Ok(())
    };

    let mut samples = vec![0.0; n];

    #[cfg(feature = "parallel")]
    if parallel {
        samples
            .par_chunks_mut(chunk_size)
            .enumerate()
            .try_for_each(fill)?;
        return Ok(samples);
    }

    samples
        .chunks_mut(chunk_size)
        .enumerate()
        .try_for_each(fill)?;
    Ok(samples)
}

/// Derives the seed of chunk `index` from the request seed.
///
/// SplitMix64 finaliser over `seed + (index + 1)·γ`, so neighbouring chunks
/// get unrelated streams.
pub fn chunk_seed(seed: u64, index: u64) -> u64 {
    let mut z = seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
