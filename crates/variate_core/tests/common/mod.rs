//! Shared helpers for integration tests.

#![allow(dead_code)]

pub use variate_core::testing::ScriptedSource;

/// A valid parameter vector for every distribution.
pub fn valid_params(id: &str) -> &'static [f64] {
    match id {
        "bernoulli" => &[0.5],
        "binomial" => &[10.0, 0.3],
        "exponential" => &[1.5],
        "gamma" => &[2.0, 1.0],
        "geometric" => &[0.4],
        "normal" => &[0.0, 1.0],
        "poisson" => &[3.0],
        "triangular" => &[0.0, 2.0, 1.0],
        "weibull" => &[1.0, 1.5],
        other => panic!("no parameters for {}", other),
    }
}
