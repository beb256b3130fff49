//! Deterministic sources for tests.

use crate::rng::UniformSource;

/// Replays fixed uniform and normal draws cyclically and counts calls.
///
/// # Panics
///
/// Drawing from an empty script panics.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    uniforms: Vec<f64>,
    normals: Vec<f64>,
    /// Uniform draws taken so far.
    pub uniform_calls: usize,
    /// Normal draws taken so far.
    pub normal_calls: usize,
}

impl ScriptedSource {
    pub fn new(uniforms: &[f64], normals: &[f64]) -> Self {
        Self {
            uniforms: uniforms.to_vec(),
            normals: normals.to_vec(),
            uniform_calls: 0,
            normal_calls: 0,
        }
    }

    /// Every uniform draw is `u` and every normal draw is `0`.
    pub fn constant(u: f64) -> Self {
        Self::new(&[u], &[0.0])
    }

    /// Total draws of either kind.
    pub fn draws(&self) -> usize {
        self.uniform_calls + self.normal_calls
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.uniforms[self.uniform_calls % self.uniforms.len()];
        self.uniform_calls += 1;
        value
    }

    fn next_normal(&mut self) -> f64 {
        let value = self.normals[self.normal_calls % self.normals.len()];
        self.normal_calls += 1;
        value
    }
}
