//! Criterion benchmarks for the variate generators.
//!
//! Measures single-draw cost per distribution and the sequential versus
//! chunked-parallel batch fill.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use variate_core::batch::{par_sample_n, sample_n, BatchConfig};
use variate_core::{Distribution, VariateRng};

fn params_for(distribution: Distribution) -> &'static [f64] {
    match distribution {
        Distribution::Bernoulli => &[0.5],
        Distribution::Binomial => &[20.0, 0.5],
        Distribution::Exponential => &[1.0],
        Distribution::Gamma => &[2.5, 1.0],
        Distribution::Geometric => &[0.3],
        Distribution::Normal => &[0.0, 1.0],
        Distribution::Poisson => &[4.0],
        Distribution::Triangular => &[0.0, 2.0, 1.0],
        Distribution::Weibull => &[1.0, 1.5],
    }
}

/// Benchmark one draw from each distribution.
fn bench_single_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_draw");

    for distribution in Distribution::ALL {
        let params = params_for(distribution);
        let mut rng = VariateRng::from_seed(42);
        group.bench_function(distribution.id(), |b| {
            b.iter(|| distribution.sample(black_box(params), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the shape-boost branch of the gamma sampler against the direct one.
fn bench_gamma_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma_shape");

    for shape in [0.3, 1.0, 5.0, 50.0] {
        let mut rng = VariateRng::from_seed(7);
        group.bench_with_input(BenchmarkId::from_parameter(shape), &shape, |b, &shape| {
            b.iter(|| {
                Distribution::Gamma
                    .sample(black_box(&[shape, 1.0]), &mut rng)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark sequential and chunked batch fills.
fn bench_batch_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_fill");
    group.sample_size(20);

    for size in [10_000, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |b, &size| {
            let mut rng = VariateRng::from_seed(1);
            b.iter(|| sample_n(Distribution::Normal, &[0.0, 1.0], size, &mut rng).unwrap());
        });

        let config = BatchConfig::new(4096, 0);
        group.bench_with_input(BenchmarkId::new("chunked", size), &size, |b, &size| {
            b.iter(|| par_sample_n(Distribution::Normal, &[0.0, 1.0], size, 1, &config).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_draw, bench_gamma_shapes, bench_batch_fill);
criterion_main!(benches);
