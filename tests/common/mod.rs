//! Common test utilities for distplot integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Install a tracing subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeded normal sample
pub fn normal_sample(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Two well-separated normal clusters
pub fn bimodal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut values = normal_sample(n / 2, -5.0, 1.0, seed);
    values.extend(normal_sample(n - n / 2, 5.0, 1.0, seed + 1));
    values
}

/// `0.0, 1.0, ..., (n - 1) as f64`
pub fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
