#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reedfrost_jitter::constants::Batch;

/// Batch of cumulative, outbreak-like runs: small integer increments that die out.
///
/// Values are drawn from a narrow range so that many runs coincide, which is the
/// situation the jitter engine exists for.
pub fn random_outbreak_batch(seed: u64, n: usize, max_len: usize) -> Batch {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            let mut acc = 1.0;
            (0..len)
                .map(|t| {
                    if t > 0 && rng.random_bool(0.6) {
                        acc += rng.random_range(0..3) as f64;
                    }
                    acc
                })
                .collect()
        })
        .collect()
}

/// Batch with pairwise distinct values, so no two runs share a coordinate.
pub fn distinct_batch(seed: u64, n: usize, max_len: usize) -> Batch {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let len = rng.random_range(1..=max_len);
            (0..len).map(|t| (i * max_len + t) as f64 + 0.5).collect()
        })
        .collect()
}

pub fn shape(batch: &Batch) -> Vec<usize> {
    batch.iter().map(Vec::len).collect()
}
