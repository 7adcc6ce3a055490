use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reedfrost_jitter::jitter_trajectories;
use reedfrost_jitter::trajectories::pivot::pivot_trajectories;
use reedfrost_jitter::trajectories::unpivot::{batch_to_records, unpivot_trajectories};

/// Cumulative runs that stall early, so most late coordinates are heavily shared.
fn crowded_batch(rng: &mut StdRng, n: usize, len: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| {
            let mut acc = 1.0;
            let stop = rng.random_range(1..=len);
            (0..len)
                .map(|t| {
                    if t > 0 && t < stop {
                        acc += rng.random_range(0..3) as f64;
                    }
                    acc
                })
                .collect()
        })
        .collect()
}

fn bench_jitter(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let batch = crowded_batch(&mut rng, 100, 50);

    c.bench_function("jitter_trajectories/100x50", |b| {
        b.iter(|| jitter_trajectories(black_box(&batch), black_box(0.25)).unwrap())
    });

    c.bench_function("pivot_trajectories/100x50", |b| {
        b.iter(|| pivot_trajectories(black_box(&batch)))
    });

    c.bench_function("unpivot_trajectories/100x50", |b| {
        b.iter_batched(
            || batch_to_records(&batch),
            |records| unpivot_trajectories(records).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_jitter);
criterion_main!(benches);
