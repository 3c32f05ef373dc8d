use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_runtime_config(
        group,
        SMALL_RUNTIME_SAMPLE_SIZE,
        SMALL_RUNTIME_WARM_UP_MS,
        SMALL_RUNTIME_MEASURE_MS,
    );
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_runtime_config(
        group,
        MEDIUM_RUNTIME_SAMPLE_SIZE,
        MEDIUM_RUNTIME_WARM_UP_MS,
        MEDIUM_RUNTIME_MEASURE_MS,
    );
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_runtime_config(
        group,
        LARGE_RUNTIME_SAMPLE_SIZE,
        LARGE_RUNTIME_WARM_UP_MS,
        LARGE_RUNTIME_MEASURE_MS,
    );
}

fn apply_runtime_config<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    sample_size: usize,
    warm_up_ms: u64,
    measure_ms: u64,
) {
    group.sample_size(sample_size);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// `count` inclusive `(left, right)` pairs with `left <= right < n`.
pub fn random_inclusive_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    count: usize,
) -> Vec<(usize, usize)> {
    debug_assert!(n > 0);
    let mut ranges = Vec::with_capacity(count);
    for _ in 0..count {
        let l = rng.random_range(0..n);
        let r = rng.random_range(l..n);
        ranges.push((l, r));
    }
    ranges
}
