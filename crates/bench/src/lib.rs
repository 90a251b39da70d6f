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

/// One request against a range add / range max structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeOp {
    Update {
        range: RangeInclusive<i64>,
        delta: i64,
    },
    Query {
        range: RangeInclusive<i64>,
    },
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform non-empty sub-range of `[lo, hi]`, at most `max_len` indices wide.
pub fn random_subrange<R: Rng + ?Sized>(
    rng: &mut R,
    lo: i64,
    hi: i64,
    max_len: u64,
) -> RangeInclusive<i64> {
    debug_assert!(lo <= hi && max_len > 0);
    let first = rng.random_range(lo..=hi);
    let room = hi.abs_diff(first).min(max_len - 1);
    let last = first + rng.random_range(0..=room) as i64;
    first..=last
}

/// `count` operations over `[lo, hi]`, updates drawn with probability `update_ratio`.
pub fn generate_ops<R: Rng + ?Sized>(
    rng: &mut R,
    lo: i64,
    hi: i64,
    count: usize,
    update_ratio: f64,
    max_len: u64,
    delta_range: RangeInclusive<i64>,
) -> Vec<RangeOp> {
    (0..count)
        .map(|_| {
            let range = random_subrange(rng, lo, hi, max_len);
            if rng.random_bool(update_ratio) {
                RangeOp::Update {
                    range,
                    delta: rng.random_range(delta_range.clone()),
                }
            } else {
                RangeOp::Query { range }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subranges_stay_inside_bounds() {
        let mut rng = default_rng();
        for _ in 0..1_000 {
            let range = random_subrange(&mut rng, -50, 50, 8);
            assert!(!range.is_empty());
            assert!(*range.start() >= -50 && *range.end() <= 50);
            assert!(range.end() - range.start() < 8);
        }
    }

    #[test]
    fn ops_follow_ratio_extremes() {
        let mut rng = default_rng();
        let ops = generate_ops(&mut rng, 0, 99, 200, 1.0, 100, -5..=5);
        assert!(ops.iter().all(|op| matches!(op, RangeOp::Update { .. })));
        let ops = generate_ops(&mut rng, 0, 99, 200, 0.0, 100, -5..=5);
        assert!(ops.iter().all(|op| matches!(op, RangeOp::Query { .. })));
    }
}
