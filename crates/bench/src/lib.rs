//! Deterministic sort inputs and shared criterion settings.

use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 80;
const SMALL_RUNTIME_MEASURE_MS: u64 = 120;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 10;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 80;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 300;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 80;
const LARGE_RUNTIME_MEASURE_MS: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_KEYS: u64 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Descending,
    FewUnique,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
    Distribution::FewUnique,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
            Self::FewUnique => "few_unique",
        }
    }

    fn tag(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::NearlySorted1pctSwaps => 12,
            Self::Descending => 13,
            Self::FewUnique => 14,
        }
    }
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    let (samples, warm_up_ms, measure_ms, mode) = if size <= 16_384 {
        (
            SMALL_RUNTIME_SAMPLE_SIZE,
            SMALL_RUNTIME_WARM_UP_MS,
            SMALL_RUNTIME_MEASURE_MS,
            SamplingMode::Auto,
        )
    } else if size <= 65_536 {
        (
            MEDIUM_RUNTIME_SAMPLE_SIZE,
            MEDIUM_RUNTIME_WARM_UP_MS,
            MEDIUM_RUNTIME_MEASURE_MS,
            SamplingMode::Flat,
        )
    } else {
        (
            LARGE_RUNTIME_SAMPLE_SIZE,
            LARGE_RUNTIME_WARM_UP_MS,
            LARGE_RUNTIME_MEASURE_MS,
            SamplingMode::Flat,
        )
    };

    group.sample_size(samples);
    group.warm_up_time(Duration::from_millis(warm_up_ms));
    group.measurement_time(Duration::from_millis(measure_ms));
    group.sampling_mode(mode);
}

pub fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);

    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<u64>()).collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..size as u64).collect();
            if size > 1 {
                let swaps = (size / 100).max(1);
                for _ in 0..swaps {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::Descending => (0..size as u64).rev().collect(),
        Distribution::FewUnique => (0..size)
            .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS) * 17)
            .collect(),
    }
}

#[inline]
pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (dist.tag() << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
