//! Randomness boundary
//!
//! The simulation only ever asks for a uniform integer in a half-open range.
//! Production uses a seeded PCG stream; tests script the draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform random integers
pub trait RandomSource {
    /// Uniform integer in `[min, max)`. Returns `min` when the range is empty.
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.random_range(min..max)
    }
}

/// Build the session RNG, from a fixed seed or the wall clock
pub fn session_rng(seed: Option<u64>) -> (Pcg32, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (Pcg32::seed_from_u64(seed), seed)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
