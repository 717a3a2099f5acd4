//! Deterministic per-worker RNG.
//!
//! # Determinism strategy
//!
//! Each randomized worker gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (worker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive worker IDs uniformly across the seed space.
//! Workers never share RNG state, so the sequence of durations one worker
//! draws does not depend on how busy its neighbours were.  Growing the pool
//! leaves the seeds of existing workers untouched.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WorkerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-worker deterministic RNG.
pub struct WorkerRng(SmallRng);

impl WorkerRng {
    /// Seed deterministically from the run's global seed and a worker ID.
    pub fn new(global_seed: u64, worker: WorkerId) -> Self {
        let seed = global_seed ^ (worker.0 as u64).wrapping_mul(MIXING_CONSTANT);
        WorkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` / `rand_distr`
    /// distribution types (`rng.inner().sample(...)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl std::fmt::Debug for WorkerRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WorkerRng { .. }")
    }
}
