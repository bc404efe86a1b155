//! Seeded RNG for the simulated facility strategy.
//!
//! # Determinism strategy
//!
//! Each facility query gets its own `SmallRng` seeded by:
//!
//!   seed = run_seed XOR (location_key * MIXING_CONSTANT)
//!
//! where `location_key` is a hash of the query centre's bit patterns.  The
//! mixing constant is the 64-bit fractional part of the golden ratio, which
//! spreads nearby keys across the seed space.  This means:
//!
//! - The same seed and location always yield the same facility draw, no
//!   matter in which order (or on which thread) cells are scored.
//! - Changing the seed reshuffles every cell at once.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Coordinate;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic RNG used to draw simulated facilities.
pub struct FacilityRng(SmallRng);

impl FacilityRng {
    /// Seed deterministically from the run seed and a query location.
    pub fn for_location(seed: u64, at: Coordinate) -> Self {
        let key = at.lon.to_bits().rotate_left(32) ^ at.lat.to_bits();
        let mixed = seed ^ key.wrapping_mul(MIXING_CONSTANT);
        FacilityRng(SmallRng::seed_from_u64(mixed))
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
