//! Deterministic RNG wrapper for the mock classifier and demo fixtures.
//!
//! # Determinism strategy
//!
//! Classification of a given sign class must be stable within a session —
//! re-scanning the same sign twice should report the same confidence, the
//! way a frozen model with fixed weights would.  Each class therefore gets
//! its own independent `SmallRng` seeded by:
//!
//!   seed = session_seed XOR (class_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive class indices uniformly across the seed space.
//! Two sessions with the same seed replay identically; changing the seed
//! re-rolls every class at once.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ClassId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Session-level deterministic RNG.
///
/// Used only in single-threaded contexts — the drive loop and classifier
/// both run on one logical timeline, so no synchronisation is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// RNG for a single sign class, derived from the session seed.
    ///
    /// Independent of call order: `for_class(s, c)` always yields the same
    /// stream, no matter which classes were sampled before it.
    pub fn for_class(session_seed: u64, class: ClassId) -> Self {
        let seed = session_seed ^ (class.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
