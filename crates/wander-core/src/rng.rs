//! Deterministic RNG wrapper for tie-breaking.
//!
//! The round loop is strictly sequential, so one RNG per graph is enough.
//! The seed is supplied by the caller at construction; the determinism
//! contract is: identical construction sequence + identical seed ⇒
//! identical walk.  A global uncontrolled generator is deliberately not
//! reachable from the engine.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a graph; the engine's only randomness source.
#[derive(Debug)]
pub struct WanderRng(SmallRng);

impl WanderRng {
    pub fn new(seed: u64) -> Self {
        WanderRng(SmallRng::seed_from_u64(seed))
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

    /// Choose a uniformly random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
