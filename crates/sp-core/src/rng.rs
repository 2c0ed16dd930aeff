//! The run's single seeded random generator.
//!
//! Generation is a one-shot, single-threaded pass, so one `SmallRng` seeded
//! from the scenario's master seed serves the whole run.  Every sampling
//! site draws from it in a fixed order, which makes two runs with the same
//! scenario byte-identical.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded generator threaded through every stage of the pipeline.
pub struct GenRng(SmallRng);

impl GenRng {
    /// Seed deterministically from the scenario's master seed.
    pub fn new(seed: u64) -> Self {
        GenRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`WeightedIndex::sample(rng.inner())`, etc.)
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

    /// Choose a uniform random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
