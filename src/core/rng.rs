//! Deterministic random number generation.
//!
//! The opponent's move selection is the only source of randomness in the
//! engine, and it takes the generator as an explicit parameter rather than
//! reaching for a process-global one. Seeding a session fixes the entire
//! match transcript, which is what the replay tests rely on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG handed to `OpponentStrategy`.
///
/// Uses ChaCha8 for speed; the same seed always produces the same
/// sequence of picks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniform-random element from a slice.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
