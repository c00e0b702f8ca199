//! Seeded pseudo-random generator for draws.

use super::UniformSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Draw random number generator.
///
/// Holds the seed it was created from so a session can be logged and
/// replayed exactly.
///
/// # Examples
///
/// ```rust
/// use draw_core::rng::{DrawRng, UniformSource};
///
/// let mut rng = DrawRng::from_seed(42);
/// let value = rng.uniform(1, 6);
/// assert!((1..=6).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct DrawRng {
    inner: StdRng,
    seed: u64,
}

impl DrawRng {
    /// Creates a generator from a fixed seed.
    ///
    /// The same seed always produces the same sequence of outcomes.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the wall clock.
    ///
    /// Nanoseconds since the Unix epoch are folded to 64 bits. A clock set
    /// before the epoch yields seed `0`.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        Self::from_seed(fold_seed(nanos))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for DrawRng {
    #[inline]
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi, "uniform({lo}, {hi}) called with an empty range");
        self.inner.gen_range(lo..=hi)
    }
}

fn fold_seed(nanos: u128) -> u64 {
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
