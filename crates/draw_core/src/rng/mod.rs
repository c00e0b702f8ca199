//! # Random Number Generation
//!
//! Draws never reach for ambient process randomness. Every engine entry point
//! takes a `&mut impl UniformSource`, which keeps the sampler swappable:
//!
//! - [`DrawRng`]: seeded wrapper around `rand::StdRng`, time-seeded in
//!   production and fixed-seeded in tests
//! - [`ScriptedRng`]: replays a predetermined list of outcomes
//!
//! Neither source is cryptographically secure, and neither needs to be.
//!
//! ## Usage Example
//!
//! ```rust
//! use draw_core::rng::{DrawRng, UniformSource};
//!
//! let mut a = DrawRng::from_seed(2024);
//! let mut b = DrawRng::from_seed(2024);
//!
//! // Same seed, same sequence
//! assert_eq!(a.uniform(1, 50), b.uniform(1, 50));
//! ```

mod prng;
mod scripted;

pub use prng::DrawRng;
pub use scripted::ScriptedRng;

/// Source of uniformly distributed integers.
///
/// Implementations must return each value of the inclusive range
/// `[lo, hi]` with equal probability.
pub trait UniformSource {
    /// Returns an integer uniformly drawn from `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    fn uniform(&mut self, lo: usize, hi: usize) -> usize;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        (**self).uniform(lo, hi)
    }
}
