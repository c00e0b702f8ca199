//! Replay source returning predetermined outcomes.

use super::UniformSource;
use std::collections::VecDeque;

/// Uniform source that replays a fixed script.
///
/// Each call to [`UniformSource::uniform`] pops the next outcome. Useful
/// for pinning the exact result of a draw sequence.
///
/// # Panics
///
/// `uniform` panics when the script is exhausted or when the next outcome
/// lies outside the requested range, since either means the caller asked
/// for something the script did not anticipate.
///
/// # Examples
///
/// ```rust
/// use draw_core::rng::{ScriptedRng, UniformSource};
///
/// let mut rng = ScriptedRng::new([1, 0]);
/// assert_eq!(rng.uniform(0, 2), 1);
/// assert_eq!(rng.uniform(0, 1), 0);
/// assert!(rng.is_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    outcomes: VecDeque<usize>,
}

impl ScriptedRng {
    /// Creates a source that replays `outcomes` in order.
    pub fn new(outcomes: impl IntoIterator<Item = usize>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
        }
    }

    /// Number of outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }

    /// True once every scripted outcome has been used.
    pub fn is_exhausted(&self) -> bool {
        self.outcomes.is_empty()
    }
}

impl UniformSource for ScriptedRng {
    fn uniform(&mut self, lo: usize, hi: usize) -> usize {
        assert!(lo <= hi, "uniform({lo}, {hi}) called with an empty range");
        let next = self
            .outcomes
            .pop_front()
            .unwrap_or_else(|| panic!("scripted outcomes exhausted at uniform({lo}, {hi})"));
        assert!(
            (lo..=hi).contains(&next),
            "scripted outcome {next} outside [{lo}, {hi}]"
        );
        next
    }
}
