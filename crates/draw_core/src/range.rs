//! # Range Store
//!
//! State for range mode: draws integers from `1..=N`.
//!
//! With no-repeat on, `pool` holds the values not yet drawn and
//! `pool ∪ history = {1..N}` with the two disjoint. With no-repeat off,
//! `pool` is empty and unused, and `history` may repeat values.
//! `N = 0` means unset: both sequences are empty and drawing is refused.

use crate::error::{DrawError, Result};
use tracing::{debug, info};

/// Largest accepted `N` while no-repeat is on.
///
/// The no-repeat pool is materialised, so the bound caps its allocation.
/// Without no-repeat, `N` may go up to `u32::MAX`.
pub const MAX_RANGE: u32 = 10_000_000;

/// Range-mode draw state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeStore {
    n: u32,
    no_repeat: bool,
    pool: Vec<u32>,
    history: Vec<u32>,
}

/// Read-only view of a [`RangeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSnapshot<'a> {
    /// Upper bound, 0 when unset
    pub n: u32,
    /// Whether drawn values leave the pool
    pub no_repeat: bool,
    /// Remaining values (only meaningful with no-repeat)
    pub pool: &'a [u32],
    /// Drawn values in draw order
    pub history: &'a [u32],
}

impl RangeSnapshot<'_> {
    /// Remaining count, or `None` when no-repeat is off.
    pub fn remaining(&self) -> Option<usize> {
        self.no_repeat.then_some(self.pool.len())
    }
}

impl Default for RangeStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RangeStore {
    /// Creates an unconfigured store with the given no-repeat policy.
    pub fn new(no_repeat: bool) -> Self {
        Self {
            n: 0,
            no_repeat,
            pool: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Sets the upper bound and resets.
    ///
    /// # Errors
    ///
    /// [`DrawError::Domain`] when `n <= 0`; the store is then cleared to the
    /// unset state. With no-repeat on, values above [`MAX_RANGE`] are also
    /// rejected, leaving the store as it was. With no-repeat off any `n` up
    /// to `u32::MAX` is accepted, since no pool is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draw_core::RangeStore;
    ///
    /// let mut range = RangeStore::new(true);
    /// range.set_n(3).unwrap();
    /// assert_eq!(range.pool(), [1, 2, 3]);
    ///
    /// assert!(range.set_n(0).is_err());
    /// assert!(!range.is_configured());
    /// ```
    pub fn set_n(&mut self, n: i64) -> Result<()> {
        if n <= 0 {
            self.n = 0;
            self.pool.clear();
            self.history.clear();
            return Err(DrawError::Domain {
                value: n,
                max: self.limit(),
            });
        }

        let max = self.limit();
        let n = u32::try_from(n)
            .ok()
            .filter(|&v| v <= max)
            .ok_or(DrawError::Domain { value: n, max })?;

        self.n = n;
        self.reset();
        info!(n, no_repeat = self.no_repeat, "Range configured");
        Ok(())
    }

    /// Flips the no-repeat policy and returns the new value.
    ///
    /// Turning it on rebuilds the pool and clears the history. Turning it
    /// off keeps the history and discards the pool.
    ///
    /// # Errors
    ///
    /// [`DrawError::Domain`] when turning it on would need a pool larger
    /// than [`MAX_RANGE`]; the store is left unchanged.
    pub fn toggle_no_repeat(&mut self) -> Result<bool> {
        if !self.no_repeat && self.n > MAX_RANGE {
            return Err(DrawError::Domain {
                value: i64::from(self.n),
                max: MAX_RANGE,
            });
        }

        self.no_repeat = !self.no_repeat;
        if self.no_repeat {
            self.reset();
        } else {
            self.pool = Vec::new();
        }
        debug!(no_repeat = self.no_repeat, "No-repeat toggled");
        Ok(self.no_repeat)
    }

    /// Clears the history and, with no-repeat on, refills the pool with
    /// `1..=N`.
    pub fn reset(&mut self) {
        self.history.clear();
        self.pool.clear();
        if self.no_repeat {
            self.pool.extend(1..=self.n);
        }
    }

    /// Upper bound, 0 when unset.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// True once a valid `N` has been set.
    pub fn is_configured(&self) -> bool {
        self.n > 0
    }

    /// Current no-repeat policy.
    pub fn no_repeat(&self) -> bool {
        self.no_repeat
    }

    /// Remaining values (empty when no-repeat is off).
    pub fn pool(&self) -> &[u32] {
        &self.pool
    }

    /// Drawn values in draw order.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    /// Drawn values in ascending order. Draw order is left untouched.
    pub fn sorted_history(&self) -> Vec<u32> {
        let mut sorted = self.history.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Returns a read-only view of the store.
    pub fn snapshot(&self) -> RangeSnapshot<'_> {
        RangeSnapshot {
            n: self.n,
            no_repeat: self.no_repeat,
            pool: &self.pool,
            history: &self.history,
        }
    }

    /// Largest `N` accepted under the current policy.
    fn limit(&self) -> u32 {
        if self.no_repeat {
            MAX_RANGE
        } else {
            u32::MAX
        }
    }

    pub(crate) fn take_at(&mut self, idx: usize) -> u32 {
        let value = self.pool.remove(idx);
        self.history.push(value);
        value
    }

    pub(crate) fn record(&mut self, value: u32) {
        self.history.push(value);
    }
}
