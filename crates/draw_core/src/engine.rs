//! Single-draw operations over the roster and range stores.
//!
//! Every draw samples an index into the explicit remaining pool, never a
//! raw value followed by a retry-until-unseen loop, so each remaining
//! candidate is equally likely. Failures are checked before any mutation:
//! a draw either updates both pool and history or neither.

use crate::error::{DrawError, Result};
use crate::range::RangeStore;
use crate::rng::UniformSource;
use crate::roster::RosterStore;
use tracing::debug;

/// Draws one name from the roster pool.
///
/// The winner is removed from the pool (remaining order preserved) and
/// appended to the history.
///
/// # Errors
///
/// [`DrawError::EmptyPool`] when no names remain.
///
/// # Examples
///
/// ```rust
/// use draw_core::{draw_from_roster, RosterStore, ScriptedRng};
///
/// let mut roster = RosterStore::new();
/// roster.add_many(["Ann", "Bob", "Cid"]);
///
/// let mut rng = ScriptedRng::new([1]);
/// assert_eq!(draw_from_roster(&mut roster, &mut rng).unwrap(), "Bob");
/// assert_eq!(roster.pool(), ["Ann", "Cid"]);
/// ```
pub fn draw_from_roster<R: UniformSource + ?Sized>(
    store: &mut RosterStore,
    rng: &mut R,
) -> Result<String> {
    let len = store.pool().len();
    if len == 0 {
        return Err(DrawError::EmptyPool);
    }

    let idx = rng.uniform(0, len - 1);
    let winner = store.take_at(idx);
    debug!(winner = %winner, remaining = len - 1, "Roster draw");
    Ok(winner)
}

/// Draws one integer from `1..=N`.
///
/// With no-repeat on, an index into the remaining pool is sampled and the
/// value leaves the pool. With it off, a value is sampled directly from
/// `[1, N]` and repeats are allowed. Either way the result is appended to
/// the history.
///
/// # Errors
///
/// - [`DrawError::NotConfigured`] when `N` is unset
/// - [`DrawError::EmptyPool`] when no-repeat is on and every value is drawn
pub fn draw_from_range<R: UniformSource + ?Sized>(
    store: &mut RangeStore,
    rng: &mut R,
) -> Result<u32> {
    if !store.is_configured() {
        return Err(DrawError::NotConfigured);
    }

    if store.no_repeat() {
        let len = store.pool().len();
        if len == 0 {
            return Err(DrawError::EmptyPool);
        }
        let idx = rng.uniform(0, len - 1);
        let value = store.take_at(idx);
        debug!(value, remaining = len - 1, "Range draw (no repeat)");
        Ok(value)
    } else {
        // The result is at most N, which fits in u32.
        let value = rng.uniform(1, store.n() as usize) as u32;
        store.record(value);
        debug!(value, "Range draw (repeats allowed)");
        Ok(value)
    }
}
