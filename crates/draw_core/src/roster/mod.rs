//! # Roster Store
//!
//! State for roster mode: the canonical roster, the pool of names still
//! eligible, and the draw history.
//!
//! After every operation:
//!
//! - `all` has no duplicates and keeps insertion order
//! - `pool` and `history` are disjoint and together make up `all`
//! - `pool` keeps the relative insertion order of `all`

pub mod io;

use std::collections::HashSet;

/// Roster-mode draw state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStore {
    all: Vec<String>,
    pool: Vec<String>,
    history: Vec<String>,
}

/// Read-only view of a [`RosterStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSnapshot<'a> {
    /// Canonical roster in insertion order
    pub all: &'a [String],
    /// Names still eligible to be drawn
    pub pool: &'a [String],
    /// Names already drawn, in draw order
    pub history: &'a [String],
}

impl RosterSnapshot<'_> {
    /// Returns `(|all|, |pool|, |history|)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.all.len(), self.pool.len(), self.history.len())
    }
}

impl RosterStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds names to the roster and the pool.
    ///
    /// Each entry is trimmed of ASCII whitespace and skipped when blank.
    /// Duplicates are then removed from both sequences, keeping the first
    /// occurrence.
    ///
    /// Returns the number of non-blank entries accepted *before*
    /// deduplication. Net growth is visible through [`Self::snapshot`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draw_core::RosterStore;
    ///
    /// let mut roster = RosterStore::new();
    /// let added = roster.add_many(["  Alice ", "Alice", "Bob", "Alice"]);
    ///
    /// assert_eq!(added, 4);
    /// assert_eq!(roster.all(), ["Alice", "Bob"]);
    /// ```
    pub fn add_many<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for line in lines {
            if let Some(name) = io::normalize_str(line.as_ref()) {
                self.all.push(name.to_owned());
                self.pool.push(name.to_owned());
                added += 1;
            }
        }

        dedup_preserve_order(&mut self.all);
        dedup_preserve_order(&mut self.pool);
        // A name re-added after being drawn must not re-enter the pool.
        let drawn: HashSet<&str> = self.history.iter().map(String::as_str).collect();
        self.pool.retain(|name| !drawn.contains(name.as_str()));

        added
    }

    /// Puts every drawn name back and clears the history.
    pub fn reset(&mut self) {
        self.pool = self.all.clone();
        self.history.clear();
    }

    /// Returns read-only views of all three sequences.
    pub fn snapshot(&self) -> RosterSnapshot<'_> {
        RosterSnapshot {
            all: &self.all,
            pool: &self.pool,
            history: &self.history,
        }
    }

    /// Canonical roster.
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Names still eligible.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Drawn names in draw order.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// True when no names have been added.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Moves the pool entry at `idx` into the history.
    pub(crate) fn take_at(&mut self, idx: usize) -> String {
        let winner = self.pool.remove(idx);
        self.history.push(winner.clone());
        winner
    }
}

fn dedup_preserve_order(items: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(store: &RosterStore) {
        let (all, pool, history) = store.snapshot().counts();
        assert_eq!(all, pool + history);

        let unique: HashSet<&String> = store.all().iter().collect();
        assert_eq!(unique.len(), all, "all must be duplicate-free");

        for name in store.history() {
            assert!(!store.pool().contains(name), "{} in both pool and history", name);
            assert!(store.all().contains(name));
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RosterStore::new();
        assert!(store.is_empty());
        assert_eq!(store.snapshot().counts(), (0, 0, 0));
    }

    #[test]
    fn test_add_many_trims_and_dedups() {
        let mut store = RosterStore::new();
        let added = store.add_many(["  Alice ", "Alice", "Bob", "Alice"]);

        assert_eq!(added, 4);
        assert_eq!(store.all(), ["Alice", "Bob"]);
        assert_eq!(store.pool(), ["Alice", "Bob"]);
        assert_invariants(&store);
    }

    #[test]
    fn test_add_many_skips_blank_entries() {
        let mut store = RosterStore::new();
        let added = store.add_many(["", "   ", "\t\r\n", "Cid"]);

        assert_eq!(added, 1);
        assert_eq!(store.all(), ["Cid"]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let mut store = RosterStore::new();
        store.add_many(["ann", "Ann", "ANN"]);
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_add_many_twice_is_idempotent() {
        let mut store = RosterStore::new();
        let names = ["Ann", "Bob", "Ann", "Cid"];
        store.add_many(names);
        let once = store.all().to_vec();
        store.add_many(names);
        assert_eq!(store.all(), once.as_slice());
        assert_invariants(&store);
    }

    #[test]
    fn test_add_many_after_draw_keeps_history_out_of_pool() {
        let mut store = RosterStore::new();
        store.add_many(["Ann", "Bob"]);
        let drawn = store.take_at(0);
        assert_eq!(drawn, "Ann");

        store.add_many(["Ann", "Dee"]);

        assert_eq!(store.all(), ["Ann", "Bob", "Dee"]);
        assert_eq!(store.pool(), ["Bob", "Dee"]);
        assert_eq!(store.history(), ["Ann"]);
        assert_invariants(&store);
    }

    #[test]
    fn test_take_at_preserves_pool_order() {
        let mut store = RosterStore::new();
        store.add_many(["A", "B", "C", "D"]);
        store.take_at(1);
        assert_eq!(store.pool(), ["A", "C", "D"]);
        assert_eq!(store.history(), ["B"]);
        assert_invariants(&store);
    }

    #[test]
    fn test_reset_restores_pool() {
        let mut store = RosterStore::new();
        store.add_many(["Ann", "Bob", "Cid"]);
        store.take_at(2);
        store.take_at(0);

        store.reset();

        assert_eq!(store.pool(), ["Ann", "Bob", "Cid"]);
        assert!(store.history().is_empty());
        assert_invariants(&store);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut store = RosterStore::new();
        store.add_many(["Ann", "Bob"]);
        store.take_at(0);

        store.reset();
        let once = store.clone();
        store.reset();
        assert_eq!(store, once);
    }

    #[test]
    fn test_multibyte_names_survive() {
        let mut store = RosterStore::new();
        store.add_many([" 王小明 ", "José", "王小明"]);
        assert_eq!(store.all(), ["王小明", "José"]);
    }
}
