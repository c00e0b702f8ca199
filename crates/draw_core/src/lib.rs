//! # Draw Core
//!
//! The draw-state engine behind the interactive draw system. It owns the two
//! pools a draw can come from and the rules that keep them consistent:
//!
//! - **Roster mode**: names from a user-supplied roster ([`RosterStore`])
//! - **Range mode**: integers from `1..=N` ([`RangeStore`])
//!
//! Randomness is injected into every draw through [`UniformSource`], so a
//! seeded [`DrawRng`] (or a [`ScriptedRng`]) makes whole sessions reproducible.
//!
//! ## Usage Example
//!
//! ```rust
//! use draw_core::{draw_from_roster, DrawRng, RosterStore};
//!
//! let mut roster = RosterStore::new();
//! roster.add_many(["Ann", "Bob", "Cid"]);
//!
//! let mut rng = DrawRng::from_seed(7);
//! let winner = draw_from_roster(&mut roster, &mut rng).unwrap();
//!
//! assert!(roster.history().contains(&winner));
//! assert_eq!(roster.pool().len(), 2);
//! ```
//!
//! Terminal rendering lives in the `draw_cli` crate; nothing here touches
//! stdin or stdout.

pub mod engine;
pub mod error;
pub mod range;
pub mod rng;
pub mod roster;

pub use engine::{draw_from_range, draw_from_roster};
pub use error::{DrawError, ErrorKind, Result};
pub use range::{RangeSnapshot, RangeStore, MAX_RANGE};
pub use rng::{DrawRng, ScriptedRng, UniformSource};
pub use roster::{RosterSnapshot, RosterStore};
