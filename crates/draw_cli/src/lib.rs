//! # Draw CLI
//!
//! Interactive terminal front end for the draw engine in `draw_core`.
//!
//! - [`config`]: TOML settings (seed, initial no-repeat, colour, ticker)
//! - [`presenter`]: cosmetic rendering over any `Write` sink
//! - [`session`]: menu state machine owning both draw stores

pub mod config;
pub mod error;
pub mod presenter;
pub mod session;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{AnimationConfig, ConfigError, DrawConfig};
    pub use crate::error::{CliError, Result};
    pub use crate::presenter::Presenter;
    pub use crate::session::{Console, Mode};
}
