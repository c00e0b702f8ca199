//! Draw System CLI
//!
//! Interactive random draws from a roster of names or from `1..N`.
//!
//! # Usage
//!
//! - `draw` - start the menu with `draw.toml` settings if present
//! - `draw --config class.toml` - use settings from a file that must exist
//! - `draw --seed 42 --no-animation` - reproducible session without the ticker
//!
//! Logs go to stderr; set `RUST_LOG` to override the configured level.

use clap::Parser;
use draw_cli::prelude::*;
use draw_core::DrawRng;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Text-mode draw system
#[derive(Parser)]
#[command(name = "draw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (default: draw.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed (overrides the configuration)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pre-draw ticker
    #[arg(long)]
    no_animation: bool,

    /// Plain output without colours or screen clearing
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    run(Cli::parse())?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = DrawConfig::resolve(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.no_animation {
        config.animation.enabled = false;
    }
    if cli.no_color {
        config.color = false;
    }

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let rng = match config.seed {
        Some(seed) => DrawRng::from_seed(seed),
        None => DrawRng::from_time(),
    };
    info!(seed = rng.seed(), "RNG seeded");

    let stdout = io::stdout();
    let styled = config.color && stdout.is_terminal();
    let presenter = Presenter::new(stdout.lock(), styled, config.animation.clone());

    let mut console = Console::new(io::stdin().lock(), presenter, rng, config.no_repeat);
    console.run()?;

    info!("Draw system exiting");
    Ok(())
}
