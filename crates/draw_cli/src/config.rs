//! Draw system configuration.
//!
//! Settings come from a TOML file. The implicit `draw.toml` may be absent,
//! in which case defaults apply; a file named on the command line must
//! exist. A file that exists but does not parse or validate is an error.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "draw.toml";

/// Pre-draw ticker settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Show the ticker before each draw
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of ticker frames
    #[serde(default = "default_frames")]
    pub frames: usize,

    /// Base delay between frames in milliseconds
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frames: default_frames(),
            frame_delay_ms: default_frame_delay_ms(),
        }
    }
}

/// Draw configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DrawConfig {
    /// Fixed RNG seed; time-seeded when absent
    pub seed: Option<u64>,

    /// Initial no-repeat policy for range mode
    #[serde(default = "default_true")]
    pub no_repeat: bool,

    /// Coloured, screen-clearing output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Ticker settings
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_true() -> bool {
    true
}

fn default_frames() -> usize {
    26
}

fn default_frame_delay_ms() -> u64 {
    45
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            no_repeat: true,
            color: true,
            log_level: default_log_level(),
            animation: AnimationConfig::default(),
        }
    }
}

impl DrawConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate `path`; a missing file is an error
    pub fn load_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate `path`, or return defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_and_validate(path)
    }

    /// Resolve the configuration for a command line.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read when present and defaults are used otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_and_validate(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH)),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.animation.enabled && self.animation.frames == 0 {
            errors.push("animation.frames must be greater than 0 when enabled".to_string());
        }

        if self.animation.frames > 500 {
            errors.push(format!(
                "animation.frames {} exceeds maximum allowed (500)",
                self.animation.frames
            ));
        }

        if self.animation.frame_delay_ms > 1_000 {
            errors.push(format!(
                "animation.frame_delay_ms {} exceeds maximum allowed (1000)",
                self.animation.frame_delay_ms
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
