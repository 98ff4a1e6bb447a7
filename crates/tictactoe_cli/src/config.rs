//! Front-end configuration loaded from TOML.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Settings for a terminal session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Mode the first game starts in.
    #[serde(default)]
    mode: GameMode,

    /// Mark played by the computer in versus-computer mode.
    #[serde(default = "default_computer_mark")]
    computer_mark: Player,

    /// Cosmetic pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Fixed seed for the computer's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_computer_mark() -> Player {
    Player::O
}

fn default_think_ms() -> u64 {
    200
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            computer_mark: default_computer_mark(),
            think_ms: default_think_ms(),
            seed: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces fields for which a command-line value was given.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        computer_mark: Option<Player>,
        think_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(mark) = computer_mark {
            self.computer_mark = mark;
        }
        if let Some(ms) = think_ms {
            self.think_ms = ms;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The thinking pause as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
