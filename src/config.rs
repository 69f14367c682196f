//! Game configuration.

use crate::engine::types::BoardSize;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session, loadable from a TOML file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Cosmetic pause before the computer's move, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the computer's random fallback; fresh entropy when
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
}

fn default_board_size() -> usize {
    3
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validated_size()?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Validates the configured size into board geometry, failing fast
    /// before any board is built.
    #[instrument(skip(self))]
    pub fn validated_size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::try_from(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
