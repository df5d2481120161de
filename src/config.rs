//! Application configuration loaded from TOML.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{EngineConfig, Player};
use tracing::{debug, info, instrument};

/// Menu defaults and logging settings.
///
/// ```toml
/// player_symbol = "O"
/// vs_ai = true
/// log_file = "tictactoe.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Symbol preselected on the menu.
    player_symbol: Player,

    /// Whether the AI opponent is preselected.
    vs_ai: bool,

    /// File receiving logs while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_symbol: Player::X,
            vs_ai: true,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(symbol = %config.player_symbol, vs_ai = config.vs_ai, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, symbol: Option<Player>, mode: Option<GameMode>) -> Self {
        if let Some(symbol) = symbol {
            self.player_symbol = symbol;
        }
        if let Some(mode) = mode {
            self.vs_ai = mode.is_vs_ai();
        }
        self
    }

    /// Preselected game mode.
    pub fn mode(&self) -> GameMode {
        GameMode::from_vs_ai(self.vs_ai)
    }

    /// Engine configuration for a round with the preselected options.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(self.player_symbol, self.vs_ai)
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
