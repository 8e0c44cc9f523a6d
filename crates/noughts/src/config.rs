//! Session configuration.
//!
//! Everything a game session needs to know up front (mode, names, timing)
//! lives here and is handed to [`crate::Session::new`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_rules::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who sits on the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two people share the keyboard.
    #[default]
    #[strum(to_string = "player-vs-player", serialize = "pvp")]
    PlayerVsPlayer,
    /// One person plays the computer.
    #[strum(to_string = "player-vs-computer", serialize = "pvc")]
    PlayerVsComputer,
}

/// Configuration for a game session.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SessionConfig {
    /// Player-vs-player or player-vs-computer.
    mode: GameMode,

    /// Name for X in player-vs-player games.
    player_one: String,

    /// Name for O in player-vs-player games.
    player_two: String,

    /// Name for the human in player-vs-computer games.
    user_name: String,

    /// Name for the computer in player-vs-computer games.
    computer_name: String,

    /// Side the computer plays in player-vs-computer games.
    computer_mark: Player,

    /// Pause before the computer's move, in milliseconds.
    move_delay_ms: u64,

    /// Seed for the computer's tie-breaking; entropy when absent.
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            player_one: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
            user_name: "You".to_string(),
            computer_name: "Computer".to_string(),
            computer_mark: Player::O,
            move_delay_ms: 800,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Pause before the computer's move.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
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
