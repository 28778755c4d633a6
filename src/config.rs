//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use notie_tictactoe::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who is playing.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    Pvp,
    /// A human (X) plays the automated opponent (O).
    Pve,
}

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    #[serde(default)]
    mode: GameMode,

    /// Automated player strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// Pause before the automated player moves, in milliseconds.
    #[serde(default = "default_automated_delay_ms")]
    automated_delay_ms: u64,

    /// Fixed RNG seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_automated_delay_ms() -> u64 {
    300
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            automated_delay_ms: default_automated_delay_ms(),
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

        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the automated-move delay.
    pub fn with_automated_delay_ms(mut self, delay_ms: u64) -> Self {
        self.automated_delay_ms = delay_ms;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The automated-move delay as a [`Duration`].
    pub fn automated_delay(&self) -> Duration {
        Duration::from_millis(self.automated_delay_ms)
    }

    pub(crate) fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(config.automated_delay(), Duration::from_millis(300));
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("mode = \"pve\"\ndifficulty = \"hard\"").unwrap();
        assert_eq!(*config.mode(), GameMode::Pve);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.automated_delay_ms(), 300);
    }

    #[test]
    fn test_mode_parses() {
        assert_eq!("PVE".parse::<GameMode>(), Ok(GameMode::Pve));
        assert!("coop".parse::<GameMode>().is_err());
    }
}
