//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::Player as Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for the human's marks.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Whether the human makes the first move.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Clear the terminal before drawing the board each turn.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_human_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

fn default_human_first() -> bool {
    true
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            human_first: default_human_first(),
            clear_screen: default_clear_screen(),
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
        config.validate()?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, computer_first: bool, no_clear: bool) -> Self {
        if computer_first {
            self.human_first = false;
        }
        if no_clear {
            self.clear_screen = false;
        }
        self
    }

    /// Checks that both symbols are printable and tell the players apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_symbol.is_whitespace() || self.computer_symbol.is_whitespace() {
            return Err(ConfigError::new(
                "Player symbols must not be whitespace".to_string(),
            ));
        }
        if self.human_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Both players use the symbol {:?}",
                self.human_symbol
            )));
        }
        Ok(())
    }

    /// Symbol drawn for `mark`.
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Human => self.human_symbol,
            Mark::Computer => self.computer_symbol,
        }
    }

    /// The side that moves first.
    pub fn first_to_move(&self) -> Mark {
        if self.human_first {
            Mark::Human
        } else {
            Mark::Computer
        }
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
    #[instrument(skip(message))]
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
        assert_eq!(config.symbol(Mark::Human), 'X');
        assert_eq!(config.symbol(Mark::Computer), 'O');
        assert_eq!(config.first_to_move(), Mark::Human);
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("human_first = false").unwrap();
        assert_eq!(config.first_to_move(), Mark::Computer);
        assert_eq!(*config.human_symbol(), 'X');
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(true, true);
        assert!(!*config.human_first());
        assert!(!*config.clear_screen());

        let untouched = GameConfig::default().with_overrides(false, false);
        assert_eq!(untouched, GameConfig::default());
    }

    #[test]
    fn test_same_symbols_rejected() {
        let config: GameConfig =
            toml::from_str("human_symbol = \"O\"\ncomputer_symbol = \"O\"").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("Both players"));
    }
}
