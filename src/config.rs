//! Configuration for the console front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game session.
///
/// Nothing here reaches the rules engine: names and display options are
/// presentation concerns.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QuartoConfig {
    /// Display names for player 0 and player 1.
    #[serde(default = "default_player_names")]
    player_names: [String; 2],

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the board after every placement.
    #[serde(default = "default_show_board")]
    show_board: bool,

    /// Print a JSON snapshot after every command.
    #[serde(default)]
    json: bool,
}

fn default_player_names() -> [String; 2] {
    ["Player 1".to_string(), "Player 2".to_string()]
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for QuartoConfig {
    fn default() -> Self {
        Self {
            player_names: default_player_names(),
            log_filter: default_log_filter(),
            show_board: default_show_board(),
            json: false,
        }
    }
}

impl QuartoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(players = ?config.player_names, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with JSON snapshots switched on or off.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Returns the display name for a player index.
    pub fn name_of(&self, index: usize) -> &str {
        self.player_names
            .get(index)
            .map(String::as_str)
            .unwrap_or("unknown")
    }

    /// Checks that the two player names are non-empty and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [a, b] = &self.player_names;
        if a.trim().is_empty() || b.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if a == b {
            return Err(ConfigError::new(format!(
                "Player names must differ (both are {:?})",
                a
            )));
        }
        Ok(())
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
    fn test_defaults_fill_missing_fields() {
        let config = QuartoConfig::from_toml("").unwrap();
        assert_eq!(config, QuartoConfig::default());
        assert_eq!(config.name_of(1), "Player 2");
        assert!(*config.show_board());
    }

    #[test]
    fn test_partial_config() {
        let config = QuartoConfig::from_toml(
            r#"
            player_names = ["Ada", "Grace"]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.name_of(0), "Ada");
        assert!(*config.json());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = QuartoConfig::from_toml(r#"player_names = ["Ada", "Ada"]"#).unwrap_err();
        assert!(err.message.contains("must differ"));
    }

    #[test]
    fn test_bad_toml_rejected() {
        let err = QuartoConfig::from_toml("player_names = 3").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
