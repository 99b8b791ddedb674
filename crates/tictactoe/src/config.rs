//! Player configuration loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Name and marker for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Display name.
    name: String,
    /// Board marker, exactly one visible character.
    marker: String,
}

impl PlayerSettings {
    /// Creates settings for one seat.
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }

    fn merge(&mut self, overrides: PlayerOverrides) {
        if let Some(name) = overrides.name {
            self.name = name;
        }
        if let Some(marker) = overrides.marker {
            self.marker = marker;
        }
    }

    #[track_caller]
    fn validated_marker(&self, seat: &str) -> Result<char, ConfigError> {
        let mut chars = self.marker.chars();
        match (chars.next(), chars.next()) {
            (Some(marker), None) if !marker.is_whitespace() && !marker.is_control() => Ok(marker),
            _ => Err(ConfigError::new(format!(
                "{} marker must be a single visible character, got {:?}",
                seat, self.marker
            ))),
        }
    }
}

/// Partial settings for one seat: whatever the file or command line supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerOverrides {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement marker.
    pub marker: Option<String>,
}

/// Shape of the TOML file. Every table and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Settings for the player who moves first.
    pub first: PlayerOverrides,
    /// Settings for the player who moves second.
    pub second: PlayerOverrides,
}

/// Resolved configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// The player who moves first.
    first: PlayerSettings,
    /// The player who moves second.
    second: PlayerSettings,
}

impl Default for GameConfig {
    fn default() -> Self {
        let [first, second] = Player::default_pair();
        Self {
            first: PlayerSettings::new(first.name(), first.marker().to_string()),
            second: PlayerSettings::new(second.name(), second.marker().to_string()),
        }
    }
}

impl GameConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(first = %config.first.name, second = %config.second.name, "Config loaded");
        Ok(config)
    }

    /// Parses TOML text, filling anything missing from the defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(Self::default().with_overrides(file))
    }

    /// Applies overrides on top of the current values.
    pub fn with_overrides(mut self, overrides: ConfigFile) -> Self {
        self.first.merge(overrides.first);
        self.second.merge(overrides.second);
        self
    }

    /// Checks names and markers, returning the two engine players.
    #[instrument(skip(self))]
    pub fn into_players(self) -> Result<[Player; 2], ConfigError> {
        let first_marker = self.first.validated_marker("First player")?;
        let second_marker = self.second.validated_marker("Second player")?;
        if first_marker == second_marker {
            return Err(ConfigError::new(format!(
                "Both players use the marker {:?}",
                first_marker
            )));
        }

        let first_name = self.first.name.trim();
        let second_name = self.second.name.trim();
        if first_name.is_empty() || second_name.is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }

        Ok([
            Player::new(first_name, first_marker),
            Player::new(second_name, second_marker),
        ])
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
