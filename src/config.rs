//! Server-wide game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Policy applied to every game the service creates.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Exact number of players a new game must have.
    #[serde(default = "default_num_players")]
    num_players: usize,

    /// Board height.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Board width.
    #[serde(default = "default_columns")]
    columns: usize,

    /// Consecutive pieces needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Append logs to this file instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_path: Option<PathBuf>,
}

fn default_num_players() -> usize {
    2
}

fn default_rows() -> usize {
    4
}

fn default_columns() -> usize {
    4
}

fn default_win_length() -> usize {
    4
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: default_num_players(),
            rows: default_rows(),
            columns: default_columns(),
            win_length: default_win_length(),
            log_filter: default_log_filter(),
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration for the given game policy, with default logging.
    #[instrument]
    pub fn new(num_players: usize, rows: usize, columns: usize, win_length: usize) -> Self {
        Self {
            num_players,
            rows,
            columns,
            win_length,
            ..Self::default()
        }
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            rows = config.rows,
            columns = config.columns,
            win_length = config.win_length,
            "Config loaded successfully"
        );
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

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Rejects configurations no game could be played under.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_players < 2 {
            return Err(ConfigError::new(format!(
                "num_players must be at least 2, got {}",
                self.num_players
            )));
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::new(format!(
                "board must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::new("win_length must be at least 1"));
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
    /// Creates a new configuration error, recording the caller's location.
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
