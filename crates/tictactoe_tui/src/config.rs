//! Front-end configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Delay between a round ending and the result panel appearing.
    #[serde(default = "default_result_delay_ms")]
    result_delay_ms: u64,

    /// Log destination; the terminal itself is taken by the UI.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Display name for the X player.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Display name for the O player.
    #[serde(default = "default_o_name")]
    o_name: String,

    /// Show 1-9 in empty cells.
    #[serde(default = "default_show_cell_numbers")]
    show_cell_numbers: bool,
}

fn default_result_delay_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_x_name() -> String {
    "Player X".to_string()
}

fn default_o_name() -> String {
    "Player O".to_string()
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: default_result_delay_ms(),
            log_file: default_log_file(),
            x_name: default_x_name(),
            o_name: default_o_name(),
            show_cell_numbers: default_show_cell_numbers(),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(x_name = %config.x_name, o_name = %config.o_name, "Config loaded");
        Ok(config)
    }

    /// Builds the effective config: defaults, then the config file, then flags.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Overwrites fields with any values given on the command line.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(delay) = cli.result_delay_ms {
            self.result_delay_ms = delay;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = path.clone();
        }
        if let Some(name) = &cli.x_name {
            self.x_name = name.clone();
        }
        if let Some(name) = &cli.o_name {
            self.o_name = name.clone();
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
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml_str("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(*config.result_delay_ms(), 1000);
        assert!(*config.show_cell_numbers());
    }

    #[test]
    fn test_partial_toml() {
        let config = TuiConfig::from_toml_str("x_name = \"Ada\"\nresult_delay_ms = 0\n").unwrap();
        assert_eq!(config.x_name(), "Ada");
        assert_eq!(config.o_name(), "Player O");
        assert_eq!(*config.result_delay_ms(), 0);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = TuiConfig::from_toml_str("result_delay_ms = \"soon\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut config = TuiConfig::from_toml_str("x_name = \"Ada\"\no_name = \"Bob\"").unwrap();
        let cli = Cli {
            o_name: Some("Cy".to_string()),
            result_delay_ms: Some(5),
            ..Cli::default()
        };
        config.apply_overrides(&cli);

        assert_eq!(config.x_name(), "Ada");
        assert_eq!(config.o_name(), "Cy");
        assert_eq!(*config.result_delay_ms(), 5);
    }
}
