//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings for the `play` command, read from a TOML file.
///
/// Every key is optional:
///
/// ```toml
/// x_color = "blue"
/// o_color = "red"
/// show_history = true
/// log_file = "tictactoe.log"
/// log_filter = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Color for X marks (any ratatui color name or `#rrggbb`).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Show the move history panel.
    #[serde(default = "default_show_history")]
    show_history: bool,

    /// Where logs go while the terminal is in use.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_show_history() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            show_history: default_show_history(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(show_history = config.show_history, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.palette()?;
        Ok(config)
    }

    /// Resolves the configured mark colors.
    #[instrument(skip(self), fields(x = %self.x_color, o = %self.o_color))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |name: &str, value: &str| {
            Color::from_str(value)
                .map_err(|_| ConfigError::new(format!("Invalid {} color: {:?}", name, value)))
        };
        Ok(Palette {
            x: parse("x_color", &self.x_color)?,
            o: parse("o_color", &self.o_color)?,
        })
    }
}

/// Resolved colors for the two marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color for X.
    pub x: Color,
    /// Color for O.
    pub o: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
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
