//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use timetravel_core::DisplayOrder;
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_SETTINGS_FILE: &str = "timetravel.toml";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board and move-list presentation.
    display: DisplaySettings,
    /// Log destination and filter.
    logging: LoggingSettings,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Initial move-list order.
    order: DisplayOrder,
    /// Background of cells on the winning line.
    highlight: String,
    /// Foreground of X marks.
    x_color: String,
    /// Foreground of O marks.
    o_color: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            order: DisplayOrder::Ascending,
            highlight: "yellow".to_string(),
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file written while the TUI owns the terminal.
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("timetravel.log"),
            filter: "info".to_string(),
        }
    }
}

/// Colors resolved from [`DisplaySettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Winning-cell background.
    pub highlight: Color,
    /// X foreground.
    pub x: Color,
    /// O foreground.
    pub o: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: Color::Yellow,
            x: Color::Blue,
            o: Color::Red,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!("Settings loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Resolves settings for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_SETTINGS_FILE`] is
    /// used if present and defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses the configured color names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, SettingsError> {
        Ok(Palette {
            highlight: parse_color("highlight", &self.display.highlight)?,
            x: parse_color("x_color", &self.display.x_color)?,
            o: parse_color("o_color", &self.display.o_color)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, SettingsError> {
    Color::from_str(value)
        .map_err(|_| SettingsError::new(format!("Unknown color {:?} for display.{}", value, key)))
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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
