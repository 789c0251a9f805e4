//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::{ColorTheme, ShapeKind, StyleParameters};

/// Theme display mode preference for the TUI chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Defaults applied when the studio starts or the CLI omits a flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Shape selected on startup
    pub shape: ShapeKind,
    /// Color theme id applied on startup (one of the built-in presets)
    pub color_theme: String,
    /// Style parameters applied on startup
    pub style: StyleParameters,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Heart,
            color_theme: "default".to_string(),
            style: StyleParameters::default(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Display the key hints line at the bottom of the studio
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_show_hints() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_hints: default_show_hints(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CalligramStudio/config.toml`
/// - macOS: `~/Library/Application Support/CalligramStudio/config.toml`
/// - Windows: `%APPDATA%\CalligramStudio\config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Startup defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific configuration directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("CalligramStudio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from disk, falling back to defaults when
    /// no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// or if it names an unknown color theme.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves the configuration atomically (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates cross-field constraints the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if the default color theme id is unknown.
    pub fn validate(&self) -> Result<()> {
        if ColorTheme::find(&self.defaults.color_theme).is_none() {
            anyhow::bail!(
                "Unknown color theme '{}' in config. Valid themes: {}",
                self.defaults.color_theme,
                crate::models::COLOR_THEMES
                    .iter()
                    .map(|t| t.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Ok(())
    }
}
