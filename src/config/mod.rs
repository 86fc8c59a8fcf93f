// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[layout]` - Row layout settings (breakpoint, reveal floor/step,
//!   trailing-row policy)
//! - `[lightbox]` - Lightbox transition settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` or set the `ICED_MOSAIC_CONFIG_DIR` environment
//!    variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

// Re-export all default constants for convenient access.
pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::{LayoutOptions, TrailingRows};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Row layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Width at or above which the viewport counts as wide.
    #[serde(
        default = "default_breakpoint_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub breakpoint_width: Option<f32>,

    /// Rows visible at startup and after "show less".
    #[serde(
        default = "default_initial_rows",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_rows: Option<usize>,

    /// Rows revealed per "load more".
    #[serde(
        default = "default_rows_per_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub rows_per_step: Option<usize>,

    /// What to do with a final row short of its capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_rows: Option<TrailingRows>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_width: Some(DEFAULT_BREAKPOINT_WIDTH),
            initial_rows: Some(DEFAULT_INITIAL_ROWS),
            rows_per_step: Some(DEFAULT_ROWS_PER_STEP),
            trailing_rows: Some(TrailingRows::default()),
        }
    }
}

/// Lightbox transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Open/close transition duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            transition_ms: Some(DEFAULT_TRANSITION_MS),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,
}

impl Config {
    /// Resolves the `[layout]` section into controller options, clamping
    /// persisted values so a hand-edited config cannot request a nonsensical
    /// layout.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            breakpoint_width: self
                .layout
                .breakpoint_width
                .unwrap_or(DEFAULT_BREAKPOINT_WIDTH)
                .clamp(MIN_BREAKPOINT_WIDTH, MAX_BREAKPOINT_WIDTH),
            initial_rows: self.layout.initial_rows.unwrap_or(DEFAULT_INITIAL_ROWS).max(1),
            rows_per_step: self.layout.rows_per_step.unwrap_or(DEFAULT_ROWS_PER_STEP).max(1),
            trailing_rows: self.layout.trailing_rows.unwrap_or_default(),
        }
    }

    /// Resolves the lightbox transition duration, clamped to sane bounds.
    pub fn transition_ms(&self) -> u32 {
        self.lightbox
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS)
    }
}

fn default_breakpoint_width() -> Option<f32> {
    Some(DEFAULT_BREAKPOINT_WIDTH)
}

fn default_initial_rows() -> Option<usize> {
    Some(DEFAULT_INITIAL_ROWS)
}

fn default_rows_per_step() -> Option<usize> {
    Some(DEFAULT_ROWS_PER_STEP)
}

fn default_transition_ms() -> Option<u32> {
    Some(DEFAULT_TRANSITION_MS)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
