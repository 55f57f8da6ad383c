// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and default gallery directory
//! - `[viewer]` - Hint timeout, swipe threshold and wheel sensitivity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `GALLERY_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.viewer.hint_timeout_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::newtypes::{HintTimeout, SwipeThreshold, WheelSensitivity};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Gallery opened when no directory is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            gallery_dir: None,
        }
    }
}

/// Interactive viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Auto-hide delay of the zoom/pan hint (milliseconds).
    #[serde(
        default = "default_hint_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hint_timeout_ms: Option<u64>,

    /// Horizontal travel required for a swipe (pixels).
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Scale change per pixel of wheel delta.
    #[serde(
        default = "default_wheel_sensitivity",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_sensitivity: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            hint_timeout_ms: default_hint_timeout_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            wheel_sensitivity: default_wheel_sensitivity(),
        }
    }
}

impl ViewerConfig {
    /// Hint timeout, clamped to the accepted range.
    #[must_use]
    pub fn hint_timeout(&self) -> HintTimeout {
        self.hint_timeout_ms
            .map(HintTimeout::from_millis)
            .unwrap_or_default()
    }

    /// Swipe threshold, clamped to the accepted range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold_px
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    /// Wheel sensitivity, clamped to the accepted range.
    #[must_use]
    pub fn wheel_sensitivity(&self) -> WheelSensitivity {
        self.wheel_sensitivity
            .map(WheelSensitivity::new)
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Interactive viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_hint_timeout_ms() -> Option<u64> {
    Some(DEFAULT_HINT_TIMEOUT_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_wheel_sensitivity() -> Option<f32> {
    Some(DEFAULT_WHEEL_SENSITIVITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("Loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Ignoring unreadable settings at {}: {}",
                            path.display(),
                            err
                        )),
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

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                gallery_dir: Some(PathBuf::from("/srv/photos")),
            },
            viewer: ViewerConfig {
                hint_timeout_ms: Some(4500),
                swipe_threshold_px: Some(80.0),
                wheel_sensitivity: Some(0.002),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write file");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.general.gallery_dir, None);
        assert_eq!(config.viewer.hint_timeout(), HintTimeout::default());
        assert_eq!(config.viewer.swipe_threshold(), SwipeThreshold::default());
        assert_eq!(config.viewer.wheel_sensitivity(), WheelSensitivity::default());
    }

    #[test]
    fn missing_viewer_section_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"light\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.viewer, ViewerConfig::default());
    }

    #[test]
    fn out_of_range_viewer_values_are_clamped_on_use() {
        let viewer = ViewerConfig {
            hint_timeout_ms: Some(10),
            swipe_threshold_px: Some(10_000.0),
            wheel_sensitivity: Some(-1.0),
        };
        assert_eq!(viewer.hint_timeout().as_millis(), MIN_HINT_TIMEOUT_MS);
        assert_eq!(viewer.swipe_threshold().value(), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(viewer.wheel_sensitivity().value(), MIN_WHEEL_SENSITIVITY);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("deep").join("config");
        let mut config = Config::default();
        config.viewer.hint_timeout_ms = Some(1200);

        save_with_override(&config, Some(base_dir.clone())).expect("save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.viewer.hint_timeout_ms, Some(1200));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read file");

        assert!(content.contains("[general]"));
        assert!(content.contains("[viewer]"));
        assert!(content.contains("hint_timeout_ms = 3000"));
    }
}
