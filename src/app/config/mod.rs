// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Preview interaction policy, lazy loading and tile size
//! - `[diagnostics]` - Diagnostics buffer sizing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `AVATAR_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use avatar_gallery::config;
//! use avatar_gallery::ui::gallery::Settings;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//!
//! let settings = Settings::from_config(&config.gallery);
//! assert!(settings.initial_batch >= 1);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::gallery::{DismissPolicy, OpenTrigger};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery interaction and layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Which clicks close the preview overlay.
    #[serde(default)]
    pub dismiss_policy: Option<DismissPolicy>,

    /// How a tile opens the preview overlay.
    #[serde(default)]
    pub open_trigger: Option<OpenTrigger>,

    /// Request tile images in batches as the user scrolls.
    #[serde(default = "default_lazy_loading")]
    pub lazy_loading: Option<bool>,

    /// Number of images requested at startup when lazy loading is enabled.
    #[serde(default = "default_initial_batch")]
    pub initial_batch: Option<usize>,

    /// Tile edge length in logical pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dismiss_policy: Some(DismissPolicy::default()),
            open_trigger: Some(OpenTrigger::default()),
            lazy_loading: default_lazy_loading(),
            initial_batch: default_initial_batch(),
            tile_size: default_tile_size(),
        }
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery interaction and layout settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Diagnostics collection settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Ensures tile sizes stay inside the supported range so hand-edited
/// configs cannot request unusable layouts.
#[must_use]
pub fn clamp_tile_size(value: f32) -> f32 {
    value.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE)
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_lazy_loading() -> Option<bool> {
    Some(true)
}

fn default_initial_batch() -> Option<usize> {
    Some(DEFAULT_INITIAL_BATCH)
}

fn default_tile_size() -> Option<f32> {
    Some(DEFAULT_TILE_SIZE)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning key explaining what went wrong.
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.gallery.dismiss_policy,
            Some(DismissPolicy::BackdropOnly)
        );
        assert_eq!(config.gallery.open_trigger, Some(OpenTrigger::Click));
        assert_eq!(config.gallery.lazy_loading, Some(true));
        assert_eq!(config.gallery.initial_batch, Some(DEFAULT_INITIAL_BATCH));
        assert_eq!(config.gallery.tile_size, Some(DEFAULT_TILE_SIZE));
        assert_eq!(
            config.diagnostics.buffer_capacity,
            Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
        );
    }

    #[test]
    fn load_from_path_reads_gallery_policies() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[gallery]\ndismiss_policy = \"any-click\"\nopen_trigger = \"long-press\"\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.gallery.dismiss_policy, Some(DismissPolicy::AnyClick));
        assert_eq!(loaded.gallery.open_trigger, Some(OpenTrigger::LongPress));
    }

    #[test]
    fn kebab_case_policy_names_parse() {
        let content = r#"
            [gallery]
            dismiss_policy = "any-click"
            open_trigger = "long-press"
        "#;
        let config: Config = toml::from_str(content).expect("parse");
        assert_eq!(config.gallery.dismiss_policy, Some(DismissPolicy::AnyClick));
        assert_eq!(config.gallery.open_trigger, Some(OpenTrigger::LongPress));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"neon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn clamp_tile_size_bounds_values() {
        assert_eq!(clamp_tile_size(10.0), MIN_TILE_SIZE);
        assert_eq!(clamp_tile_size(1000.0), MAX_TILE_SIZE);
        assert_eq!(clamp_tile_size(200.0), 200.0);
    }

    #[test]
    fn load_with_override_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                lazy_loading: Some(false),
                initial_batch: Some(8),
                tile_size: Some(240.0),
                ..GalleryConfig::default()
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(50),
            },
        };

        fs::write(
            base_dir.join("settings.toml"),
            r#"
                [general]
                language = "fr"
                theme_mode = "light"

                [gallery]
                dismiss_policy = "backdrop-only"
                open_trigger = "click"
                lazy_loading = false
                initial_batch = 8
                tile_size = 240.0

                [diagnostics]
                buffer_capacity = 50
            "#,
        )
        .expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, config);
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
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
