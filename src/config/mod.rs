// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Reference mode, grid geometry and preview size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, ReferenceMode};
//! use std::path::Path;
//!
//! let path = Path::new("/tmp/iced_gallery/settings.toml");
//! let (mut config, _warning) = config::load_with_override(None);
//! config.gallery.reference_mode = ReferenceMode::Library;
//! config::save_to_path(&config, path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::layout::{GridLayout, PreviewFraction};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// ReferenceMode
// =============================================================================

/// How added images are referenced and persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceMode {
    /// Point at the original file on disk.
    #[default]
    Path,
    /// Hold the bytes in memory for this run only.
    Session,
    /// Copy the bytes into the data directory.
    Library,
}

impl ReferenceMode {
    pub const ALL: [ReferenceMode; 3] = [
        ReferenceMode::Path,
        ReferenceMode::Session,
        ReferenceMode::Library,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceMode::Path => "path",
            ReferenceMode::Session => "session",
            ReferenceMode::Library => "library",
        }
    }
}

impl fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReferenceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown reference mode: {s}")))
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Gallery behavior and geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub reference_mode: ReferenceMode,

    #[serde(
        default = "default_min_tile_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_tile_width: Option<f32>,

    #[serde(default = "default_tile_gap", skip_serializing_if = "Option::is_none")]
    pub tile_gap: Option<f32>,

    #[serde(
        default = "default_max_content_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_content_width: Option<f32>,

    /// Share of the window used by the enlarged image (0.1 to 1.0).
    #[serde(
        default = "default_preview_fraction",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview_fraction: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            reference_mode: ReferenceMode::default(),
            min_tile_width: default_min_tile_width(),
            tile_gap: default_tile_gap(),
            max_content_width: default_max_content_width(),
            preview_fraction: default_preview_fraction(),
        }
    }
}

impl GalleryConfig {
    /// Grid geometry with out-of-range values clamped.
    #[must_use]
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::new(
            self.min_tile_width.unwrap_or(DEFAULT_MIN_TILE_WIDTH),
            self.tile_gap.unwrap_or(DEFAULT_TILE_GAP),
            self.max_content_width.unwrap_or(DEFAULT_MAX_CONTENT_WIDTH),
        )
    }

    #[must_use]
    pub fn preview_fraction(&self) -> PreviewFraction {
        PreviewFraction::new(self.preview_fraction.unwrap_or(DEFAULT_PREVIEW_FRACTION))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_min_tile_width() -> Option<f32> {
    Some(DEFAULT_MIN_TILE_WIDTH)
}

fn default_tile_gap() -> Option<f32> {
    Some(DEFAULT_TILE_GAP)
}

fn default_max_content_width() -> Option<f32> {
    Some(DEFAULT_MAX_CONTENT_WIDTH)
}

fn default_preview_fraction() -> Option<f32> {
    Some(DEFAULT_PREVIEW_FRACTION)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from `base_dir`, or the default location.
///
/// Returns `(config, warning_key)`. A missing file yields defaults silently;
/// an unreadable or invalid file yields defaults plus
/// `notification-config-load-error`.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using default settings");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
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
                language: Some("ja".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                reference_mode: ReferenceMode::Library,
                min_tile_width: Some(200.0),
                tile_gap: Some(4.0),
                max_content_width: Some(900.0),
                preview_fraction: Some(0.6),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn reference_mode_is_kebab_case_in_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gallery]\nreference_mode = \"session\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.gallery.reference_mode, ReferenceMode::Session);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn invalid_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery]\nreference_mode = 3\n")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn reference_mode_parses_from_cli_text() {
        assert_eq!("library".parse::<ReferenceMode>().ok(), Some(ReferenceMode::Library));
        assert_eq!(" Session ".parse::<ReferenceMode>().ok(), Some(ReferenceMode::Session));
        assert!("blob".parse::<ReferenceMode>().is_err());
    }

    #[test]
    fn out_of_range_geometry_is_clamped() {
        let gallery = GalleryConfig {
            min_tile_width: Some(1.0),
            preview_fraction: Some(5.0),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.grid_layout().min_tile_width(),
            crate::domain::layout::layout_bounds::MIN_TILE_WIDTH
        );
        assert_eq!(gallery.preview_fraction().value(), 1.0);
    }
}
