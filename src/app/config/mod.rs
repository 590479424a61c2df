// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[camera]` - Capture device and viewfinder preferences
//! - `[gallery]` - Filmstrip presentation
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SHUTTER_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode.
    #[serde(default = "defaults::default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: defaults::default_theme_mode(),
        }
    }
}

/// Capture device and viewfinder settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CameraConfig {
    /// Platform index of the capture device to open.
    #[serde(
        default = "defaults::default_device_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_index: Option<u32>,

    /// Whether the viewfinder preview is mirrored. Captures never are.
    #[serde(
        default = "defaults::default_mirror_preview",
        skip_serializing_if = "Option::is_none"
    )]
    pub mirror_preview: Option<bool>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_index: defaults::default_device_index(),
            mirror_preview: defaults::default_mirror_preview(),
        }
    }
}

/// Filmstrip presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryConfig {
    /// Thumbnail height in logical pixels.
    #[serde(
        default = "defaults::default_thumbnail_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_height: defaults::default_thumbnail_height(),
        }
    }
}

/// Root configuration, one section per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub general: GeneralConfig,
    pub camera: CameraConfig,
    pub gallery: GalleryConfig,
}

impl Config {
    /// Thumbnail height clamped into its supported range so persisted
    /// configs cannot request nonsensical values.
    pub fn thumbnail_height(&self) -> f32 {
        self.gallery
            .thumbnail_height
            .unwrap_or(DEFAULT_THUMBNAIL_HEIGHT)
            .clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
    }

    pub fn device_index(&self) -> u32 {
        self.camera.device_index.unwrap_or(DEFAULT_DEVICE_INDEX)
    }

    pub fn mirror_preview(&self) -> bool {
        self.camera.mirror_preview.unwrap_or(DEFAULT_MIRROR_PREVIEW)
    }
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or unparsable
/// file yields defaults plus the i18n key of a warning to surface to the
/// user.
pub fn load() -> (Config, Option<String>) {
    match config_file_path() {
        Some(path) => load_with_warning(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit path (for tests).
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path (for tests).
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

fn load_with_warning(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(error) => {
            log::warn!("invalid settings file {}: {error}", path.display());
            (
                Config::default(),
                Some("warning-config-invalid".to_string()),
            )
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}
