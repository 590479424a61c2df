// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_SHUTTER_DATA_DIR`, `ICED_SHUTTER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedShutter";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_SHUTTER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHUTTER_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// This should be called once at application startup, before any path
/// resolution functions are called.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application data directory path.
///
/// On this app the data directory only hosts the session capture scratch
/// space (see [`captures_dir`]); user preferences live in the config
/// directory.
pub fn get_data_dir() -> Option<PathBuf> {
    get_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_NAME)))
}

/// Returns the configuration directory path.
pub fn get_config_dir() -> Option<PathBuf> {
    get_config_dir_with_override(None)
}

/// Returns the configuration directory path with an optional override.
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(get_cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

/// Returns the directory captured photos are written into.
///
/// Lives under the data directory; created by the media-library permission
/// probe at startup.
pub fn captures_dir() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("captures"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let override_path = PathBuf::from("/tmp/shutter-test-data");
        let resolved = get_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(resolved, Some(override_path));
    }

    #[test]
    fn config_override_wins() {
        let override_path = PathBuf::from("/tmp/shutter-test-config");
        let resolved = get_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(resolved, Some(override_path));
    }
}
