// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::camera::Permission;
use crate::ui::capture;
use crate::ui::detail;
use crate::ui::filmstrip;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Capture(capture::Message),
    Filmstrip(filmstrip::Message),
    Detail(detail::Message),
    Notification(notifications::Message),
    /// The camera permission probe settled.
    CameraPermissionResolved(Permission),
    /// The media-library permission probe settled.
    LibraryPermissionResolved(Permission),
    /// Pop the navigation stack (back button or Escape).
    NavigateBack,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional capture device index override (`--device`).
    pub device: Option<u32>,
    /// Use the built-in test-pattern camera instead of real hardware.
    pub synthetic_camera: bool,
    /// Optional data directory override (for the capture scratch space).
    /// Takes precedence over `ICED_SHUTTER_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SHUTTER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
