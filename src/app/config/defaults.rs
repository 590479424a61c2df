// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Default capture device index.
pub const DEFAULT_DEVICE_INDEX: u32 = 0;

/// Whether the viewfinder preview is mirrored by default.
pub const DEFAULT_MIRROR_PREVIEW: bool = true;

/// Default filmstrip thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 100.0;

/// Bounds for the filmstrip thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 48.0;
pub const MAX_THUMBNAIL_HEIGHT: f32 = 240.0;

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

pub(super) fn default_device_index() -> Option<u32> {
    Some(DEFAULT_DEVICE_INDEX)
}

pub(super) fn default_mirror_preview() -> Option<bool> {
    Some(DEFAULT_MIRROR_PREVIEW)
}

pub(super) fn default_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}
