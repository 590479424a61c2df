// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, and typography
//! constants shared by all components.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Status colors
    pub const WARNING_500: Color = Color::from_rgb(0.95, 0.65, 0.15);
    pub const ERROR_500: Color = Color::from_rgb(0.9, 0.25, 0.25);
}

/// Spacing scale (8px grid).
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Height reserved for the filmstrip area, padding included.
    pub const FILMSTRIP_PADDING: f32 = 24.0;
    /// Shutter button diameter-ish width.
    pub const SHUTTER_MIN_WIDTH: f32 = 160.0;
}

/// Font size scale.
pub mod typography {
    pub const TITLE: f32 = 24.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 14.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

/// Standardized opacity levels.
pub mod opacity {
    pub const OVERLAY_SOFT: f32 = 0.35;
    pub const DISABLED: f32 = 0.5;
}
