// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Button styles.
pub mod buttons {
    use super::*;

    /// Primary action button (the shutter).
    pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
        let background = match status {
            button::Status::Hovered => palette::PRIMARY_400,
            button::Status::Disabled => Color {
                a: opacity::DISABLED,
                ..palette::PRIMARY_500
            },
            _ => palette::PRIMARY_500,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }

    /// Borderless wrapper for filmstrip thumbnails; highlights on hover.
    pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: None,
            text_color: palette::WHITE,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }

    /// Quiet text button (back, dismiss).
    pub fn quiet(_theme: &Theme, status: button::Status) -> button::Style {
        let text_color = match status {
            button::Status::Hovered => palette::PRIMARY_400,
            _ => palette::WHITE,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Container styles.
pub mod containers {
    use super::*;

    /// Dark surface behind the viewfinder and the full-screen photo.
    pub fn viewport(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..container::Style::default()
        }
    }

    /// Soft translucent overlay for controls on top of the viewfinder.
    pub fn overlay(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SOFT,
                ..palette::BLACK
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..container::Style::default()
        }
    }

    /// Toast surface; `accent` carries the severity color.
    pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
        move |_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: Some(palette::WHITE),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..container::Style::default()
        }
    }
}
