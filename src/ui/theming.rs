// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme mode management.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Application theme mode, persisted in the `[general]` config section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Resolves the mode to a concrete Iced theme.
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let wrapper: Wrapper = toml::from_str("mode = \"light\"").expect("parse");
        assert_eq!(wrapper.mode, ThemeMode::Light);
    }
}
