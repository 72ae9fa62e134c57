// SPDX-License-Identifier: MPL-2.0
//! Light/dark/system theme selection and the colors derived from it.

use crate::ui::design_tokens::{palette, opacity};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection failures fall back to dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors the gallery widgets use on top of the iced palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Tile background behind letterboxed images.
    pub tile_surface: Color,
    /// Dashed drop zone outline and hint text.
    pub drop_zone: Color,
    pub text_secondary: Color,
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            tile_surface: palette::GRAY_100,
            drop_zone: palette::GRAY_AAA,
            text_secondary: palette::GRAY_700,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            tile_surface: Color::from_rgb(0.15, 0.15, 0.15),
            drop_zone: palette::GRAY_400,
            text_secondary: palette::GRAY_200,
            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System depends on the desktop; it only must not panic.
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn scheme_follows_theme_brightness() {
        assert!(ColorScheme::for_theme(&Theme::Light).tile_surface.r > 0.8);
        assert!(ColorScheme::for_theme(&Theme::Dark).tile_surface.r < 0.2);
    }

    #[test]
    fn backdrop_is_translucent_black_in_both_schemes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert_eq!(scheme.backdrop.r, 0.0);
            assert_eq!(scheme.backdrop.a, opacity::BACKDROP);
        }
    }
}
