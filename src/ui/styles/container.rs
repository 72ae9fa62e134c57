// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Tile frame behind a letterboxed image.
pub fn tile(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.tile_surface)),
        border: Border {
            radius: radius::TILE.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Tile whose reference no longer resolves.
pub fn placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.tile_surface)),
        text_color: Some(colors.text_secondary),
        border: Border {
            color: colors.drop_zone,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Full-window dimmed backdrop of the preview overlay.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).backdrop)),
        ..Default::default()
    }
}

/// Toast card with a severity-colored outline.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::{opacity, palette};

    #[test]
    fn backdrop_dims_with_black() {
        let style = backdrop(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            }))
        );
    }

    #[test]
    fn toast_uses_accent_outline() {
        let style = toast(palette::WARNING_500)(&Theme::Dark);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }
}
