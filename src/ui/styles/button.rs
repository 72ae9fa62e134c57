// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main action ("Add images").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Red square with a white cross, overlaid on a tile corner.
pub fn delete(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::DANGER_600,
        _ => palette::DANGER_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::XS.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible button wrapping a tile image; hover shows a faint tint.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::TILE.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Toast dismiss control.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let tint = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: tint.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
