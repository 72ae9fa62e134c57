// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every gallery widget.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized alpha levels
//! - **Spacing**: 4px-based spacing scale
//! - **Sizing**: fixed component sizes
//! - **Typography**: font size scale
//! - **Border** / **Radius** / **Shadow**
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color { a: opacity::BACKDROP, ..palette::BLACK };
//! assert_eq!(backdrop.a, 0.8);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Drop zone outline.
    pub const GRAY_AAA: Color = Color::from_rgb(0.667, 0.667, 0.667);

    // Delete control: plain red, white glyph
    pub const DANGER_500: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const DANGER_600: Color = Color::from_rgb(0.8, 0.0, 0.0);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Preview backdrop behind an enlarged image.
    pub const BACKDROP: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of a grid tile; images are letterboxed inside.
    pub const TILE_HEIGHT: f32 = 150.0;
    /// Side of the square delete control on each tile.
    pub const DELETE_BUTTON: f32 = 24.0;
    /// Height of the dashed drop zone.
    pub const DROP_ZONE_HEIGHT: f32 = 100.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Gallery heading.
    pub const TITLE_LG: f32 = 28.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Dash and gap length of the drop zone outline.
    pub const DASH: f32 = 8.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Delete control corners.
    pub const XS: f32 = 3.0;
    pub const SM: f32 = 4.0;
    /// Tile image corners.
    pub const TILE: f32 = 5.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_MEDIUM && opacity::BACKDROP < 1.0);

    assert!(sizing::DELETE_BUTTON < sizing::TILE_HEIGHT);
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
