// SPDX-License-Identifier: MPL-2.0
//! Grid layout value objects.
//!
//! The grid mimics an auto-fitting column template with a minimum tile width:
//! as many columns as fit in the available width, never fewer than one, and
//! never more than there are items (empty tracks collapse so a short row
//! stretches across the full width).

// =============================================================================
// Layout Bounds
// =============================================================================

pub mod layout_bounds {
    /// Smallest tile width accepted from configuration.
    pub const MIN_TILE_WIDTH: f32 = 48.0;
    /// Largest tile width accepted from configuration.
    pub const MAX_TILE_WIDTH: f32 = 1024.0;
    /// Largest gap accepted from configuration.
    pub const MAX_GAP: f32 = 64.0;
    /// Smallest preview fraction of the window.
    pub const MIN_PREVIEW_FRACTION: f32 = 0.1;
    /// Largest preview fraction of the window.
    pub const MAX_PREVIEW_FRACTION: f32 = 1.0;
}

// =============================================================================
// GridLayout
// =============================================================================

/// Responsive grid parameters, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    min_tile_width: f32,
    gap: f32,
    max_content_width: f32,
}

impl GridLayout {
    /// Creates a layout, clamping each value to its supported range.
    #[must_use]
    pub fn new(min_tile_width: f32, gap: f32, max_content_width: f32) -> Self {
        let min_tile_width = min_tile_width.clamp(
            layout_bounds::MIN_TILE_WIDTH,
            layout_bounds::MAX_TILE_WIDTH,
        );
        Self {
            min_tile_width,
            gap: gap.clamp(0.0, layout_bounds::MAX_GAP),
            max_content_width: max_content_width.max(min_tile_width),
        }
    }

    #[must_use]
    pub fn min_tile_width(&self) -> f32 {
        self.min_tile_width
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    #[must_use]
    pub fn max_content_width(&self) -> f32 {
        self.max_content_width
    }

    /// Width actually available to the grid for a given window width.
    #[must_use]
    pub fn content_width(&self, available_width: f32) -> f32 {
        available_width.min(self.max_content_width).max(0.0)
    }

    /// Number of columns for `item_count` tiles in `available_width`.
    #[must_use]
    pub fn column_count(&self, available_width: f32, item_count: usize) -> usize {
        let width = self.content_width(available_width);
        let fitting = ((width + self.gap) / (self.min_tile_width + self.gap)).floor();
        let fitting = if fitting.is_finite() && fitting >= 1.0 {
            fitting as usize
        } else {
            1
        };
        fitting.min(item_count.max(1))
    }

    /// Splits `item_count` positions into rows of `column_count` indices.
    #[must_use]
    pub fn rows(&self, available_width: f32, item_count: usize) -> Vec<std::ops::Range<usize>> {
        let columns = self.column_count(available_width, item_count);
        (0..item_count)
            .step_by(columns)
            .map(|start| start..(start + columns).min(item_count))
            .collect()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(150.0, 10.0, 600.0)
    }
}

// =============================================================================
// PreviewFraction
// =============================================================================

/// Fraction of the window the enlarged image may occupy (10%–100%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewFraction(f32);

impl PreviewFraction {
    /// Creates a fraction, clamping it to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(
            layout_bounds::MIN_PREVIEW_FRACTION,
            layout_bounds::MAX_PREVIEW_FRACTION,
        ))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Bounding box for the enlarged image inside a window of `width`×`height`.
    #[must_use]
    pub fn bounds(self, width: f32, height: f32) -> (f32, f32) {
        (width.max(0.0) * self.0, height.max(0.0) * self.0)
    }
}

impl Default for PreviewFraction {
    fn default() -> Self {
        Self(0.8)
    }
}
