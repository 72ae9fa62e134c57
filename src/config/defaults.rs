// SPDX-License-Identifier: MPL-2.0
//! Default values for every setting in `settings.toml`.
//!
//! Bounds for the grid geometry live with the layout types in
//! [`crate::domain::layout::layout_bounds`]; values read from disk are clamped
//! there, not here.

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Minimum width of a grid tile in logical pixels.
pub const DEFAULT_MIN_TILE_WIDTH: f32 = 150.0;

/// Gap between grid tiles, both horizontally and vertically.
pub const DEFAULT_TILE_GAP: f32 = 10.0;

/// Maximum width of the gallery content column.
pub const DEFAULT_MAX_CONTENT_WIDTH: f32 = 600.0;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Share of the window an enlarged image may occupy on each axis.
pub const DEFAULT_PREVIEW_FRACTION: f32 = 0.8;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success and info toasts.
pub const NOTIFICATION_SHORT_SECS: u64 = 3;

/// Auto-dismiss delay for warning toasts.
pub const NOTIFICATION_LONG_SECS: u64 = 5;

/// Toasts shown at once; the rest wait in a queue.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::layout_bounds;

    #[test]
    fn grid_defaults_are_inside_layout_bounds() {
        assert!(DEFAULT_MIN_TILE_WIDTH >= layout_bounds::MIN_TILE_WIDTH);
        assert!(DEFAULT_MIN_TILE_WIDTH <= layout_bounds::MAX_TILE_WIDTH);
        assert!(DEFAULT_TILE_GAP <= layout_bounds::MAX_GAP);
        assert!(DEFAULT_MAX_CONTENT_WIDTH >= DEFAULT_MIN_TILE_WIDTH);
    }

    #[test]
    fn preview_default_is_inside_bounds() {
        assert!(DEFAULT_PREVIEW_FRACTION >= layout_bounds::MIN_PREVIEW_FRACTION);
        assert!(DEFAULT_PREVIEW_FRACTION <= layout_bounds::MAX_PREVIEW_FRACTION);
    }

    #[test]
    fn warnings_stay_longer_than_info() {
        assert!(NOTIFICATION_LONG_SECS > NOTIFICATION_SHORT_SECS);
    }
}
