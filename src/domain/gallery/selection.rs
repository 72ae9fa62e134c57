// SPDX-License-Identifier: MPL-2.0
//! Selection state machine for the preview overlay.
//!
//! ```text
//! None ──select(ref)──▶ Enlarged(ref)
//!   ▲                        │
//!   └────────clear()─────────┘
//! ```
//!
//! Selecting while already enlarged replaces the reference; there is never
//! more than one enlarged image.

use super::ImageRef;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Enlarged(ImageRef),
}

impl Selection {
    /// Enlarges `image`, replacing any previous selection.
    pub fn select(&mut self, image: ImageRef) {
        *self = Selection::Enlarged(image);
    }

    /// Closes the overlay.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// Returns the enlarged reference, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ImageRef> {
        match self {
            Selection::None => None,
            Selection::Enlarged(image) => Some(image),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Enlarged(_))
    }
}
