// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`ImageRef`]: opaque handle string usable to render an image
//! - [`Gallery`]: ordered sequence of image references (insertion order is display order)
//! - [`Selection`]: the optional single image currently shown enlarged
//!
//! References carry no identity beyond their string value and their position.
//! Duplicates are allowed and are only ever removed by position.

mod selection;

pub use selection::Selection;

use std::fmt;

// =============================================================================
// ImageRef
// =============================================================================

/// Opaque handle to an image.
///
/// The string is interpreted only by the media reference provider that minted
/// it (e.g. `file:///...`, `session:...`, `library:...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wraps a handle string.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the handle string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the scheme prefix (text before the first `:`), if any.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.0.split_once(':').map(|(scheme, _)| scheme)
    }

    /// Consumes the reference and returns the handle string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageRef {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}

impl From<&str> for ImageRef {
    fn from(handle: &str) -> Self {
        Self(handle.to_string())
    }
}

// =============================================================================
// Gallery
// =============================================================================

/// Ordered sequence of image references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ImageRef>,
}

impl Gallery {
    /// Creates an empty gallery.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gallery from an existing ordered sequence.
    #[must_use]
    pub fn from_images(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// Appends references at the end, preserving their order.
    ///
    /// Returns the number of appended references.
    pub fn append<I>(&mut self, images: I) -> usize
    where
        I: IntoIterator<Item = ImageRef>,
    {
        let before = self.images.len();
        self.images.extend(images);
        self.images.len() - before
    }

    /// Removes the reference at `index`, shifting later entries down by one.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<ImageRef> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Returns the reference at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Returns whether any entry holds a reference equal to `image`.
    #[must_use]
    pub fn contains(&self, image: &ImageRef) -> bool {
        self.images.contains(image)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.images.iter()
    }

    /// Returns the references as a slice, in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[ImageRef] {
        &self.images
    }
}

impl<'a> IntoIterator for &'a Gallery {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(handles: &[&str]) -> Vec<ImageRef> {
        handles.iter().map(|h| ImageRef::from(*h)).collect()
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.append(refs(&["a", "b"])), 2);
        assert_eq!(gallery.append(refs(&["c"])), 1);

        assert_eq!(gallery.as_slice(), refs(&["a", "b", "c"]).as_slice());
    }

    #[test]
    fn append_nothing_is_a_noop() {
        let mut gallery = Gallery::from_images(refs(&["a"]));
        assert_eq!(gallery.append(Vec::new()), 0);
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn remove_shifts_following_entries() {
        let mut gallery = Gallery::from_images(refs(&["a", "b", "c"]));
        let removed = gallery.remove(1);

        assert_eq!(removed, Some(ImageRef::from("b")));
        assert_eq!(gallery.as_slice(), refs(&["a", "c"]).as_slice());
    }

    #[test]
    fn remove_out_of_range_leaves_gallery_untouched() {
        let mut gallery = Gallery::from_images(refs(&["a"]));
        assert!(gallery.remove(3).is_none());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn duplicates_are_removed_only_by_position() {
        let mut gallery = Gallery::from_images(refs(&["x", "y", "x"]));
        gallery.remove(2);

        assert_eq!(gallery.as_slice(), refs(&["x", "y"]).as_slice());
        assert!(gallery.contains(&ImageRef::from("x")));
    }

    #[test]
    fn scheme_is_text_before_first_colon() {
        assert_eq!(ImageRef::from("file:///tmp/a.png").scheme(), Some("file"));
        assert_eq!(ImageRef::from("session:1-2").scheme(), Some("session"));
        assert_eq!(ImageRef::from("no-scheme").scheme(), None);
    }
}
