// SPDX-License-Identifier: MPL-2.0
//! Media reference provider port.
//!
//! A provider turns a user-selected file into an [`ImageRef`] and later
//! resolves that reference back into something renderable. Providers differ
//! in how long a reference stays valid:
//!
//! - session-scoped references die with the process
//! - path references live as long as the original file
//! - library references live as long as the copied, content-addressed file
//!
//! Adapters live in [`crate::infrastructure::reference`].

use crate::domain::gallery::ImageRef;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

// =============================================================================
// ReferenceError
// =============================================================================

/// Errors raised while minting a reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The source file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The source file could not be read or copied.
    #[error("I/O error: {0}")]
    Io(String),

    /// The source is not a regular file (e.g. a directory).
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    /// The source path cannot be stored as a reference string.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

impl ReferenceError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "notification-add-skipped"
    }
}

impl From<std::io::Error> for ReferenceError {
    fn from(err: std::io::Error) -> Self {
        ReferenceError::Io(err.to_string())
    }
}

// =============================================================================
// ImageSource
// =============================================================================

/// What a reference currently resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image bytes are available in a file on disk.
    File(PathBuf),
    /// Image bytes are held in memory for the current session.
    Memory(Arc<[u8]>),
    /// The reference no longer points to readable data (stale handle,
    /// missing file, or a scheme the provider does not understand).
    Unavailable,
}

impl ImageSource {
    #[must_use]
    pub fn is_available(&self) -> bool {
        !matches!(self, ImageSource::Unavailable)
    }
}

// =============================================================================
// MediaReferenceProvider Trait
// =============================================================================

/// Capability to mint, resolve and release image references.
pub trait MediaReferenceProvider {
    /// Short identifier used in logs and configuration (`path`, `session`, ...).
    fn name(&self) -> &'static str;

    /// Mints a new reference for the file at `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReferenceError`] if the file cannot be referenced.
    fn mint(&mut self, source: &Path) -> Result<ImageRef, ReferenceError>;

    /// Resolves a reference into renderable data.
    fn resolve(&self, image: &ImageRef) -> ImageSource;

    /// Frees whatever the reference holds. Called once no gallery entry
    /// uses the reference anymore. Unknown references are ignored.
    fn release(&mut self, image: &ImageRef);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_source_is_not_available() {
        assert!(!ImageSource::Unavailable.is_available());
        assert!(ImageSource::File(PathBuf::from("/a.png")).is_available());
        assert!(ImageSource::Memory(Arc::from(vec![1u8, 2, 3])).is_available());
    }

    #[test]
    fn reference_errors_share_the_skip_key() {
        assert_eq!(
            ReferenceError::NotFound(PathBuf::from("/x")).i18n_key(),
            "notification-add-skipped"
        );
        assert_eq!(
            ReferenceError::Io("denied".into()).i18n_key(),
            "notification-add-skipped"
        );
    }
}
