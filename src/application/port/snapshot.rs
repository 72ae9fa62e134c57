// SPDX-License-Identifier: MPL-2.0
//! Gallery snapshot persistence port.
//!
//! A snapshot is the full ordered list of image references. It is read once
//! when the gallery boots and rewritten in full after every change.

use super::storage::StorageError;
use crate::domain::gallery::ImageRef;
use thiserror::Error;

/// Errors raised by a [`SnapshotStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The stored snapshot could not be read.
    #[error("failed to read snapshot: {0}")]
    Read(StorageError),

    /// The stored snapshot is not a JSON array of strings.
    #[error("malformed snapshot: {0}")]
    Parse(String),

    /// The snapshot could not be written.
    #[error("failed to write snapshot: {0}")]
    Write(StorageError),
}

impl SnapshotError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SnapshotError::Read(_) => "notification-snapshot-read-error",
            SnapshotError::Parse(_) => "notification-snapshot-parse-error",
            SnapshotError::Write(_) => "notification-snapshot-write-error",
        }
    }
}

/// Load/save interface for the persisted gallery snapshot.
pub trait SnapshotStore {
    /// Reads the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has ever been written.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Read`] or [`SnapshotError::Parse`] when a
    /// snapshot exists but cannot be used.
    fn load_snapshot(&self) -> Result<Option<Vec<ImageRef>>, SnapshotError>;

    /// Overwrites the persisted snapshot with `images`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Write`] if the snapshot cannot be stored.
    fn save_snapshot(&mut self, images: &[ImageRef]) -> Result<(), SnapshotError>;
}
