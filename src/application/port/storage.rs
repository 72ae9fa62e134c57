// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage port.
//!
//! Mirrors the shape of a browser's local storage: string keys, string
//! values, full overwrite on every write. Adapters live in
//! [`crate::infrastructure::storage`].

use thiserror::Error;

// =============================================================================
// StorageError
// =============================================================================

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// The store has no usable location (e.g. no data directory).
    #[error("storage location unavailable")]
    Unavailable,

    /// The key contains characters the adapter cannot represent.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// String key-value storage that outlives the application process.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
