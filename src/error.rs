// SPDX-License-Identifier: MPL-2.0
//! Error type for settings I/O.
//!
//! Port-level errors ([`StorageError`](crate::application::port::StorageError),
//! [`SnapshotError`](crate::application::port::SnapshotError),
//! [`ReferenceError`](crate::application::port::ReferenceError)) live next to
//! their traits and carry their own i18n keys.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
