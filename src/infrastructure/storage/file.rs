// SPDX-License-Identifier: MPL-2.0
//! File-backed key-value store.
//!
//! Each key is stored as `<dir>/<key>.json`. Writes go to a sibling temp
//! file which is then renamed over the target, so a crash mid-write leaves
//! either the old or the new value, never a truncated one.

use crate::application::port::{KeyValueStore, StorageError};
use crate::infrastructure::atomic::write_atomic;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory name for the store inside the application data directory.
pub const STORAGE_DIR: &str = "storage";

/// Extension appended to every key file.
const VALUE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store under `<data_dir>/storage`.
    #[must_use]
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_DIR))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !super::is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{VALUE_EXTENSION}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.value_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let tmp_path = path.with_extension(format!("{VALUE_EXTENSION}.tmp"));
        write_atomic(&path, &tmp_path, value.as_bytes())?;
        Ok(())
    }
}
