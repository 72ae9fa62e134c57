// SPDX-License-Identifier: MPL-2.0
//! In-memory key-value store.

use crate::application::port::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Key-value store backed by a shared map.
///
/// Clones share the same map, so a test can hand one clone to the gallery
/// and inspect the stored values through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored value, bypassing the trait.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get_raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !super::is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
