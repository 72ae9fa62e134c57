// SPDX-License-Identifier: MPL-2.0
//! Gallery snapshot stored as a JSON array of strings under a fixed key.

use crate::application::port::{KeyValueStore, SnapshotError, SnapshotStore};
use crate::domain::gallery::ImageRef;

/// Storage key holding the gallery snapshot.
pub const SNAPSHOT_KEY: &str = "imageURLs";

/// [`SnapshotStore`] that serializes the gallery into any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore<S> {
    store: S,
}

impl<S: KeyValueStore> JsonSnapshotStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying key-value store.
    pub fn inner(&self) -> &S {
        &self.store
    }
}

/// Parses a stored snapshot. Anything other than an array of strings is
/// rejected, including `null` and arrays with non-string items.
pub fn parse_snapshot(raw: &str) -> Result<Vec<ImageRef>, SnapshotError> {
    let handles: Vec<String> =
        serde_json::from_str(raw).map_err(|err| SnapshotError::Parse(err.to_string()))?;
    Ok(handles.into_iter().map(ImageRef::new).collect())
}

/// Serializes references in order as a compact JSON array.
pub fn serialize_snapshot(images: &[ImageRef]) -> String {
    let handles: Vec<&str> = images.iter().map(ImageRef::as_str).collect();
    // A slice of strings always serializes.
    serde_json::to_string(&handles).unwrap_or_else(|_| String::from("[]"))
}

impl<S: KeyValueStore> SnapshotStore for JsonSnapshotStore<S> {
    fn load_snapshot(&self) -> Result<Option<Vec<ImageRef>>, SnapshotError> {
        let Some(raw) = self.store.get(SNAPSHOT_KEY).map_err(SnapshotError::Read)? else {
            return Ok(None);
        };
        parse_snapshot(&raw).map(Some)
    }

    fn save_snapshot(&mut self, images: &[ImageRef]) -> Result<(), SnapshotError> {
        self.store
            .set(SNAPSHOT_KEY, &serialize_snapshot(images))
            .map_err(SnapshotError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StorageError;
    use crate::infrastructure::storage::MemoryKeyValueStore;

    fn store_with(raw: &str) -> JsonSnapshotStore<MemoryKeyValueStore> {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(SNAPSHOT_KEY, raw).unwrap();
        JsonSnapshotStore::new(kv)
    }

    #[test]
    fn absent_key_loads_as_none() {
        let store = JsonSnapshotStore::new(MemoryKeyValueStore::new());
        assert_eq!(store.load_snapshot(), Ok(None));
    }

    #[test]
    fn array_of_strings_loads_in_order() {
        let store = store_with(r#"["u1","u2","u1"]"#);
        let images = store.load_snapshot().unwrap().unwrap();
        let handles: Vec<_> = images.iter().map(ImageRef::as_str).collect();
        assert_eq!(handles, vec!["u1", "u2", "u1"]);
    }

    #[test]
    fn empty_array_loads_as_empty_gallery() {
        let store = store_with("[]");
        assert_eq!(store.load_snapshot(), Ok(Some(Vec::new())));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let store = store_with("[\"u1\",");
        assert!(matches!(store.load_snapshot(), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        for raw in [r#"{"a":1}"#, "null", "42", r#"["ok", 3]"#] {
            let store = store_with(raw);
            assert!(
                matches!(store.load_snapshot(), Err(SnapshotError::Parse(_))),
                "expected parse error for {raw}"
            );
        }
    }

    #[test]
    fn save_writes_compact_array() {
        let mut store = JsonSnapshotStore::new(MemoryKeyValueStore::new());
        store
            .save_snapshot(&[ImageRef::from("a"), ImageRef::from("b \"q\"")])
            .unwrap();
        assert_eq!(
            store.inner().get_raw(SNAPSHOT_KEY),
            Some(r#"["a","b \"q\""]"#.to_string())
        );
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io("denied".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only".into()))
        }
    }

    #[test]
    fn store_failures_map_to_read_and_write_errors() {
        let mut store = JsonSnapshotStore::new(BrokenStore);
        assert!(matches!(store.load_snapshot(), Err(SnapshotError::Read(_))));
        assert!(matches!(
            store.save_snapshot(&[]),
            Err(SnapshotError::Write(_))
        ));
    }
}
