// SPDX-License-Identifier: MPL-2.0
//! Key-value storage adapters and the JSON snapshot store built on them.
//!
//! - [`FileKeyValueStore`]: one file per key under a directory, atomic writes
//! - [`MemoryKeyValueStore`]: in-process map, used by tests and `--data-dir`-less runs
//! - [`JsonSnapshotStore`]: the gallery snapshot as a JSON array of strings

mod file;
mod memory;
mod snapshot;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use snapshot::{JsonSnapshotStore, SNAPSHOT_KEY};

/// Returns `true` if `key` can be stored by every adapter.
///
/// Keys are restricted to ASCII letters, digits, `-` and `_` so that they map
/// one-to-one onto file names.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= 128
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
