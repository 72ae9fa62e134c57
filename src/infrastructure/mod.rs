// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, backed by the filesystem or process memory.
//!
//! # Available Adapters
//!
//! - [`storage`]: Key-value stores and the JSON snapshot store
//!   (implements [`KeyValueStore`] and [`SnapshotStore`])
//! - [`reference`]: Path, session and library reference providers
//!   (implements [`MediaReferenceProvider`])
//!
//! [`KeyValueStore`]: crate::application::port::KeyValueStore
//! [`SnapshotStore`]: crate::application::port::SnapshotStore
//! [`MediaReferenceProvider`]: crate::application::port::MediaReferenceProvider

mod atomic;
pub mod reference;
pub mod storage;

pub use reference::{
    build_provider, LibraryReferenceProvider, PathReferenceProvider, SessionReferenceProvider,
};
pub use storage::{FileKeyValueStore, JsonSnapshotStore, MemoryKeyValueStore, SNAPSHOT_KEY};
