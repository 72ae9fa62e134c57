// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`storage`]: Durable key-value storage (the gallery's "local storage")
//! - [`snapshot`]: Loading and saving the persisted gallery snapshot
//! - [`reference`]: Minting and resolving image references
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - every operation completes inside the update call
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::{SnapshotStore, MediaReferenceProvider};
//! use std::path::Path;
//!
//! fn add_one(store: &mut impl SnapshotStore, provider: &mut impl MediaReferenceProvider) {
//!     let image = provider.mint(Path::new("/tmp/cat.png")).unwrap();
//!     store.save_snapshot(&[image]).unwrap();
//! }
//! ```

pub mod reference;
pub mod snapshot;
pub mod storage;

// Re-export main types for convenience
pub use reference::{ImageSource, MediaReferenceProvider, ReferenceError};
pub use snapshot::{SnapshotError, SnapshotStore};
pub use storage::{KeyValueStore, StorageError};
