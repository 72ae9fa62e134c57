// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The gallery service driving add, delete, preview and persistence
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::gallery::GalleryService;
//! use iced_gallery::infrastructure::reference::PathReferenceProvider;
//! use iced_gallery::infrastructure::storage::{JsonSnapshotStore, MemoryKeyValueStore};
//!
//! let store = JsonSnapshotStore::new(MemoryKeyValueStore::new());
//! let (service, report) =
//!     GalleryService::mount(Box::new(store), Box::new(PathReferenceProvider::new()));
//! ```

pub mod gallery;
pub mod port;

pub use gallery::{AddOutcome, DeleteOutcome, GalleryService, MountReport};
