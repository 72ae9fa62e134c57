// SPDX-License-Identifier: MPL-2.0
//! Gallery use cases.
//!
//! [`GalleryService`] owns the ordered gallery, the preview selection and the
//! two injected capabilities (snapshot store and reference provider). Every
//! operation runs synchronously to completion; every change to the gallery
//! is followed by a full snapshot write.

use crate::application::port::{
    ImageSource, MediaReferenceProvider, ReferenceError, SnapshotError, SnapshotStore,
};
use crate::domain::gallery::{Gallery, ImageRef, Selection};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Outcomes
// =============================================================================

/// Result of booting the gallery from the persisted snapshot.
#[derive(Debug, Default)]
pub struct MountReport {
    /// Number of references restored from the snapshot.
    pub restored: usize,
    /// Restored references that no longer resolve to image data.
    pub stale: usize,
    /// Problems that were recovered from (empty gallery, failed write, ...).
    pub errors: Vec<SnapshotError>,
}

/// Result of an add operation.
#[derive(Debug, Default)]
pub struct AddOutcome {
    /// Number of references appended.
    pub added: usize,
    /// Sources that could not be referenced, in input order.
    pub skipped: Vec<(PathBuf, ReferenceError)>,
    /// Outcome of the snapshot write, `None` when nothing changed.
    pub persisted: Option<Result<(), SnapshotError>>,
}

/// Result of a delete operation.
#[derive(Debug)]
pub struct DeleteOutcome {
    /// The reference that was removed.
    pub removed: ImageRef,
    /// Whether the provider was asked to release the reference.
    pub released: bool,
    /// Outcome of the snapshot write.
    pub persisted: Result<(), SnapshotError>,
}

// =============================================================================
// GalleryService
// =============================================================================

pub struct GalleryService {
    gallery: Gallery,
    selection: Selection,
    store: Box<dyn SnapshotStore>,
    provider: Box<dyn MediaReferenceProvider>,
}

impl fmt::Debug for GalleryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryService")
            .field("images", &self.gallery.len())
            .field("selection", &self.selection)
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl GalleryService {
    /// Boots the gallery: reads the snapshot once, falls back to an empty
    /// gallery if it is absent or unusable, then writes the resulting state
    /// back so the store always mirrors memory.
    pub fn mount(
        store: Box<dyn SnapshotStore>,
        provider: Box<dyn MediaReferenceProvider>,
    ) -> (Self, MountReport) {
        let mut report = MountReport::default();

        let gallery = match store.load_snapshot() {
            Ok(Some(images)) => Gallery::from_images(images),
            Ok(None) => Gallery::new(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unusable gallery snapshot");
                report.errors.push(err);
                Gallery::new()
            }
        };

        let mut service = Self {
            gallery,
            selection: Selection::default(),
            store,
            provider,
        };

        report.restored = service.gallery.len();
        report.stale = service
            .gallery
            .iter()
            .filter(|image| !service.provider.resolve(image).is_available())
            .count();

        if let Err(err) = service.persist() {
            report.errors.push(err);
        }

        tracing::info!(
            restored = report.restored,
            stale = report.stale,
            provider = service.provider.name(),
            "gallery mounted"
        );

        (service, report)
    }

    /// Mints a reference for each source and appends the successful ones in
    /// input order. An empty input is a no-op.
    pub fn add_images(&mut self, sources: &[PathBuf]) -> AddOutcome {
        let mut outcome = AddOutcome::default();
        if sources.is_empty() {
            return outcome;
        }

        let mut minted = Vec::with_capacity(sources.len());
        for source in sources {
            match self.provider.mint(source) {
                Ok(image) => {
                    tracing::debug!(source = %source.display(), reference = %image, "minted reference");
                    minted.push(image);
                }
                Err(err) => {
                    tracing::warn!(source = %source.display(), error = %err, "skipping image");
                    outcome.skipped.push((source.clone(), err));
                }
            }
        }

        outcome.added = self.gallery.append(minted);
        if outcome.added > 0 {
            outcome.persisted = Some(self.persist());
        }
        outcome
    }

    /// Removes the image at `index`. Returns `None` when `index` is out of range.
    pub fn delete_image(&mut self, index: usize) -> Option<DeleteOutcome> {
        let removed = self.gallery.remove(index)?;

        let released = !self.gallery.contains(&removed);
        if released {
            self.provider.release(&removed);
        }

        tracing::debug!(index, reference = %removed, released, "deleted image");

        Some(DeleteOutcome {
            removed,
            released,
            persisted: self.persist(),
        })
    }

    /// Enlarges `image`, replacing any previous selection.
    pub fn select(&mut self, image: ImageRef) {
        self.selection.select(image);
    }

    /// Enlarges the image at `index`. Returns `false` when `index` is out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.gallery.get(index) {
            Some(image) => {
                self.selection.select(image.clone());
                true
            }
            None => false,
        }
    }

    /// Closes the preview overlay.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Writes the full gallery to the snapshot store.
    ///
    /// # Errors
    ///
    /// Returns the store's [`SnapshotError`]; memory state is left untouched.
    pub fn persist(&mut self) -> Result<(), SnapshotError> {
        let result = self.store.save_snapshot(self.gallery.as_slice());
        if let Err(err) = &result {
            tracing::warn!(error = %err, "failed to persist gallery snapshot");
        }
        result
    }

    /// Resolves a reference through the active provider.
    #[must_use]
    pub fn resolve(&self, image: &ImageRef) -> ImageSource {
        self.provider.resolve(image)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
