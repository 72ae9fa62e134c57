// SPDX-License-Identifier: MPL-2.0
//! Test doubles shared by unit tests.
//!
//! [`FakeProvider`] mints `fake:<path>` references without touching the
//! filesystem; anything with another scheme resolves as unavailable.
//! [`FailingSnapshotStore`] starts empty and rejects every write.

use crate::application::port::{
    ImageSource, MediaReferenceProvider, ReferenceError, SnapshotError, SnapshotStore,
    StorageError,
};
use crate::domain::gallery::ImageRef;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider that never touches the filesystem.
#[derive(Debug, Default)]
pub struct FakeProvider {
    fail_on: Option<String>,
    pub released: Vec<ImageRef>,
}

impl FakeProvider {
    /// Rejects any source whose file name equals `file_name`.
    pub fn failing_on(file_name: &str) -> Self {
        Self {
            fail_on: Some(file_name.to_string()),
            released: Vec::new(),
        }
    }
}

impl MediaReferenceProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn mint(&mut self, source: &Path) -> Result<ImageRef, ReferenceError> {
        let name = source.file_name().and_then(|n| n.to_str());
        if name.is_some() && name == self.fail_on.as_deref() {
            return Err(ReferenceError::NotFound(PathBuf::from(source)));
        }
        Ok(ImageRef::new(format!("fake:{}", source.display())))
    }

    fn resolve(&self, image: &ImageRef) -> ImageSource {
        if image.scheme() == Some("fake") {
            ImageSource::Memory(Arc::from(image.as_str().as_bytes()))
        } else {
            ImageSource::Unavailable
        }
    }

    fn release(&mut self, image: &ImageRef) {
        self.released.push(image.clone());
    }
}

/// Snapshot store whose backing medium is always unavailable.
#[derive(Debug, Default)]
pub struct FailingSnapshotStore;

impl SnapshotStore for FailingSnapshotStore {
    fn load_snapshot(&self) -> Result<Option<Vec<ImageRef>>, SnapshotError> {
        Ok(None)
    }

    fn save_snapshot(&mut self, _images: &[ImageRef]) -> Result<(), SnapshotError> {
        Err(SnapshotError::Write(StorageError::Unavailable))
    }
}
