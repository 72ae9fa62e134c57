// SPDX-License-Identifier: MPL-2.0
//! References that point straight at the user's file.

use crate::application::port::{ImageSource, MediaReferenceProvider, ReferenceError};
use crate::domain::gallery::ImageRef;
use std::path::{Path, PathBuf};

const SCHEME_PREFIX: &str = "file://";

/// Mints `file://<canonical path>` references.
///
/// References stay valid for as long as the file stays where it was when it
/// was added. Nothing is copied, so `release` has nothing to free.
#[derive(Debug, Default, Clone)]
pub struct PathReferenceProvider;

impl PathReferenceProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts the filesystem path from a `file://` reference.
    #[must_use]
    pub fn path_of(image: &ImageRef) -> Option<PathBuf> {
        image
            .as_str()
            .strip_prefix(SCHEME_PREFIX)
            .filter(|rest| !rest.is_empty())
            .map(PathBuf::from)
    }
}

/// Canonicalizes `source` and checks that it names a regular file.
pub(super) fn canonical_file(source: &Path) -> Result<PathBuf, ReferenceError> {
    let canonical = source.canonicalize().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            ReferenceError::NotFound(source.to_path_buf())
        } else {
            ReferenceError::from(err)
        }
    })?;
    if !canonical.is_file() {
        return Err(ReferenceError::NotAFile(source.to_path_buf()));
    }
    Ok(canonical)
}

impl MediaReferenceProvider for PathReferenceProvider {
    fn name(&self) -> &'static str {
        "path"
    }

    fn mint(&mut self, source: &Path) -> Result<ImageRef, ReferenceError> {
        let canonical = canonical_file(source)?;
        // References are strings; a lossy conversion would point elsewhere.
        let text = canonical
            .to_str()
            .ok_or_else(|| ReferenceError::NonUtf8Path(source.to_path_buf()))?;
        Ok(ImageRef::new(format!("{SCHEME_PREFIX}{text}")))
    }

    fn resolve(&self, image: &ImageRef) -> ImageSource {
        match Self::path_of(image) {
            Some(path) if path.is_file() => ImageSource::File(path),
            _ => ImageSource::Unavailable,
        }
    }

    fn release(&mut self, _image: &ImageRef) {}
}
