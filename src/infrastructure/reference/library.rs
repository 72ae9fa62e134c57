// SPDX-License-Identifier: MPL-2.0
//! Content-addressed copies of added images.
//!
//! Adding a file copies its bytes into `<data_dir>/library/<blake3>.<ext>`
//! and mints `library:<blake3>.<ext>`. Identical content maps to the same
//! reference, and the copy survives the original being moved or deleted.

use super::path::canonical_file;
use crate::application::port::{ImageSource, MediaReferenceProvider, ReferenceError};
use crate::domain::gallery::ImageRef;
use crate::infrastructure::atomic::write_atomic;
use std::fs;
use std::path::{Path, PathBuf};

const SCHEME_PREFIX: &str = "library:";

/// Directory name for the library inside the application data directory.
pub const LIBRARY_DIR: &str = "library";

/// Longest extension kept on a stored copy.
const MAX_EXTENSION_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct LibraryReferenceProvider {
    dir: PathBuf,
}

impl LibraryReferenceProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a library under `<data_dir>/library`.
    #[must_use]
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(LIBRARY_DIR))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a `library:` reference to its stored file, rejecting names that
    /// could escape the library directory.
    fn stored_path(&self, image: &ImageRef) -> Option<PathBuf> {
        let name = image.as_str().strip_prefix(SCHEME_PREFIX)?;
        let (hash, ext) = match name.split_once('.') {
            Some((hash, ext)) => (hash, Some(ext)),
            None => (name, None),
        };
        let hash_ok = hash.len() == blake3::OUT_LEN * 2
            && hash.bytes().all(|b| b.is_ascii_hexdigit());
        let ext_ok = ext.is_none_or(|ext| {
            !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric())
        });
        (hash_ok && ext_ok).then(|| self.dir.join(name))
    }
}

/// Lowercased alphanumeric extension of `path`, if it has a usable one.
fn normalized_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    let usable = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.bytes().all(|b| b.is_ascii_alphanumeric());
    usable.then(|| ext.to_ascii_lowercase())
}

impl MediaReferenceProvider for LibraryReferenceProvider {
    fn name(&self) -> &'static str {
        "library"
    }

    fn mint(&mut self, source: &Path) -> Result<ImageRef, ReferenceError> {
        let file = canonical_file(source)?;
        let bytes = fs::read(&file)?;
        let hash = blake3::hash(&bytes).to_hex();

        let name = match normalized_extension(&file) {
            Some(ext) => format!("{}.{ext}", hash.as_str()),
            None => hash.as_str().to_string(),
        };
        let target = self.dir.join(&name);

        if !target.is_file() {
            fs::create_dir_all(&self.dir)?;
            let tmp = self.dir.join(format!("{name}.tmp"));
            write_atomic(&target, &tmp, &bytes)?;
            tracing::debug!(target = %target.display(), "stored library copy");
        }

        Ok(ImageRef::new(format!("{SCHEME_PREFIX}{name}")))
    }

    fn resolve(&self, image: &ImageRef) -> ImageSource {
        match self.stored_path(image) {
            Some(path) if path.is_file() => ImageSource::File(path),
            _ => ImageSource::Unavailable,
        }
    }

    fn release(&mut self, image: &ImageRef) {
        let Some(path) = self.stored_path(image) else {
            return;
        };
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed library copy"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to remove library copy");
            }
        }
    }
}
