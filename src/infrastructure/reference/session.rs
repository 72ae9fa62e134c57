// SPDX-License-Identifier: MPL-2.0
//! Process-scoped references backed by in-memory bytes.
//!
//! A `session:` reference is only meaningful to the provider instance that
//! minted it. Once the process exits, persisted `session:` references
//! resolve as [`ImageSource::Unavailable`].

use super::path::canonical_file;
use crate::application::port::{ImageSource, MediaReferenceProvider, ReferenceError};
use crate::domain::gallery::ImageRef;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const SCHEME: &str = "session";

#[derive(Debug)]
pub struct SessionReferenceProvider {
    nonce: String,
    counter: u64,
    blobs: HashMap<ImageRef, Arc<[u8]>>,
}

impl Default for SessionReferenceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionReferenceProvider {
    /// Creates a provider with a nonce unique to this process start.
    #[must_use]
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let mut hasher = blake3::Hasher::new();
        hasher.update(&std::process::id().to_le_bytes());
        hasher.update(&nanos.to_le_bytes());
        let hex = hasher.finalize().to_hex();
        Self::with_nonce(&hex.as_str()[..12])
    }

    /// Creates a provider with a fixed nonce.
    #[must_use]
    pub fn with_nonce(nonce: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            counter: 0,
            blobs: HashMap::new(),
        }
    }

    /// Number of references currently holding bytes.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.blobs.len()
    }
}

impl MediaReferenceProvider for SessionReferenceProvider {
    fn name(&self) -> &'static str {
        "session"
    }

    fn mint(&mut self, source: &Path) -> Result<ImageRef, ReferenceError> {
        let file = canonical_file(source)?;
        let bytes = fs::read(&file)?;

        self.counter += 1;
        let image = ImageRef::new(format!("{SCHEME}:{}-{}", self.nonce, self.counter));
        self.blobs.insert(image.clone(), Arc::from(bytes));
        Ok(image)
    }

    fn resolve(&self, image: &ImageRef) -> ImageSource {
        self.blobs
            .get(image)
            .map_or(ImageSource::Unavailable, |bytes| {
                ImageSource::Memory(Arc::clone(bytes))
            })
    }

    fn release(&mut self, image: &ImageRef) {
        if self.blobs.remove(image).is_some() {
            tracing::debug!(reference = %image, "released session bytes");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn image_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, bytes).expect("write image");
        path
    }

    #[test]
    fn each_mint_gets_a_fresh_reference() {
        let temp_dir = tempdir().expect("create temp dir");
        let file = image_file(temp_dir.path(), "a.png", b"aaa");

        let mut provider = SessionReferenceProvider::with_nonce("n0");
        let first = provider.mint(&file).expect("mint");
        let second = provider.mint(&file).expect("mint");

        assert_eq!(first.as_str(), "session:n0-1");
        assert_eq!(second.as_str(), "session:n0-2");
        assert_eq!(provider.live_count(), 2);
    }

    #[test]
    fn reference_resolves_to_bytes_read_at_mint_time() {
        let temp_dir = tempdir().expect("create temp dir");
        let file = image_file(temp_dir.path(), "a.png", b"original");

        let mut provider = SessionReferenceProvider::with_nonce("n0");
        let image = provider.mint(&file).expect("mint");
        fs::write(&file, b"changed").expect("overwrite");

        assert_eq!(
            provider.resolve(&image),
            ImageSource::Memory(Arc::from(&b"original"[..]))
        );
    }

    #[test]
    fn references_do_not_survive_a_new_session() {
        let temp_dir = tempdir().expect("create temp dir");
        let file = image_file(temp_dir.path(), "a.png", b"aaa");

        let mut first_run = SessionReferenceProvider::new();
        let image = first_run.mint(&file).expect("mint");

        let second_run = SessionReferenceProvider::new();
        assert_eq!(second_run.resolve(&image), ImageSource::Unavailable);
    }

    #[test]
    fn release_frees_bytes() {
        let temp_dir = tempdir().expect("create temp dir");
        let file = image_file(temp_dir.path(), "a.png", b"aaa");

        let mut provider = SessionReferenceProvider::with_nonce("n0");
        let image = provider.mint(&file).expect("mint");
        provider.release(&image);
        provider.release(&image);

        assert_eq!(provider.live_count(), 0);
        assert_eq!(provider.resolve(&image), ImageSource::Unavailable);
    }

    #[test]
    fn missing_file_fails_to_mint() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut provider = SessionReferenceProvider::with_nonce("n0");
        assert!(matches!(
            provider.mint(&temp_dir.path().join("nope.png")),
            Err(ReferenceError::NotFound(_))
        ));
        assert_eq!(provider.live_count(), 0);
    }
}
