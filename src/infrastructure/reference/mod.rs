// SPDX-License-Identifier: MPL-2.0
//! Media reference provider adapters.
//!
//! | Mode      | Reference                    | Survives restart | Survives file move |
//! |-----------|------------------------------|------------------|--------------------|
//! | `path`    | `file://<canonical path>`    | yes              | no                 |
//! | `session` | `session:<nonce>-<n>`        | no               | yes (bytes copied) |
//! | `library` | `library:<blake3>.<ext>`     | yes              | yes                |

mod library;
mod path;
mod session;

pub use library::{LibraryReferenceProvider, LIBRARY_DIR};
pub use path::PathReferenceProvider;
pub use session::SessionReferenceProvider;

use crate::application::port::MediaReferenceProvider;
use crate::config::ReferenceMode;
use std::path::Path;

/// Builds the provider for `mode`.
///
/// The library needs a data directory; without one it degrades to session
/// references so adding images keeps working.
pub fn build_provider(
    mode: ReferenceMode,
    data_dir: Option<&Path>,
) -> Box<dyn MediaReferenceProvider> {
    match (mode, data_dir) {
        (ReferenceMode::Path, _) => Box::new(PathReferenceProvider::new()),
        (ReferenceMode::Session, _) => Box::new(SessionReferenceProvider::new()),
        (ReferenceMode::Library, Some(dir)) => {
            Box::new(LibraryReferenceProvider::in_data_dir(dir))
        }
        (ReferenceMode::Library, None) => {
            tracing::warn!("no data directory for the image library, using session references");
            Box::new(SessionReferenceProvider::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provider_matches_mode() {
        let temp_dir = tempdir().expect("create temp dir");
        let dir = Some(temp_dir.path());

        assert_eq!(build_provider(ReferenceMode::Path, dir).name(), "path");
        assert_eq!(build_provider(ReferenceMode::Session, dir).name(), "session");
        assert_eq!(build_provider(ReferenceMode::Library, dir).name(), "library");
    }

    #[test]
    fn library_without_data_dir_uses_session() {
        assert_eq!(build_provider(ReferenceMode::Library, None).name(), "session");
    }
}
