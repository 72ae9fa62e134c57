// SPDX-License-Identifier: MPL-2.0
//! Crash-safe file replacement shared by the storage and library adapters.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes `bytes` to `tmp`, syncs it and renames it over `target`.
///
/// Readers see either the previous content of `target` or the new one. On
/// any failure the temp file is removed before the error is returned.
pub(crate) fn write_atomic(target: &Path, tmp: &Path, bytes: &[u8]) -> io::Result<()> {
    let result = write_then_rename(target, tmp, bytes);
    if result.is_err() {
        let _ = fs::remove_file(tmp);
    }
    result
}

fn write_then_rename(target: &Path, tmp: &Path, bytes: &[u8]) -> io::Result<()> {
    {
        let mut file = fs::File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(tmp, target)
}
