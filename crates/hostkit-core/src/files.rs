// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filesystem predicates and the delete / touch operations behind file alerts.

use std::fs::OpenOptions;
use std::path::Path;

use crate::alert::FileAlert;

/// True when `path` names an existing file or directory.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// True only when `path` names an existing regular file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Remove the file at `path`.
///
/// A missing path is reported as [`FileAlert::NotFound`] without touching
/// the filesystem.
pub fn delete_file(path: impl AsRef<Path>) -> FileAlert {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "delete requested for missing file");
        return FileAlert::NotFound;
    }
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "file deleted");
            FileAlert::Deleted
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "file delete failed");
            FileAlert::DeleteFailed
        }
    }
}

/// Create `path` or truncate it to zero length.
///
/// Existing content is discarded; this is not an mtime-only update.
pub fn touch_file(path: impl AsRef<Path>) -> FileAlert {
    let path = path.as_ref();
    let opened = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path);
    match opened.and_then(|file| file.sync_all()) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "file touched");
            FileAlert::Touched
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "file touch failed");
            FileAlert::TouchFailed
        }
    }
}
