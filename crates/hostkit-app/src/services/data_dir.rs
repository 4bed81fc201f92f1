// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::ffi::OsString;
use std::path::PathBuf;

use directories::ProjectDirs;

const APP_ID: &str = "hostkit";

/// Return the application data directory, creating it if needed.
///
/// `HOSTKIT_DATA_DIR` overrides the platform convention.
pub fn data_dir() -> PathBuf {
    let dir = resolve(std::env::var_os("HOSTKIT_DATA_DIR"));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "cannot create data directory");
    }
    dir
}

fn resolve(custom: Option<OsString>) -> PathBuf {
    if let Some(custom) = custom.filter(|c| !c.is_empty()) {
        return PathBuf::from(custom);
    }
    match ProjectDirs::from("", "", APP_ID) {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => {
            // No home directory, e.g. inside an Android app sandbox
            let fallback = std::env::temp_dir().join(APP_ID);
            tracing::debug!(path = %fallback.display(), "no platform data dir, using temp");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve(Some(dir.path().into())), dir.path());
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(resolve(Some(OsString::new())), resolve(None));
    }

    #[test]
    fn default_is_app_specific() {
        let dir = resolve(None);
        assert!(dir.to_string_lossy().to_lowercase().contains(APP_ID));
    }
}
