// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Resolution of command-line arguments into file references.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::FileUrl;

/// Resolve an argv-style list into absolute file references.
///
/// The first entry (the program name) is skipped. Relative arguments are
/// joined onto `cwd`; arguments that do not name an existing path are
/// dropped with a warning. Order is preserved.
pub fn resolve_file_args<I, S>(args: I, cwd: &Path) -> Vec<FileUrl>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.into_iter()
        .skip(1)
        .filter_map(|arg| {
            let arg = PathBuf::from(arg.into());
            let absolute = if arg.is_absolute() { arg } else { cwd.join(arg) };
            if absolute.exists() {
                Some(FileUrl::from_local_file(absolute))
            } else {
                tracing::warn!(path = %absolute.display(), "skipping nonexistent file argument");
                None
            }
        })
        .collect()
}

/// [`resolve_file_args`] applied to this process's arguments and working directory.
pub fn process_file_args() -> Result<Vec<FileUrl>> {
    let cwd = std::env::current_dir()?;
    Ok(resolve_file_args(std::env::args_os(), &cwd))
}
