// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing notifications emitted after file operations.
//
// Each outcome carries the short message shown in a transient toast and a
// severity that drives its presentation in the UI.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an alert from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The requested operation happened.
    Success,
    /// Nothing was done, but nothing went wrong either.
    Notice,
    /// The operation was attempted and failed.
    Failure,
}

/// Outcome of a delete or touch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileAlert {
    Deleted,
    DeleteFailed,
    NotFound,
    Touched,
    TouchFailed,
}

impl FileAlert {
    /// The toast text for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Deleted => "File(s) deleted from device",
            Self::DeleteFailed => "Unable to delete file(s) from device",
            Self::NotFound => "File not found",
            Self::Touched => "File(s) touched on device",
            Self::TouchFailed => "Unable to open file(s) from device",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Deleted | Self::Touched => Severity::Success,
            Self::NotFound => Severity::Notice,
            Self::DeleteFailed | Self::TouchFailed => Severity::Failure,
        }
    }
}

impl std::fmt::Display for FileAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A single notification delivered to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: FileAlert,
    /// The path the operation was requested for.
    pub path: PathBuf,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(kind: FileAlert, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
