// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostkit — Core types, errors, and the pure helpers behind the utilities facade.

pub mod alert;
pub mod args;
pub mod config;
pub mod error;
pub mod files;
pub mod format;
pub mod locale;
pub mod markup;
pub mod tls;
pub mod types;

pub use alert::{Alert, FileAlert};
pub use config::UtilsConfig;
pub use error::HostkitError;
pub use locale::NumberLocale;
pub use types::*;
