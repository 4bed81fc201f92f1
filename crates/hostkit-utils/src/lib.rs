// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostkit — the utilities facade handed to the UI layer at startup.

pub mod alerts;
pub mod facade;

pub use alerts::AlertChannel;
pub use facade::{Utils, UtilsBuilder};
