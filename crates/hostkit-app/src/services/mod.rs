// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — startup wiring between the Dioxus UI and the facade.

pub mod config_store;
pub mod data_dir;

#[cfg(target_os = "android")]
pub mod ui_thread;
