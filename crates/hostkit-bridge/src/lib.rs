// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Hostkit — Native platform bridge abstractions.
//!
//! This crate defines the capability traits the utilities facade calls into
//! and selects one implementation per target platform at build time:
//! Android (ART/JNI) or desktop. It also defines the executor seam used for
//! fire-and-forget work that must run on a platform-owned thread.

pub mod dispatch;
pub mod permissions;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod desktop;

use std::sync::Arc;

pub use dispatch::{InlineExecutor, TokioExecutor, UiExecutor, UiTask};
pub use traits::PlatformBridge;

/// Creates the bridge implementation for the target operating system.
///
/// Service acquisition is best-effort: a bridge is always returned, with
/// missing capabilities reported through its trait methods.
pub fn platform_bridge() -> Arc<dyn PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        // Android: Uses `jni-rs` to invoke methods on the JVM/ART.
        Arc::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        Arc::new(desktop::DesktopBridge::new())
    }
}
