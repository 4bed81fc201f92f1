// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// Each capability the facade needs from the host is a separate trait so a
// platform can be reasoned about one concern at a time. Platforms that lack
// a capability implement it as a documented no-op or fixed default rather
// than an error, because the facade treats absence as a normal condition.

use std::time::Duration;

use hostkit_core::OsVersion;
use hostkit_core::error::Result;

/// Unified bridge that groups all native capabilities.
///
/// Implementations are shared between the UI thread and the executor that
/// runs fire-and-forget work, hence `Send + Sync`.
pub trait PlatformBridge:
    NativeHaptics + NativeScreen + NativeStorage + NativeOsInfo + Send + Sync
{
    /// Human-readable platform name (e.g. "Android", "Desktop").
    fn platform_name(&self) -> &str;
}

/// Vibration feedback.
pub trait NativeHaptics {
    /// Whether a haptic service was obtained when the bridge was created.
    fn has_vibrator(&self) -> bool;

    /// Pulse the vibrator for `duration`.
    fn vibrate(&self, duration: Duration) -> Result<()>;
}

/// Display power management.
pub trait NativeScreen {
    /// Set or clear the host's keep-display-awake flag.
    fn set_keep_screen_on(&self, on: bool) -> Result<()>;
}

/// Runtime storage permissions.
pub trait NativeStorage {
    /// Whether external-storage read and write are granted.
    ///
    /// Platforms without a runtime permission model report `true`.
    fn storage_permissions_granted(&self) -> Result<bool>;
}

/// Operating system identification.
pub trait NativeOsInfo {
    /// Current OS version; [`OsVersion::unknown`] when it cannot be queried.
    fn os_version(&self) -> OsVersion;
}
