// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android storage permission model by API level.

/// Last API level on which `READ_EXTERNAL_STORAGE` and
/// `WRITE_EXTERNAL_STORAGE` can be granted (Android 12L).
pub const LEGACY_STORAGE_MAX_SDK: i32 = 32;

/// Whether the legacy storage permissions are meaningful at `sdk_int`.
///
/// Above [`LEGACY_STORAGE_MAX_SDK`] they read as denied whatever the user
/// chooses, so checking them would prompt forever.
pub fn legacy_storage_permissions_apply(sdk_int: i32) -> bool {
    sdk_int <= LEGACY_STORAGE_MAX_SDK
}
