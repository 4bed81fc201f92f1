// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge for Linux, macOS, Windows, and CI builds.
//
// Desktops have no vibrator, no wake-lock flag reachable without a window
// handle, and no runtime storage permissions, so those capabilities are
// fixed defaults. Only the OS version is actually queried.

use std::time::Duration;

use hostkit_core::OsVersion;
use hostkit_core::error::Result;

use crate::traits::*;

/// Bridge returned on every non-Android target.
#[derive(Debug, Clone)]
pub struct DesktopBridge {
    os: OsVersion,
}

impl DesktopBridge {
    /// Create the bridge, querying the OS version once.
    pub fn new() -> Self {
        let os = detect_os_version();
        tracing::debug!(name = %os.name, major = os.major, minor = os.minor, "desktop OS detected");
        Self { os }
    }

    /// A bridge reporting a fixed OS version.
    pub fn with_os_version(os: OsVersion) -> Self {
        Self { os }
    }
}

impl Default for DesktopBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop"
    }
}

impl NativeHaptics for DesktopBridge {
    fn has_vibrator(&self) -> bool {
        false
    }

    fn vibrate(&self, _duration: Duration) -> Result<()> {
        tracing::debug!("NativeHaptics::vibrate ignored on desktop");
        Ok(())
    }
}

impl NativeScreen for DesktopBridge {
    fn set_keep_screen_on(&self, on: bool) -> Result<()> {
        tracing::debug!(on, "NativeScreen::set_keep_screen_on ignored on desktop");
        Ok(())
    }
}

impl NativeStorage for DesktopBridge {
    fn storage_permissions_granted(&self) -> Result<bool> {
        Ok(true)
    }
}

impl NativeOsInfo for DesktopBridge {
    fn os_version(&self) -> OsVersion {
        self.os.clone()
    }
}

// ---------------------------------------------------------------------------
// OS version detection
// ---------------------------------------------------------------------------

#[cfg(target_os = "linux")]
fn detect_os_version() -> OsVersion {
    match std::fs::read_to_string("/etc/os-release") {
        Ok(contents) => parse_os_release(&contents),
        Err(e) => {
            tracing::warn!(error = %e, "cannot read /etc/os-release");
            OsVersion::unknown()
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_os_version() -> OsVersion {
    match command_stdout("sw_vers", &["-productVersion"]) {
        Some(out) => OsVersion::parse("macOS", &out),
        None => OsVersion::unknown(),
    }
}

#[cfg(target_os = "windows")]
fn detect_os_version() -> OsVersion {
    match command_stdout("cmd", &["/C", "ver"]) {
        Some(out) => parse_windows_ver(&out),
        None => OsVersion::unknown(),
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn detect_os_version() -> OsVersion {
    OsVersion::unknown()
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    match std::process::Command::new(program).args(args).output() {
        Ok(out) if out.status.success() => Some(String::from_utf8_lossy(&out.stdout).into_owned()),
        Ok(out) => {
            tracing::warn!(program, status = %out.status, "version query exited unsuccessfully");
            None
        }
        Err(e) => {
            tracing::warn!(program, error = %e, "version query failed to start");
            None
        }
    }
}

/// Extract `NAME` and `VERSION_ID` from an os-release(5) document.
pub fn parse_os_release(contents: &str) -> OsVersion {
    let mut name = None;
    let mut version_id = None;
    for line in contents.lines() {
        let Some((key, value)) = line.trim().split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(['"', '\'']);
        match key {
            "NAME" => name = Some(value.to_owned()),
            "VERSION_ID" => version_id = Some(value.to_owned()),
            _ => {}
        }
    }
    match (name, version_id) {
        (Some(name), Some(version)) => OsVersion::parse(name, &version),
        // Rolling releases carry a name but no version.
        (Some(name), None) => OsVersion {
            name,
            ..OsVersion::unknown()
        },
        _ => OsVersion::unknown(),
    }
}

/// Extract the version from `ver` output: `Microsoft Windows [Version 10.0.19045.3803]`.
pub fn parse_windows_ver(output: &str) -> OsVersion {
    output
        .split_once("Version ")
        .map(|(_, rest)| rest.trim_end().trim_end_matches(']'))
        .map(|version| OsVersion::parse("Windows", version))
        .unwrap_or_else(OsVersion::unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_capabilities_are_fixed_defaults() {
        let bridge = DesktopBridge::with_os_version(OsVersion::unknown());
        assert!(!bridge.has_vibrator());
        assert!(bridge.vibrate(Duration::from_millis(500)).is_ok());
        assert!(bridge.set_keep_screen_on(true).is_ok());
        assert!(bridge.storage_permissions_granted().unwrap());
        assert_eq!(bridge.platform_name(), "Desktop");
    }

    #[test]
    fn os_release_with_version() {
        let doc = "NAME=\"Ubuntu\"\nVERSION_ID=\"22.04\"\nID=ubuntu\n";
        let v = parse_os_release(doc);
        assert_eq!(v.name, "Ubuntu");
        assert_eq!((v.major, v.minor, v.micro), (22, 4, 0));
    }

    #[test]
    fn os_release_rolling() {
        let v = parse_os_release("NAME=\"Arch Linux\"\nBUILD_ID=rolling\n");
        assert_eq!(v.name, "Arch Linux");
        assert_eq!(v.major, -1);
    }

    #[test]
    fn os_release_empty() {
        assert_eq!(parse_os_release(""), OsVersion::unknown());
    }

    #[test]
    fn windows_ver_output() {
        let v = parse_windows_ver("\r\nMicrosoft Windows [Version 10.0.19045.3803]\r\n");
        assert_eq!(v.name, "Windows");
        assert_eq!((v.major, v.minor, v.micro), (10, 0, 19045));
        assert_eq!(parse_windows_ver("garbage"), OsVersion::unknown());
    }

    #[test]
    fn detected_version_is_stable() {
        let bridge = DesktopBridge::new();
        assert_eq!(bridge.os_version(), bridge.os_version());
    }
}
