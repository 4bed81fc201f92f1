// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Hostkit facade.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Sentinel reported for a version component the platform cannot provide.
pub const UNKNOWN_VERSION_COMPONENT: i32 = -1;

/// An absolute reference to a local file, rendered as a `file://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileUrl {
    path: PathBuf,
}

impl FileUrl {
    /// Wrap an already-absolute path.
    pub fn from_local_file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl std::fmt::Display for FileUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let raw = url_path_bytes(&self.path);
        f.write_str("file://")?;
        // Drive-letter paths (C:/...) need the extra slash of an empty host.
        if raw.first() != Some(&b'/') {
            f.write_str("/")?;
        }
        for &byte in raw.iter() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => write!(f, "{}", byte as char)?,
                b'-' | b'.' | b'_' | b'~' | b'/' | b':' | b'@' | b'!' | b'$' | b'&' | b'\''
                | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' => write!(f, "{}", byte as char)?,
                other => write!(f, "%{other:02X}")?,
            }
        }
        Ok(())
    }
}

/// Raw path bytes; a Unix path may hold any byte except NUL, backslash included.
#[cfg(unix)]
fn url_path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

/// UTF-8 path bytes with backslash separators turned into `/`.
#[cfg(not(unix))]
fn url_path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().replace('\\', "/").into_bytes())
}

/// Host operating system version as reported by the platform bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsVersion {
    pub name: String,
    pub major: i32,
    pub minor: i32,
    pub micro: i32,
}

impl OsVersion {
    /// The value reported when the platform has no version query.
    pub fn unknown() -> Self {
        Self {
            name: String::new(),
            major: UNKNOWN_VERSION_COMPONENT,
            minor: UNKNOWN_VERSION_COMPONENT,
            micro: UNKNOWN_VERSION_COMPONENT,
        }
    }

    /// Parse a dotted version string such as `"13.5.1"` or `"10.0.19045.3803"`.
    ///
    /// Components after the third are ignored and missing minor/micro
    /// components read as 0. An unparseable major component yields the
    /// unknown sentinels while keeping `name`.
    pub fn parse(name: impl Into<String>, dotted: &str) -> Self {
        let mut parts = dotted.trim().split('.').map(leading_number);
        let name = name.into();
        match parts.next().flatten() {
            Some(major) => Self {
                name,
                major,
                minor: parts.next().flatten().unwrap_or(0),
                micro: parts.next().flatten().unwrap_or(0),
            },
            None => Self {
                name,
                ..Self::unknown()
            },
        }
    }

    pub fn is_known(&self) -> bool {
        self.major != UNKNOWN_VERSION_COMPONENT
    }

    /// `major * 1_000_000 + minor * 1000 + micro` (`-1001001` when unknown).
    pub fn binary(&self) -> i32 {
        self.major
            .saturating_mul(1_000_000)
            .saturating_add(self.minor.saturating_mul(1000))
            .saturating_add(self.micro)
    }
}

fn leading_number(part: &str) -> Option<i32> {
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Version of the GUI toolkit hosting the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitVersion {
    pub name: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ToolkitVersion {
    pub fn new(name: impl Into<String>, major: u32, minor: u32, patch: u32) -> Self {
        Self {
            name: name.into(),
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for ToolkitVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Unit system used when rendering byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataSizeFormat {
    /// 1024-based with `kB`, `MB`, ... quantifiers.
    #[default]
    Traditional,
    /// 1024-based with `KiB`, `MiB`, ... quantifiers.
    Iec,
    /// 1000-based with `kB`, `MB`, ... quantifiers.
    Si,
}

impl DataSizeFormat {
    pub fn base(self) -> u64 {
        match self {
            Self::Traditional | Self::Iec => 1024,
            Self::Si => 1000,
        }
    }

    /// Unit label for `base^power`, `power` in `1..=6`.
    pub fn unit(self, power: u32) -> &'static str {
        const SI: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];
        const IEC: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];
        let idx = (power.clamp(1, 6) - 1) as usize;
        match self {
            Self::Traditional | Self::Si => SI[idx],
            Self::Iec => IEC[idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_url_plain_path() {
        let url = FileUrl::from_local_file("/home/user/song.mp3");
        assert_eq!(url.to_string(), "file:///home/user/song.mp3");
    }

    #[test]
    fn file_url_escapes_spaces_and_hash() {
        let url = FileUrl::from_local_file("/tmp/my track #1.ogg");
        assert_eq!(url.to_string(), "file:///tmp/my%20track%20%231.ogg");
    }

    #[cfg(windows)]
    #[test]
    fn file_url_drive_letter() {
        let url = FileUrl::from_local_file("C:\\Music\\a.flac");
        assert_eq!(url.to_string(), "file:///C:/Music/a.flac");
    }

    #[cfg(unix)]
    #[test]
    fn file_url_keeps_backslash_in_unix_name() {
        let url = FileUrl::from_local_file("/tmp/a\\b.txt");
        assert_eq!(url.to_string(), "file:///tmp/a%5Cb.txt");
    }

    #[cfg(unix)]
    #[test]
    fn file_url_encodes_raw_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/\xFF.wav"));
        assert_eq!(FileUrl::from_local_file(path).to_string(), "file:///tmp/%FF.wav");
    }

    #[test]
    fn os_version_parse_full() {
        let v = OsVersion::parse("macOS", "13.5.1");
        assert_eq!((v.major, v.minor, v.micro), (13, 5, 1));
        assert_eq!(v.binary(), 13_005_001);
    }

    #[test]
    fn os_version_parse_short_and_long() {
        let v = OsVersion::parse("Android", "14");
        assert_eq!((v.major, v.minor, v.micro), (14, 0, 0));

        let v = OsVersion::parse("Windows", "10.0.19045.3803");
        assert_eq!((v.major, v.minor, v.micro), (10, 0, 19045));
    }

    #[test]
    fn os_version_unknown_sentinels() {
        let v = OsVersion::unknown();
        assert!(!v.is_known());
        assert_eq!(v.name, "");
        assert_eq!(v.binary(), -1_001_001);

        let v = OsVersion::parse("Haiku", "beta");
        assert_eq!(v.name, "Haiku");
        assert_eq!(v.major, UNKNOWN_VERSION_COMPONENT);
    }

    #[test]
    fn toolkit_version_display() {
        assert_eq!(ToolkitVersion::new("dioxus", 0, 7, 2).to_string(), "0.7.2");
    }

    #[test]
    fn data_size_units() {
        assert_eq!(DataSizeFormat::Traditional.unit(1), "kB");
        assert_eq!(DataSizeFormat::Iec.unit(3), "GiB");
        assert_eq!(DataSizeFormat::Si.base(), 1000);
    }
}
