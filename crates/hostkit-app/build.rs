// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Records the resolved Dioxus version from the workspace lockfile so the
// facade can report the toolkit actually linked.

use std::path::PathBuf;

/// Used when the lockfile is unavailable; keep in step with the workspace pin.
const PINNED_DIOXUS: &str = "0.7.0";

fn locked_version(lockfile: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{package}\"");
    let mut lines = lockfile.lines().map(str::trim);
    while let Some(line) = lines.next() {
        if line == name_line {
            return lines
                .next()
                .and_then(|v| v.strip_prefix("version = \""))
                .and_then(|v| v.strip_suffix('"'))
                .map(str::to_owned);
        }
    }
    None
}

fn main() {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let lockfile = manifest_dir.join("..").join("..").join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lockfile.display());
    println!("cargo:rerun-if-changed=build.rs");

    let version = std::fs::read_to_string(&lockfile)
        .ok()
        .and_then(|contents| locked_version(&contents, "dioxus"))
        .unwrap_or_else(|| {
            println!("cargo:warning=dioxus not found in Cargo.lock, reporting {PINNED_DIOXUS}");
            PINNED_DIOXUS.to_owned()
        });
    println!("cargo:rustc-env=HOSTKIT_DIOXUS_VERSION={version}");
}
