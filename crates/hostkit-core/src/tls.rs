// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Secure-transport capability check.

/// Whether this build can establish TLS connections.
///
/// Fixed at build time by the `tls` feature; when enabled, the ring-backed
/// rustls provider must also accept the safe default protocol versions.
#[cfg(feature = "tls")]
pub fn supports_ssl() -> bool {
    use std::sync::Arc;

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    match rustls::ClientConfig::builder_with_provider(provider).with_safe_default_protocol_versions() {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = %e, "TLS provider rejected default protocol versions");
            false
        }
    }
}

#[cfg(not(feature = "tls"))]
pub fn supports_ssl() -> bool {
    tracing::warn!("supports_ssl: built without the `tls` feature");
    false
}
