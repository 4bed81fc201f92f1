// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Facade configuration.

use serde::{Deserialize, Serialize};

use crate::error::{HostkitError, Result};
use crate::types::DataSizeFormat;

/// Largest precision accepted for data-size formatting.
pub const MAX_DATA_SIZE_PRECISION: u8 = 18;

/// Persistent settings for the utilities facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsConfig {
    /// Decimal places used by `formatted_data_size` when no precision is given.
    pub data_size_precision: u8,
    /// Unit system used for data sizes.
    pub data_size_format: DataSizeFormat,
    /// POSIX locale name (e.g. `de_DE.UTF-8`). `None` follows the environment.
    pub locale: Option<String>,
    /// Length of the pulse triggered by UI feedback actions.
    pub haptic_pulse_ms: u32,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            data_size_precision: 2,
            data_size_format: DataSizeFormat::Traditional,
            locale: None,
            haptic_pulse_ms: 500,
            log_filter: "info".into(),
        }
    }
}

impl UtilsConfig {
    /// Parse a JSON document, filling absent fields with defaults.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the facade cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.data_size_precision > MAX_DATA_SIZE_PRECISION {
            return Err(HostkitError::Config(format!(
                "data_size_precision {} exceeds {MAX_DATA_SIZE_PRECISION}",
                self.data_size_precision
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(HostkitError::Config("log_filter must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_facade_contract() {
        let config = UtilsConfig::default();
        assert_eq!(config.data_size_precision, 2);
        assert_eq!(config.data_size_format, DataSizeFormat::Traditional);
        assert!(config.locale.is_none());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config = UtilsConfig::from_json(r#"{ "haptic_pulse_ms": 40 }"#).unwrap();
        assert_eq!(config.haptic_pulse_ms, 40);
        assert_eq!(config.data_size_precision, 2);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn json_round_trip() {
        let config = UtilsConfig {
            locale: Some("de_DE.UTF-8".into()),
            data_size_format: DataSizeFormat::Iec,
            ..UtilsConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(UtilsConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn oversized_precision_rejected() {
        let result = UtilsConfig::from_json(r#"{ "data_size_precision": 40 }"#);
        assert!(matches!(result, Err(HostkitError::Config(_))));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let result = UtilsConfig::from_json("{ not json");
        assert!(matches!(result, Err(HostkitError::Serialization(_))));
    }
}
