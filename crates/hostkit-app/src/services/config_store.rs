// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON persistence for `UtilsConfig`.

use std::path::{Path, PathBuf};

use hostkit_core::UtilsConfig;
use hostkit_core::error::Result;

const CONFIG_FILE: &str = "config.json";

/// Location of the persisted facade configuration.
///
/// Cheap to clone; shared with the settings page through Dioxus context.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration. A missing file is not an error.
    pub fn load(&self) -> Result<Option<UtilsConfig>> {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => UtilsConfig::from_json(&data).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, config: &UtilsConfig) -> Result<()> {
        config.validate()?;
        std::fs::write(&self.path, config.to_json()?)?;
        Ok(())
    }
}
