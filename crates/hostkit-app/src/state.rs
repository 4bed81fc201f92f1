// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use chrono::{DateTime, Utc};

use hostkit_core::alert::Severity;
use hostkit_core::{Alert, FileUrl, UtilsConfig};
use hostkit_utils::Utils;

/// Alerts kept for the history list on the files page.
const ALERT_HISTORY: usize = 50;

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Recent file-operation alerts, newest first.
    pub alerts: Vec<Alert>,
    /// The alert currently shown as a toast.
    pub toast: Option<Alert>,
    /// Files named on the command line.
    pub files: Vec<FileUrl>,
    /// Whether the keep-screen-on flag was last set.
    pub screen_on: bool,
    /// Editable copy of the settings; applied on next launch.
    pub config: UtilsConfig,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    /// Create initial state from the facade.
    pub fn new(utils: &Utils) -> Self {
        Self {
            files: utils.argv(),
            config: utils.config().clone(),
            ..Self::default()
        }
    }

    pub fn push_alert(&mut self, alert: Alert) {
        self.toast = Some(alert.clone());
        self.alerts.insert(0, alert);
        self.alerts.truncate(ALERT_HISTORY);
    }

    /// Hide the toast if it still shows the alert raised at `raised_at`.
    pub fn expire_toast(&mut self, raised_at: DateTime<Utc>) {
        if self.toast.as_ref().is_some_and(|t| t.raised_at == raised_at) {
            self.toast = None;
        }
    }
}

/// Background colour for an alert of the given severity.
pub fn severity_colour(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "#34c759",
        Severity::Notice => "#8e8e93",
        Severity::Failure => "#ff3b30",
    }
}
