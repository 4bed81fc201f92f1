// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The `Utils` facade — every operation the UI layer can invoke.
//
// Each method is a single delegation to a pure helper in `hostkit-core`, to
// the platform bridge, or to the filesystem. Nothing here returns an error
// to the caller: bridge failures are logged and degraded to the documented
// default, and file operations report through the alert channel.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;

use hostkit_bridge::{InlineExecutor, PlatformBridge, UiExecutor, platform_bridge};
use hostkit_core::format::{format_duration, formatted_data_size, linear_to_log};
use hostkit_core::{
    Alert, FileUrl, NumberLocale, OsVersion, ToolkitVersion, UtilsConfig, args, files, markup, tls,
};

use crate::alerts::AlertChannel;

/// Platform-utilities facade.
///
/// Construct once at startup with [`Utils::builder`] and hand clones to the
/// UI layer; clones share the bridge, executor, and alert channel.
#[derive(Clone)]
pub struct Utils {
    bridge: Arc<dyn PlatformBridge>,
    executor: Arc<dyn UiExecutor>,
    alerts: AlertChannel,
    has_vibrator: bool,
    config: Arc<UtilsConfig>,
    locale: NumberLocale,
    toolkit: Arc<ToolkitVersion>,
}

impl std::fmt::Debug for Utils {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Utils")
            .field("platform", &self.bridge.platform_name())
            .field("has_vibrator", &self.has_vibrator)
            .field("config", &self.config)
            .field("toolkit", &self.toolkit)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`Utils`]. Every part has a default.
#[derive(Default)]
pub struct UtilsBuilder {
    bridge: Option<Arc<dyn PlatformBridge>>,
    executor: Option<Arc<dyn UiExecutor>>,
    config: Option<UtilsConfig>,
    toolkit: Option<ToolkitVersion>,
}

impl UtilsBuilder {
    /// Platform bridge; defaults to [`platform_bridge()`].
    pub fn bridge(mut self, bridge: Arc<dyn PlatformBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Context for haptic and wake-lock calls; defaults to [`InlineExecutor`].
    pub fn executor(mut self, executor: Arc<dyn UiExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn config(mut self, config: UtilsConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The GUI toolkit reported by [`Utils::toolkit_version`].
    pub fn toolkit(mut self, toolkit: ToolkitVersion) -> Self {
        self.toolkit = Some(toolkit);
        self
    }

    pub fn build(self) -> Utils {
        let bridge = self.bridge.unwrap_or_else(platform_bridge);
        let config = self.config.unwrap_or_default();
        let locale = match config.locale.as_deref() {
            Some(name) => NumberLocale::from_name(name),
            None => NumberLocale::system(),
        };
        let has_vibrator = bridge.has_vibrator();

        tracing::info!(
            platform = bridge.platform_name(),
            has_vibrator,
            "utilities facade ready"
        );

        Utils {
            bridge,
            executor: self
                .executor
                .unwrap_or_else(|| Arc::new(InlineExecutor)),
            alerts: AlertChannel::new(),
            has_vibrator,
            config: Arc::new(config),
            locale,
            toolkit: Arc::new(
                self.toolkit
                    .unwrap_or_else(|| ToolkitVersion::new("unknown", 0, 0, 0)),
            ),
        }
    }
}

impl Utils {
    pub fn builder() -> UtilsBuilder {
        UtilsBuilder::default()
    }

    pub fn config(&self) -> &UtilsConfig {
        &self.config
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    /// Whether a haptic service was obtained at construction.
    pub fn has_haptics(&self) -> bool {
        self.has_vibrator
    }

    /// Receive alerts emitted after [`delete_file`](Self::delete_file) and
    /// [`touch_file`](Self::touch_file).
    pub fn subscribe_alerts(&self) -> broadcast::Receiver<Alert> {
        self.alerts.subscribe()
    }

    // -- Text & formatting ---------------------------------------------------

    /// Escape `&`, `<`, `>` and `"` for embedding in rich text.
    pub fn to_html_escaped(&self, text: &str) -> String {
        markup::to_html_escaped(text).into_owned()
    }

    /// Byte count with the configured default precision.
    pub fn formatted_data_size(&self, bytes: i64) -> String {
        self.formatted_data_size_with_precision(bytes, self.config.data_size_precision)
    }

    pub fn formatted_data_size_with_precision(&self, bytes: i64, precision: u8) -> String {
        formatted_data_size(bytes, precision, self.config.data_size_format, &self.locale)
    }

    /// `M:SS` up to one hour, `H:MM:SS` beyond.
    pub fn format_duration(&self, duration_ms: f64) -> String {
        format_duration(duration_ms)
    }

    /// `1 − e^(−ln(100)·max(0, x))`.
    pub fn linear_to_log(&self, linear: f64) -> f64 {
        linear_to_log(linear)
    }

    // -- Capabilities --------------------------------------------------------

    pub fn supports_ssl(&self) -> bool {
        tls::supports_ssl()
    }

    /// Storage permission status; always `true` off Android.
    pub fn check_android_storage_permissions(&self) -> bool {
        match self.bridge.storage_permissions_granted() {
            Ok(granted) => granted,
            Err(e) => {
                tracing::warn!(error = %e, "storage permission check failed");
                false
            }
        }
    }

    /// Pulse the vibrator for `milliseconds`.
    ///
    /// Returns immediately; the pulse runs on the executor. A no-op when no
    /// haptic service was found at construction.
    pub fn vibrate(&self, milliseconds: u32) {
        if !self.has_vibrator {
            tracing::debug!("vibrate ignored: no haptic service");
            return;
        }
        let bridge = Arc::clone(&self.bridge);
        self.executor.submit(Box::new(move || {
            if let Err(e) = bridge.vibrate(Duration::from_millis(u64::from(milliseconds))) {
                tracing::warn!(error = %e, milliseconds, "vibrate failed");
            }
        }));
    }

    /// Pulse for the configured `haptic_pulse_ms`.
    pub fn haptic_pulse(&self) {
        self.vibrate(self.config.haptic_pulse_ms);
    }

    /// Set or clear the keep-display-awake flag. Returns immediately.
    pub fn keep_screen_on(&self, on: bool) {
        tracing::info!(on, "keep screen on");
        let bridge = Arc::clone(&self.bridge);
        self.executor.submit(Box::new(move || {
            if let Err(e) = bridge.set_keep_screen_on(on) {
                tracing::warn!(error = %e, on, "keep-screen-on update failed");
            }
        }));
    }

    // -- Process arguments ---------------------------------------------------

    /// Existing files named on the command line, as absolute file URLs.
    pub fn argv(&self) -> Vec<FileUrl> {
        match args::process_file_args() {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(error = %e, "cannot resolve command-line files");
                Vec::new()
            }
        }
    }

    // -- Files ---------------------------------------------------------------

    /// Delete the file at `path`, then emit deleted / delete-failed / not-found.
    pub fn delete_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let outcome = files::delete_file(path);
        self.alerts.emit(Alert::new(outcome, path));
    }

    /// Create or truncate `path` to empty, then emit touched / touch-failed.
    pub fn touch_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let outcome = files::touch_file(path);
        self.alerts.emit(Alert::new(outcome, path));
    }

    /// True for an existing file or directory.
    pub fn path_exists(&self, path: impl AsRef<Path>) -> bool {
        files::path_exists(path)
    }

    /// True for an existing regular file only.
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        files::file_exists(path)
    }

    // -- Versions ------------------------------------------------------------

    pub fn os_version(&self) -> OsVersion {
        self.bridge.os_version()
    }

    pub fn os_major_version(&self) -> i32 {
        self.os_version().major
    }

    pub fn os_minor_version(&self) -> i32 {
        self.os_version().minor
    }

    pub fn os_micro_version(&self) -> i32 {
        self.os_version().micro
    }

    /// `major * 1_000_000 + minor * 1000 + micro`.
    pub fn os_binary_version(&self) -> i32 {
        self.os_version().binary()
    }

    /// Empty when the platform cannot be identified.
    pub fn os_name(&self) -> String {
        self.os_version().name
    }

    /// Host toolkit version as `major.minor.patch`.
    pub fn toolkit_version(&self) -> String {
        self.toolkit.to_string()
    }

    pub fn toolkit_name(&self) -> &str {
        &self.toolkit.name
    }

    pub fn toolkit_version_major(&self) -> u32 {
        self.toolkit.major
    }

    pub fn toolkit_version_minor(&self) -> u32 {
        self.toolkit.minor
    }

    pub fn toolkit_version_patch(&self) -> u32 {
        self.toolkit.patch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use hostkit_bridge::UiTask;
    use hostkit_bridge::desktop::DesktopBridge;
    use hostkit_bridge::traits::{NativeHaptics, NativeOsInfo, NativeScreen, NativeStorage};
    use hostkit_core::FileAlert;
    use hostkit_core::error::{HostkitError, Result};

    /// Bridge double that records every call it receives.
    #[derive(Default)]
    struct RecordingBridge {
        vibrator: bool,
        fail_permissions: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingBridge {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlatformBridge for RecordingBridge {
        fn platform_name(&self) -> &str {
            "Recording"
        }
    }

    impl NativeHaptics for RecordingBridge {
        fn has_vibrator(&self) -> bool {
            self.vibrator
        }

        fn vibrate(&self, duration: Duration) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("vibrate {}", duration.as_millis()));
            Ok(())
        }
    }

    impl NativeScreen for RecordingBridge {
        fn set_keep_screen_on(&self, on: bool) -> Result<()> {
            self.calls.lock().unwrap().push(format!("screen {on}"));
            Err(HostkitError::Bridge("no window".into()))
        }
    }

    impl NativeStorage for RecordingBridge {
        fn storage_permissions_granted(&self) -> Result<bool> {
            if self.fail_permissions {
                Err(HostkitError::PlatformUnavailable)
            } else {
                Ok(true)
            }
        }
    }

    impl NativeOsInfo for RecordingBridge {
        fn os_version(&self) -> OsVersion {
            OsVersion::parse("Android", "14.1")
        }
    }

    /// Executor that parks tasks until the test runs them.
    #[derive(Default)]
    struct QueueExecutor {
        queue: Mutex<Vec<UiTask>>,
    }

    impl QueueExecutor {
        fn run_all(&self) {
            let tasks: Vec<_> = self.queue.lock().unwrap().drain(..).collect();
            for task in tasks {
                task();
            }
        }
    }

    impl UiExecutor for QueueExecutor {
        fn submit(&self, task: UiTask) {
            self.queue.lock().unwrap().push(task);
        }
    }

    fn desktop_utils() -> Utils {
        Utils::builder()
            .bridge(Arc::new(DesktopBridge::with_os_version(OsVersion::unknown())))
            .config(UtilsConfig {
                locale: Some("C".into()),
                ..UtilsConfig::default()
            })
            .toolkit(ToolkitVersion::new("dioxus", 0, 7, 1))
            .build()
    }

    #[test]
    fn formatting_delegates() {
        let utils = desktop_utils();
        assert_eq!(utils.format_duration(7_261_000.0), "2:01:01");
        assert_eq!(utils.formatted_data_size(1_572_864), "1.50 MB");
        assert_eq!(utils.formatted_data_size_with_precision(1_572_864, 0), "2 MB");
        assert_eq!(utils.to_html_escaped("a<b"), "a&lt;b");
        assert_eq!(utils.linear_to_log(0.0), 0.0);
    }

    #[test]
    fn desktop_defaults() {
        let utils = desktop_utils();
        assert!(utils.check_android_storage_permissions());
        assert_eq!(utils.os_major_version(), -1);
        assert_eq!(utils.os_minor_version(), -1);
        assert_eq!(utils.os_micro_version(), -1);
        assert_eq!(utils.os_binary_version(), -1_001_001);
        assert_eq!(utils.os_name(), "");
        // Neither call may panic or block without haptics or a window.
        utils.vibrate(500);
        utils.keep_screen_on(true);
    }

    #[test]
    fn toolkit_version_reported() {
        let utils = desktop_utils();
        assert_eq!(utils.toolkit_version(), "0.7.1");
        assert_eq!(utils.toolkit_name(), "dioxus");
        assert_eq!(
            (
                utils.toolkit_version_major(),
                utils.toolkit_version_minor(),
                utils.toolkit_version_patch()
            ),
            (0, 7, 1)
        );
    }

    #[test]
    fn vibrate_is_fire_and_forget() {
        let bridge = Arc::new(RecordingBridge {
            vibrator: true,
            ..RecordingBridge::default()
        });
        let executor = Arc::new(QueueExecutor::default());
        let utils = Utils::builder()
            .bridge(bridge.clone())
            .executor(executor.clone())
            .build();

        utils.vibrate(250);
        assert!(bridge.calls().is_empty());

        executor.run_all();
        assert_eq!(bridge.calls(), vec!["vibrate 250"]);
    }

    #[test]
    fn vibrate_without_service_submits_nothing() {
        let bridge = Arc::new(RecordingBridge::default());
        let executor = Arc::new(QueueExecutor::default());
        let utils = Utils::builder()
            .bridge(bridge.clone())
            .executor(executor.clone())
            .build();

        utils.vibrate(250);
        utils.haptic_pulse();
        assert!(executor.queue.lock().unwrap().is_empty());
    }

    #[test]
    fn haptic_pulse_uses_configured_length() {
        let bridge = Arc::new(RecordingBridge {
            vibrator: true,
            ..RecordingBridge::default()
        });
        let utils = Utils::builder()
            .bridge(bridge.clone())
            .config(UtilsConfig {
                haptic_pulse_ms: 40,
                ..UtilsConfig::default()
            })
            .build();

        utils.haptic_pulse();
        assert_eq!(bridge.calls(), vec!["vibrate 40"]);
    }

    #[test]
    fn keep_screen_on_runs_on_the_injected_executor() {
        let bridge = Arc::new(RecordingBridge::default());
        let executor = Arc::new(QueueExecutor::default());
        let utils = Utils::builder()
            .bridge(bridge.clone())
            .executor(executor.clone())
            .build();

        utils.keep_screen_on(true);
        assert!(bridge.calls().is_empty());
        assert_eq!(executor.queue.lock().unwrap().len(), 1);

        executor.run_all();
        assert_eq!(bridge.calls(), vec!["screen true"]);
    }

    #[test]
    fn keep_screen_on_failure_is_swallowed() {
        let bridge = Arc::new(RecordingBridge::default());
        let utils = Utils::builder().bridge(bridge.clone()).build();

        utils.keep_screen_on(true);
        utils.keep_screen_on(false);
        assert_eq!(bridge.calls(), vec!["screen true", "screen false"]);
    }

    #[test]
    fn permission_error_reads_as_denied() {
        let bridge = Arc::new(RecordingBridge {
            fail_permissions: true,
            ..RecordingBridge::default()
        });
        let utils = Utils::builder().bridge(bridge).build();
        assert!(!utils.check_android_storage_permissions());
    }

    #[test]
    fn os_version_from_bridge() {
        let utils = Utils::builder()
            .bridge(Arc::new(RecordingBridge::default()))
            .build();
        assert_eq!(utils.os_name(), "Android");
        assert_eq!(utils.os_binary_version(), 14_001_000);
        assert_eq!(utils.platform_name(), "Recording");
    }

    #[test]
    fn delete_missing_file_alerts_not_found() {
        let utils = desktop_utils();
        let mut alerts = utils.subscribe_alerts();
        let dir = tempfile::tempdir().unwrap();
        let ghost = dir.path().join("ghost.mp3");

        utils.delete_file(&ghost);

        let alert = alerts.try_recv().unwrap();
        assert_eq!(alert.kind, FileAlert::NotFound);
        assert_eq!(alert.message(), "File not found");
        assert_eq!(alert.path, ghost);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn touch_then_delete_alert_sequence() {
        let utils = desktop_utils();
        let mut alerts = utils.subscribe_alerts();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("marker");

        utils.touch_file(&file);
        assert!(utils.file_exists(&file));
        utils.delete_file(&file);
        assert!(!utils.path_exists(&file));

        assert_eq!(alerts.try_recv().unwrap().kind, FileAlert::Touched);
        assert_eq!(alerts.try_recv().unwrap().kind, FileAlert::Deleted);
        assert!(alerts.try_recv().is_err());
    }

    #[test]
    fn touch_failure_alerts() {
        let utils = desktop_utils();
        let mut alerts = utils.subscribe_alerts();
        let dir = tempfile::tempdir().unwrap();

        utils.touch_file(dir.path().join("no").join("such").join("dir"));
        assert_eq!(alerts.try_recv().unwrap().kind, FileAlert::TouchFailed);
    }

    #[test]
    fn directory_predicates() {
        let utils = desktop_utils();
        let dir = tempfile::tempdir().unwrap();
        assert!(utils.path_exists(dir.path()));
        assert!(!utils.file_exists(dir.path()));
    }

    #[test]
    fn clones_share_the_alert_channel() {
        let utils = desktop_utils();
        let handle = utils.clone();
        let mut alerts = utils.subscribe_alerts();
        let dir = tempfile::tempdir().unwrap();

        handle.delete_file(dir.path().join("missing"));
        assert_eq!(alerts.try_recv().unwrap().kind, FileAlert::NotFound);
    }

    #[test]
    fn argv_in_test_harness_is_safe() {
        // The test binary's own arguments are filter flags, not files.
        let utils = desktop_utils();
        for url in utils.argv() {
            assert!(url.path().is_absolute());
        }
    }
}
