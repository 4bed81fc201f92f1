// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-directional alert channel from the facade to the UI layer.

use tokio::sync::broadcast;

use hostkit_core::Alert;

/// Alerts buffered per subscriber before the oldest are dropped.
pub const ALERT_CAPACITY: usize = 32;

/// Broadcast channel carrying [`Alert`]s. Cloning shares the channel.
#[derive(Debug, Clone)]
pub struct AlertChannel {
    sender: broadcast::Sender<Alert>,
}

impl AlertChannel {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(ALERT_CAPACITY);
        Self { sender }
    }

    /// Deliver `alert` to every current subscriber.
    ///
    /// With no subscribers the alert is dropped; there is no acknowledgment.
    pub fn emit(&self, alert: Alert) {
        tracing::info!(path = %alert.path.display(), message = alert.message(), "alert");
        if self.sender.send(alert).is_err() {
            tracing::debug!("alert dropped: no subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Alert> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AlertChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostkit_core::FileAlert;

    #[test]
    fn emit_without_subscribers_is_silent() {
        let channel = AlertChannel::new();
        assert_eq!(channel.subscriber_count(), 0);
        channel.emit(Alert::new(FileAlert::Touched, "/tmp/a"));
    }

    #[tokio::test]
    async fn every_subscriber_receives_alert() {
        let channel = AlertChannel::new();
        let mut first = channel.subscribe();
        let mut second = channel.clone().subscribe();

        channel.emit(Alert::new(FileAlert::NotFound, "/tmp/missing"));

        assert_eq!(first.recv().await.unwrap().kind, FileAlert::NotFound);
        assert_eq!(second.recv().await.unwrap().kind, FileAlert::NotFound);
    }

    #[test]
    fn late_subscriber_misses_earlier_alerts() {
        let channel = AlertChannel::new();
        let _early = channel.subscribe();
        channel.emit(Alert::new(FileAlert::Deleted, "/tmp/a"));

        let mut late = channel.subscribe();
        assert!(late.try_recv().is_err());
    }
}
