// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fire-and-forget submission of work to a platform-owned execution context.
//
// Haptic pulses and wake-lock changes must not block the caller. The facade
// hands them to a `UiExecutor` and returns at once; no completion signal is
// exposed, and a failure inside the task is only visible in the log.

use tokio::runtime::Handle;

/// A unit of work submitted to an executor.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// An execution context owned by the host platform.
pub trait UiExecutor: Send + Sync {
    /// Queue `task`. Returns before the task has necessarily run.
    fn submit(&self, task: UiTask);
}

/// Runs every task on the submitting thread.
///
/// Suitable for hosts whose UI thread is the caller, and for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl UiExecutor for InlineExecutor {
    fn submit(&self, task: UiTask) {
        task();
    }
}

/// Runs tasks on a tokio runtime's blocking pool.
///
/// Fits desktop hosts, where nothing the bridge does is bound to the UI
/// thread. Android hosts must post to the Activity's UI thread instead.
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Bind to the runtime of the calling context, if there is one.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl UiExecutor for TokioExecutor {
    fn submit(&self, task: UiTask) {
        // Dropping the JoinHandle detaches the task.
        drop(self.handle.spawn_blocking(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn inline_runs_before_returning() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        InlineExecutor.submit(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn tokio_executor_eventually_runs() {
        let executor = TokioExecutor::current().expect("inside a runtime");
        let (tx, rx) = tokio::sync::oneshot::channel();
        executor.submit(Box::new(move || {
            let _ = tx.send(std::thread::current().id());
        }));
        let worker = rx.await.expect("task ran");
        assert_ne!(worker, std::thread::current().id());
    }

    #[test]
    fn no_runtime_means_no_tokio_executor() {
        assert!(TokioExecutor::current().is_none());
    }
}
