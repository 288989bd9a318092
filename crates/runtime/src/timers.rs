//! Cancelable one-shot timers.
//!
//! Contract: scheduling always cancels the pending timer of the same kind
//! first, so only the latest one ever fires. A stale countdown or
//! highlight callback must never reach a session that has moved on.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::worker::Command;

/// Holds at most one pending one-shot timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<JoinHandle<()>>,
}

impl TimerSlot {
    /// Cancels any pending timer, then arms a new one that delivers
    /// `make()` to the worker after `duration`.
    pub fn schedule<F>(&mut self, duration: Duration, tx: mpsc::Sender<Command>, make: F)
    where
        F: FnOnce() -> Command + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(make()).await.is_err() {
                tracing::debug!("timer fired after worker shutdown");
            }
        }));
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
