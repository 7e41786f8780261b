// src/engine/mod.rs

//! Runtime loop for autoreload.
//!
//! The runtime has two phases only: watching, and shutting down after an
//! interrupt. It consumes [`RuntimeEvent`]s from the watcher and hands each
//! modification to a [`crate::relay::ReloadBackend`], one at a time.
//!
//! Shutdown travels on its own channel ([`shutdown_channel`]) so an
//! interrupt is noticed before the next queued event is dequeued, not after
//! the whole queue has drained.

use std::path::PathBuf;

use tokio::sync::watch;

/// Events flowing into the runtime from the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// A file (or the watched directory itself) was modified.
    FileModified { path: PathBuf },
}

/// Counters reported when the runtime stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaySummary {
    /// Modifications whose reset request succeeded.
    pub relayed: usize,
    /// Modifications whose reset request failed (not retried).
    pub failed: usize,
}

impl RelaySummary {
    pub fn total(&self) -> usize {
        self.relayed + self.failed
    }
}

/// Sending half of the shutdown channel, held by the interrupt handler.
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Request shutdown. Idempotent.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Receiving half of the shutdown channel, held by the runtime.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// True once shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been requested.
    ///
    /// Never resolves if the trigger is dropped without firing.
    pub async fn requested(&mut self) {
        let closed = self.rx.wait_for(|stop| *stop).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

/// Create a connected shutdown trigger/receiver pair.
pub fn shutdown_channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

pub mod runtime;

pub use runtime::Runtime;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_is_observed() {
        let (trigger, mut shutdown) = shutdown_channel();
        assert!(!shutdown.is_requested());

        trigger.trigger();
        trigger.trigger();

        assert!(shutdown.is_requested());
        shutdown.requested().await;
    }

    #[tokio::test]
    async fn dropped_trigger_never_requests_shutdown() {
        let (trigger, mut shutdown) = shutdown_channel();
        drop(trigger);

        let waited = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            shutdown.requested(),
        )
        .await;
        assert!(waited.is_err());
        assert!(!shutdown.is_requested());
    }
}
