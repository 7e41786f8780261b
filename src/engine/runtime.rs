// src/engine/runtime.rs

use std::fmt;
use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::relay::ReloadBackend;

use super::{RelaySummary, RuntimeEvent, Shutdown};

/// Consumes `RuntimeEvent`s and relays each modification through a
/// `ReloadBackend`.
///
/// Shutdown is checked before every dequeue. A request already in flight is
/// awaited to completion; events still queued when shutdown arrives are
/// dropped.
pub struct Runtime<B: ReloadBackend> {
    backend: B,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    shutdown: Shutdown,
    summary: RelaySummary,
}

impl<B: ReloadBackend> fmt::Debug for Runtime<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

impl<B: ReloadBackend> Runtime<B> {
    pub fn new(
        backend: B,
        event_rx: mpsc::Receiver<RuntimeEvent>,
        shutdown: Shutdown,
    ) -> Self {
        Self {
            backend,
            event_rx,
            shutdown,
            summary: RelaySummary::default(),
        }
    }

    /// Main event loop.
    ///
    /// Returns when shutdown is requested or every event sender has been
    /// dropped. Relay failures are logged and counted, never fatal, so this
    /// cannot fail.
    pub async fn run(mut self) -> RelaySummary {
        info!("autoreload runtime started");

        loop {
            let event = tokio::select! {
                biased;
                _ = self.shutdown.requested() => {
                    info!("shutdown requested, stopping runtime");
                    break;
                }
                event = self.event_rx.recv() => match event {
                    Some(e) => e,
                    None => {
                        info!("runtime event channel closed; exiting");
                        break;
                    }
                },
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::FileModified { path } => self.relay(path).await,
            }
        }

        let dropped = self.event_rx.len();
        if dropped > 0 {
            debug!(dropped, "discarding queued events on shutdown");
        }

        info!(
            relayed = self.summary.relayed,
            failed = self.summary.failed,
            "runtime exiting"
        );
        self.summary
    }

    async fn relay(&mut self, path: PathBuf) {
        info!("{} was modified. Requesting reload...", path.display());

        match self.backend.request_reload(path.clone()).await {
            Ok(()) => {
                self.summary.relayed += 1;
                debug!(path = ?path, "reload requested");
            }
            Err(err) => {
                self.summary.failed += 1;
                warn!(path = ?path, error = %err, "reload request failed; not retrying");
            }
        }
    }
}
