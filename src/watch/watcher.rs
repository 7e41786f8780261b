// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::errors::{AutoreloadError, Result};
use crate::watch::event_handler::modified_paths;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops file watching and joins notify's background thread.
pub struct WatcherHandle {
    root: PathBuf,
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl WatcherHandle {
    /// The (canonicalized) directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Spawn a filesystem watcher on `root` (non-recursive) that sends
/// `RuntimeEvent::FileModified` for every modification of a direct child.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let root = root.into();
    if !root.is_dir() {
        return Err(AutoreloadError::Config(format!(
            "watched path {:?} is not an existing directory",
            root
        )));
    }
    let root = root.canonicalize()?;

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // The forwarding task is gone; tracing may be too.
                    eprintln!("autoreload: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("autoreload: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::NonRecursive)?;

    info!("watching {:?} for modifications", root);

    let async_root = root.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "received notify event");

            for path in modified_paths(&async_root, &event) {
                if runtime_tx
                    .send(RuntimeEvent::FileModified { path })
                    .await
                    .is_err()
                {
                    debug!("runtime channel closed; stopping watcher loop");
                    return;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle {
        root,
        _inner: watcher,
    })
}
