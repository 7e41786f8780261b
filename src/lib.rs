// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod relay;
pub mod watch;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::engine::{
    RelaySummary, Runtime, RuntimeEvent, Shutdown, ShutdownTrigger, shutdown_channel,
};
use crate::errors::Result;
use crate::relay::HttpReloadBackend;

/// Exit status used when a second interrupt forces the process down.
const FORCED_EXIT_CODE: i32 = 130;

/// High-level entry point used by `main.rs`.
///
/// Installs the Ctrl-C handler and runs until the first interrupt.
pub async fn run(args: CliArgs) -> Result<RelaySummary> {
    let (trigger, shutdown) = shutdown_channel();
    spawn_interrupt_handler(trigger);
    run_until(args, shutdown).await
}

/// Wire everything together and run until `shutdown` fires.
///
/// This wires together:
/// - config loading (file or built-in defaults)
/// - the HTTP reload backend
/// - the non-recursive file watcher
/// - the runtime loop
///
/// The watcher is dropped (and notify's thread joined) as soon as the
/// runtime returns.
pub async fn run_until(args: CliArgs, shutdown: Shutdown) -> Result<RelaySummary> {
    let cfg = load_or_default(args.config.as_deref())?;
    let backend = HttpReloadBackend::new(&cfg)?;
    info!(
        url = %backend.url(),
        auth = backend.uses_auth(),
        "reload requests will be posted to the reset endpoint"
    );

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let watcher = watch::spawn_watcher(&args.path, rt_tx)?;

    let summary = Runtime::new(backend, rt_rx, shutdown).run().await;

    info!(root = ?watcher.root(), "stopping file watcher");
    drop(watcher);

    Ok(summary)
}

/// First Ctrl-C requests an orderly shutdown; a second one exits at once,
/// even if a reset request is still pending.
fn spawn_interrupt_handler(trigger: ShutdownTrigger) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        info!("interrupt received; shutting down (press Ctrl+C again to force)");
        trigger.trigger();

        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("second interrupt received; exiting immediately");
            std::process::exit(FORCED_EXIT_CODE);
        }
    });
}
