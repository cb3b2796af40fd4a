//! SGI - Save Game Installer
//!
//! Main entry point for the headless save mover.
//!
//! # Overview
//!
//! This binary wires the discovery-and-relocation engine to a host event
//! channel. It initializes:
//! - Settings from `SGI Data/SGI Settings.yaml` ([`ConfigManager`])
//! - Logging infrastructure (daily file rotation + console output)
//! - Tokio async runtime
//! - The [`SweepEngine`] with the default path provider and a
//!   tracing-backed notifier
//!
//! Run standalone, it performs the one-shot startup sweep over every
//! supported title and exits; a hosting process would instead keep the
//! event channel open and feed it install/deploy events.
//!
//! # Execution Flow
//!
//! 1. Load settings (defaults when the file is absent)
//! 2. Initialize logging -> logs/sgi.<date>
//! 3. Create the tokio runtime
//! 4. Build the engine (paths, notifier, run log)
//! 5. Send `Startup` on the event channel, close it, and drain the loop
//!
//! Only initialization failures propagate out of `main`; everything the
//! engine does downstream is recovered per file or per folder and ends
//! up in the run log.

use anyhow::Result;
use sgi::host::{self, HostEvent, LogNotifier};
use sgi::paths::EnvPathProvider;
use sgi::report::RunLog;
use sgi::{ConfigManager, SweepEngine, APP_NAME, VERSION};
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Settings first: debug mode decides the log level.
    let config_manager = ConfigManager::new("SGI Data")?;
    let settings = config_manager.load_user_config()?.sgi_settings;

    let _guard = sgi::logging::setup_logging("logs", "sgi", settings.debug_mode, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("sgi-worker")
        .build()?;

    let debug_mode = settings.debug_mode;

    runtime.block_on(async {
        let paths = Arc::new(EnvPathProvider);
        let notifier = Arc::new(LogNotifier);
        let run_log = RunLog::new(paths.as_ref());
        tracing::info!("Run log at {}", run_log.path());

        let engine = SweepEngine::new(settings, paths, notifier.clone(), run_log);

        if debug_mode {
            use sgi::host::{Notifier, NotifyKind, DEFAULT_TOAST_MS};
            notifier.notify(
                NotifyKind::Info,
                "Save mover loaded (Data-first, root fallback)",
                DEFAULT_TOAST_MS,
            );
        }

        // One-shot run: queue the startup signal and let the loop drain.
        let (tx, rx) = mpsc::channel(16);
        let _ = tx.send(HostEvent::Startup).await;
        drop(tx);

        host::run_event_loop(&engine, rx).await;
    });

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Shutdown complete");
    Ok(())
}
