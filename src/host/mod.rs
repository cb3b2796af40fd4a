//! Host collaborators: notifications and lifecycle events.
//!
//! The engine never talks to a UI directly. Toast-class messages go
//! through the [`Notifier`] trait (fire-and-forget, failures ignored) and
//! lifecycle triggers arrive as [`HostEvent`] values over a bounded
//! channel, consumed one at a time by [`run_event_loop`]. The sequential
//! loop is deliberate: one logical worker of control per trigger keeps
//! report ordering deterministic and avoids concurrent writes into the
//! same Saves directory from a single process.

use crate::models::Title;
use crate::services::SweepEngine;
use camino::Utf8PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default toast display time in milliseconds.
pub const DEFAULT_TOAST_MS: u64 = 6000;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Success,
    Error,
}

/// User-visible, fire-and-forget notifications.
///
/// Implementations must swallow their own failures; the engine never
/// checks whether a toast was shown.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str, display_ms: u64);
}

/// Notifier for headless runs: routes toasts into the tracing log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NotifyKind, message: &str, _display_ms: u64) {
        match kind {
            NotifyKind::Error => tracing::error!("[SGI] {}", message),
            NotifyKind::Success | NotifyKind::Info => tracing::info!("[SGI] {}", message),
        }
    }
}

/// Lifecycle triggers delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// One-shot signal after the host finishes starting up.
    Startup,
    /// A mod finished installing, optionally with its exact install path.
    ModInstalled {
        title: Title,
        install_path: Option<Utf8PathBuf>,
    },
    /// A deployment completed; carries no per-mod detail.
    DeployCompleted,
}

/// Consume host events until the channel closes.
///
/// Events are handled strictly one after another; two triggers queued
/// back-to-back never interleave their filesystem effects. Handler
/// failures are already absorbed inside the engine (logged to the run
/// log), so nothing propagates from here.
pub async fn run_event_loop(engine: &SweepEngine, mut events: mpsc::Receiver<HostEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            HostEvent::Startup => {
                // Give the host a moment to settle before the first sweep.
                tokio::time::sleep(Duration::from_millis(engine.settings().startup_delay_ms))
                    .await;
                for title in Title::ALL {
                    engine.sweep(title, "startup").await;
                }
            }
            HostEvent::ModInstalled {
                title,
                install_path,
            } => {
                engine.handle_install(title, install_path.as_deref()).await;
            }
            HostEvent::DeployCompleted => {
                for title in Title::ALL {
                    engine.sweep(title, "deploy").await;
                }
            }
        }
    }
}
