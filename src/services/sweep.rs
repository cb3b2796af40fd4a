//! Sweep orchestration: per-mod processing, full sweeps, and the
//! install-event fast path.

use crate::host::{NotifyKind, Notifier, DEFAULT_TOAST_MS};
use crate::models::{SgiSettings, Title};
use crate::paths::{self, HostPathProvider};
use crate::report::RunLog;
use crate::services::discovery::{self, path_exists, read_dir_entries, EntryKind};
use crate::services::mover;
use camino::Utf8Path;
use std::sync::Arc;
use std::time::Duration;

/// The discovery-and-relocation engine.
///
/// Stateless beyond its immutable settings and collaborator handles; all
/// filesystem work is awaited sequentially, so two engines (or two
/// overlapping triggers on one engine) may interleave safely: moving an
/// already-moved file is a per-file failure that gets skipped, and a
/// double-placed destination file is the accepted last-write-wins
/// outcome.
pub struct SweepEngine {
    settings: SgiSettings,
    paths: Arc<dyn HostPathProvider>,
    notifier: Arc<dyn Notifier>,
    run_log: RunLog,
}

impl SweepEngine {
    pub fn new(
        settings: SgiSettings,
        paths: Arc<dyn HostPathProvider>,
        notifier: Arc<dyn Notifier>,
        run_log: RunLog,
    ) -> Self {
        Self {
            settings,
            paths,
            notifier,
            run_log,
        }
    }

    pub fn settings(&self) -> &SgiSettings {
        &self.settings
    }

    /// Relocate every save artifact found under one mod folder.
    ///
    /// Returns the number of files successfully relocated. One bad file
    /// never blocks the rest of the batch; failures become report lines.
    /// The destination directory is only touched when candidates exist.
    pub async fn process_mod_folder(
        &self,
        title: Title,
        mod_root: &Utf8Path,
        report: &mut Vec<String>,
    ) -> usize {
        report.push(format!("Scanning mod: {}", mod_root));
        let primaries = discovery::discover(mod_root, report).await;
        let files = discovery::expand_with_cosaves(primaries).await;
        report.push(format!("  -> Found {} candidate file(s)", files.len()));
        if files.is_empty() {
            return 0;
        }

        let Some(dest_root) = paths::saves_dir(self.paths.as_ref(), title) else {
            report.push(format!("  !! No saves directory for title={}", title.id()));
            return 0;
        };
        if let Err(e) = tokio::fs::create_dir_all(&dest_root).await {
            tracing::warn!("Saves directory {} is inaccessible: {}", dest_root, e);
            self.notifier.notify(
                NotifyKind::Error,
                &format!("Cannot access Saves for {}", title.id()),
                DEFAULT_TOAST_MS,
            );
            return 0;
        }

        let mut moved = 0;
        for src in &files {
            match mover::place(src, &dest_root, self.settings.move_instead_of_copy).await {
                Ok(dest) => {
                    moved += 1;
                    report.push(format!("  MOVE \"{}\" -> \"{}\"", src, dest));
                }
                Err(e) => {
                    report.push(format!(
                        "  !! Failed {}: {}",
                        src.file_name().unwrap_or(src.as_str()),
                        e
                    ));
                }
            }
        }

        if moved > 0 {
            self.notifier.notify(
                NotifyKind::Success,
                &format!(
                    "Moved {} save file(s) from {} -> {} Saves",
                    moved,
                    mod_root.file_name().unwrap_or(mod_root.as_str()),
                    title.id()
                ),
                DEFAULT_TOAST_MS,
            );
        }
        moved
    }

    /// One full pass over every staging root for a title.
    ///
    /// Missing staging roots are reported and skipped. The accumulated
    /// report is persisted as one run, tagged with the title and the
    /// trigger reason.
    pub async fn sweep(&self, title: Title, reason: &str) -> usize {
        let mut report = vec![
            format!("==== Sweep title={} [{}] ====", title.id(), reason),
            "Candidate staging root(s):".to_string(),
        ];
        let roots = paths::staging_roots(self.paths.as_ref(), title);
        for root in &roots {
            report.push(format!("  * {}", root));
        }

        let mut total = 0;
        for root in &roots {
            if !path_exists(root).await {
                report.push(format!("  - Missing staging root: {}", root));
                continue;
            }
            let entries = read_dir_entries(root).await;
            report.push(format!(" Staging root {} -> {} entries", root, entries.len()));
            for (_, mod_root, kind) in &entries {
                if matches!(kind, EntryKind::Dir) {
                    total += self.process_mod_folder(title, mod_root, &mut report).await;
                }
            }
        }

        report.push(format!("Total moved (title={}): {}", title.id(), total));
        self.run_log.record(&report).await;

        if total == 0 && self.settings.debug_mode {
            self.notifier.notify(
                NotifyKind::Info,
                &format!("Scan[{}]: no saves detected (root/Data)", title.id()),
                DEFAULT_TOAST_MS,
            );
        }
        total
    }

    /// Install-event fast path.
    ///
    /// When the event carries an existing install path, that folder is
    /// processed directly, with one delayed retry if nothing moved (the
    /// archive may still be finalizing on disk). Without a usable path,
    /// falls back to a full sweep.
    pub async fn handle_install(&self, title: Title, install_path: Option<&Utf8Path>) {
        let mut report = vec![format!("==== mod-installed title={} ====", title.id())];

        let mut mod_root = install_path;
        if let Some(p) = mod_root {
            if !path_exists(p).await {
                mod_root = None;
            }
        }

        let Some(mod_root) = mod_root else {
            report.push(format!("No install path; fallback sweep {}", title.id()));
            self.run_log.record(&report).await;
            self.sweep(title, "install-fallback").await;
            return;
        };

        report.push(format!("Using install path: {}", mod_root));
        let moved = self.process_mod_folder(title, mod_root, &mut report).await;
        report.push(format!("Moved via install path: {}", moved));
        self.run_log.record(&report).await;

        if moved == 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.install_retry_delay_ms))
                .await;
            let retried = self.process_mod_folder(title, mod_root, &mut report).await;
            report.push(format!("Retry moved: {}", retried));
            self.run_log.record(&report).await;
        }
    }

    /// Sweep every supported title with one reason tag.
    pub async fn sweep_all(&self, reason: &str) -> usize {
        let mut total = 0;
        for title in Title::ALL {
            total += self.sweep(title, reason).await;
        }
        total
    }
}
