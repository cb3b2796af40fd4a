//! Run reporting: an append-only diagnostic log of every sweep.
//!
//! Each sweep or install-event handling produces an ordered sequence of
//! human-readable lines; [`RunLog::record`] appends them as one
//! timestamped block to `<documents>/SGI_Diag/SGI_SaveMover_RunLog.txt`.
//!
//! Recording must never crash the operation it describes, so every
//! failure here is swallowed and surfaced only as a debug trace.

use crate::paths::{HostPathProvider, PathRole};
use camino::Utf8PathBuf;
use tokio::io::AsyncWriteExt;

const DIAG_DIR_NAME: &str = "SGI_Diag";
const RUN_LOG_NAME: &str = "SGI_SaveMover_RunLog.txt";

/// Append-only text log for sweep reports.
#[derive(Debug, Clone)]
pub struct RunLog {
    out_dir: Utf8PathBuf,
    out_file: Utf8PathBuf,
}

impl RunLog {
    /// Place the run log under the host documents directory, falling back
    /// to the current directory when the host cannot supply one.
    pub fn new(provider: &dyn HostPathProvider) -> Self {
        let base = provider
            .resolve(PathRole::Documents)
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let out_dir = base.join(DIAG_DIR_NAME);
        let out_file = out_dir.join(RUN_LOG_NAME);
        Self { out_dir, out_file }
    }

    /// Append one run's report lines as a timestamped block.
    ///
    /// Returns the log file path on success, `None` on any failure.
    pub async fn record(&self, lines: &[String]) -> Option<Utf8PathBuf> {
        match self.append(lines).await {
            Ok(()) => Some(self.out_file.clone()),
            Err(e) => {
                tracing::debug!("Run log write failed ({}): {}", self.out_file, e);
                None
            }
        }
    }

    /// The path reports are appended to.
    pub fn path(&self) -> &Utf8PathBuf {
        &self.out_file
    }

    async fn append(&self, lines: &[String]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.out_dir).await?;

        let stamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let block = format!("[{}] {}\n\n", stamp, lines.join("\n"));

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.out_file)
            .await?;
        file.write_all(block.as_bytes()).await?;
        // Tokio file writes complete in a background task; flush before
        // reporting success so the block is on disk when record returns.
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct DocsProvider(Utf8PathBuf);

    impl HostPathProvider for DocsProvider {
        fn resolve(&self, role: PathRole) -> Option<Utf8PathBuf> {
            matches!(role, PathRole::Documents).then(|| self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_record_appends_blocks() {
        let temp = TempDir::new().unwrap();
        let docs = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let log = RunLog::new(&DocsProvider(docs.clone()));

        let first = log.record(&["line one".to_string(), "line two".to_string()]).await;
        assert_eq!(first.as_deref(), Some(log.path().as_path()));
        let second = log.record(&["second run".to_string()]).await;
        assert!(second.is_some());

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("line one\nline two"));
        assert!(contents.contains("second run"));
        // Two timestamped blocks.
        assert!(contents.matches('[').count() >= 2);
    }

    #[tokio::test]
    async fn test_recorded_block_is_on_disk_when_record_returns() {
        let temp = TempDir::new().unwrap();
        let docs = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        let log = RunLog::new(&DocsProvider(docs));

        for i in 0..20 {
            let line = format!("run {i}");
            assert!(log.record(std::slice::from_ref(&line)).await.is_some());
            // A success return means the block must already be readable.
            let contents = std::fs::read_to_string(log.path()).unwrap();
            assert!(contents.contains(&line), "block {i} not visible after record");
        }
    }

    #[tokio::test]
    async fn test_record_failure_is_swallowed() {
        let temp = TempDir::new().unwrap();
        let docs = Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap();
        // A file where the diag directory should go makes create_dir_all fail.
        std::fs::write(docs.join(DIAG_DIR_NAME), b"not a directory").unwrap();
        let log = RunLog::new(&DocsProvider(docs));

        assert_eq!(log.record(&["ignored".to_string()]).await, None);
    }
}
