//! File relocation with cut (move) or copy semantics.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// A relocation failure the caller should report and then skip past.
///
/// Only the copy step surfaces here; a failed post-copy delete is a
/// degraded-but-acceptable outcome and is never returned.
#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("cannot create destination directory \"{path}\": {source}")]
    DestDir {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot copy \"{path}\": {source}")]
    Copy {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy `source` into `dest_dir`, keeping its file name, then delete the
/// source when `cut` is set.
///
/// The destination directory is created with all missing ancestors. A
/// pre-existing destination file is silently overwritten; last write wins
/// (accepted limitation, no conflict detection or backup). When the
/// native copy fails (cross-device moves, exotic filesystems), falls back
/// to a read-all/write-all copy. A delete failure after a successful copy
/// leaves the residual source behind and is not an error.
///
/// Returns the destination path for reporting.
pub async fn place(
    source: &Utf8Path,
    dest_dir: &Utf8Path,
    cut: bool,
) -> Result<Utf8PathBuf, RelocateError> {
    tokio::fs::create_dir_all(dest_dir)
        .await
        .map_err(|source| RelocateError::DestDir {
            path: dest_dir.to_path_buf(),
            source,
        })?;

    let dest = dest_dir.join(source.file_name().unwrap_or(source.as_str()));

    if tokio::fs::copy(source, &dest).await.is_err() {
        let bytes = tokio::fs::read(source)
            .await
            .map_err(|e| RelocateError::Copy {
                path: source.to_path_buf(),
                source: e,
            })?;
        tokio::fs::write(&dest, bytes)
            .await
            .map_err(|e| RelocateError::Copy {
                path: dest.clone(),
                source: e,
            })?;
    }

    if cut {
        if let Err(e) = tokio::fs::remove_file(source).await {
            tracing::debug!("Could not remove source \"{}\": {}", source, e);
        }
    }

    Ok(dest)
}
