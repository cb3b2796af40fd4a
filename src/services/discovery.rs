//! Save-artifact discovery inside an untrusted mod directory tree.
//!
//! The scan is Data-first: if the mod ships a `Data` directory the game
//! would load from, only that subtree is searched (recursively, depth
//! unbounded). Mods that package saves loosely get the fallback: `.ess`
//! files directly at the mod root, plus a recursive search of any
//! immediate subdirectory whose name contains "save".
//!
//! Discovery never fails. A directory that cannot be listed contributes
//! nothing; the report records what was scanned.

use camino::{Utf8Path, Utf8PathBuf};
use std::future::Future;
use std::pin::Pin;

/// Primary save artifact extension (case-insensitive match).
pub const SAVE_EXT: &str = ".ess";
/// Companion artifact extension, same stem as its primary.
pub const COSAVE_EXT: &str = "skse";

/// True when a file name carries the primary save extension.
pub fn is_save_file(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(SAVE_EXT)
}

/// True when the path exists on disk (broken symlinks count as absent).
pub async fn path_exists(path: &Utf8Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

/// What a directory entry resolved to, following symlinks.
pub(crate) enum EntryKind {
    Dir,
    File,
    Other,
}

/// A directory listing entry with its symlink-resolved kind.
///
/// Unreadable directories and non-UTF-8 names yield nothing rather than
/// an error; an unlistable branch is treated as empty.
pub(crate) async fn read_dir_entries(dir: &Utf8Path) -> Vec<(String, Utf8PathBuf, EntryKind)> {
    let mut out = Vec::new();
    let Ok(mut reader) = tokio::fs::read_dir(dir).await else {
        return out;
    };
    while let Ok(Some(entry)) = reader.next_entry().await {
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let full = dir.join(&name);
        let kind = match entry.file_type().await {
            Ok(ft) if ft.is_dir() => EntryKind::Dir,
            Ok(ft) if ft.is_file() => EntryKind::File,
            // Symlinks and junctions are traversed like what they point at.
            Ok(ft) if ft.is_symlink() => match tokio::fs::metadata(&full).await {
                Ok(meta) if meta.is_dir() => EntryKind::Dir,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            },
            _ => EntryKind::Other,
        };
        out.push((name, full, kind));
    }
    out
}

/// Recursively list every `.ess` file beneath `dir`, in listing order
/// with subdirectories descended in place.
pub(crate) fn list_saves_recursive(
    dir: Utf8PathBuf,
) -> Pin<Box<dyn Future<Output = Vec<Utf8PathBuf>> + Send>> {
    Box::pin(async move {
        let mut found = Vec::new();
        for (name, full, kind) in read_dir_entries(&dir).await {
            match kind {
                EntryKind::Dir => found.extend(list_saves_recursive(full).await),
                EntryKind::File if is_save_file(&name) => found.push(full),
                _ => {}
            }
        }
        found
    })
}

/// Discover primary save candidates under one mod root.
///
/// 1. `Data`/`data` immediate subdirectory present: recurse inside it
///    only, regardless of siblings at the mod root.
/// 2. Otherwise treat the mod root as a virtual Data directory: `.ess`
///    files directly at the root (non-recursive), then a recursive scan
///    of every immediate subdirectory whose name contains "save".
///
/// Returns candidates in discovery order. Never errors; appends progress
/// lines to `report`.
pub async fn discover(mod_root: &Utf8Path, report: &mut Vec<String>) -> Vec<Utf8PathBuf> {
    for data_dir in [mod_root.join("Data"), mod_root.join("data")] {
        let is_dir = tokio::fs::metadata(&data_dir)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if is_dir {
            report.push(format!("  - Data root: {}", data_dir));
            let saves = list_saves_recursive(data_dir).await;
            report.push(format!("    (Data scan) .ess files: {}", saves.len()));
            return saves;
        }
    }

    report.push(format!(
        "  - No Data folder in \"{}\" -> treating mod root as Data",
        mod_root
    ));
    let mut files = Vec::new();
    let entries = read_dir_entries(mod_root).await;

    // Root-level *.ess first.
    for (name, full, kind) in &entries {
        if matches!(kind, EntryKind::File) && is_save_file(name) {
            files.push(full.clone());
        }
    }

    // Then immediate subfolders with "save" in the name, recursively.
    for (name, full, kind) in &entries {
        if matches!(kind, EntryKind::Dir) && name.to_ascii_lowercase().contains("save") {
            report.push(format!("    - Save-like subdir: {}", full));
            files.extend(list_saves_recursive(full.clone()).await);
        }
    }

    report.push(format!(
        "    (Root/Save-subdir scan) .ess files: {}",
        files.len()
    ));
    files
}

/// Append the `.skse` companion of every primary that has one on disk.
///
/// All primaries come first in input order, then companions in the order
/// their primaries were processed. A primary without a companion
/// contributes nothing extra.
pub async fn expand_with_cosaves(primaries: Vec<Utf8PathBuf>) -> Vec<Utf8PathBuf> {
    let mut out = primaries.clone();
    for primary in &primaries {
        let cosave = primary.with_extension(COSAVE_EXT);
        if path_exists(&cosave).await {
            out.push(cosave);
        }
    }
    out
}
