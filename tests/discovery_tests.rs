//! Integration tests for the discovery heuristic
//!
//! These tests verify:
//! - Data-first scanning never inspects files outside the Data subtree
//! - Root-fallback scanning picks up root files and save-named subfolders
//! - Co-save expansion pairs companions with their primaries

use camino::Utf8PathBuf;
use sgi::services::discovery;
use tempfile::TempDir;

fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(temp.path().to_path_buf()).unwrap()
}

#[tokio::test]
async fn data_scan_is_confined_to_data_subtree() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);
    std::fs::create_dir_all(root.join("Data/saves/backup")).unwrap();
    std::fs::write(root.join("Data/top.ess"), b"x").unwrap();
    std::fs::write(root.join("Data/saves/backup/deep.ess"), b"x").unwrap();
    // Siblings at the mod root must never be inspected once Data exists.
    std::fs::write(root.join("outside.ess"), b"x").unwrap();
    std::fs::create_dir_all(root.join("MoreSaves")).unwrap();
    std::fs::write(root.join("MoreSaves/also_outside.ess"), b"x").unwrap();

    let mut report = Vec::new();
    let found = discovery::discover(&root, &mut report).await;

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.starts_with(root.join("Data"))));
}

#[tokio::test]
async fn root_fallback_includes_root_files_and_save_subdirs_only() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);
    std::fs::write(root.join("loose.ess"), b"x").unwrap();
    std::fs::create_dir_all(root.join("MySaveBackup")).unwrap();
    std::fs::write(root.join("MySaveBackup/old.ess"), b"x").unwrap();
    std::fs::create_dir_all(root.join("Notes")).unwrap();
    std::fs::write(root.join("Notes/readme.ess"), b"x").unwrap();

    let mut report = Vec::new();
    let found = discovery::discover(&root, &mut report).await;

    assert!(found.contains(&root.join("loose.ess")));
    assert!(found.contains(&root.join("MySaveBackup/old.ess")));
    assert!(!found.contains(&root.join("Notes/readme.ess")));
    // Root files always precede subdirectory files.
    assert_eq!(found[0], root.join("loose.ess"));
}

#[tokio::test]
async fn save_substring_matches_case_insensitively_anywhere() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);
    std::fs::create_dir_all(root.join("OldSAVESarchive")).unwrap();
    std::fs::write(root.join("OldSAVESarchive/one.ess"), b"x").unwrap();

    let mut report = Vec::new();
    let found = discovery::discover(&root, &mut report).await;

    assert_eq!(found, vec![root.join("OldSAVESarchive/one.ess")]);
}

#[tokio::test]
async fn extension_match_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);
    std::fs::create_dir_all(root.join("Data")).unwrap();
    std::fs::write(root.join("Data/QUICKSAVE.ESS"), b"x").unwrap();
    std::fs::write(root.join("Data/texture.dds"), b"x").unwrap();

    let mut report = Vec::new();
    let found = discovery::discover(&root, &mut report).await;

    assert_eq!(found, vec![root.join("Data/QUICKSAVE.ESS")]);
}

#[tokio::test]
async fn cosave_expansion_yields_two_for_paired_one_for_unpaired() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);
    std::fs::write(root.join("paired.ess"), b"x").unwrap();
    std::fs::write(root.join("paired.skse"), b"x").unwrap();
    std::fs::write(root.join("alone.ess"), b"x").unwrap();

    let paired = discovery::expand_with_cosaves(vec![root.join("paired.ess")]).await;
    assert_eq!(paired.len(), 2);

    let alone = discovery::expand_with_cosaves(vec![root.join("alone.ess")]).await;
    assert_eq!(alone, vec![root.join("alone.ess")]);
}

#[tokio::test]
async fn empty_and_unreadable_roots_produce_empty_results() {
    let temp = TempDir::new().unwrap();
    let root = utf8_root(&temp);

    let mut report = Vec::new();
    assert!(discovery::discover(&root, &mut report).await.is_empty());

    let missing = root.join("never-created");
    let mut report = Vec::new();
    assert!(discovery::discover(&missing, &mut report).await.is_empty());
}
