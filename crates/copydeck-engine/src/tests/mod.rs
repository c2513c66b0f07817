//! Shared helpers for unit tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary drafts directory
pub fn create_test_drafts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a draft file with content, creating parent folders as needed
pub fn create_test_file(drafts_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = drafts_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
