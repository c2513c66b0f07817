use crate::models::DraftFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as drafts.
pub const DRAFT_EXTENSIONS: &[&str] = &["md", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid drafts directory: {0}")]
    InvalidDraftsDir(String),
}

/// Read a draft and return its content
pub fn read_draft(relative_path: &RelativePath, drafts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(drafts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for draft files under the drafts directory, sorted by path
pub fn scan_draft_files(drafts_root: &Path) -> Result<Vec<DraftFile>, IoError> {
    validate_drafts_dir(drafts_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(drafts_root, &mut files)?;

    let mut drafts: Vec<DraftFile> = files
        .iter()
        .filter_map(|path| path.strip_prefix(drafts_root).ok())
        .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
        .map(DraftFile::new)
        .collect();
    drafts.sort();
    log::debug!(
        "found {} drafts under {}",
        drafts.len(),
        drafts_root.display()
    );
    Ok(drafts)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && DRAFT_EXTENSIONS.contains(&ext)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_drafts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDraftsDir(
            "drafts directory not found".to_string(),
        ));
    }

    Ok(())
}
