use relative_path::{RelativePath, RelativePathBuf};

/// A saved model reply, addressed relative to the drafts folder
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DraftFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl DraftFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without its extension, e.g. `welcome-1` for `flows/welcome-1.md`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_stem().unwrap_or("Untitled").to_string()
    }
}

impl From<&str> for DraftFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
