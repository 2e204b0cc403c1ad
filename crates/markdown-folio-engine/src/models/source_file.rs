use relative_path::{RelativePath, RelativePathBuf};

/// A source file of a document set, relative to the set's root directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl SourceFile {
    /// Create a new SourceFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name (file name without extension)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_stem().unwrap_or("Untitled").to_string()
    }
}

impl From<&str> for SourceFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
