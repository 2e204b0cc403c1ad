use crate::models::SourceFile;
use glob::Pattern;
use log::{debug, warn};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// The ordered files that make up one output document.
#[derive(Debug, Clone)]
pub struct DocumentSet {
    root: PathBuf,
    name: String,
    files: Vec<SourceFile>,
}

impl DocumentSet {
    /// Pattern used for directory inputs when none is configured.
    pub const DEFAULT_PATTERN: &'static str = "*.md";

    /// Builds the set for `input`.
    ///
    /// A file input is a set of one. A directory input is every regular file
    /// directly inside it whose name matches `pattern`, in the order the
    /// directory lists them.
    pub fn discover(input: &Path, pattern: &str) -> Result<Self, IoError> {
        if input.is_file() {
            let root = input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let file_name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| IoError::NotFound(input.to_path_buf()))?;
            let file = SourceFile::new(RelativePathBuf::from(file_name));
            return Ok(Self {
                root,
                name: file.display_name().to_string(),
                files: vec![file],
            });
        }

        if !input.is_dir() {
            return Err(IoError::NotFound(input.to_path_buf()));
        }

        let matcher = Pattern::new(pattern).map_err(|source| IoError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in fs::read_dir(input)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };
            if matcher.matches(name) {
                files.push(SourceFile::new(RelativePathBuf::from(name)));
            }
        }
        debug!(
            "Found {} files matching '{pattern}' in {}",
            files.len(),
            input.display()
        );

        Ok(Self {
            root: input.to_path_buf(),
            name: directory_name(input),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Display name of the input: the file stem or the directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Reads every file of the set, in order.
    pub fn read(&self) -> Result<Vec<String>, IoError> {
        self.files
            .iter()
            .map(|file| read_file(file.relative_path(), &self.root))
            .collect()
    }
}

/// Read a source file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    debug!("Reading {}", absolute_path.display());
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            dir.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "Untitled".to_string())
}
