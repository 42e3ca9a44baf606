use log::debug;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
}

/// Source of serialized documents
pub trait Reader {
    fn read(&self, path: &RelativePath) -> Result<String, IoError>;
}

/// Destination for serialized documents
pub trait Writer {
    fn write(&self, path: &RelativePath, blob: &str) -> Result<(), IoError>;
}

/// Reads and writes documents as files under a root directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Reader for FileStorage {
    fn read(&self, path: &RelativePath) -> Result<String, IoError> {
        read_file(path, &self.root)
    }
}

impl Writer for FileStorage {
    fn write(&self, path: &RelativePath, blob: &str) -> Result<(), IoError> {
        write_file(path, &self.root, blob)
    }
}

/// Read a document file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    debug!("reading {}", absolute_path.display());
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a document file, replacing any previous content
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    debug!("writing {} bytes to {}", content.len(), absolute_path.display());
    fs::write(&absolute_path, content).map_err(IoError::Io)
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
