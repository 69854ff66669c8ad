use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("file '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("file: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("file: {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("document has no backing file")]
    Detached,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, IoError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Turns every path into an absolute path, failing on the first one that
/// does not exist. The error names the path as it was given.
pub fn resolve_files<P: AsRef<Path>>(files: &[P]) -> Result<Vec<PathBuf>, IoError> {
    let mut existing = Vec::with_capacity(files.len());
    for file in files {
        let file = file.as_ref();
        let absolute = std::path::absolute(file)?;
        if !absolute.exists() {
            return Err(IoError::NotFound(file.to_path_buf()));
        }
        existing.push(absolute);
    }
    Ok(existing)
}

/// Read a QML file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a QML file, replacing what was there
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
