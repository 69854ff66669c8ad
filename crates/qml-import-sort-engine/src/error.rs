use std::path::PathBuf;

use crate::header::HeaderError;
use crate::io::IoError;

/// Failure of a single document or of a whole batch.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("file: {}: {source}", path.display())]
    File { path: PathBuf, source: HeaderError },
    #[error(transparent)]
    Header(#[from] HeaderError),
}

impl ProcessError {
    /// Attaches the originating file, when known, to a header error.
    pub fn in_file(source: HeaderError, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ProcessError::File { path, source },
            None => ProcessError::Header(source),
        }
    }

    /// True when output could not be written because the reader went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ProcessError::Io(e) if e.is_broken_pipe())
    }
}
