use std::io::{Read, Write};
use std::path::Path;

use crate::document::Document;
use crate::error::ProcessError;
use crate::io::{self, IoError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Rewrite each file instead of printing the result.
    pub in_place: bool,
}

/// Organizes a batch of files one after another.
///
/// Every path is checked before any file is touched. Processing stops at
/// the first document that fails; files after it are not attempted. Without
/// `in_place` each organized document is written to `out` in order.
///
/// Returns the number of documents processed.
pub fn process_files<P: AsRef<Path>, W: Write>(
    files: &[P],
    options: ProcessOptions,
    out: &mut W,
) -> Result<usize, ProcessError> {
    let files = io::resolve_files(files)?;

    for file in &files {
        let mut doc = Document::from_path(file)?;
        let changed = doc.organize()?;

        if !options.in_place {
            write!(out, "{doc}").map_err(IoError::from)?;
        } else if changed {
            doc.write_back()?;
            log::info!("organized {}", file.display());
        } else {
            log::debug!("{} is already organized", file.display());
        }
    }

    out.flush().map_err(IoError::from)?;
    Ok(files.len())
}

/// Organizes a single document read from `reader` and writes it to `out`.
pub fn process_reader<R: Read, W: Write>(reader: R, out: &mut W) -> Result<(), ProcessError> {
    let mut doc = Document::from_reader(reader)?;
    doc.organize()?;
    write!(out, "{doc}").map_err(IoError::from)?;
    out.flush().map_err(IoError::from)?;
    Ok(())
}
