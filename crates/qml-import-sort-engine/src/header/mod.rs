//! Reorganization of the QML header block.
//!
//! The header block is the run of `pragma` and `import` statements at the
//! top of a document, together with the blank lines and comments between
//! them. Processing happens in three phases:
//!
//! 1. [`scan_boundary`] locates the block.
//! 2. [`organize_block`] drops blanks and comments, classifies each statement
//!    with the [`StatementClassifier`] and sorts the result into sections.
//! 3. [`reassemble`] splices the sections back between the untouched lines
//!    above and below the block.
//!
//! ```
//! use qml_import_sort_engine::header::organize_lines;
//!
//! let lines = ["import QtQuick.Controls", "pragma Singleton", "import QtQuick", "Item {", "}"];
//! let organized = organize_lines(&lines).unwrap();
//!
//! assert_eq!(
//!     organized,
//!     ["pragma Singleton", "", "import QtQuick", "import QtQuick.Controls", "", "Item {", "}"]
//! );
//! ```

pub mod boundary;
pub mod classify;
pub mod patterns;
pub mod reassemble;
pub mod sections;

#[cfg(test)]
mod tests;

pub use boundary::{HeaderBlock, scan_boundary};
pub use classify::{Bucket, ClassifiedLine, StatementClassifier};
pub use reassemble::reassemble;
pub use sections::sort_sections;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("could not identify relevant lines")]
    BoundaryNotFound,
    #[error(
        "cannot identify import type (one of pragma, framework, library, module, relative) in line {}: '{text}'",
        .index + 1
    )]
    UnclassifiableStatement {
        /// Zero-based index of the line in the document.
        index: usize,
        /// The statement after whitespace normalization.
        text: String,
    },
}

/// Classifies and sorts the lines of a header block.
///
/// `offset` is the document index of `lines[0]` and is only used for error
/// reporting. Blank lines and comments are discarded.
pub fn organize_block<S: AsRef<str>>(
    lines: &[S],
    offset: usize,
) -> Result<Vec<String>, HeaderError> {
    let classifier = StatementClassifier;
    let mut classified = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() || patterns::is_comment(line) {
            continue;
        }
        classified.push(classifier.classify(offset + i, line)?);
    }

    Ok(sort_sections(classified))
}

/// Runs the whole pipeline over the lines of one document.
///
/// Either the complete reorganized document is returned or an error; no
/// partial output is produced.
pub fn organize_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>, HeaderError> {
    let block = scan_boundary(lines)?;
    log::debug!(
        "header block spans lines {}..={} of {}",
        block.start() + 1,
        block.end() + 1,
        lines.len()
    );

    let organized = organize_block(&lines[block.range()], block.start())?;
    Ok(reassemble(lines, block, organized))
}
