use std::ops::RangeInclusive;

use super::HeaderError;
use super::patterns;

/// Inclusive line range of the header block within a document.
///
/// Invariant: `start <= end`. The scanner additionally guarantees that
/// `end` is a valid index into the lines it scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    start: usize,
    end: usize,
}

impl HeaderBlock {
    /// Returns `None` when `start > end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Finds the header block of a document.
///
/// The block starts at the first `pragma ` or `import ` statement, pulled
/// back over the blank lines directly above it, and ends on the line before
/// the first component declaration such as `Item {`. Comments above the
/// first statement stay outside the block.
pub fn scan_boundary<S: AsRef<str>>(lines: &[S]) -> Result<HeaderBlock, HeaderError> {
    let mut blank_run = 0usize;
    let mut header_start: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();

        match header_start {
            None if line.is_empty() => blank_run += 1,
            None if patterns::is_pragma(line) || patterns::is_import(line) => {
                header_start = Some(index - blank_run);
            }
            None => blank_run = 0,
            Some(start) if patterns::is_declaration(line) => {
                return HeaderBlock::new(start, index - 1).ok_or(HeaderError::BoundaryNotFound);
            }
            Some(_) => {}
        }
    }

    Err(HeaderError::BoundaryNotFound)
}
