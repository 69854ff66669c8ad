use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::ProcessError;
use crate::header;
use crate::io::{self, IoError};

/// Line break convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// Picks the convention of the first line break in `content`.
    ///
    /// Content without any line break is treated as `Lf`.
    pub fn detect(content: &str) -> Self {
        let bytes = content.as_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            match byte {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => return LineEnding::CrLf,
                b'\r' => return LineEnding::Cr,
                b'\n' => return LineEnding::Lf,
                _ => {}
            }
        }
        LineEnding::Lf
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// A QML document split into lines.
///
/// Joining the lines with the detected line ending reproduces the input
/// exactly, including a trailing line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: Option<PathBuf>,
    line_ending: LineEnding,
    lines: Vec<String>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let line_ending = LineEnding::detect(text);
        let lines = text
            .split(line_ending.as_str())
            .map(str::to_string)
            .collect();
        Self {
            path: None,
            line_ending,
            lines,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let content = io::read_file(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::from_text(&content)
        })
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, IoError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::from_text(&content))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reorganizes the header block in place.
    ///
    /// Returns whether the lines changed. On error the document is left
    /// untouched and the error names the file, if there is one.
    pub fn organize(&mut self) -> Result<bool, ProcessError> {
        let organized = header::organize_lines(&self.lines)
            .map_err(|e| ProcessError::in_file(e, self.path.clone()))?;
        let changed = organized != self.lines;
        self.lines = organized;
        Ok(changed)
    }

    /// Writes the document back to the file it was read from.
    pub fn write_back(&self) -> Result<(), IoError> {
        let path = self.path.as_deref().ok_or(IoError::Detached)?;
        io::write_file(path, &self.to_string())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join(self.line_ending.as_str()))
    }
}
