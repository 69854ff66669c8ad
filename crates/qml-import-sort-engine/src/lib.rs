pub mod document;
pub mod error;
pub mod header;
pub mod io;
pub mod process;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, LineEnding};
pub use error::ProcessError;
pub use header::{Bucket, HeaderBlock, HeaderError, organize_lines};
pub use io::IoError;
pub use process::{ProcessOptions, process_files, process_reader};
