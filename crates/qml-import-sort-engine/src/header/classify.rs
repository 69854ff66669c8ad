use super::HeaderError;
use super::patterns;

/// Output group of a header statement.
///
/// Variants are declared in output order, so the derived [`Ord`] is the
/// order in which sections are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    /// `pragma ComponentBehavior: Bound`
    Pragma,
    /// `import QtQuick`, `import Qt5Compat.GraphicalEffects`
    FrameworkImport,
    /// `import io.github.whatever.MyTheme`
    LibraryImport,
    /// `import pyobjects`
    ModuleImport,
    /// `import "../views"`
    RelativeImport,
}

#[cfg(test)]
impl Bucket {
    const ALL: [Bucket; 5] = [
        Bucket::Pragma,
        Bucket::FrameworkImport,
        Bucket::LibraryImport,
        Bucket::ModuleImport,
        Bucket::RelativeImport,
    ];
}

/// A normalized header statement tagged with its bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub bucket: Bucket,
    pub text: String,
}

/// Assigns header statements to buckets.
///
/// The rules are tried in a fixed priority order and the first match wins.
/// Framework imports must be tested before library imports because
/// `import QtQuick.Controls` satisfies both shapes.
pub struct StatementClassifier;

impl StatementClassifier {
    /// Classifies a single statement found at document line `index`.
    ///
    /// The line must not be blank or a comment; the caller filters those.
    pub fn classify(&self, index: usize, line: &str) -> Result<ClassifiedLine, HeaderError> {
        let text = patterns::normalize_import(line.trim()).into_owned();

        let bucket = if patterns::is_pragma(&text) {
            Bucket::Pragma
        } else if patterns::is_framework_import(&text) {
            Bucket::FrameworkImport
        } else if patterns::is_library_import(&text) {
            Bucket::LibraryImport
        } else if patterns::is_module_import(&text) {
            Bucket::ModuleImport
        } else if patterns::is_relative_import(&text) {
            Bucket::RelativeImport
        } else {
            return Err(HeaderError::UnclassifiableStatement { index, text });
        };

        Ok(ClassifiedLine { bucket, text })
    }
}
