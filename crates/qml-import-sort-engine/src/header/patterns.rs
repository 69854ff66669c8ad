//! Compiled line patterns shared by the boundary scanner and the classifier.
//!
//! All patterns run against a line that has already been trimmed. The
//! statement patterns additionally expect the `import` keyword to be
//! followed by exactly one space (see [`normalize_import`]).

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid header pattern"))
}

fn import_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^import\s+")
}

fn declaration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^[a-zA-Z0-9.]+\s*\{")
}

fn framework_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^import\s+Qt[A-Z5.]")
}

fn library_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^import\s+[a-zA-Z]+\.")
}

fn module_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r"^import\s+[a-zA-Z][a-zA-Z0-9_]*(\s|$)")
}

fn relative_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    regex(&RE, r#"^import\s+["']"#)
}

/// Collapses the whitespace run after the `import` keyword to a single space.
pub fn normalize_import(line: &str) -> Cow<'_, str> {
    import_whitespace().replace(line, "import ")
}

/// Returns true if a line starts with `//`, `/*`, `*`, or `*/`.
pub fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

pub fn is_pragma(line: &str) -> bool {
    line.starts_with("pragma ")
}

pub fn is_import(line: &str) -> bool {
    line.starts_with("import ")
}

/// Returns true for the first line of a component declaration, e.g. `Item {`.
pub fn is_declaration(line: &str) -> bool {
    declaration().is_match(line)
}

/// Matches `import Qt` followed by an uppercase letter, `5`, or `.`.
pub fn is_framework_import(line: &str) -> bool {
    framework_import().is_match(line)
}

/// Matches a dotted identifier such as `import io.github.whatever`.
pub fn is_library_import(line: &str) -> bool {
    library_import().is_match(line)
}

/// Matches a single word such as `import MyModule` or `import mymodule`.
pub fn is_module_import(line: &str) -> bool {
    module_import().is_match(line)
}

/// Matches a quoted path, `import "` or `import '`.
pub fn is_relative_import(line: &str) -> bool {
    relative_import().is_match(line)
}
