use super::boundary::HeaderBlock;

/// Splices the reorganized header back into the document.
///
/// Lines outside `block` are copied verbatim. Exactly one empty line is put
/// between the header and any content before or after it.
///
/// # Panics
///
/// Panics if `block` ends past the last line; blocks from
/// [`scan_boundary`](super::scan_boundary) always fit the lines they were
/// scanned from.
pub fn reassemble<S: AsRef<str>>(
    lines: &[S],
    block: HeaderBlock,
    organized: Vec<String>,
) -> Vec<String> {
    let before = &lines[..block.start()];
    let after = &lines[block.end() + 1..];

    let mut capacity = before.len() + organized.len() + after.len();
    if !before.is_empty() {
        capacity += 1;
    }
    if !after.is_empty() {
        capacity += 1;
    }

    let mut result = Vec::with_capacity(capacity);
    result.extend(before.iter().map(|line| line.as_ref().to_string()));
    if !before.is_empty() {
        result.push(String::new());
    }
    result.extend(organized);
    if !after.is_empty() {
        result.push(String::new());
    }
    result.extend(after.iter().map(|line| line.as_ref().to_string()));
    result
}
