use std::collections::BTreeMap;

use super::classify::{Bucket, ClassifiedLine};

/// Builds the reorganized header from classified statements.
///
/// Statements are grouped by bucket, each group is sorted by byte order, and
/// the non-empty groups are joined in bucket order with a single empty line
/// between them. Duplicates are kept.
pub fn sort_sections(classified: Vec<ClassifiedLine>) -> Vec<String> {
    let total = classified.len();
    let mut sections: BTreeMap<Bucket, Vec<String>> = BTreeMap::new();
    for line in classified {
        sections.entry(line.bucket).or_default().push(line.text);
    }

    let separators = sections.len().saturating_sub(1);
    let mut result = Vec::with_capacity(total + separators);
    for (idx, (_, mut section)) in sections.into_iter().enumerate() {
        section.sort();
        if idx > 0 {
            result.push(String::new());
        }
        result.extend(section);
    }
    result
}
