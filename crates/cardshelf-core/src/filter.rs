#![forbid(unsafe_code)]

//! Substring search over indexed records.

use crate::index::IndexedRecord;
use crate::text::normalize;

/// Records whose search index contains the normalised `keyword`.
///
/// A keyword that normalises to nothing selects every record. Order is kept.
pub fn filter_records<'a>(records: &'a [IndexedRecord], keyword: &str) -> Vec<&'a IndexedRecord> {
    let query = normalize(keyword);
    if query.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| r.matches(&query)).collect()
}
