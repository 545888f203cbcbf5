#![forbid(unsafe_code)]

//! Search index construction.

use crate::kind::CollectionKind;
use crate::record::Record;
use crate::text::normalize;

/// A record paired with its precomputed search index.
///
/// The index is fixed at construction; there is no way to mutate the record
/// or the index afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord {
    record: Record,
    search_index: String,
}

impl IndexedRecord {
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn search_index(&self) -> &str {
        &self.search_index
    }

    /// Whether an already-normalised query occurs in the index.
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.search_index.contains(normalized_query)
    }
}

/// Index one record: title, tags and `extras` joined by spaces, then normalised.
pub fn index_record(record: Record, extras: &[String]) -> IndexedRecord {
    let mut parts: Vec<&str> = Vec::with_capacity(1 + record.tags.len() + extras.len());
    parts.push(&record.title);
    parts.extend(record.tags.iter().map(String::as_str));
    parts.extend(extras.iter().map(String::as_str));
    let search_index = normalize(&parts.join(" "));
    IndexedRecord {
        record,
        search_index,
    }
}

/// Index a whole fetched collection with the extras of `kind`.
pub fn index_collection(kind: CollectionKind, records: Vec<Record>) -> Vec<IndexedRecord> {
    records
        .into_iter()
        .map(|record| {
            let extras = kind.extras(&record);
            index_record(record, &extras)
        })
        .collect()
}
