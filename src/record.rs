//! Record types shared across the extraction pipeline

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name used by prose-fallback records.
pub const TEXT_FIELD: &str = "text";

/// One extracted record: canonical field name mapped to the verbatim cell
/// value. Insertion order follows column/line order.
pub type Record = IndexMap<String, String>;

/// Ordered sequence of records from one parse call. Empty means "nothing
/// extractable", never an error.
pub type ParseResult = Vec<Record>;

/// A table already detected by a native PDF table extractor.
///
/// The first row is the header. When a caller has one of these, layout
/// classification is bypassed entirely and the grid goes straight through
/// schema mapping and row building.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeTable {
    pub cells: Vec<Vec<String>>,
}

impl NativeTable {
    pub fn new(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    /// True when the grid has no non-blank cell at all.
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.trim().is_empty()))
    }
}
