//! Records returned by a table scan

use serde_json::Value;

/// A single schema-less document returned by a scan
///
/// Records are never interpreted; they are carried as JSON values and written
/// out exactly as the store adapter produced them.
pub type Record = Value;

/// Result of a single scan request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    /// Records in the order the store returned them
    pub records: Vec<Record>,

    /// True when the store reported more data beyond this response
    pub truncated: bool,
}

impl ScanOutput {
    /// Creates a complete (non-truncated) scan output
    pub fn complete(records: Vec<Record>) -> Self {
        Self {
            records,
            truncated: false,
        }
    }

    /// Creates a scan output the store cut short
    pub fn truncated(records: Vec<Record>) -> Self {
        Self {
            records,
            truncated: true,
        }
    }

    /// Number of records in this output
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan returned no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
