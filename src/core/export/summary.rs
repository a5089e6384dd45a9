//! Dump summary and reporting

use crate::domain::TableName;
use std::path::PathBuf;
use std::time::Duration;

/// Summary of a completed dump
#[derive(Debug, Clone)]
pub struct DumpSummary {
    /// Table that was scanned
    pub table_name: TableName,

    /// Absolute path of the written file
    pub path: PathBuf,

    /// Number of records written
    pub record_count: usize,

    /// Whether the store reported data beyond the single scan response
    pub truncated: bool,

    /// Wall time of scan, rendering and write
    pub duration: Duration,
}

impl DumpSummary {
    /// Line printed to the operator once the file is written
    pub fn success_message(&self) -> String {
        format!("Dump was successful. Path: {}", self.path.display())
    }

    /// Warning printed when the scan did not cover the whole table
    pub fn truncation_warning(&self) -> Option<String> {
        self.truncated.then(|| {
            format!(
                "Warning: DynamoDB returned only part of table \"{}\" in a single response; \
                 the dump holds the first {} records.",
                self.table_name, self.record_count
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(truncated: bool) -> DumpSummary {
        DumpSummary {
            table_name: TableName::new("orders").unwrap(),
            path: PathBuf::from("/home/me/2024-05-01T09:30:12.json"),
            record_count: 3,
            truncated,
            duration: Duration::from_millis(120),
        }
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            summary(false).success_message(),
            "Dump was successful. Path: /home/me/2024-05-01T09:30:12.json"
        );
    }

    #[test]
    fn test_truncation_warning_only_when_truncated() {
        assert!(summary(false).truncation_warning().is_none());
        let warning = summary(true).truncation_warning().unwrap();
        assert!(warning.contains("\"orders\""));
        assert!(warning.contains("first 3 records"));
    }
}
