//! In-memory table store
//!
//! Serves fixed responses per table name. Used to exercise the export path
//! without AWS.

use super::traits::TableStore;
use crate::domain::{DumpError, Record, Result, ScanOutput, TableName};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum CannedResponse {
    Records(ScanOutput),
    RemoteFailure { code: String, details: String },
}

/// Table store answering from a fixed set of tables
///
/// Unknown table names produce [`DumpError::TableNotFound`], mirroring the
/// remote service.
///
/// # Example
///
/// ```
/// use dynamojo::adapters::store::{CannedStore, TableStore};
/// use dynamojo::domain::TableName;
/// use serde_json::json;
///
/// # async fn example() -> dynamojo::domain::Result<()> {
/// let store = CannedStore::new().with_table("orders", vec![json!({"id": {"S": "1"}})]);
/// let output = store.scan(&TableName::new("orders").unwrap()).await?;
/// assert_eq!(output.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CannedStore {
    tables: HashMap<String, CannedResponse>,
    scans: AtomicUsize,
}

impl CannedStore {
    /// Creates a store with no tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table whose scan returns `records` in full
    pub fn with_table(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.tables.insert(
            name.into(),
            CannedResponse::Records(ScanOutput::complete(records)),
        );
        self
    }

    /// Adds a table whose scan returns `records` and reports more data
    pub fn with_truncated_table(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.tables.insert(
            name.into(),
            CannedResponse::Records(ScanOutput::truncated(records)),
        );
        self
    }

    /// Adds a table whose scan fails with a remote error
    pub fn with_failure(
        mut self,
        name: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        self.tables.insert(
            name.into(),
            CannedResponse::RemoteFailure {
                code: code.into(),
                details: details.into(),
            },
        );
        self
    }

    /// Number of scan requests received so far
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableStore for CannedStore {
    async fn scan(&self, table_name: &TableName) -> Result<ScanOutput> {
        self.scans.fetch_add(1, Ordering::SeqCst);

        match self.tables.get(table_name.as_str()) {
            Some(CannedResponse::Records(output)) => Ok(output.clone()),
            Some(CannedResponse::RemoteFailure { code, details }) => {
                Err(DumpError::remote(code.clone(), details.clone()))
            }
            None => Err(DumpError::TableNotFound(table_name.to_string())),
        }
    }
}
