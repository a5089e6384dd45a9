//! Table store abstraction
//!
//! The export operation only ever needs one capability from the remote
//! store, a single full-table scan. Keeping it behind a trait lets the export
//! logic run against canned data in tests.

use crate::domain::{Result, ScanOutput, TableName};
use async_trait::async_trait;

/// Remote table store
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Scan every item of `table_name` in a single request
    ///
    /// No filter, projection, or continuation handling is applied. When the
    /// store stops early (size limit), the returned output is marked
    /// `truncated`.
    ///
    /// # Errors
    ///
    /// - [`DumpError::TableNotFound`](crate::domain::DumpError::TableNotFound)
    ///   if the table does not exist
    /// - [`DumpError::Remote`](crate::domain::DumpError::Remote) for every
    ///   other remote failure
    async fn scan(&self, table_name: &TableName) -> Result<ScanOutput>;
}
