//! Scan-and-dump operation
//!
//! One run moves `Idle → Exporting → Done | Failed`: a single scan, then
//! rendering, then one file write. The file is only touched after the scan
//! succeeded and the records rendered, so a failed run leaves the
//! destination untouched.

use super::path::{dump_path, resolve_directory};
use super::summary::DumpSummary;
use super::writer::{render_records, write_dump};
use crate::adapters::store::TableStore;
use crate::domain::{Result, TableName};
use crate::{log_dump_complete, log_scan_start};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Progress points reported while a dump runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    /// The scan request is in flight
    Scanning,
    /// Records are being rendered as JSON
    Converting,
    /// The file is being written
    Saving,
}

impl ExportStage {
    /// Operator-facing progress line for this stage
    pub fn message(&self, table_name: &TableName) -> String {
        match self {
            ExportStage::Scanning => format!("Scanning table \"{table_name}\"..."),
            ExportStage::Converting => "Converting to JSON...".to_string(),
            ExportStage::Saving => "Saving dump...".to_string(),
        }
    }
}

/// Runs dumps against a [`TableStore`]
pub struct Exporter {
    store: Arc<dyn TableStore>,
    default_location: Option<PathBuf>,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self {
            store,
            default_location: None,
        }
    }

    /// Directory used when the operator gives no location
    pub fn with_default_location(mut self, default_location: Option<PathBuf>) -> Self {
        self.default_location = default_location;
        self
    }

    /// Dumps `table_name` into `location` (or the default directory)
    ///
    /// # Errors
    ///
    /// - `TableNotFound` / `Remote` from the store, with nothing written
    /// - `Filesystem` if the destination cannot be written
    pub async fn export(
        &self,
        table_name: &TableName,
        location: Option<&Path>,
    ) -> Result<DumpSummary> {
        self.export_with_progress(table_name, location, |_| {}).await
    }

    /// Same as [`export`](Self::export) with an explicit timestamp
    pub async fn export_at(
        &self,
        table_name: &TableName,
        location: Option<&Path>,
        now: DateTime<Utc>,
    ) -> Result<DumpSummary> {
        self.run(table_name, location, move || now, |_| {}).await
    }

    /// Same as [`export`](Self::export), reporting each stage to `progress`
    pub async fn export_with_progress<F>(
        &self,
        table_name: &TableName,
        location: Option<&Path>,
        progress: F,
    ) -> Result<DumpSummary>
    where
        F: FnMut(ExportStage),
    {
        self.run(table_name, location, Utc::now, progress).await
    }

    /// The file name is stamped by `clock` once the scan has returned
    async fn run<C, F>(
        &self,
        table_name: &TableName,
        location: Option<&Path>,
        clock: C,
        mut progress: F,
    ) -> Result<DumpSummary>
    where
        C: FnOnce() -> DateTime<Utc>,
        F: FnMut(ExportStage),
    {
        let start = Instant::now();

        // Resolve before the scan so a bad home directory fails without a remote call
        let directory = resolve_directory(location, self.default_location.as_deref())?;

        progress(ExportStage::Scanning);
        log_scan_start!(table_name);
        let output = self.store.scan(table_name).await?;
        let path = dump_path(&directory, clock());

        if output.truncated {
            tracing::warn!(
                table_name = %table_name,
                count = output.len(),
                "Scan response was truncated; dump will not contain the whole table"
            );
        }

        progress(ExportStage::Converting);
        let contents = render_records(&output.records)?;

        progress(ExportStage::Saving);
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Writing dump");
        write_dump(&path, &contents)?;

        let summary = DumpSummary {
            table_name: table_name.clone(),
            path,
            record_count: output.len(),
            truncated: output.truncated,
            duration: start.elapsed(),
        };

        log_dump_complete!(
            summary.table_name,
            summary.record_count,
            summary.path.display(),
            summary.duration
        );

        Ok(summary)
    }
}
