//! Scan-and-dump command implementation
//!
//! Non-interactive form of the menu action: the table and location come from
//! flags instead of prompts.

use crate::core::export::Exporter;
use crate::domain::{DumpError, Result, TableName};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the scan-and-dump command
#[derive(Args, Debug)]
pub struct ScanAndDumpArgs {
    /// Name of the DynamoDB table to dump
    #[arg(short, long)]
    pub table_name: String,

    /// Directory to write the dump into (defaults to the home directory)
    #[arg(short, long)]
    pub location: Option<PathBuf>,
}

impl ScanAndDumpArgs {
    /// Execute the scan-and-dump command
    ///
    /// Progress and the final path are written to `out`. Returns the process
    /// exit code.
    pub async fn execute<W: Write>(&self, exporter: &Exporter, out: &mut W) -> Result<i32> {
        tracing::info!("Starting scan-and-dump command");

        let table_name =
            TableName::new(self.table_name.as_str()).map_err(DumpError::Validation)?;

        let summary = exporter
            .export_with_progress(&table_name, self.location.as_deref(), |stage| {
                let _ = writeln!(out, "{}", stage.message(&table_name));
            })
            .await?;

        writeln!(out, "{}", summary.success_message())?;
        if let Some(warning) = summary.truncation_warning() {
            writeln!(out, "{warning}")?;
        }

        Ok(0)
    }
}
