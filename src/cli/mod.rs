//! CLI interface and argument parsing
//!
//! Without a subcommand dynamojo opens the interactive menu; `scan-and-dump`
//! runs the same export from flags.

pub mod commands;

use crate::adapters::store::TableStore;
use crate::config::AwsSettings;
use crate::core::export::Exporter;
use crate::domain::Result;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

/// dynamojo - dump DynamoDB tables to JSON
#[derive(Parser, Debug)]
#[command(name = "dynamojo")]
#[command(version, about, long_about = None)]
#[command(author = "dynamojo Contributors")]
pub struct Cli {
    /// Path to the settings file (optional; defaults to ./dynamojo.toml when present)
    #[arg(short, long, env = "DYNAMOJO_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DYNAMOJO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a table and dump it to a timestamped JSON file
    ScanAndDump(commands::scan_and_dump::ScanAndDumpArgs),
}

/// Checks the AWS variables and builds the exporter
///
/// `connect` is only called once every required variable is present, so a
/// misconfigured run never constructs a store.
///
/// # Errors
///
/// Returns [`DumpError::ConfigurationMissing`](crate::domain::DumpError::ConfigurationMissing)
/// naming every missing variable.
pub async fn prepare_exporter<L, C, Fut, S>(
    lookup: L,
    default_location: Option<PathBuf>,
    connect: C,
) -> Result<Exporter>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(AwsSettings) -> Fut,
    Fut: Future<Output = S>,
    S: TableStore + 'static,
{
    let settings = AwsSettings::from_lookup(lookup)?;
    tracing::debug!(region = %settings.region, "AWS settings loaded");

    let store = connect(settings).await;
    Ok(Exporter::new(Arc::new(store)).with_default_location(default_location))
}
