//! Scan-and-dump export
//!
//! This module provides the export operation for dynamojo:
//! - Single-request table scan through a [`TableStore`](crate::adapters::store::TableStore)
//! - Pretty-printed JSON rendering
//! - Timestamped dump file placement
//! - Summary and reporting

pub mod exporter;
pub mod path;
pub mod summary;
pub mod writer;

pub use exporter::{ExportStage, Exporter};
pub use path::{dump_file_name, dump_path, resolve_directory, TIMESTAMP_FORMAT};
pub use summary::DumpSummary;
pub use writer::{render_records, write_dump};
