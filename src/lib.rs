// dynamojo - DynamoDB table dump tool
// Copyright (c) 2025 dynamojo Contributors
// Licensed under the MIT License

//! # dynamojo - DynamoDB table dumps
//!
//! dynamojo scans a DynamoDB table and writes every returned item, in
//! DynamoDB's attribute-value JSON form, to a timestamped file on disk.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface, interactive menu and `scan-and-dump`
//! - [`core`] - The dump operation (destination, rendering, file write)
//! - [`adapters`] - DynamoDB store, operator prompts, store trait
//! - [`domain`] - Error type, table name and record types
//! - [`config`] - Settings file, `DYNAMOJO_*` overrides and AWS credentials
//! - [`logging`] - Structured logging with `tracing`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dynamojo::adapters::dynamodb::DynamoDbStore;
//! use dynamojo::config::AwsSettings;
//! use dynamojo::core::export::Exporter;
//! use dynamojo::domain::TableName;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = AwsSettings::from_env()?;
//! let store = DynamoDbStore::connect(&settings).await;
//! let exporter = Exporter::new(Arc::new(store));
//!
//! let table = TableName::new("orders")?;
//! let summary = exporter.export(&table, None).await?;
//! println!("{}", summary.success_message());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], carrying a
//! [`domain::DumpError`]. [`domain::DumpError::operator_message`] gives the
//! text shown to the operator before the process exits with status 1.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
