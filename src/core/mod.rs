//! Core business logic for dynamojo.
//!
//! # Export Workflow
//!
//! 1. **Resolve**: Pick the destination directory and timestamped file name
//! 2. **Scan**: Fetch the table in a single request
//! 3. **Render**: Serialize the records as a pretty-printed JSON array
//! 4. **Write**: Persist the file, replacing any file with the same name
//! 5. **Report**: Return a [`DumpSummary`](export::DumpSummary)
//!
//! # Example
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
//! let summary = exporter.export(&TableName::new("orders")?, None).await?;
//! println!("Wrote {} records to {}", summary.record_count, summary.path.display());
//! # Ok(())
//! # }
//! ```

pub mod export;
