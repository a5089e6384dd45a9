//! Domain models and types for dynamojo.
//!
//! The domain layer provides:
//! - **Identifiers** ([`TableName`])
//! - **Scan data** ([`Record`], [`ScanOutput`])
//! - **Error types** ([`DumpError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DumpError>`]:
//!
//! ```rust
//! use dynamojo::domain::{DumpError, Result, TableName};
//!
//! fn parse(name: &str) -> Result<TableName> {
//!     TableName::new(name).map_err(DumpError::Validation)
//! }
//!
//! assert!(parse("orders").is_ok());
//! ```

pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::DumpError;
pub use ids::TableName;
pub use record::{Record, ScanOutput};
pub use result::Result;
