//! Table store abstraction layer
//!
//! - [`traits`] - the [`TableStore`] capability used by the export operation
//! - [`canned`] - in-memory implementation with fixed responses

pub mod canned;
pub mod traits;

pub use canned::CannedStore;
pub use traits::TableStore;
