//! Amazon DynamoDB integration
//!
//! - [`client`] - [`DynamoDbStore`], the SDK-backed table store
//! - [`convert`] - attribute value to JSON conversion

pub mod client;
pub mod convert;

pub use client::DynamoDbStore;
pub use convert::{attribute_to_json, item_to_record};
