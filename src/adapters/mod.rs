//! External system integrations for dynamojo.
//!
//! - [`store`] - the [`TableStore`](store::TableStore) abstraction and an in-memory implementation
//! - [`dynamodb`] - Amazon DynamoDB implementation
//! - [`prompt`] - operator prompts ([`Prompter`](prompt::Prompter)) and the terminal implementation
//!
//! Adapters isolate AWS and terminal I/O so the export operation and the
//! interactive session can be tested with substitutes.

pub mod dynamodb;
pub mod prompt;
pub mod store;
