//! Domain error types
//!
//! This module defines the error hierarchy for dynamojo.
//! All errors are domain-specific and don't expose AWS SDK types.

use thiserror::Error;

/// Main dynamojo error type
///
/// Every variant is terminal for the current run: nothing is retried and the
/// process exits with code 1 once the error has been reported.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Required environment variables are absent or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    ConfigurationMissing(Vec<String>),

    /// Configuration file or override errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid operator input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The remote store reported that the table does not exist
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Any other remote-side failure (throttling, permissions, network)
    #[error("Remote error ({code}): {details}")]
    Remote { code: String, details: String },

    /// The dump could not be written to the destination
    #[error("Failed to write {path}: {reason}")]
    Filesystem { path: String, reason: String },

    /// The interactive prompt cannot run in this terminal
    #[error("Prompt error: {0}")]
    PromptRender(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl DumpError {
    /// Builds a remote error from a service code and the raw error payload
    pub fn remote(code: impl Into<String>, details: impl Into<String>) -> Self {
        DumpError::Remote {
            code: code.into(),
            details: details.into(),
        }
    }

    /// Builds a filesystem error for `path`
    pub fn filesystem(path: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        DumpError::Filesystem {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// The message shown to the operator on stderr before exiting
    pub fn operator_message(&self) -> String {
        match self {
            DumpError::ConfigurationMissing(vars) => format!(
                "Before using dynamojo, please configure needed variables (in .env): {}",
                vars.join(", ")
            ),
            DumpError::TableNotFound(table) => format!(
                "AWS Returned: Resource not found! Is the table name (\"{table}\") correct?"
            ),
            DumpError::Remote { code, details } => format!(
                "Unknown error while trying to scan dynamo!\n{{ error: {{ code: {code:?}, details: {details} }} }}"
            ),
            DumpError::PromptRender(reason) => format!(
                "Prompt couldn't be rendered in the current environment ({reason})"
            ),
            other => other.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DumpError {
    fn from(err: std::io::Error) -> Self {
        DumpError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DumpError {
    fn from(err: serde_json::Error) -> Self {
        DumpError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DumpError {
    fn from(err: toml::de::Error) -> Self {
        DumpError::Configuration(format!("TOML parse error: {err}"))
    }
}
