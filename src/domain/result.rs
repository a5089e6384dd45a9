//! Result type alias for dynamojo

use super::errors::DumpError;

/// Result type alias for dynamojo operations
///
/// # Examples
///
/// ```
/// use dynamojo::domain::result::Result;
/// use dynamojo::domain::errors::DumpError;
///
/// fn table_name(input: &str) -> Result<&str> {
///     if input.trim().is_empty() {
///         return Err(DumpError::Validation("table name is empty".to_string()));
///     }
///     Ok(input.trim())
/// }
///
/// assert!(table_name("orders").is_ok());
/// assert!(table_name("  ").is_err());
/// ```
pub type Result<T> = std::result::Result<T, DumpError>;
