//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table name newtype wrapper
///
/// The only local check is that the name is not blank; naming rules are
/// enforced by DynamoDB itself.
///
/// # Examples
///
/// ```
/// use dynamojo::domain::ids::TableName;
/// use std::str::FromStr;
///
/// let table = TableName::from_str(" orders ").unwrap();
/// assert_eq!(table.as_str(), "orders");
/// assert!(TableName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName(String);

impl TableName {
    /// Creates a new TableName, trimming surrounding whitespace
    ///
    /// # Returns
    ///
    /// Returns `Ok(TableName)` if the name is non-blank, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Table name cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the table name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TableName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
