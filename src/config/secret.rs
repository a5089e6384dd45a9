//! Secure credential handling using the secrecy crate
//!
//! AWS secrets read from the environment are wrapped in [`SecretString`] so
//! they are zeroed on drop and never show up in `Debug` output or logs.
//!
//! # Example
//!
//! ```rust
//! use dynamojo::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let secret = secret_string("wJalrXUtnFEMI".to_string());
//! assert_eq!(secret.expose_secret().as_ref(), "wJalrXUtnFEMI");
//! assert!(!format!("{secret:?}").contains("wJalrXUtnFEMI"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Helper function to create a SecretString from a String
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

/// Helper function to create an optional SecretString from an optional String
#[inline]
pub fn secret_string_opt(value: Option<String>) -> Option<SecretString> {
    value.map(secret_string)
}
