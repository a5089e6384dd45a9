//! AWS connection settings read from the environment
//!
//! Credentials are never read from the settings file. They come from the
//! process environment (optionally seeded from `.env`), are checked once at
//! startup, and are then held immutably for the rest of the run.

use super::secret::{secret_string, secret_string_opt, SecretString};
use crate::domain::{DumpError, Result};

/// Credential identifier variable
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
/// Credential secret variable
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
/// Region selector variable
pub const REGION_VAR: &str = "AWS_REGION";
/// Optional temporary session credential
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";
/// Optional DynamoDB-specific endpoint override
pub const DYNAMODB_ENDPOINT_VAR: &str = "AWS_ENDPOINT_URL_DYNAMODB";
/// Optional global endpoint override
pub const ENDPOINT_VAR: &str = "AWS_ENDPOINT_URL";

/// Variables that must be present before any remote call is attempted
pub const REQUIRED_VARS: [&str; 3] = [ACCESS_KEY_ID_VAR, SECRET_ACCESS_KEY_VAR, REGION_VAR];

/// Static AWS settings for a single run
#[derive(Debug, Clone)]
pub struct AwsSettings {
    /// Credential identifier
    pub access_key_id: String,

    /// Credential secret
    pub secret_access_key: SecretString,

    /// Region the table lives in
    pub region: String,

    /// Temporary session credential, if any
    pub session_token: Option<SecretString>,

    /// Endpoint override (DynamoDB Local, LocalStack)
    pub endpoint_url: Option<String>,
}

impl AwsSettings {
    /// Reads the settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::ConfigurationMissing`] naming every required
    /// variable that is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the settings through an arbitrary variable lookup
    ///
    /// Empty and whitespace-only values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .iter()
            .filter(|&&name| read(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DumpError::ConfigurationMissing(missing));
        }

        let (Some(access_key_id), Some(secret_access_key), Some(region)) = (
            read(ACCESS_KEY_ID_VAR),
            read(SECRET_ACCESS_KEY_VAR),
            read(REGION_VAR),
        ) else {
            return Err(DumpError::ConfigurationMissing(
                REQUIRED_VARS.iter().map(|name| name.to_string()).collect(),
            ));
        };

        let endpoint_url = read(DYNAMODB_ENDPOINT_VAR).or_else(|| read(ENDPOINT_VAR));

        Ok(Self {
            access_key_id,
            secret_access_key: secret_string(secret_access_key),
            region,
            session_token: secret_string_opt(read(SESSION_TOKEN_VAR)),
            endpoint_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_complete() {
        let settings = AwsSettings::from_lookup(lookup_from(&[
            (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (REGION_VAR, "eu-west-1"),
            (SESSION_TOKEN_VAR, "session"),
        ]))
        .unwrap();

        assert_eq!(settings.access_key_id, "AKIAEXAMPLE");
        assert_eq!(settings.secret_access_key.expose_secret().as_ref(), "secret");
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(
            settings.session_token.unwrap().expose_secret().as_ref(),
            "session"
        );
        assert!(settings.endpoint_url.is_none());
    }

    #[test]
    fn test_from_lookup_reports_every_missing_variable() {
        let err = AwsSettings::from_lookup(lookup_from(&[(SECRET_ACCESS_KEY_VAR, "secret")]))
            .unwrap_err();

        match err {
            DumpError::ConfigurationMissing(vars) => {
                assert_eq!(vars, vec![ACCESS_KEY_ID_VAR, REGION_VAR]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_empty_value_counts_as_missing() {
        let err = AwsSettings::from_lookup(lookup_from(&[
            (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (REGION_VAR, "  "),
        ]))
        .unwrap_err();

        assert!(matches!(err, DumpError::ConfigurationMissing(ref vars) if vars == &[REGION_VAR]));
    }

    #[test]
    fn test_session_token_is_optional() {
        let settings = AwsSettings::from_lookup(lookup_from(&[
            (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (REGION_VAR, "us-east-1"),
            (SESSION_TOKEN_VAR, ""),
        ]))
        .unwrap();
        assert!(settings.session_token.is_none());
    }

    #[test]
    fn test_dynamodb_endpoint_takes_precedence() {
        let settings = AwsSettings::from_lookup(lookup_from(&[
            (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (REGION_VAR, "us-east-1"),
            (ENDPOINT_VAR, "http://localhost:4566"),
            (DYNAMODB_ENDPOINT_VAR, "http://localhost:8000"),
        ]))
        .unwrap();
        assert_eq!(
            settings.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let settings = AwsSettings::from_lookup(lookup_from(&[
            (ACCESS_KEY_ID_VAR, "AKIAEXAMPLE"),
            (SECRET_ACCESS_KEY_VAR, "very-secret-value"),
            (REGION_VAR, "us-east-1"),
        ]))
        .unwrap();
        assert!(!format!("{settings:?}").contains("very-secret-value"));
    }
}
