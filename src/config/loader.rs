//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DynamojoConfig;
use crate::domain::errors::DumpError;
use crate::domain::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "dynamojo.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses it into [`DynamojoConfig`]
/// 3. Applies environment variable overrides (`DYNAMOJO_*` prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, if TOML parsing
/// fails, or if validation fails.
///
/// # Examples
///
/// ```no_run
/// use dynamojo::config::loader::load_config;
///
/// let config = load_config("dynamojo.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DynamojoConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DumpError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DumpError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: DynamojoConfig = toml::from_str(&contents)?;

    finish(config)
}

/// Loads configuration, treating a missing file as an empty one
///
/// Used for the implicit default path: the settings file is optional, so
/// the tool must run without it.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<DynamojoConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(DynamojoConfig::default())
}

fn finish(mut config: DynamojoConfig) -> Result<DynamojoConfig> {
    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        DumpError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Applies environment variable overrides using the `DYNAMOJO_*` prefix
///
/// Environment variables follow the pattern `DYNAMOJO_<SECTION>_<KEY>`,
/// except for the log level which is shared with the `--log-level` flag.
fn apply_env_overrides(config: &mut DynamojoConfig) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

fn apply_overrides_from<F>(config: &mut DynamojoConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    // Application overrides
    if let Some(val) = lookup("DYNAMOJO_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Some(val) = lookup("DYNAMOJO_EXPORT_DEFAULT_LOCATION") {
        config.export.default_location = if val.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(val))
        };
    }

    // Logging overrides
    if let Some(val) = lookup("DYNAMOJO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = lookup("DYNAMOJO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-dynamojo.toml");
        assert!(matches!(result, Err(DumpError::Configuration(_))));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-dynamojo.toml").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[export]
default_location = "/tmp/dumps"

[logging]
local_rotation = "never"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(
            config.export.default_location,
            Some(PathBuf::from("/tmp/dumps"))
        );
        assert_eq!(config.logging.local_rotation, "never");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[export\ndefault_location = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("DYNAMOJO_LOG_LEVEL", "debug"),
            ("DYNAMOJO_EXPORT_DEFAULT_LOCATION", "/data/out"),
            ("DYNAMOJO_LOGGING_LOCAL_ENABLED", "true"),
            ("DYNAMOJO_LOGGING_LOCAL_PATH", "/var/log/dynamojo"),
        ]
        .into_iter()
        .collect();

        let mut config = DynamojoConfig::default();
        apply_overrides_from(&mut config, |name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.application.log_level, "debug");
        assert_eq!(
            config.export.default_location,
            Some(PathBuf::from("/data/out"))
        );
        assert!(config.logging.local_enabled);
        assert_eq!(config.logging.local_path, "/var/log/dynamojo");
    }

    #[test]
    fn test_blank_location_override_clears_default() {
        let mut config = DynamojoConfig::default();
        config.export.default_location = Some(PathBuf::from("/srv"));
        apply_overrides_from(&mut config, |name| {
            (name == "DYNAMOJO_EXPORT_DEFAULT_LOCATION").then(String::new)
        });
        assert!(config.export.default_location.is_none());
    }
}
