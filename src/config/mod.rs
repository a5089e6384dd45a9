//! Configuration management for dynamojo.
//!
//! Two independent sources feed a run:
//!
//! - [`AwsSettings`] - credentials and region, read from the environment
//!   (seeded from `.env` when present). These are mandatory and checked
//!   before anything talks to AWS.
//! - [`DynamojoConfig`] - optional `dynamojo.toml` settings (log level,
//!   default dump location, file logging), overridable with `DYNAMOJO_*`
//!   variables.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! default_location = "/srv/dumps"
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/dynamojo"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dynamojo::config::{load_config_or_default, AwsSettings};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = AwsSettings::from_env()?;
//! let config = load_config_or_default("dynamojo.toml")?;
//! println!("Region: {}", settings.region);
//! println!("Log level: {}", config.application.log_level);
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use credentials::AwsSettings;
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{ApplicationConfig, DynamojoConfig, ExportConfig, LoggingConfig};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
