//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use dynamojo::logging::init_logging;
//! use dynamojo::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a table scan
///
/// # Example
///
/// ```no_run
/// use dynamojo::log_scan_start;
///
/// log_scan_start!("orders");
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($table_name:expr) => {
        tracing::info!(table_name = %$table_name, "Starting scan");
    };
}

/// Log the completion of a dump
///
/// # Example
///
/// ```no_run
/// use dynamojo::log_dump_complete;
/// use std::time::Duration;
///
/// log_dump_complete!("orders", 42, "/home/me/2024-05-01T10:00:00.json", Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_dump_complete {
    ($table_name:expr, $count:expr, $path:expr, $duration:expr) => {
        tracing::info!(
            table_name = %$table_name,
            count = $count,
            path = %$path,
            duration_ms = $duration.as_millis(),
            "Dump completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use dynamojo::log_error_with_context;
/// use dynamojo::domain::DumpError;
///
/// let error = DumpError::TableNotFound("orders".to_string());
/// log_error_with_context!(&error, "Scan failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
