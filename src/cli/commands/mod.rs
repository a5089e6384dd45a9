//! CLI command implementations

pub mod interactive;
pub mod scan_and_dump;
