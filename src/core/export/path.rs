//! Dump file naming and destination resolution

use crate::domain::{DumpError, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// UTC timestamp format used for dump file names, truncated to the second
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// File name for a dump taken at `now`, e.g. `2024-05-01T09:30:12.json`
pub fn dump_file_name(now: DateTime<Utc>) -> String {
    format!("{}.json", now.format(TIMESTAMP_FORMAT))
}

/// Picks the directory a dump is written to
///
/// Precedence: the operator's `location`, then the configured
/// `default_location`, then the home directory. Blank paths count as absent.
/// Relative directories are resolved against the working directory.
///
/// # Errors
///
/// Returns [`DumpError::Filesystem`] if the home directory or working
/// directory cannot be determined.
pub fn resolve_directory(
    location: Option<&Path>,
    default_location: Option<&Path>,
) -> Result<PathBuf> {
    let chosen = location
        .filter(|path| !is_blank(path))
        .or_else(|| default_location.filter(|path| !is_blank(path)));

    let directory = match chosen {
        Some(path) => path.to_path_buf(),
        None => dirs::home_dir()
            .ok_or_else(|| DumpError::filesystem("~", "home directory could not be determined"))?,
    };

    if directory.is_absolute() {
        return Ok(directory);
    }

    let cwd = std::env::current_dir()
        .map_err(|e| DumpError::filesystem(directory.display(), e))?;
    Ok(cwd.join(directory))
}

/// Full path of the dump file inside `directory`
pub fn dump_path(directory: &Path, now: DateTime<Utc>) -> PathBuf {
    directory.join(dump_file_name(now))
}

fn is_blank(path: &Path) -> bool {
    path.to_str().is_some_and(|s| s.trim().is_empty())
}
