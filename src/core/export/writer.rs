//! JSON rendering and file output for dumps

use crate::domain::{DumpError, Record, Result};
use std::fs;
use std::path::Path;

/// Renders records as a pretty-printed JSON array (2-space indentation)
///
/// An empty slice renders as `[]`.
pub fn render_records(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the rendered dump to `path`, replacing any existing file
///
/// # Errors
///
/// Returns [`DumpError::Filesystem`] if the file cannot be written.
pub fn write_dump(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| DumpError::filesystem(path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_render_empty_array() {
        assert_eq!(render_records(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_two_space_indentation() {
        let rendered = render_records(&[json!({"id": {"S": "1"}})]).unwrap();
        assert_eq!(
            rendered,
            "[\n  {\n    \"id\": {\n      \"S\": \"1\"\n    }\n  }\n]"
        );
    }

    #[test]
    fn test_write_dump_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dump.json");

        write_dump(&path, "old contents").unwrap();
        write_dump(&path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_dump_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("dump.json");

        let err = write_dump(&path, "[]").unwrap_err();
        assert!(matches!(err, DumpError::Filesystem { .. }));
    }
}
