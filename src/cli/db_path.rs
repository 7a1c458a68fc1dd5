//! Database path resolution
//!
//! Resolution priority:
//! 1. --db-path <path> flag (highest priority)
//! 2. $SCAN_REPORT_DB env var
//! 3. Sibling-directory default relative to the executable:
//!    `<exe-dir>/../Barcode generator&Scanner/barcodes.db`

use crate::cli::{Error, Result};
use std::path::{Path, PathBuf};

/// Directory holding the scans database, a sibling of the tool's own directory
pub const DB_DIR_NAME: &str = "Barcode generator&Scanner";

/// Database file name
pub const DB_FILE_NAME: &str = "barcodes.db";

/// Derive the default database path from the tool's directory.
///
/// Pure concatenation, independent of the current working directory: the
/// result is always `<tool_dir>/../Barcode generator&Scanner/barcodes.db`.
pub fn sibling_db_path(tool_dir: &Path) -> PathBuf {
    tool_dir.join("..").join(DB_DIR_NAME).join(DB_FILE_NAME)
}

/// Resolve the database path
///
/// # Resolution Priority
/// 1. Explicit path from --db-path flag (if Some); must exist
/// 2. $SCAN_REPORT_DB environment variable, taken as-is
/// 3. Sibling-directory default next to the executable
///
/// # Returns
/// * `Ok(PathBuf)` - Resolved database path
pub fn resolve_db_path(explicit: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        // Explicit --db-path flag takes precedence
        let path_buf = PathBuf::from(&path);
        if !path_buf.exists() {
            return Err(Error::InvalidArgs(format!(
                "db path '{}' does not exist",
                path
            )));
        }
        return Ok(path_buf);
    }

    // Check $SCAN_REPORT_DB environment variable
    if let Ok(env_path) = std::env::var("SCAN_REPORT_DB") {
        // Existence is not checked here; a missing file surfaces as an open
        // error on the normal exit-0 path
        return Ok(PathBuf::from(env_path));
    }

    // Default: fixed offset from the executable's own location
    let exe = std::env::current_exe().map_err(Error::Io)?;
    let tool_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(sibling_db_path(tool_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sibling_path_concatenation() {
        let derived = sibling_db_path(Path::new("/opt/robridge/tools"));
        assert_eq!(
            derived,
            PathBuf::from("/opt/robridge/tools")
                .join("..")
                .join("Barcode generator&Scanner")
                .join("barcodes.db")
        );
    }

    #[test]
    fn test_sibling_path_ignores_cwd() {
        // Same tool_dir in, same path out, wherever the process happens to run
        let a = sibling_db_path(Path::new("/opt/robridge/tools"));
        let b = sibling_db_path(Path::new("/opt/robridge/tools"));
        assert_eq!(a, b);
        assert!(a.is_absolute());
    }

    #[test]
    fn test_resolve_explicit_db_path() {
        let temp_dir = TempDir::new().unwrap();
        let db_file = temp_dir.path().join("barcodes.db");
        std::fs::write(&db_file, b"").unwrap();

        let explicit = db_file.to_str().unwrap().to_string();
        let resolved = resolve_db_path(Some(explicit)).unwrap();
        assert_eq!(resolved, db_file);
    }

    #[test]
    fn test_resolve_explicit_nonexistent_fails() {
        let result = resolve_db_path(Some("/nonexistent/path/barcodes.db".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let db_file = temp_dir.path().join("barcodes.db");
        std::fs::write(&db_file, b"").unwrap();

        std::env::set_var("SCAN_REPORT_DB", &db_file);
        let resolved = resolve_db_path(None).unwrap();
        std::env::remove_var("SCAN_REPORT_DB");

        assert_eq!(resolved, db_file);
    }
}
