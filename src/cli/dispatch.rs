//! CLI dispatch
//!
//! Runs the report sequence against the resolved database path and maps
//! outcomes to exit codes. Query and open failures are reported to stderr
//! and still exit 0; only argument errors exit non-zero.

use crate::cli::db_path::resolve_db_path;
use crate::cli::{Args, EXIT_SUCCESS, EXIT_USAGE};
use crate::report::{render, ScanDb};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run the report and return an exit code
///
/// This is the main entry point after argument parsing.
pub fn run(args: Args) -> ExitCode {
    let db_path = match resolve_db_path(args.db_path) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_USAGE;
        }
    };

    println!("Database path: {}", db_path.display());

    if let Err(e) = run_report(&db_path, args.json_output) {
        eprintln!("Error: {:#}", e);
    }

    EXIT_SUCCESS
}

/// Open the database and produce the report in the requested format
fn run_report(db_path: &Path, json_output: bool) -> Result<()> {
    let db = ScanDb::open(db_path).context("cannot inspect scan database")?;

    if json_output {
        // Strict collection: the first query failure aborts the whole object
        let report = render::collect_report(&db).context("report query failed")?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        render::write_report(&db, &mut out)?;
    }

    debug!("Report complete for {}", db_path.display());
    Ok(())
    // `db` is dropped here: the connection is closed exactly once on every
    // path through the sequence, including the error branches above
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use tempfile::TempDir;

    #[test]
    fn test_exit_code_constants() {
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_USAGE, 1);
    }

    #[test]
    fn test_run_with_explicit_db_exits_zero() {
        let temp_dir = TempDir::new().unwrap();
        let db_file = temp_dir.path().join("barcodes.db");
        {
            let conn = Connection::open(&db_file).unwrap();
            conn.execute("CREATE TABLE saved_scans (barcode_data TEXT)", [])
                .unwrap();
        }

        let args = Args {
            db_path: Some(db_file.to_str().unwrap().to_string()),
            json_output: false,
            show_version: false,
            show_help: false,
        };
        assert_eq!(run(args), EXIT_SUCCESS);
    }

    #[test]
    fn test_run_with_nonexistent_explicit_db_is_usage_error() {
        let args = Args {
            db_path: Some("/nonexistent/barcodes.db".to_string()),
            json_output: false,
            show_version: false,
            show_help: false,
        };
        assert_eq!(run(args), EXIT_USAGE);
    }
}
