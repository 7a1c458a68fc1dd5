//! Report pipeline and output formatting
//!
//! The sequence is strictly linear: list-tables → check-table-exists →
//! count-rows → top-duplicates. Each step runs only after the previous step's
//! outcome is known.
//!
//! `write_report` prints incrementally and swallows query failures after
//! reporting them to stderr, so a run that hits an error still "finishes".
//! `collect_report` is the strict variant for machine consumers: the first
//! query failure aborts the whole collection.

use super::types::{DuplicateEntry, ScanReport};
use super::{Result, ScanDb, SAVED_SCANS_TABLE};
use std::io::Write;
use tracing::debug;

/// Write the report incrementally to the given output stream
///
/// Query failures are printed to stderr with the underlying error detail and
/// end that branch of the sequence; they never propagate. Only failures
/// writing to `out` itself are returned.
pub fn write_report<W: Write>(db: &ScanDb, out: &mut W) -> std::io::Result<()> {
    let tables = match db.list_tables() {
        Ok(tables) => tables,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    writeln!(out, "Tables: [{}]", tables.join(", "))?;

    let has_saved_scans = tables.iter().any(|t| t == SAVED_SCANS_TABLE);
    writeln!(out, "Has saved_scans table: {}", has_saved_scans)?;

    if !has_saved_scans {
        // Terminal success path for a database without the expected table
        return Ok(());
    }

    let total = match db.count_scans() {
        Ok(total) => total,
        Err(e) => {
            eprintln!("Error getting count: {}", e);
            return Ok(());
        }
    };
    writeln!(out, "Total saved scans: {}", total)?;

    match db.top_duplicates() {
        Ok(duplicates) => {
            writeln!(out, "Top duplicates:")?;
            for dup in &duplicates {
                writeln!(out, "  {}: {} times", dup.value, dup.count)?;
            }
            debug!("Reported {} duplicate groups", duplicates.len());
        }
        Err(e) => {
            eprintln!("Error getting duplicates: {}", e);
        }
    }

    Ok(())
}

/// Collect the full report, propagating the first query failure
pub fn collect_report(db: &ScanDb) -> Result<ScanReport> {
    let tables = db.list_tables()?;
    let has_saved_scans = tables.iter().any(|t| t == SAVED_SCANS_TABLE);

    let (total_scans, top_duplicates) = if has_saved_scans {
        (Some(db.count_scans()?), db.top_duplicates()?)
    } else {
        (None, Vec::<DuplicateEntry>::new())
    };

    Ok(ScanReport {
        db_path: db.path().display().to_string(),
        tables,
        has_saved_scans,
        total_scans,
        top_duplicates,
    })
}
