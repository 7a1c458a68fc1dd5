//! Result types for the scan report

use serde::{Deserialize, Serialize};

/// One duplicate group: a scanned value and how often it occurs
///
/// Only produced for values occurring more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    /// The scanned value
    pub value: String,
    /// Occurrence count, always > 1
    pub count: i64,
}

/// Aggregate of one report run, used by the JSON output mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Path the database was opened with
    pub db_path: String,
    /// All table names, in insertion order
    pub tables: Vec<String>,
    /// Whether the saved_scans table is present
    pub has_saved_scans: bool,
    /// Total row count of saved_scans; None when the table is absent
    pub total_scans: Option<i64>,
    /// Top duplicate values, descending by occurrence count
    pub top_duplicates: Vec<DuplicateEntry>,
}
