//! Scan database report
//!
//! Read-only inspection of the barcode scans database.
//!
//! ## Architecture
//!
//! - `db.rs` — ScanDb, read-only connection management
//! - `queries.rs` — catalog listing, row count, duplicate aggregation
//! - `render.rs` — sequential report pipeline and output formatting
//! - `types.rs` — result types
//!
//! All queries are SELECT-only. The connection is opened with
//! `SQLITE_OPEN_READ_ONLY`, so the no-mutation invariant is enforced by the
//! engine rather than by convention.

pub mod db;
pub mod queries;
pub mod render;
pub mod types;

// Re-export main types
pub use db::ScanDb;
pub use types::{DuplicateEntry, ScanReport};

/// Table whose presence and contents the report describes
pub const SAVED_SCANS_TABLE: &str = "saved_scans";

/// Column holding the scanned value
pub const BARCODE_DATA_COLUMN: &str = "barcode_data";

/// Number of duplicate groups reported
pub const DUPLICATE_LIMIT: usize = 5;

/// Report errors, one variant per pipeline step
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open database at {path}: {cause}")]
    Open { path: String, cause: rusqlite::Error },

    #[error("table listing failed: {0}")]
    TableListing(rusqlite::Error),

    #[error("row count failed: {0}")]
    RowCount(rusqlite::Error),

    #[error("duplicate aggregation failed: {0}")]
    DuplicateAggregation(rusqlite::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, Error>;
