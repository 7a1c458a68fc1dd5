//! scan-report: read-only diagnostics for the barcode scans database
//!
//! Opens `barcodes.db` read-only, lists its tables, and reports row count and
//! top duplicate values for the `saved_scans` table. Inspection only: no
//! statement issued by this crate mutates the database.

pub mod cli;
pub mod report;

// Re-export report types for convenience
pub use report::{DuplicateEntry, ScanDb, ScanReport};
