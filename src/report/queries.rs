//! Report query implementations
//!
//! All queries are SELECT-only. The catalog listing deliberately carries no
//! ORDER BY: table names come back in storage (insertion) order.

use super::types::DuplicateEntry;
use super::{Error, Result, ScanDb, BARCODE_DATA_COLUMN, DUPLICATE_LIMIT, SAVED_SCANS_TABLE};
use tracing::debug;

impl ScanDb {
    /// List all table names from the catalog, in insertion order
    pub fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
            .map_err(Error::TableListing)?;

        let rows = stmt
            .query_map([], |r| r.get::<_, String>(0))
            .map_err(Error::TableListing)?;

        let tables = rows
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::TableListing)?;

        debug!("Found {} tables", tables.len());
        Ok(tables)
    }

    /// Total row count of the saved_scans table
    pub fn count_scans(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM \"{}\"", SAVED_SCANS_TABLE);
        self.conn()
            .query_row(&sql, [], |r| r.get(0))
            .map_err(Error::RowCount)
    }

    /// Top duplicate scanned values, by descending occurrence count
    ///
    /// Only values occurring more than once qualify; at most
    /// `DUPLICATE_LIMIT` groups are returned. Ties are broken arbitrarily by
    /// the engine.
    pub fn top_duplicates(&self) -> Result<Vec<DuplicateEntry>> {
        let sql = format!(
            "SELECT \"{col}\", COUNT(*) AS count
             FROM \"{table}\"
             GROUP BY \"{col}\"
             HAVING COUNT(*) > 1
             ORDER BY count DESC
             LIMIT {limit}",
            col = BARCODE_DATA_COLUMN,
            table = SAVED_SCANS_TABLE,
            limit = DUPLICATE_LIMIT,
        );

        let mut stmt = self
            .conn()
            .prepare(&sql)
            .map_err(Error::DuplicateAggregation)?;

        let rows = stmt
            .query_map([], |r| {
                Ok(DuplicateEntry {
                    value: r.get(0)?,
                    count: r.get(1)?,
                })
            })
            .map_err(Error::DuplicateAggregation)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::DuplicateAggregation)
    }
}
