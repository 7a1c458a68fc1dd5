//! Scan database handle: read-only access to barcodes.db
//!
//! `ScanDb::open()` opens the file with `SQLITE_OPEN_READ_ONLY`; a missing or
//! unreadable file surfaces here as an `Error::Open`. The handle owns the
//! connection for the duration of one report run and is dropped exactly once,
//! on every exit path.

use super::{Error, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only handle to the scans database
pub struct ScanDb {
    /// SQLite connection, opened read-only
    conn: Connection,
    /// Path the connection was opened with
    db_path: PathBuf,
}

impl ScanDb {
    /// Open the scans database read-only
    ///
    /// # Arguments
    /// * `db_path` - Path to the database file
    ///
    /// # Returns
    /// * `Ok(ScanDb)` — Connection open, no write access
    /// * `Err(Error::Open)` — File missing or not a readable database
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();

        debug!("Opening scan database read-only: {}", path.display());

        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| Error::Open {
            path: path.display().to_string(),
            cause: e,
        })?;

        Ok(ScanDb {
            conn,
            db_path: path,
        })
    }

    /// Get the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Get the path the database was opened with
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}
