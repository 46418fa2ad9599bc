//! Database connection management.

use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use super::DbError;

const PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// Open (creating if needed) the SQLite database at `path`.
pub fn open_db(path: &Path) -> Result<Connection, DbError> {
    let open_failed = |e: rusqlite::Error| DbError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let conn = Connection::open(path).map_err(open_failed)?;
    conn.execute_batch(PRAGMAS).map_err(open_failed)?;
    info!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Create an in-memory database.
///
/// Used for tests to avoid disk I/O and temp file management.
pub fn open_mem_db() -> Result<Connection, DbError> {
    let open_failed = |e: rusqlite::Error| DbError::OpenFailed {
        path: ":memory:".to_string(),
        message: e.to_string(),
    };
    let conn = Connection::open_in_memory().map_err(open_failed)?;
    conn.execute_batch(PRAGMAS).map_err(open_failed)?;
    Ok(conn)
}

/// Close the connection, reporting any failure to finalize.
pub fn close_db(conn: Connection) -> Result<(), DbError> {
    conn.close().map_err(|(_, e)| DbError::CloseFailed {
        message: e.to_string(),
    })?;
    info!("database closed");
    Ok(())
}
