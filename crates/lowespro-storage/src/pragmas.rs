//! SQLite PRAGMA configuration.
//!
//! Must be called on every connection immediately after opening.
//! `foreign_keys = ON` is load-bearing: the category and vendor foreign
//! keys rely on it.

use lowespro_core::{StorageError, StorageResult};
use rusqlite::Connection;

/// Configure a read-write connection.
///
/// WAL for concurrent readers during writes, busy_timeout as the primary
/// lock-contention mechanism, NORMAL synchronous as the WAL durability
/// trade-off.
pub fn configure_connection(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(StorageError::sqlite)
}

/// Configure a read-only connection. Same PRAGMAs plus `query_only = ON`
/// to prevent accidental writes through this connection.
pub fn configure_readonly_connection(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(StorageError::sqlite)
}
