//! SQLite connection management.
//!
//! One read-write connection serializes every write; a fixed slice of
//! read-only connections serves queries, handed out round-robin. Write
//! serialization is what keeps the vendor-number counter race-free
//! without retries, so nothing outside this module may open a second
//! writable connection to the same database.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use lowespro_core::{StorageError, StorageResult};
use rusqlite::{Connection, OpenFlags};

use crate::pragmas;

/// Reader count used when the configuration leaves it at 0.
const DEFAULT_READ_POOL_SIZE: usize = 2;

pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Box<[Mutex<Connection>]>,
    next_reader: AtomicUsize,
}

fn open_failure(what: &str, path: &Path, e: rusqlite::Error) -> StorageError {
    StorageError::Pool {
        message: format!("{what} for {}: {e}", path.display()),
    }
}

fn lock<'a>(slot: &'a Mutex<Connection>, role: &'static str) -> StorageResult<MutexGuard<'a, Connection>> {
    slot.lock().map_err(|_| StorageError::Pool {
        message: format!("{role} connection mutex poisoned"),
    })
}

impl ConnectionPool {
    /// Open a file-backed pool: the writer first (which creates the file
    /// and switches it to WAL), then `read_pool_size` readers against the
    /// now-existing database. A size of 0 selects the default.
    pub fn open(path: &Path, read_pool_size: usize) -> StorageResult<Self> {
        let writer = Connection::open(path)
            .map_err(|e| open_failure("cannot open writer", path, e))?;
        pragmas::configure_connection(&writer)?;

        let size = if read_pool_size == 0 { DEFAULT_READ_POOL_SIZE } else { read_pool_size };
        let readers = (0..size)
            .map(|_| Self::open_reader(path))
            .collect::<StorageResult<Vec<_>>>()?
            .into_boxed_slice();

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            next_reader: AtomicUsize::new(0),
        })
    }

    fn open_reader(path: &Path) -> StorageResult<Mutex<Connection>> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(|e| open_failure("cannot open reader", path, e))?;
        pragmas::configure_readonly_connection(&conn)?;
        Ok(Mutex::new(conn))
    }

    /// In-memory pool for tests. Each connection to `:memory:` gets its
    /// own private database, so this variant keeps no readers and routes
    /// every access through the single writer.
    pub fn open_in_memory() -> StorageResult<Self> {
        let writer = Connection::open_in_memory().map_err(|e| StorageError::Pool {
            message: format!("cannot open in-memory database: {e}"),
        })?;
        pragmas::configure_connection(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Box::new([]),
            next_reader: AtomicUsize::new(0),
        })
    }

    /// Run `f` holding the write connection. Callers needing
    /// multi-statement atomicity open a transaction inside `f`.
    pub fn with_writer<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        f(&*lock(&self.writer, "writer")?)
    }

    /// Run `f` on a read-only connection chosen round-robin, or on the
    /// writer when the pool holds no readers.
    pub fn with_reader<F, T>(&self, f: F) -> StorageResult<T>
    where
        F: FnOnce(&Connection) -> StorageResult<T>,
    {
        match self.readers.len() {
            0 => self.with_writer(f),
            n => {
                let slot = self.next_reader.fetch_add(1, Ordering::Relaxed) % n;
                f(&*lock(&self.readers[slot], "reader")?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_reads_see_writes() {
        let pool = ConnectionPool::open_in_memory().unwrap();
        pool.with_writer(|conn| {
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (7);")
                .map_err(StorageError::sqlite)
        })
        .unwrap();

        let x: i64 = pool
            .with_reader(|conn| {
                conn.query_row("SELECT x FROM t", [], |row| row.get(0))
                    .map_err(StorageError::sqlite)
            })
            .unwrap();
        assert_eq!(x, 7);
    }

    #[test]
    fn test_file_backed_readers_see_committed_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.db");
        let pool = ConnectionPool::open(&path, 2).unwrap();

        pool.with_writer(|conn| {
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (42);")
                .map_err(StorageError::sqlite)
        })
        .unwrap();

        let x: i64 = pool
            .with_reader(|conn| {
                conn.query_row("SELECT x FROM t", [], |row| row.get(0))
                    .map_err(StorageError::sqlite)
            })
            .unwrap();
        assert_eq!(x, 42);
    }

    #[test]
    fn test_zero_pool_size_still_serves_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.db");
        let pool = ConnectionPool::open(&path, 0).unwrap();

        pool.with_writer(|conn| {
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (1);")
                .map_err(StorageError::sqlite)
        })
        .unwrap();

        // More reads than default readers exercises the round-robin wrap.
        for _ in 0..5 {
            let x: i64 = pool
                .with_reader(|conn| {
                    conn.query_row("SELECT x FROM t", [], |row| row.get(0))
                        .map_err(StorageError::sqlite)
                })
                .unwrap();
            assert_eq!(x, 1);
        }
    }
}
