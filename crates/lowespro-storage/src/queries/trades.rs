//! trades table queries.
//!
//! Trade names carry a UNIQUE constraint; inserting a duplicate surfaces
//! as `StorageError::DuplicateName` so callers can answer with a conflict
//! instead of a generic failure.

use lowespro_core::models::Trade;
use lowespro_core::{StorageError, StorageResult};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::{collect_rows, like_pattern, parse_ts, sq, to_rfc3339};

const TRADE_COLUMNS: &str = "id, name, is_default, created_at";

fn map_trade_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Trade> {
    Ok(Trade {
        id: row.get(0)?,
        name: row.get(1)?,
        is_default: row.get::<_, i64>(2)? != 0,
        created_at: parse_ts(3, row.get(3)?)?,
    })
}

pub fn insert_trade(conn: &Connection, t: &Trade) -> StorageResult<()> {
    let result = conn.execute(
        "INSERT INTO trades (id, name, is_default, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![t.id, t.name, t.is_default as i64, to_rfc3339(&t.created_at)],
    );
    match result {
        Ok(_) => Ok(()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == ErrorCode::ConstraintViolation =>
        {
            Err(StorageError::DuplicateName {
                resource: "Trade",
                name: t.name.clone(),
            })
        }
        Err(e) => Err(sq(e)),
    }
}

pub fn get_trade(conn: &Connection, id: &str) -> StorageResult<Option<Trade>> {
    conn.query_row(
        &format!("SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1"),
        params![id],
        map_trade_row,
    )
    .optional()
    .map_err(sq)
}

/// List trades alphabetically; defaults sort ahead of custom entries.
pub fn list_trades(conn: &Connection, search: Option<&str>) -> StorageResult<Vec<Trade>> {
    match search {
        Some(s) => {
            let pattern = like_pattern(s);
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {TRADE_COLUMNS} FROM trades
                     WHERE lower(name) LIKE ?1
                     ORDER BY is_default DESC, name ASC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map(params![pattern], map_trade_row).map_err(sq)?;
            collect_rows(rows)
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {TRADE_COLUMNS} FROM trades ORDER BY is_default DESC, name ASC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map([], map_trade_row).map_err(sq)?;
            collect_rows(rows)
        }
    }
}

pub fn delete_trade(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM trades WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_trades(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM trades", [], |row| row.get(0))
        .map_err(sq)
}
