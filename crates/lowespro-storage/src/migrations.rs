//! Schema versioning using PRAGMA user_version.
//!
//! Each version bump is a const SQL string; `migrate` is idempotent and
//! safe to run on every startup.

use lowespro_core::models::trade::Trade;
use lowespro_core::{new_id, utc_now, StorageError, StorageResult};
use rusqlite::Connection;
use tracing::info;

use crate::queries::to_rfc3339;
use crate::schema::{TABLES_V1, VENDOR_NUMBER_SEQUENCE};

/// Current schema version. Bump this when adding new migrations.
pub const CURRENT_VERSION: u32 = 1;

/// Trades seeded at first migration. Users add more ad hoc.
const DEFAULT_TRADES: [&str; 10] = [
    "General Contractor",
    "Plumber",
    "Electrician",
    "Carpenter",
    "HVAC",
    "Painter",
    "Roofer",
    "Flooring",
    "Landscaper",
    "Mason",
];

/// Get the current schema version from the database.
pub fn schema_version(conn: &Connection) -> StorageResult<u32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(StorageError::sqlite)
}

fn set_schema_version(conn: &Connection, version: u32) -> StorageResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| StorageError::MigrationFailed { version, message: e.to_string() })
}

/// Run all pending migrations to bring the database up to CURRENT_VERSION.
///
/// Returns the version the database was migrated to.
pub fn migrate(conn: &Connection) -> StorageResult<u32> {
    let current = schema_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(current);
    }

    if current < 1 {
        info!("migrating schema: 0 -> 1 (initial tables)");
        conn.execute_batch(TABLES_V1)
            .map_err(|e| StorageError::MigrationFailed { version: 1, message: e.to_string() })?;
        conn.execute(
            "INSERT OR IGNORE INTO sequences (name, value) VALUES (?1, 0)",
            rusqlite::params![VENDOR_NUMBER_SEQUENCE],
        )
        .map_err(|e| StorageError::MigrationFailed { version: 1, message: e.to_string() })?;
        seed_default_trades(conn)?;
        set_schema_version(conn, 1)?;
    }

    // Future migrations go here:
    // if current < 2 { ... }

    let final_version = schema_version(conn)?;
    info!(from = current, to = final_version, "schema migration complete");
    Ok(final_version)
}

/// Seed the default trade list. `INSERT OR IGNORE` on the unique name
/// keeps this idempotent even across re-runs with fresh ids.
fn seed_default_trades(conn: &Connection) -> StorageResult<()> {
    let now = utc_now();
    for name in DEFAULT_TRADES {
        let trade = Trade {
            id: new_id(),
            name: name.to_string(),
            is_default: true,
            created_at: now,
        };
        conn.execute(
            "INSERT OR IGNORE INTO trades (id, name, is_default, created_at)
             VALUES (?1, ?2, 1, ?3)",
            rusqlite::params![trade.id, trade.name, to_rfc3339(&trade.created_at)],
        )
        .map_err(|e| StorageError::MigrationFailed { version: 1, message: e.to_string() })?;
    }
    Ok(())
}
