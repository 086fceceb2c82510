//! Per-resource query modules.
//!
//! Every function takes a borrowed `Connection` so it can run inside or
//! outside a transaction; the `Store` facade decides which.

pub mod brands;
pub mod categories;
pub mod pro_customers;
pub mod representatives;
pub mod services;
pub mod trades;
pub mod vendors;

use chrono::{DateTime, Utc};
use lowespro_core::{StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use lowespro_core::time::to_rfc3339_micros as to_rfc3339;

/// Shorthand: wrap a rusqlite error as `StorageError::Sqlite`.
pub(crate) fn sq(e: impl std::fmt::Display) -> StorageError {
    StorageError::Sqlite { message: e.to_string() }
}

/// Case-insensitive substring LIKE pattern for a `search` parameter.
pub(crate) fn like_pattern(search: &str) -> String {
    format!("%{}%", search.to_lowercase())
}

/// Serialize a JSON list column value.
pub(crate) fn to_json<T: Serialize>(value: &T) -> StorageResult<String> {
    serde_json::to_string(value)
        .map_err(|e| StorageError::Sqlite { message: format!("JSON encode error: {e}") })
}

/// Parse a JSON list column inside a row mapper.
pub(crate) fn parse_json<T: DeserializeOwned>(idx: usize, text: String) -> rusqlite::Result<T> {
    serde_json::from_str(&text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse an RFC 3339 timestamp column inside a row mapper.
pub(crate) fn parse_ts(idx: usize, text: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Collect rusqlite mapped rows into a Vec.
pub(crate) fn collect_rows<T>(
    rows: rusqlite::MappedRows<'_, impl FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>>,
) -> StorageResult<Vec<T>> {
    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sq)?);
    }
    Ok(result)
}
