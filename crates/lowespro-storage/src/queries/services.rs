//! services table queries.

use lowespro_core::models::Service;
use lowespro_core::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_ts, sq, to_rfc3339};

const SERVICE_SELECT: &str = "SELECT s.id, s.name, s.description, s.parent_id,
     s.created_at, s.updated_at,
     (SELECT COUNT(*) FROM vendors v, json_each(v.services) je WHERE je.value = s.name)
     FROM services s";

fn map_service_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        parent_id: row.get(3)?,
        created_at: parse_ts(4, row.get(4)?)?,
        updated_at: parse_ts(5, row.get(5)?)?,
        vendor_count: row.get(6)?,
    })
}

pub fn insert_service(conn: &Connection, s: &Service) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO services (id, name, description, parent_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            s.id,
            s.name,
            s.description,
            s.parent_id,
            to_rfc3339(&s.created_at),
            to_rfc3339(&s.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_service(conn: &Connection, id: &str) -> StorageResult<Option<Service>> {
    conn.query_row(
        &format!("{SERVICE_SELECT} WHERE s.id = ?1"),
        params![id],
        map_service_row,
    )
    .optional()
    .map_err(sq)
}

pub fn list_services(conn: &Connection, search: Option<&str>) -> StorageResult<Vec<Service>> {
    match search {
        Some(s) => {
            let pattern = like_pattern(s);
            let mut stmt = conn
                .prepare_cached(&format!(
                    "{SERVICE_SELECT} WHERE lower(s.name) LIKE ?1 ORDER BY s.created_at DESC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map(params![pattern], map_service_row).map_err(sq)?;
            collect_rows(rows)
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!("{SERVICE_SELECT} ORDER BY s.created_at DESC"))
                .map_err(sq)?;
            let rows = stmt.query_map([], map_service_row).map_err(sq)?;
            collect_rows(rows)
        }
    }
}

pub fn update_service(conn: &Connection, s: &Service) -> StorageResult<usize> {
    conn.execute(
        "UPDATE services SET name = ?2, description = ?3, parent_id = ?4, updated_at = ?5
         WHERE id = ?1",
        params![s.id, s.name, s.description, s.parent_id, to_rfc3339(&s.updated_at)],
    )
    .map_err(sq)
}

pub fn delete_service(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM services WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_services(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM services", [], |row| row.get(0))
        .map_err(sq)
}
