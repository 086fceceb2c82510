//! representatives table queries.

use lowespro_core::models::Representative;
use lowespro_core::StorageResult;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_json, parse_ts, sq, to_json, to_rfc3339};

const REP_COLUMNS: &str = "id, name, position, vendor_id, vendor_name, phone, email,
     phone_contacts, email_contacts, created_at, updated_at";

fn map_rep_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Representative> {
    Ok(Representative {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        vendor_id: row.get(3)?,
        vendor_name: row.get(4)?,
        phone: row.get(5)?,
        email: row.get(6)?,
        phone_contacts: parse_json(7, row.get(7)?)?,
        email_contacts: parse_json(8, row.get(8)?)?,
        created_at: parse_ts(9, row.get(9)?)?,
        updated_at: parse_ts(10, row.get(10)?)?,
    })
}

pub fn insert_representative(conn: &Connection, r: &Representative) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO representatives
         (id, name, position, vendor_id, vendor_name, phone, email,
          phone_contacts, email_contacts, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            r.id,
            r.name,
            r.position,
            r.vendor_id,
            r.vendor_name,
            r.phone,
            r.email,
            to_json(&r.phone_contacts)?,
            to_json(&r.email_contacts)?,
            to_rfc3339(&r.created_at),
            to_rfc3339(&r.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_representative(conn: &Connection, id: &str) -> StorageResult<Option<Representative>> {
    conn.query_row(
        &format!("SELECT {REP_COLUMNS} FROM representatives WHERE id = ?1"),
        params![id],
        map_rep_row,
    )
    .optional()
    .map_err(sq)
}

/// List representatives, newest first. `search` matches the name
/// case-insensitively; `vendor_id` restricts to one vendor. Both filters
/// combine with AND.
pub fn list_representatives(
    conn: &Connection,
    search: Option<&str>,
    vendor_id: Option<&str>,
) -> StorageResult<Vec<Representative>> {
    let mut sql = format!("SELECT {REP_COLUMNS} FROM representatives");
    let mut clauses = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(s) = search {
        args.push(like_pattern(s));
        clauses.push(format!("lower(name) LIKE ?{}", args.len()));
    }
    if let Some(v) = vendor_id {
        args.push(v.to_string());
        clauses.push(format!("vendor_id = ?{}", args.len()));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut stmt = conn.prepare(&sql).map_err(sq)?;
    let rows = stmt.query_map(params_from_iter(args), map_rep_row).map_err(sq)?;
    collect_rows(rows)
}

pub fn update_representative(conn: &Connection, r: &Representative) -> StorageResult<usize> {
    conn.execute(
        "UPDATE representatives SET
         name = ?2, position = ?3, vendor_id = ?4, vendor_name = ?5, phone = ?6, email = ?7,
         phone_contacts = ?8, email_contacts = ?9, updated_at = ?10
         WHERE id = ?1",
        params![
            r.id,
            r.name,
            r.position,
            r.vendor_id,
            r.vendor_name,
            r.phone,
            r.email,
            to_json(&r.phone_contacts)?,
            to_json(&r.email_contacts)?,
            to_rfc3339(&r.updated_at),
        ],
    )
    .map_err(sq)
}

pub fn delete_representative(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM representatives WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_representatives(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM representatives", [], |row| row.get(0))
        .map_err(sq)
}
