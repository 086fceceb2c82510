//! vendors table queries.

use lowespro_core::models::Vendor;
use lowespro_core::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_json, parse_ts, sq, to_json, to_rfc3339};
use crate::schema::VENDOR_NUMBER_SEQUENCE;

const VENDOR_COLUMNS: &str = "id, vendor_number, company_name, phone, fax, email, website,
     address, notes, categories, brands, services, phone_contacts, email_contacts,
     created_at, updated_at";

fn map_vendor_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Vendor> {
    Ok(Vendor {
        id: row.get(0)?,
        vendor_number: row.get(1)?,
        company_name: row.get(2)?,
        phone: row.get(3)?,
        fax: row.get(4)?,
        email: row.get(5)?,
        website: row.get(6)?,
        address: row.get(7)?,
        notes: row.get(8)?,
        categories: parse_json(9, row.get(9)?)?,
        brands: parse_json(10, row.get(10)?)?,
        services: parse_json(11, row.get(11)?)?,
        phone_contacts: parse_json(12, row.get(12)?)?,
        email_contacts: parse_json(13, row.get(13)?)?,
        created_at: parse_ts(14, row.get(14)?)?,
        updated_at: parse_ts(15, row.get(15)?)?,
    })
}

/// Atomically claim the next vendor sequence value. Must run on the
/// writer connection, inside the same transaction as the insert.
pub fn next_vendor_number(conn: &Connection) -> StorageResult<i64> {
    conn.execute(
        "UPDATE sequences SET value = value + 1 WHERE name = ?1",
        params![VENDOR_NUMBER_SEQUENCE],
    )
    .map_err(sq)?;
    conn.query_row(
        "SELECT value FROM sequences WHERE name = ?1",
        params![VENDOR_NUMBER_SEQUENCE],
        |row| row.get(0),
    )
    .map_err(sq)
}

pub fn insert_vendor(conn: &Connection, v: &Vendor) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO vendors
         (id, vendor_number, company_name, phone, fax, email, website, address, notes,
          categories, brands, services, phone_contacts, email_contacts, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
        params![
            v.id,
            v.vendor_number,
            v.company_name,
            v.phone,
            v.fax,
            v.email,
            v.website,
            v.address,
            v.notes,
            to_json(&v.categories)?,
            to_json(&v.brands)?,
            to_json(&v.services)?,
            to_json(&v.phone_contacts)?,
            to_json(&v.email_contacts)?,
            to_rfc3339(&v.created_at),
            to_rfc3339(&v.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_vendor(conn: &Connection, id: &str) -> StorageResult<Option<Vendor>> {
    conn.query_row(
        &format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = ?1"),
        params![id],
        map_vendor_row,
    )
    .optional()
    .map_err(sq)
}

/// List all vendors, newest first, optionally filtered by a
/// case-insensitive substring match on company name or vendor number.
pub fn list_vendors(conn: &Connection, search: Option<&str>) -> StorageResult<Vec<Vendor>> {
    match search {
        Some(s) => {
            let pattern = like_pattern(s);
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {VENDOR_COLUMNS} FROM vendors
                     WHERE lower(company_name) LIKE ?1 OR lower(vendor_number) LIKE ?1
                     ORDER BY created_at DESC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map(params![pattern], map_vendor_row).map_err(sq)?;
            collect_rows(rows)
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {VENDOR_COLUMNS} FROM vendors ORDER BY created_at DESC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map([], map_vendor_row).map_err(sq)?;
            collect_rows(rows)
        }
    }
}

/// Full-row update. `id`, `vendor_number`, and `created_at` never change.
pub fn update_vendor(conn: &Connection, v: &Vendor) -> StorageResult<usize> {
    conn.execute(
        "UPDATE vendors SET
         company_name = ?2, phone = ?3, fax = ?4, email = ?5, website = ?6, address = ?7,
         notes = ?8, categories = ?9, brands = ?10, services = ?11, phone_contacts = ?12,
         email_contacts = ?13, updated_at = ?14
         WHERE id = ?1",
        params![
            v.id,
            v.company_name,
            v.phone,
            v.fax,
            v.email,
            v.website,
            v.address,
            v.notes,
            to_json(&v.categories)?,
            to_json(&v.brands)?,
            to_json(&v.services)?,
            to_json(&v.phone_contacts)?,
            to_json(&v.email_contacts)?,
            to_rfc3339(&v.updated_at),
        ],
    )
    .map_err(sq)
}

pub fn delete_vendor(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM vendors WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_vendors(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM vendors", [], |row| row.get(0))
        .map_err(sq)
}
