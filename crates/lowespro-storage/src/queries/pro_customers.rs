//! pro_customers table queries.

use lowespro_core::models::ProCustomer;
use lowespro_core::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_json, parse_ts, sq, to_json, to_rfc3339};

const PRO_COLUMNS: &str = "id, business_name, contact_name, phone, email, address, notes,
     trades, preferred_brands, ordering_preferences, phone_contacts, email_contacts,
     created_at, updated_at";

fn map_pro_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProCustomer> {
    Ok(ProCustomer {
        id: row.get(0)?,
        business_name: row.get(1)?,
        contact_name: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        address: row.get(5)?,
        notes: row.get(6)?,
        trades: parse_json(7, row.get(7)?)?,
        preferred_brands: parse_json(8, row.get(8)?)?,
        ordering_preferences: row.get(9)?,
        phone_contacts: parse_json(10, row.get(10)?)?,
        email_contacts: parse_json(11, row.get(11)?)?,
        created_at: parse_ts(12, row.get(12)?)?,
        updated_at: parse_ts(13, row.get(13)?)?,
    })
}

pub fn insert_pro_customer(conn: &Connection, p: &ProCustomer) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO pro_customers
         (id, business_name, contact_name, phone, email, address, notes, trades,
          preferred_brands, ordering_preferences, phone_contacts, email_contacts,
          created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            p.id,
            p.business_name,
            p.contact_name,
            p.phone,
            p.email,
            p.address,
            p.notes,
            to_json(&p.trades)?,
            to_json(&p.preferred_brands)?,
            p.ordering_preferences,
            to_json(&p.phone_contacts)?,
            to_json(&p.email_contacts)?,
            to_rfc3339(&p.created_at),
            to_rfc3339(&p.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_pro_customer(conn: &Connection, id: &str) -> StorageResult<Option<ProCustomer>> {
    conn.query_row(
        &format!("SELECT {PRO_COLUMNS} FROM pro_customers WHERE id = ?1"),
        params![id],
        map_pro_row,
    )
    .optional()
    .map_err(sq)
}

pub fn list_pro_customers(conn: &Connection, search: Option<&str>) -> StorageResult<Vec<ProCustomer>> {
    match search {
        Some(s) => {
            let pattern = like_pattern(s);
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {PRO_COLUMNS} FROM pro_customers
                     WHERE lower(business_name) LIKE ?1
                     ORDER BY created_at DESC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map(params![pattern], map_pro_row).map_err(sq)?;
            collect_rows(rows)
        }
        None => {
            let mut stmt = conn
                .prepare_cached(&format!(
                    "SELECT {PRO_COLUMNS} FROM pro_customers ORDER BY created_at DESC"
                ))
                .map_err(sq)?;
            let rows = stmt.query_map([], map_pro_row).map_err(sq)?;
            collect_rows(rows)
        }
    }
}

pub fn update_pro_customer(conn: &Connection, p: &ProCustomer) -> StorageResult<usize> {
    conn.execute(
        "UPDATE pro_customers SET
         business_name = ?2, contact_name = ?3, phone = ?4, email = ?5, address = ?6,
         notes = ?7, trades = ?8, preferred_brands = ?9, ordering_preferences = ?10,
         phone_contacts = ?11, email_contacts = ?12, updated_at = ?13
         WHERE id = ?1",
        params![
            p.id,
            p.business_name,
            p.contact_name,
            p.phone,
            p.email,
            p.address,
            p.notes,
            to_json(&p.trades)?,
            to_json(&p.preferred_brands)?,
            p.ordering_preferences,
            to_json(&p.phone_contacts)?,
            to_json(&p.email_contacts)?,
            to_rfc3339(&p.updated_at),
        ],
    )
    .map_err(sq)
}

pub fn delete_pro_customer(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM pro_customers WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_pro_customers(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM pro_customers", [], |row| row.get(0))
        .map_err(sq)
}
