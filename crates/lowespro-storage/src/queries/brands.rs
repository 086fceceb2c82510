//! brands table queries.
//!
//! Vendors reference brands by id, so the `vendor_count` subquery matches
//! `je.value` against the brand id rather than the name.

use lowespro_core::models::Brand;
use lowespro_core::StorageResult;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_ts, sq, to_rfc3339};

const BRAND_SELECT: &str = "SELECT b.id, b.name, b.description, b.is_generic, b.industry,
     b.logo, b.website, b.template_id, b.parent_brand_id, b.created_at, b.updated_at,
     (SELECT COUNT(*) FROM vendors v, json_each(v.brands) je WHERE je.value = b.id)
     FROM brands b";

fn map_brand_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Brand> {
    Ok(Brand {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        is_generic: row.get::<_, i64>(3)? != 0,
        industry: row.get(4)?,
        logo: row.get(5)?,
        website: row.get(6)?,
        template_id: row.get(7)?,
        parent_brand_id: row.get(8)?,
        created_at: parse_ts(9, row.get(9)?)?,
        updated_at: parse_ts(10, row.get(10)?)?,
        vendor_count: row.get(11)?,
    })
}

pub fn insert_brand(conn: &Connection, b: &Brand) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO brands
         (id, name, description, is_generic, industry, logo, website, template_id,
          parent_brand_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            b.id,
            b.name,
            b.description,
            b.is_generic as i64,
            b.industry,
            b.logo,
            b.website,
            b.template_id,
            b.parent_brand_id,
            to_rfc3339(&b.created_at),
            to_rfc3339(&b.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_brand(conn: &Connection, id: &str) -> StorageResult<Option<Brand>> {
    conn.query_row(&format!("{BRAND_SELECT} WHERE b.id = ?1"), params![id], map_brand_row)
        .optional()
        .map_err(sq)
}

/// List brands, newest first. `search` matches the name; `industry` is an
/// exact structured filter. Both combine with AND.
pub fn list_brands(
    conn: &Connection,
    search: Option<&str>,
    industry: Option<&str>,
) -> StorageResult<Vec<Brand>> {
    let mut sql = BRAND_SELECT.to_string();
    let mut clauses = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(s) = search {
        args.push(like_pattern(s));
        clauses.push(format!("lower(b.name) LIKE ?{}", args.len()));
    }
    if let Some(i) = industry {
        args.push(i.to_string());
        clauses.push(format!("b.industry = ?{}", args.len()));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY b.created_at DESC");

    let mut stmt = conn.prepare(&sql).map_err(sq)?;
    let rows = stmt.query_map(params_from_iter(args), map_brand_row).map_err(sq)?;
    collect_rows(rows)
}

pub fn update_brand(conn: &Connection, b: &Brand) -> StorageResult<usize> {
    conn.execute(
        "UPDATE brands SET name = ?2, description = ?3, is_generic = ?4, industry = ?5,
         logo = ?6, website = ?7, template_id = ?8, parent_brand_id = ?9, updated_at = ?10
         WHERE id = ?1",
        params![
            b.id,
            b.name,
            b.description,
            b.is_generic as i64,
            b.industry,
            b.logo,
            b.website,
            b.template_id,
            b.parent_brand_id,
            to_rfc3339(&b.updated_at),
        ],
    )
    .map_err(sq)
}

pub fn delete_brand(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM brands WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_brands(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM brands", [], |row| row.get(0))
        .map_err(sq)
}
