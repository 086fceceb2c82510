//! categories table queries.
//!
//! `vendor_count` is recomputed on read with a `json_each` subquery over
//! the vendors' category-name lists, so it can never go stale.

use lowespro_core::models::Category;
use lowespro_core::StorageResult;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::{collect_rows, like_pattern, parse_ts, sq, to_rfc3339};

const CATEGORY_SELECT: &str = "SELECT c.id, c.name, c.description, c.parent_id, c.level,
     c.created_at, c.updated_at,
     (SELECT COUNT(*) FROM vendors v, json_each(v.categories) je WHERE je.value = c.name)
     FROM categories c";

fn map_category_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        parent_id: row.get(3)?,
        level: row.get(4)?,
        created_at: parse_ts(5, row.get(5)?)?,
        updated_at: parse_ts(6, row.get(6)?)?,
        vendor_count: row.get(7)?,
    })
}

pub fn insert_category(conn: &Connection, c: &Category) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO categories (id, name, description, parent_id, level, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            c.id,
            c.name,
            c.description,
            c.parent_id,
            c.level,
            to_rfc3339(&c.created_at),
            to_rfc3339(&c.updated_at),
        ],
    )
    .map_err(sq)?;
    Ok(())
}

pub fn get_category(conn: &Connection, id: &str) -> StorageResult<Option<Category>> {
    conn.query_row(
        &format!("{CATEGORY_SELECT} WHERE c.id = ?1"),
        params![id],
        map_category_row,
    )
    .optional()
    .map_err(sq)
}

/// List categories, newest first. `search` matches the name; `parent_id`
/// restricts to direct children of one category.
pub fn list_categories(
    conn: &Connection,
    search: Option<&str>,
    parent_id: Option<&str>,
) -> StorageResult<Vec<Category>> {
    let mut sql = CATEGORY_SELECT.to_string();
    let mut clauses = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some(s) = search {
        args.push(like_pattern(s));
        clauses.push(format!("lower(c.name) LIKE ?{}", args.len()));
    }
    if let Some(p) = parent_id {
        args.push(p.to_string());
        clauses.push(format!("c.parent_id = ?{}", args.len()));
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY c.created_at DESC");

    let mut stmt = conn.prepare(&sql).map_err(sq)?;
    let rows = stmt.query_map(params_from_iter(args), map_category_row).map_err(sq)?;
    collect_rows(rows)
}

/// Number of other categories whose `parent_id` references the given id.
/// Deletion is blocked while this is non-zero. The row itself is excluded
/// so a self-parented row (possible in imported data) stays deletable.
pub fn count_children(conn: &Connection, id: &str) -> StorageResult<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM categories WHERE parent_id = ?1 AND id != ?1",
        params![id],
        |row| row.get(0),
    )
    .map_err(sq)
}

pub fn update_category(conn: &Connection, c: &Category) -> StorageResult<usize> {
    conn.execute(
        "UPDATE categories SET name = ?2, description = ?3, parent_id = ?4, level = ?5,
         updated_at = ?6
         WHERE id = ?1",
        params![c.id, c.name, c.description, c.parent_id, c.level, to_rfc3339(&c.updated_at)],
    )
    .map_err(sq)
}

pub fn delete_category(conn: &Connection, id: &str) -> StorageResult<usize> {
    conn.execute("DELETE FROM categories WHERE id = ?1", params![id])
        .map_err(sq)
}

pub fn count_categories(conn: &Connection) -> StorageResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
        .map_err(sq)
}
