//! Catalog schema definition.
//!
//! # Invariants
//! - Every statement is `CREATE TABLE IF NOT EXISTS`, so applying the schema
//!   to an initialized store is a no-op.
//! - `concerts` declares foreign keys to `bands(id)` and `venues(id)`.

use super::DbResult;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Tables the catalog reads and writes, with the columns each must carry.
pub const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("bands", &["id", "name", "hometown"]),
    ("venues", &["id", "title", "city"]),
    ("concerts", &["id", "band_id", "venue_id", "date"]),
];

/// Creates the catalog tables when they do not exist yet.
///
/// Safe to call on every startup; all statements run in one transaction.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.commit()?;
    Ok(())
}
