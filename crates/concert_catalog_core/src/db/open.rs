//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Apply [`StoreOptions`] pragmas.
//! - Ensure the catalog schema before returning a usable connection.

use super::schema::ensure_schema;
use super::{DbResult, StoreOptions};
use log::{error, info};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Opens a SQLite database file with default options and ensures the schema.
///
/// Missing parent directories are created first.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    open_db_with(path, &StoreOptions::default())
}

/// Opens a SQLite database file with explicit options and ensures the schema.
///
/// # Side effects
/// - Creates the parent directory when it does not exist yet.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_with(path: impl AsRef<Path>, options: &StoreOptions) -> DbResult<Connection> {
    let started_at = Instant::now();
    let path = path.as_ref();
    info!("event=db_open module=db status=start mode=file");

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        if let Err(err) = fs::create_dir_all(parent) {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_dir_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    }

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, options, "file", started_at)
}

/// Opens an in-memory SQLite database with default options.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_db_in_memory_with(&StoreOptions::default())
}

/// Opens an in-memory SQLite database with explicit options.
pub fn open_db_in_memory_with(options: &StoreOptions) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, options, "memory", started_at)
}

fn finish_open(
    mut conn: Connection,
    options: &StoreOptions,
    mode: &str,
    started_at: Instant,
) -> DbResult<Connection> {
    match bootstrap_connection(&mut conn, options) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode={} foreign_keys={} duration_ms={}",
                mode,
                options.enforce_foreign_keys,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_bootstrap_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection, options: &StoreOptions) -> DbResult<()> {
    let foreign_keys = if options.enforce_foreign_keys { "ON" } else { "OFF" };
    conn.execute_batch(&format!("PRAGMA foreign_keys = {foreign_keys};"))?;
    conn.busy_timeout(options.busy_timeout)?;
    ensure_schema(conn)?;
    Ok(())
}
