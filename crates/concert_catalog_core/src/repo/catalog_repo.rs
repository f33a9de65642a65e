//! Shared repository error type and the SQLite catalog repository handle.
//!
//! # Responsibility
//! - Own the borrowed connection used by every entity repository.
//! - Reject connections whose schema is not ready before any query runs.
//! - Translate SQLite constraint failures into semantic errors.

use crate::db::schema::REQUIRED_COLUMNS;
use crate::db::DbError;
use crate::model::ValidationError;
use crate::repo::band_repo::BandRepository;
use crate::repo::concert_repo::ConcertRepository;
use crate::repo::venue_repo::VenueRepository;
use rusqlite::{Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Payload rejected before reaching the store.
    Validation(ValidationError),
    /// Store unreachable or failing.
    Db(DbError),
    /// The store refused a write, e.g. a dangling foreign key.
    ConstraintViolation(String),
    /// An operation required a record that does not exist.
    NotFound { entity: &'static str, id: i64 },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::ConstraintViolation(message) => write!(f, "constraint violation: {message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "connection is missing required column `{column}` on table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ConstraintViolation(_) => None,
            Self::NotFound { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if matches!(
            value.sqlite_error_code(),
            Some(ErrorCode::ConstraintViolation)
        ) {
            return Self::ConstraintViolation(value.to_string());
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Full catalog contract: band, venue and concert access through one handle.
pub trait CatalogRepository: BandRepository + VenueRepository + ConcertRepository {}

impl<T> CatalogRepository for T where T: BandRepository + VenueRepository + ConcertRepository {}

/// SQLite-backed catalog repository borrowing one open connection.
pub struct SqliteCatalogRepository<'conn> {
    pub(crate) conn: &'conn Connection,
}

impl<'conn> SqliteCatalogRepository<'conn> {
    /// Creates a repository from a connection whose schema is initialized.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the catalog
    ///   tables are absent or incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_catalog_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

fn ensure_catalog_connection_ready(conn: &Connection) -> RepoResult<()> {
    for &(table, columns) in REQUIRED_COLUMNS {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for column in columns.iter().copied() {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
