//! SQLite storage bootstrap and schema initialization entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the concert catalog.
//! - Create the `bands`, `venues` and `concerts` tables when absent.
//!
//! # Invariants
//! - Core code must not read/write catalog data before `ensure_schema` succeeds.
//! - Returned connections carry the pragmas requested by [`StoreOptions`].

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory, open_db_in_memory_with, open_db_with};
pub use schema::ensure_schema;

pub type DbResult<T> = Result<T, DbError>;

/// Store-level failure: the database is unreachable, corrupt, or its location
/// cannot be prepared.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to prepare database location: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Connection settings applied while opening a catalog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Turns on `PRAGMA foreign_keys`, so dangling concert references are
    /// rejected at insert time instead of silently stored.
    pub enforce_foreign_keys: bool,
    /// How long a blocked statement waits for a lock before failing.
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            enforce_foreign_keys: true,
            busy_timeout: Duration::from_secs(5),
        }
    }
}
