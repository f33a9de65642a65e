//! Concert repository contract and SQLite implementation.
//!
//! # Invariants
//! - Referential integrity of `band_id`/`venue_id` is enforced by the store
//!   when the connection was opened with foreign keys on.

use crate::model::concert::{Concert, ConcertId, ConcertLineup, NewConcert};
use crate::repo::band_repo::parse_lineup_row;
use crate::repo::catalog_repo::{RepoResult, SqliteCatalogRepository};
use rusqlite::params;

/// Repository interface for concert records.
pub trait ConcertRepository {
    /// Inserts one concert and returns its generated id.
    fn create_concert(&self, concert: &NewConcert) -> RepoResult<ConcertId>;
    fn get_concert(&self, id: ConcertId) -> RepoResult<Option<Concert>>;
    /// Band and venue fields joined for one concert.
    fn get_lineup(&self, id: ConcertId) -> RepoResult<Option<ConcertLineup>>;
}

impl ConcertRepository for SqliteCatalogRepository<'_> {
    fn create_concert(&self, concert: &NewConcert) -> RepoResult<ConcertId> {
        concert.validate()?;

        self.conn.execute(
            "INSERT INTO concerts (band_id, venue_id, date) VALUES (?1, ?2, ?3);",
            params![concert.band_id, concert.venue_id, concert.date.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_concert(&self, id: ConcertId) -> RepoResult<Option<Concert>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, band_id, venue_id, date FROM concerts WHERE id = ?1;")?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Concert {
                id: row.get("id")?,
                band_id: row.get("band_id")?,
                venue_id: row.get("venue_id")?,
                date: row.get("date")?,
            }));
        }

        Ok(None)
    }

    fn get_lineup(&self, id: ConcertId) -> RepoResult<Option<ConcertLineup>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                c.id AS concert_id,
                b.name AS band_name,
                b.hometown AS band_hometown,
                v.city AS venue_city
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             INNER JOIN venues v ON v.id = c.venue_id
             WHERE c.id = ?1;",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_lineup_row(row)?));
        }

        Ok(None)
    }
}
