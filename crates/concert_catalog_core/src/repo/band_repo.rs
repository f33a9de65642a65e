//! Band repository contract and SQLite implementation.
//!
//! # Invariants
//! - Band-scoped lists follow concert id order.
//! - `most_performances` only counts bands with at least one concert.

use crate::model::band::{Band, BandId, NewBand, PerformanceCount};
use crate::model::concert::{BandConcert, ConcertLineup};
use crate::model::venue::Venue;
use crate::repo::catalog_repo::{RepoResult, SqliteCatalogRepository};
use rusqlite::{params, Row};

/// Repository interface for band records and band-scoped queries.
pub trait BandRepository {
    /// Inserts one band and returns its generated id.
    fn create_band(&self, band: &NewBand) -> RepoResult<BandId>;
    fn get_band(&self, id: BandId) -> RepoResult<Option<Band>>;
    /// Concerts of one band joined with their venue.
    fn list_band_concerts(&self, id: BandId) -> RepoResult<Vec<BandConcert>>;
    /// Venue of every concert of one band, repeated once per concert.
    fn list_band_venues(&self, id: BandId) -> RepoResult<Vec<Venue>>;
    /// Joined band/venue data of every concert of one band.
    fn list_band_lineups(&self, id: BandId) -> RepoResult<Vec<ConcertLineup>>;
    /// Catalog-wide band with the most concerts.
    fn most_performances(&self) -> RepoResult<Option<PerformanceCount>>;
}

impl BandRepository for SqliteCatalogRepository<'_> {
    fn create_band(&self, band: &NewBand) -> RepoResult<BandId> {
        band.validate()?;

        self.conn.execute(
            "INSERT INTO bands (name, hometown) VALUES (?1, ?2);",
            params![band.name.as_str(), band.hometown.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_band(&self, id: BandId) -> RepoResult<Option<Band>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, hometown FROM bands WHERE id = ?1;")?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(Band {
                id: row.get("id")?,
                name: row.get("name")?,
                hometown: row.get("hometown")?,
            }));
        }

        Ok(None)
    }

    fn list_band_concerts(&self, id: BandId) -> RepoResult<Vec<BandConcert>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                c.id AS concert_id,
                v.title AS venue_title,
                v.city AS venue_city,
                c.date AS date
             FROM concerts c
             INNER JOIN venues v ON v.id = c.venue_id
             WHERE c.band_id = ?1
             ORDER BY c.id ASC;",
        )?;

        let mut rows = stmt.query([id])?;
        let mut concerts = Vec::new();
        while let Some(row) = rows.next()? {
            concerts.push(BandConcert {
                concert_id: row.get("concert_id")?,
                venue_title: row.get("venue_title")?,
                venue_city: row.get("venue_city")?,
                date: row.get("date")?,
            });
        }

        Ok(concerts)
    }

    fn list_band_venues(&self, id: BandId) -> RepoResult<Vec<Venue>> {
        let mut stmt = self.conn.prepare(
            "SELECT v.id AS id, v.title AS title, v.city AS city
             FROM concerts c
             INNER JOIN venues v ON v.id = c.venue_id
             WHERE c.band_id = ?1
             ORDER BY c.id ASC;",
        )?;

        let venues = stmt
            .query_map([id], |row| {
                Ok(Venue {
                    id: row.get("id")?,
                    title: row.get("title")?,
                    city: row.get("city")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(venues)
    }

    fn list_band_lineups(&self, id: BandId) -> RepoResult<Vec<ConcertLineup>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                c.id AS concert_id,
                b.name AS band_name,
                b.hometown AS band_hometown,
                v.city AS venue_city
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             INNER JOIN venues v ON v.id = c.venue_id
             WHERE c.band_id = ?1
             ORDER BY c.id ASC;",
        )?;

        let lineups = stmt
            .query_map([id], parse_lineup_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(lineups)
    }

    fn most_performances(&self) -> RepoResult<Option<PerformanceCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                b.id AS band_id,
                b.name AS name,
                COUNT(c.id) AS performance_count
             FROM bands b
             INNER JOIN concerts c ON c.band_id = b.id
             GROUP BY b.id, b.name
             ORDER BY performance_count DESC, b.id ASC
             LIMIT 1;",
        )?;

        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_performance_row(row)?));
        }

        Ok(None)
    }
}

pub(crate) fn parse_lineup_row(row: &Row<'_>) -> rusqlite::Result<ConcertLineup> {
    Ok(ConcertLineup {
        concert_id: row.get("concert_id")?,
        band_name: row.get("band_name")?,
        band_hometown: row.get("band_hometown")?,
        venue_city: row.get("venue_city")?,
    })
}

pub(crate) fn parse_performance_row(row: &Row<'_>) -> rusqlite::Result<PerformanceCount> {
    Ok(PerformanceCount {
        band_id: row.get("band_id")?,
        name: row.get("name")?,
        count: row.get("performance_count")?,
    })
}
