//! Venue repository contract and SQLite implementation.

use crate::model::band::{BandSummary, PerformanceCount};
use crate::model::concert::{ConcertSlot, VenueConcert};
use crate::model::venue::{NewVenue, Venue, VenueId};
use crate::repo::band_repo::parse_performance_row;
use crate::repo::catalog_repo::{RepoResult, SqliteCatalogRepository};
use rusqlite::{params, Row};

/// Repository interface for venue records and venue-scoped queries.
pub trait VenueRepository {
    /// Inserts one venue and returns its generated id.
    fn create_venue(&self, venue: &NewVenue) -> RepoResult<VenueId>;
    fn get_venue(&self, id: VenueId) -> RepoResult<Option<Venue>>;
    /// Exact title lookup. The smallest id wins when titles repeat.
    fn find_venue_by_title(&self, title: &str) -> RepoResult<Option<Venue>>;
    fn list_venue_concerts(&self, id: VenueId) -> RepoResult<Vec<VenueConcert>>;
    /// Distinct bands that played one venue, by first appearance.
    fn list_venue_bands(&self, id: VenueId) -> RepoResult<Vec<BandSummary>>;
    /// First concert at one venue on an exact date.
    fn find_concert_on(&self, id: VenueId, date: &str) -> RepoResult<Option<ConcertSlot>>;
    /// Band with the most concerts at one venue.
    fn most_frequent_band(&self, id: VenueId) -> RepoResult<Option<PerformanceCount>>;
}

impl VenueRepository for SqliteCatalogRepository<'_> {
    fn create_venue(&self, venue: &NewVenue) -> RepoResult<VenueId> {
        venue.validate()?;

        self.conn.execute(
            "INSERT INTO venues (title, city) VALUES (?1, ?2);",
            params![venue.title.as_str(), venue.city.as_str()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_venue(&self, id: VenueId) -> RepoResult<Option<Venue>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, city FROM venues WHERE id = ?1;")?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_venue_row(row)?));
        }

        Ok(None)
    }

    fn find_venue_by_title(&self, title: &str) -> RepoResult<Option<Venue>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, city
             FROM venues
             WHERE title = ?1
             ORDER BY id ASC
             LIMIT 1;",
        )?;

        let mut rows = stmt.query([title])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_venue_row(row)?));
        }

        Ok(None)
    }

    fn list_venue_concerts(&self, id: VenueId) -> RepoResult<Vec<VenueConcert>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                c.id AS concert_id,
                b.name AS band_name,
                c.date AS date
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             WHERE c.venue_id = ?1
             ORDER BY c.id ASC;",
        )?;

        let concerts = stmt
            .query_map([id], |row| {
                Ok(VenueConcert {
                    concert_id: row.get("concert_id")?,
                    band_name: row.get("band_name")?,
                    date: row.get("date")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(concerts)
    }

    fn list_venue_bands(&self, id: VenueId) -> RepoResult<Vec<BandSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id AS id, b.name AS name
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             WHERE c.venue_id = ?1
             GROUP BY b.id, b.name
             ORDER BY MIN(c.id) ASC;",
        )?;

        let bands = stmt
            .query_map([id], |row| {
                Ok(BandSummary {
                    id: row.get("id")?,
                    name: row.get("name")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bands)
    }

    fn find_concert_on(&self, id: VenueId, date: &str) -> RepoResult<Option<ConcertSlot>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id AS concert_id, b.name AS band_name
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             WHERE c.venue_id = ?1 AND c.date = ?2
             ORDER BY c.id ASC
             LIMIT 1;",
        )?;

        let mut rows = stmt.query(params![id, date])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(ConcertSlot {
                concert_id: row.get("concert_id")?,
                band_name: row.get("band_name")?,
            }));
        }

        Ok(None)
    }

    fn most_frequent_band(&self, id: VenueId) -> RepoResult<Option<PerformanceCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                b.id AS band_id,
                b.name AS name,
                COUNT(c.id) AS performance_count
             FROM concerts c
             INNER JOIN bands b ON b.id = c.band_id
             WHERE c.venue_id = ?1
             GROUP BY b.id, b.name
             ORDER BY performance_count DESC, b.id ASC
             LIMIT 1;",
        )?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_performance_row(row)?));
        }

        Ok(None)
    }
}

fn parse_venue_row(row: &Row<'_>) -> rusqlite::Result<Venue> {
    Ok(Venue {
        id: row.get("id")?,
        title: row.get("title")?,
        city: row.get("city")?,
    })
}
