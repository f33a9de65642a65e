//! Band-scoped queries and the `play_in_venue` booking shortcut.

use crate::model::band::{BandId, PerformanceCount};
use crate::model::concert::{BandConcert, ConcertId, NewConcert};
use crate::model::venue::Venue;
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use log::debug;

/// Handle bound to one band id.
pub struct BandView<'a, R: CatalogRepository> {
    repo: &'a R,
    band_id: BandId,
}

impl<'a, R: CatalogRepository> BandView<'a, R> {
    pub fn new(repo: &'a R, band_id: BandId) -> Self {
        Self { repo, band_id }
    }

    pub fn id(&self) -> BandId {
        self.band_id
    }

    /// Concerts of this band with venue title and city, in concert id order.
    pub fn concerts(&self) -> RepoResult<Vec<BandConcert>> {
        self.repo.list_band_concerts(self.band_id)
    }

    /// Venues this band played, one entry per concert (not deduplicated).
    pub fn venues(&self) -> RepoResult<Vec<Venue>> {
        self.repo.list_band_venues(self.band_id)
    }

    /// Books this band at the venue titled exactly `venue_title`.
    ///
    /// Returns the new concert id, or `None` without inserting anything when
    /// no venue carries that title. Repeated titles resolve to the smallest
    /// venue id.
    pub fn play_in_venue(&self, venue_title: &str, date: &str) -> RepoResult<Option<ConcertId>> {
        let Some(venue) = self.repo.find_venue_by_title(venue_title)? else {
            debug!(
                "event=play_in_venue module=service status=skipped band_id={} reason=venue_not_found",
                self.band_id
            );
            return Ok(None);
        };

        let concert = NewConcert::new(self.band_id, venue.id, date);
        let id = self.repo.create_concert(&concert)?;
        debug!(
            "event=play_in_venue module=service status=ok band_id={} venue_id={} concert_id={id}",
            self.band_id, venue.id
        );
        Ok(Some(id))
    }

    /// Stage greeting for every concert of this band, in concert order.
    pub fn all_introductions(&self) -> RepoResult<Vec<String>> {
        let lineups = self.repo.list_band_lineups(self.band_id)?;
        Ok(lineups.iter().map(|lineup| lineup.introduction()).collect())
    }

    /// Catalog-wide band with the most concerts; not scoped to this band.
    pub fn most_performances(&self) -> RepoResult<Option<PerformanceCount>> {
        self.repo.most_performances()
    }
}
