//! Venue-scoped queries.

use crate::model::band::{BandSummary, PerformanceCount};
use crate::model::concert::{ConcertSlot, VenueConcert};
use crate::model::venue::VenueId;
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};

/// Handle bound to one venue id.
pub struct VenueView<'a, R: CatalogRepository> {
    repo: &'a R,
    venue_id: VenueId,
}

impl<'a, R: CatalogRepository> VenueView<'a, R> {
    pub fn new(repo: &'a R, venue_id: VenueId) -> Self {
        Self { repo, venue_id }
    }

    pub fn id(&self) -> VenueId {
        self.venue_id
    }

    /// Concerts held here with band name and date, in concert id order.
    pub fn concerts(&self) -> RepoResult<Vec<VenueConcert>> {
        self.repo.list_venue_concerts(self.venue_id)
    }

    /// Each band that played here once, ordered by its first concert.
    pub fn bands(&self) -> RepoResult<Vec<BandSummary>> {
        self.repo.list_venue_bands(self.venue_id)
    }

    /// First concert here on exactly `date`, if any.
    pub fn concert_on(&self, date: &str) -> RepoResult<Option<ConcertSlot>> {
        self.repo.find_concert_on(self.venue_id, date)
    }

    /// Band with the most concerts here; ties go to the smallest band id.
    pub fn most_frequent_band(&self) -> RepoResult<Option<PerformanceCount>> {
        self.repo.most_frequent_band(self.venue_id)
    }
}
