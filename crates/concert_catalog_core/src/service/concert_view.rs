//! Concert-scoped queries.
//!
//! # Invariants
//! - `hometown_show` and `introduction` require the concert, its band and its
//!   venue to exist; otherwise they fail with `RepoError::NotFound` naming the
//!   missing entity.

use crate::model::concert::{ConcertId, ConcertLineup};
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};

/// Handle bound to one concert id.
pub struct ConcertView<'a, R: CatalogRepository> {
    repo: &'a R,
    concert_id: ConcertId,
}

impl<'a, R: CatalogRepository> ConcertView<'a, R> {
    pub fn new(repo: &'a R, concert_id: ConcertId) -> Self {
        Self { repo, concert_id }
    }

    pub fn id(&self) -> ConcertId {
        self.concert_id
    }

    /// Joined band/venue data, or `None` when the concert is unknown.
    pub fn lineup(&self) -> RepoResult<Option<ConcertLineup>> {
        self.repo.get_lineup(self.concert_id)
    }

    /// Whether the band's hometown matches the venue city, ignoring case.
    pub fn hometown_show(&self) -> RepoResult<bool> {
        Ok(self.required_lineup()?.is_hometown_show())
    }

    /// `Hello {city}!!!!! We are {name} and we're from {hometown}`.
    pub fn introduction(&self) -> RepoResult<String> {
        Ok(self.required_lineup()?.introduction())
    }

    /// Distinguishes a missing concert from a concert whose band or venue is
    /// gone, which only happens on stores opened without foreign keys.
    fn required_lineup(&self) -> RepoResult<ConcertLineup> {
        let Some(concert) = self.repo.get_concert(self.concert_id)? else {
            return Err(RepoError::NotFound {
                entity: "concert",
                id: self.concert_id,
            });
        };

        if let Some(lineup) = self.lineup()? {
            return Ok(lineup);
        }

        if self.repo.get_band(concert.band_id)?.is_none() {
            return Err(RepoError::NotFound {
                entity: "band",
                id: concert.band_id,
            });
        }
        Err(RepoError::NotFound {
            entity: "venue",
            id: concert.venue_id,
        })
    }
}
