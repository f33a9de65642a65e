//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide the write entry points (`add_band`, `add_venue`, `add_concert`).
//! - Provide point lookups and the catalog-wide aggregate.
//! - Create [`BandView`], [`VenueView`] and [`ConcertView`] handles.
//!
//! # Invariants
//! - Every insert returns the store-generated id.
//! - Service layer remains storage-agnostic.

use crate::model::band::{Band, BandId, NewBand, PerformanceCount};
use crate::model::concert::{Concert, ConcertId, NewConcert};
use crate::model::venue::{NewVenue, Venue, VenueId};
use crate::repo::catalog_repo::{CatalogRepository, RepoResult};
use crate::service::band_view::BandView;
use crate::service::concert_view::ConcertView;
use crate::service::venue_view::VenueView;
use log::{debug, warn};

/// Use-case service over one catalog repository.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a band and returns its id.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `name` or `hometown` is blank.
    pub fn add_band(
        &self,
        name: impl Into<String>,
        hometown: impl Into<String>,
    ) -> RepoResult<BandId> {
        let band = NewBand::new(name, hometown);
        match self.repo.create_band(&band) {
            Ok(id) => {
                debug!("event=band_create module=service status=ok band_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=band_create module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Adds a venue and returns its id.
    pub fn add_venue(
        &self,
        title: impl Into<String>,
        city: impl Into<String>,
    ) -> RepoResult<VenueId> {
        let venue = NewVenue::new(title, city);
        match self.repo.create_venue(&venue) {
            Ok(id) => {
                debug!("event=venue_create module=service status=ok venue_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=venue_create module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Links a band and a venue on `date` and returns the concert id.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `date` is blank.
    /// - `RepoError::ConstraintViolation` when either id is dangling and the
    ///   store enforces foreign keys.
    pub fn add_concert(
        &self,
        band_id: BandId,
        venue_id: VenueId,
        date: impl Into<String>,
    ) -> RepoResult<ConcertId> {
        let concert = NewConcert::new(band_id, venue_id, date);
        match self.repo.create_concert(&concert) {
            Ok(id) => {
                debug!(
                    "event=concert_create module=service status=ok concert_id={id} band_id={band_id} venue_id={venue_id}"
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=concert_create module=service status=error band_id={band_id} venue_id={venue_id} error={err}"
                );
                Err(err)
            }
        }
    }

    pub fn get_band(&self, id: BandId) -> RepoResult<Option<Band>> {
        self.repo.get_band(id)
    }

    pub fn get_venue(&self, id: VenueId) -> RepoResult<Option<Venue>> {
        self.repo.get_venue(id)
    }

    pub fn get_concert(&self, id: ConcertId) -> RepoResult<Option<Concert>> {
        self.repo.get_concert(id)
    }

    /// Band with the most concerts across the whole catalog.
    ///
    /// Returns `None` when no concert exists. Ties go to the smallest band id.
    pub fn most_performances(&self) -> RepoResult<Option<PerformanceCount>> {
        self.repo.most_performances()
    }

    /// View bound to one band id. The id is not checked for existence.
    pub fn band(&self, id: BandId) -> BandView<'_, R> {
        BandView::new(&self.repo, id)
    }

    pub fn venue(&self, id: VenueId) -> VenueView<'_, R> {
        VenueView::new(&self.repo, id)
    }

    pub fn concert(&self, id: ConcertId) -> ConcertView<'_, R> {
        ConcertView::new(&self.repo, id)
    }
}
