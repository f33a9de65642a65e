//! Core data-access layer for the concert catalog.
//! Bands, venues and the concerts linking them, stored in embedded SQLite.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, StoreOptions};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::band::{Band, BandId, BandSummary, NewBand, PerformanceCount};
pub use model::concert::{
    BandConcert, Concert, ConcertId, ConcertLineup, ConcertSlot, NewConcert, VenueConcert,
};
pub use model::venue::{NewVenue, Venue, VenueId};
pub use model::ValidationError;
pub use repo::band_repo::BandRepository;
pub use repo::catalog_repo::{CatalogRepository, RepoError, RepoResult, SqliteCatalogRepository};
pub use repo::concert_repo::ConcertRepository;
pub use repo::venue_repo::VenueRepository;
pub use service::band_view::BandView;
pub use service::catalog_service::CatalogService;
pub use service::concert_view::ConcertView;
pub use service::venue_view::VenueView;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
