//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the catalog write operations.
//! - Hand out views bound to one band, venue or concert id.
//!
//! # Invariants
//! - Services never bypass repository validation.
//! - Views borrow the service repository; they hold no state besides an id.

pub mod band_view;
pub mod catalog_service;
pub mod concert_view;
pub mod venue_view;
