//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths validate payloads before SQL mutations.
//! - Point lookups report absence as `None`, not as an error.
//! - List queries are ordered by concert id; aggregates break ties by the
//!   smallest band id.

pub mod band_repo;
pub mod catalog_repo;
pub mod concert_repo;
pub mod venue_repo;
