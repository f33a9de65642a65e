//! Concert records and the rules derived from a concert's band and venue.
//!
//! # Invariants
//! - A concert references exactly one band and one venue.
//! - `date` is free-form text compared by exact match only.

use super::band::BandId;
use super::venue::VenueId;
use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-generated concert identity (`concerts.id`).
pub type ConcertId = i64;

/// Join record linking a band and a venue on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    pub id: ConcertId,
    pub band_id: BandId,
    pub venue_id: VenueId,
    pub date: String,
}

/// Insert payload for a concert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConcert {
    pub band_id: BandId,
    pub venue_id: VenueId,
    pub date: String,
}

impl NewConcert {
    pub fn new(band_id: BandId, venue_id: VenueId, date: impl Into<String>) -> Self {
        Self {
            band_id,
            venue_id,
            date: date.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("concert", "date", &self.date)
    }
}

/// Concert row as seen from a band: where and when it played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConcert {
    pub concert_id: ConcertId,
    pub venue_title: String,
    pub venue_city: String,
    pub date: String,
}

/// Concert row as seen from a venue: who played and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueConcert {
    pub concert_id: ConcertId,
    pub band_name: String,
    pub date: String,
}

/// Concert found at a venue for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertSlot {
    pub concert_id: ConcertId,
    pub band_name: String,
}

/// Band and venue fields joined for one concert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertLineup {
    pub concert_id: ConcertId,
    pub band_name: String,
    pub band_hometown: String,
    pub venue_city: String,
}

impl ConcertLineup {
    /// Stage greeting for this concert.
    pub fn introduction(&self) -> String {
        format!(
            "Hello {}!!!!! We are {} and we're from {}",
            self.venue_city, self.band_name, self.band_hometown
        )
    }

    /// Whether the band plays in its hometown. Comparison ignores case.
    pub fn is_hometown_show(&self) -> bool {
        self.band_hometown.to_lowercase() == self.venue_city.to_lowercase()
    }
}
