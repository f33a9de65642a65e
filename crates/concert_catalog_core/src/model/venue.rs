//! Venue records.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-generated venue identity (`venues.id`).
pub type VenueId = i64;

/// A performance location as persisted in `venues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub title: String,
    pub city: String,
}

/// Insert payload for a venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub title: String,
    pub city: String,
}

impl NewVenue {
    pub fn new(title: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            city: city.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("venue", "title", &self.title)?;
        require_text("venue", "city", &self.city)
    }
}
