//! Band records.

use super::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Store-generated band identity (`bands.id`).
pub type BandId = i64;

/// A musical act as persisted in `bands`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub hometown: String,
}

/// Insert payload for a band; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBand {
    pub name: String,
    pub hometown: String,
}

impl NewBand {
    pub fn new(name: impl Into<String>, hometown: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hometown: hometown.into(),
        }
    }

    /// Rejects empty `name` or `hometown`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("band", "name", &self.name)?;
        require_text("band", "hometown", &self.hometown)
    }
}

/// Distinct band entry listed for a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSummary {
    pub id: BandId,
    pub name: String,
}

/// Result of a "most concerts" aggregate.
///
/// Ties on `count` resolve to the smallest `band_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCount {
    pub band_id: BandId,
    pub name: String,
    pub count: u32,
}
