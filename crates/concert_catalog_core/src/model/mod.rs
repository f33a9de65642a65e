//! Catalog domain model.
//!
//! # Responsibility
//! - Define entity records mirroring the `bands`, `venues` and `concerts` rows.
//! - Define insert payloads and the read models returned by derived views.
//!
//! # Invariants
//! - Every identity is store-generated and never reused within its entity.
//! - Required text fields are never empty once persisted.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod band;
pub mod concert;
pub mod venue;

/// Validation failure raised before any SQL mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { entity, field } => {
                write!(f, "{entity}.{field} must not be empty")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
