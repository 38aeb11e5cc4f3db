//! Show domain rules.
//!
//! Constants and pure validation functions used by the store (seed loading,
//! updates) and the API layer (create payloads, path ids).

use std::num::IntErrorKind;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "show";

/// Id handed out when the collection has never held a record.
pub const FIRST_ID: DbId = 1;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a show name.
///
/// The name must contain at least one non-whitespace character.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Show name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a show rating.
///
/// NaN and infinities are rejected; they have no JSON representation.
pub fn validate_rating(rating: f64) -> Result<(), CoreError> {
    if !rating.is_finite() {
        return Err(CoreError::Validation(format!(
            "Show rating must be a finite number, got {rating}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Path ids
// ---------------------------------------------------------------------------

/// A show id as read from a URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSegment {
    /// A valid id.
    Id(DbId),
    /// An integer too large (or too small) for [`DbId`]. No show can carry it.
    OutOfRange,
    /// Not an integer at all.
    Malformed,
}

/// Classify a path segment. An optional leading sign is accepted.
pub fn parse_id_segment(segment: &str) -> IdSegment {
    match segment.parse::<DbId>() {
        Ok(id) => IdSegment::Id(id),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => IdSegment::OutOfRange,
            _ => IdSegment::Malformed,
        },
    }
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Compute the id that follows `highest`, the largest id ever assigned.
///
/// Returns [`CoreError::Internal`] once the id space is exhausted; ids are
/// never recycled.
pub fn next_id(highest: Option<DbId>) -> Result<DbId, CoreError> {
    match highest {
        None => Ok(FIRST_ID),
        Some(id) => id
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("Show id space exhausted".to_string())),
    }
}
