//! Validation helpers for `minitrackr`.
//!
//! These routines enforce the issue field constraints and return structured
//! validation errors without mutating storage. Handlers reject the whole
//! request on the first failure, before any store call.

use crate::error::{Result, TrackrError};
use crate::model::{Priority, Status};

/// Maximum title length in bytes, measured after trimming.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Validate and normalize an issue title.
///
/// Trims leading/trailing whitespace, then rejects titles that are empty or
/// longer than [`MAX_TITLE_LENGTH`]. Returns the trimmed title on success.
///
/// # Errors
///
/// Returns `TrackrError::Validation` if the trimmed title is empty or
/// over-length.
pub fn validate_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TrackrError::validation("title", "cannot be empty"));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(TrackrError::validation("title", "exceeds 500 characters"));
    }
    Ok(title.to_string())
}

/// Validate a status value against the closed set.
///
/// The empty string is not valid here; callers treat empty/absent specially
/// as "use default on create, keep current on update".
///
/// # Errors
///
/// Returns `TrackrError::Validation` for any value outside
/// `todo | doing | done` (case-sensitive).
pub fn validate_status(value: &str) -> Result<Status> {
    value.parse()
}

/// Validate a priority value against the closed set.
///
/// Same empty-string caveat as [`validate_status`].
///
/// # Errors
///
/// Returns `TrackrError::Validation` for any value outside
/// `low | medium | high` (case-sensitive).
pub fn validate_priority(value: &str) -> Result<Priority> {
    value.parse()
}
