//! Error types for `minitrackr`.
//!
//! One structured error enum covers the whole request path. The taxonomy
//! mirrors what each HTTP handler needs to distinguish:
//!
//! - `Validation` - bad or missing field, rejected before any store call
//! - `NotFound` - referenced id absent, distinct from a store failure
//! - `Method` - wrong verb on a known route
//! - `Database` / `Template` / `Io` - infrastructure failures, never
//!   swallowed, surfaced as server errors
//!
//! The mapping to status codes lives next to axum in `http`, keeping this
//! module transport-free.

use thiserror::Error;

/// Primary error type for `minitrackr` operations.
#[derive(Error, Debug)]
pub enum TrackrError {
    /// Field validation failed. Never reaches the store.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Issue with the given id does not exist.
    #[error("Issue not found: {id}")]
    NotFound { id: i64 },

    /// Wrong HTTP verb on a known route.
    #[error("Method not allowed: {method}")]
    Method { method: String },

    /// `SQLite` database error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected failure recovered at the request boundary.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrackrError {
    /// Create a validation error for a specific field.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Did the client send something fixable, as opposed to the server
    /// failing?
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound { .. } | Self::Method { .. }
        )
    }
}

/// Result type using `TrackrError`.
pub type Result<T> = std::result::Result<T, TrackrError>;
