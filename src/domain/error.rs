//! Domain errors

use chrono::NaiveTime;
use thiserror::Error;

/// Domain-level error types
///
/// Every failure a caller can recover from ends up here; repository
/// implementations map their backend errors into [`DomainError::Storage`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Reservation interval is empty or reversed (start must be before end)
    #[error("invalid time slot: start {start} must be before end {end}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    /// Requested slot overlaps an already admitted reservation on that date
    #[error("time slot overlaps reservation {reservation_id} ({start}-{end})")]
    OverlapConflict {
        reservation_id: i32,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Entity lookup failed
    #[error("not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Storage/database error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
