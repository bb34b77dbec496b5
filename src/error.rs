//! Validation error types for track records.

use thiserror::Error;

/// Result type for track operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validation failures raised by track construction and mutation.
///
/// Every variant is a validation failure; this crate has no resource or
/// system errors. A construction failure means no record was produced. A
/// mutation failure means the record was left exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Title blank after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Artist blank after trimming.
    #[error("artist must not be empty")]
    EmptyArtist,

    /// Duration of zero seconds.
    #[error("duration must be a positive number of seconds")]
    InvalidDuration,

    /// Rating outside the 1..=5 scale.
    #[error("rating must be between 1 and 5")]
    InvalidRating,

    /// Tag blank after trimming.
    #[error("tag must not be empty")]
    EmptyTag,

    /// Tag already present on the record, ignoring case.
    #[error("tag is already present (ignoring case)")]
    DuplicateTag,

    /// No stored tag matched the removal key.
    #[error("tag not found")]
    TagNotFound,
}
