//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A raw upstream record is missing a field or carries the wrong type
    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// The hourly window extends past the end of the upstream series
    #[error(
        "Hourly window out of range: {requested} entries from index {start}, \
         but only {available} available"
    )]
    HourlyWindowOutOfRange {
        start: usize,
        requested: usize,
        available: usize,
    },

    /// The weather code table could not be loaded
    #[error("Invalid weather code table: {0}")]
    InvalidWeatherCodeTable(String),

    /// Unknown timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl DomainError {
    /// Create a malformed-data error for a missing field
    pub fn missing_field(field: impl AsRef<str>) -> Self {
        Self::MalformedUpstreamData(format!("missing field `{}`", field.as_ref()))
    }

    /// Create a malformed-data error for a field with an unexpected type
    pub fn invalid_field(field: impl AsRef<str>, expected: &str) -> Self {
        Self::MalformedUpstreamData(format!(
            "field `{}` is not a valid {expected}",
            field.as_ref()
        ))
    }
}
