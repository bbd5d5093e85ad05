//! Timezone value object

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

use crate::errors::DomainError;

/// The timezone in which forecasts are shown to the user
///
/// `System` follows the host's local timezone. `Named` pins an IANA zone,
/// which keeps day/night decisions reproducible regardless of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    /// The host's local timezone
    #[default]
    System,
    /// A fixed IANA timezone
    Named(Tz),
}

impl Timezone {
    /// Parse an IANA timezone name (e.g. `Europe/Berlin`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimezone` if the name is not in the IANA database.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        name.parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// UTC timezone
    #[must_use]
    pub const fn utc() -> Self {
        Self::Named(Tz::UTC)
    }

    /// Convert a UTC instant to the wall-clock time in this timezone
    #[must_use]
    pub fn local_datetime(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::System => instant.with_timezone(&Local).naive_local(),
            Self::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timezone_default_is_system() {
        assert_eq!(Timezone::default(), Timezone::System);
    }

    #[test]
    fn test_timezone_parse() {
        let tz = Timezone::parse("Europe/Berlin").unwrap();
        assert_eq!(tz.to_string(), "Europe/Berlin");
    }

    #[test]
    fn test_timezone_parse_invalid() {
        let err = Timezone::parse("Mars/Olympus").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimezone(_)));
    }

    #[test]
    fn test_utc_local_datetime_is_identity() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(Timezone::utc().local_datetime(instant), instant.naive_utc());
    }

    #[test]
    fn test_named_local_datetime_applies_offset() {
        let tz = Timezone::parse("Europe/Berlin").unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(tz.local_datetime(winter).format("%H:%M").to_string(), "13:00");
        assert_eq!(tz.local_datetime(summer).format("%H:%M").to_string(), "14:00");
    }

    #[test]
    fn test_system_display() {
        assert_eq!(Timezone::System.to_string(), "system");
    }
}
