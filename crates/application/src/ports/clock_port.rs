//! Clock port
//!
//! Supplies "now" and the display timezone so that hour selection and
//! day/night decisions can be pinned in tests.

use chrono::{DateTime, Utc};
use domain::Timezone;
#[cfg(test)]
use mockall::automock;

/// Port for reading the current instant and the local timezone
#[cfg_attr(test, automock)]
pub trait ClockPort: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Timezone used for day/night and the local date
    fn timezone(&self) -> Timezone;
}

/// A clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    timezone: Timezone,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: DateTime<Utc>, timezone: Timezone) -> Self {
        Self { now, timezone }
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}
