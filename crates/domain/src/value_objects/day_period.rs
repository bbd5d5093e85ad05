//! Day/night classification of a local wall-clock time

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a forecast falls in the day or the night
///
/// Day is local time in `[06:00, 18:00)`, everything else is night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// First hour that counts as day
    pub const DAY_START_HOUR: u32 = 6;
    /// First hour that counts as night again
    pub const DAY_END_HOUR: u32 = 18;

    /// Classify a local time of day
    #[must_use]
    pub fn from_local_time(time: NaiveTime) -> Self {
        if (Self::DAY_START_HOUR..Self::DAY_END_HOUR).contains(&time.hour()) {
            Self::Day
        } else {
            Self::Night
        }
    }

    /// Icon suffix used by the icon host (`d` or `n`)
    #[must_use]
    pub const fn icon_suffix(self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Night => "n",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}
