//! Forecast normalization
//!
//! Turns the upstream `current` field bag into one record and picks a short
//! window of upcoming hours out of the long hourly series.

use chrono::{DateTime, Timelike, Utc};
use domain::{DomainError, ForecastRecord, HourlySeries, RawFields};
use serde::{Deserialize, Serialize};

/// Number of upcoming hourly entries returned by default
pub const DEFAULT_HOURLY_ENTRIES: usize = 5;

/// What to do when the window runs past the end of the hourly series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourlyOverflow {
    /// Fail the request with `HourlyWindowOutOfRange`
    #[default]
    Fail,
    /// Return whatever entries remain
    Clamp,
}

/// Hourly window selection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyWindowConfig {
    /// Number of consecutive hours to return
    #[serde(default = "default_entries")]
    pub entries: usize,
    /// Policy when fewer hours remain
    #[serde(default)]
    pub overflow: HourlyOverflow,
}

const fn default_entries() -> usize {
    DEFAULT_HOURLY_ENTRIES
}

impl Default for HourlyWindowConfig {
    fn default() -> Self {
        Self {
            entries: DEFAULT_HOURLY_ENTRIES,
            overflow: HourlyOverflow::default(),
        }
    }
}

/// Build the single "current" record
///
/// # Errors
///
/// Returns `MalformedUpstreamData` if a required field is missing.
pub fn normalize_current(raw: &RawFields) -> Result<ForecastRecord, DomainError> {
    ForecastRecord::from_fields(raw)
}

/// Index of the first hour to show
///
/// Finds the first entry in the same UTC date and hour as `now` and returns
/// the index after it. If no entry matches, starts at 0.
#[must_use]
pub fn find_start_index(times: &[DateTime<Utc>], now: DateTime<Utc>) -> usize {
    times
        .iter()
        .position(|t| t.date_naive() == now.date_naive() && t.hour() == now.hour())
        .map_or(0, |i| i + 1)
}

/// Select the upcoming hourly records relative to `now`
///
/// # Errors
///
/// Returns `HourlyWindowOutOfRange` under [`HourlyOverflow::Fail`] if fewer
/// than `config.entries` hours remain after the start index, and malformed
/// data errors from the series itself.
pub fn select_hourly_window(
    series: &HourlySeries,
    now: DateTime<Utc>,
    config: HourlyWindowConfig,
) -> Result<Vec<ForecastRecord>, DomainError> {
    let times = series.times()?;
    let start = find_start_index(&times, now);
    let available = times.len();
    let wanted_end = start.saturating_add(config.entries);

    let end = if wanted_end <= available {
        wanted_end
    } else {
        match config.overflow {
            HourlyOverflow::Fail => {
                return Err(DomainError::HourlyWindowOutOfRange {
                    start,
                    requested: config.entries,
                    available,
                });
            },
            HourlyOverflow::Clamp => available.max(start),
        }
    };

    (start..end).map(|i| series.record_at(i)).collect()
}
