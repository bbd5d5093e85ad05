//! Presentation mapping for forecast records
//!
//! Attaches a description and a day/night icon URL to each record.

use std::sync::Arc;

use domain::{DayPeriod, ForecastRecord, Timezone, WeatherCodeTable};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Icon host used when none is configured
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// A forecast record ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedForecast {
    /// ISO-8601 UTC timestamp
    pub time: String,
    pub temperature: f64,
    pub precipitation: f64,
    pub description: String,
    pub icon_url: String,
}

/// Rendered hourly entries keyed by timestamp
///
/// Serializes as a JSON object whose keys keep chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyForecasts(Vec<RenderedForecast>);

impl HourlyForecasts {
    #[must_use]
    pub const fn new(entries: Vec<RenderedForecast>) -> Self {
        Self(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &RenderedForecast> {
        self.0.iter()
    }
}

impl Serialize for HourlyForecasts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.time, entry)?;
        }
        map.end()
    }
}

/// Renders forecast records against the weather-code table
#[derive(Debug, Clone)]
pub struct ForecastPresenter {
    codes: Arc<WeatherCodeTable>,
    icon_base_url: String,
    timezone: Timezone,
}

impl ForecastPresenter {
    #[must_use]
    pub fn new(
        codes: Arc<WeatherCodeTable>,
        icon_base_url: impl Into<String>,
        timezone: Timezone,
    ) -> Self {
        Self {
            codes,
            icon_base_url: icon_base_url.into(),
            timezone,
        }
    }

    /// Day or night at the record's local time
    #[must_use]
    pub fn day_period(&self, record: &ForecastRecord) -> DayPeriod {
        let local = self.timezone.local_datetime(record.timestamp);
        DayPeriod::from_local_time(local.time())
    }

    /// Icon URL for the record
    ///
    /// Unknown codes have no icon base name and still get the day/night
    /// suffix, e.g. `.../d@2x.png`.
    #[must_use]
    pub fn icon_url(&self, record: &ForecastRecord) -> String {
        let icon = self.codes.icon_base_name(record.weather_code).unwrap_or("");
        format!(
            "{}/{}{}@2x.png",
            self.icon_base_url.trim_end_matches('/'),
            icon,
            self.day_period(record).icon_suffix()
        )
    }

    #[must_use]
    pub fn render(&self, record: &ForecastRecord) -> RenderedForecast {
        RenderedForecast {
            time: record.iso_time(),
            temperature: record.temperature,
            precipitation: record.precipitation,
            description: self.codes.description(record.weather_code).to_string(),
            icon_url: self.icon_url(record),
        }
    }

    /// Render an ordered list of hourly records
    #[must_use]
    pub fn render_hourly(&self, records: &[ForecastRecord]) -> HourlyForecasts {
        HourlyForecasts::new(records.iter().map(|r| self.render(r)).collect())
    }
}
