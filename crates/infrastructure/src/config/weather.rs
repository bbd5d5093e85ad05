//! Weather service configuration.

use std::path::PathBuf;

use application::{
    DEFAULT_HOURLY_ENTRIES, DEFAULT_ICON_BASE_URL, ForecastServiceConfig, HourlyOverflow,
    HourlyWindowConfig,
};
use domain::{DomainError, Timezone};
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Open-Meteo API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (unset: HTTP client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Host serving the weather icons
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Number of upcoming hours in a response
    #[serde(default = "default_hourly_entries")]
    pub hourly_entries: usize,

    /// `fail` or `clamp` when fewer hours remain
    #[serde(default)]
    pub hourly_overflow: HourlyOverflow,

    /// IANA timezone for day/night and the local date (unset: system zone)
    #[serde(default)]
    pub timezone: Option<String>,

    /// JSON file replacing the built-in weather code table
    #[serde(default)]
    pub codes_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

const fn default_hourly_entries() -> usize {
    DEFAULT_HOURLY_ENTRIES
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            icon_base_url: default_icon_base_url(),
            hourly_entries: default_hourly_entries(),
            hourly_overflow: HourlyOverflow::default(),
            timezone: None,
            codes_path: None,
        }
    }
}

impl WeatherAppConfig {
    /// Settings for the Open-Meteo HTTP client
    #[must_use]
    pub fn client_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Settings for the forecast use case
    #[must_use]
    pub fn service_config(&self) -> ForecastServiceConfig {
        ForecastServiceConfig {
            icon_base_url: self.icon_base_url.clone(),
            hourly: HourlyWindowConfig {
                entries: self.hourly_entries,
                overflow: self.hourly_overflow,
            },
        }
    }

    /// Resolve the configured timezone
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimezone` if the name is not a known IANA zone.
    pub fn timezone(&self) -> Result<Timezone, DomainError> {
        self.timezone
            .as_deref()
            .map_or(Ok(Timezone::System), Timezone::parse)
    }
}
