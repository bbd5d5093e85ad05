//! Forecast service
//!
//! Fetches the upstream forecast for a pair of coordinates and assembles the
//! response payload. Fetch failures degrade to an error payload; problems in
//! a response that did arrive fail the request.

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{Coordinates, DomainError, WeatherCodeTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::forecast_normalizer::{HourlyWindowConfig, normalize_current, select_hourly_window};
use super::forecast_presenter::{
    DEFAULT_ICON_BASE_URL, ForecastPresenter, HourlyForecasts, RenderedForecast,
};
use crate::error::ApplicationError;
use crate::ports::{ClockPort, ForecastPort, UpstreamForecast};

/// Message shown to clients when the upstream could not be reached
pub const FETCH_FAILED_MESSAGE: &str = "Failed fetching.";

/// Placeholder shown before the first forecast arrives
pub const LOADING_MESSAGE: &str = "Loading...";

/// The `forecast` part of a response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForecastPayload {
    Available {
        current: RenderedForecast,
        hourly: HourlyForecasts,
    },
    Failed {
        error: String,
    },
}

impl ForecastPayload {
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self::Failed {
            error: FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Response to a forecast request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResponse {
    /// Latitude as sent by the client
    pub latitude: Option<f64>,
    /// Longitude as sent by the client
    pub longitude: Option<f64>,
    /// Local date at request time
    pub today: NaiveDate,
    pub forecast: ForecastPayload,
}

/// Context for the index page before any forecast was requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexContext {
    pub today: NaiveDate,
    /// Local time as `HH:MM`
    pub current_time: String,
    pub forecast: String,
    pub max_entries: usize,
}

/// Forecast service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastServiceConfig {
    /// Icon host (default: <https://openweathermap.org/img/wn>)
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Hourly window selection
    #[serde(default)]
    pub hourly: HourlyWindowConfig,
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

impl Default for ForecastServiceConfig {
    fn default() -> Self {
        Self {
            icon_base_url: default_icon_base_url(),
            hourly: HourlyWindowConfig::default(),
        }
    }
}

/// Use case for the forecast endpoint
pub struct ForecastService {
    forecasts: Arc<dyn ForecastPort>,
    clock: Arc<dyn ClockPort>,
    codes: Arc<WeatherCodeTable>,
    config: ForecastServiceConfig,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("forecasts", &"<ForecastPort>")
            .field("clock", &"<ClockPort>")
            .field("codes", &self.codes.len())
            .field("config", &self.config)
            .finish()
    }
}

impl ForecastService {
    #[must_use]
    pub fn new(
        forecasts: Arc<dyn ForecastPort>,
        clock: Arc<dyn ClockPort>,
        codes: Arc<WeatherCodeTable>,
    ) -> Self {
        Self {
            forecasts,
            clock,
            codes,
            config: ForecastServiceConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ForecastServiceConfig) -> Self {
        self.config = config;
        self
    }

    fn presenter(&self) -> ForecastPresenter {
        ForecastPresenter::new(
            Arc::clone(&self.codes),
            self.config.icon_base_url.clone(),
            self.clock.timezone(),
        )
    }

    /// Fetch and assemble the forecast for the given coordinates
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the upstream response arrived
    /// but could not be normalized. Fetch failures are not errors; they
    /// produce [`ForecastPayload::Failed`].
    #[instrument(skip(self), fields(coordinates = %coordinates))]
    pub async fn get_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<ForecastResponse, ApplicationError> {
        let now = self.clock.now();
        let today = self.clock.timezone().local_datetime(now).date();

        let forecast = match self.forecasts.fetch_forecast(&coordinates).await {
            Ok(upstream) => self.assemble(&upstream, now)?,
            Err(e) => {
                warn!(error = %e, upstream = e.is_upstream(), "Forecast fetch failed");
                ForecastPayload::fetch_failed()
            },
        };

        Ok(ForecastResponse {
            latitude: coordinates.latitude(),
            longitude: coordinates.longitude(),
            today,
            forecast,
        })
    }

    fn assemble(
        &self,
        upstream: &UpstreamForecast,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<ForecastPayload, ApplicationError> {
        let current = upstream
            .current
            .as_ref()
            .ok_or_else(|| DomainError::missing_field("current"))?;
        let hourly = upstream
            .hourly
            .as_ref()
            .ok_or_else(|| DomainError::missing_field("hourly"))?;

        let current = normalize_current(current)?;
        let window = select_hourly_window(hourly, now, self.config.hourly)?;
        debug!(
            available = hourly.len(),
            selected = window.len(),
            "Selected hourly window"
        );

        let presenter = self.presenter();
        Ok(ForecastPayload::Available {
            current: presenter.render(&current),
            hourly: presenter.render_hourly(&window),
        })
    }

    /// Context for the index page
    #[must_use]
    pub fn placeholder(&self) -> IndexContext {
        let local = self.clock.timezone().local_datetime(self.clock.now());
        IndexContext {
            today: local.date(),
            current_time: local.format("%H:%M").to_string(),
            forecast: LOADING_MESSAGE.to_string(),
            max_entries: self.config.hourly.entries,
        }
    }

    /// Whether the upstream forecast service is reachable
    pub async fn is_healthy(&self) -> bool {
        let available = self.forecasts.is_available().await;
        if !available {
            info!("Forecast upstream is not available");
        }
        available
    }
}
