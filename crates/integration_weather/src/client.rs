//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Weather API.

use async_trait::async_trait;
use domain::fields::REQUESTED_VARIABLES;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ForecastQuery, RawForecast};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: none, the HTTP client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Weather client trait for fetching forecast data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch current conditions and the hourly series for a location
    ///
    /// Coordinates are forwarded as given. A missing component is left out
    /// of the query and the upstream decides what to do with it.
    async fn fetch_forecast(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<RawForecast, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// URL of the forecast endpoint
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Comma-joined variable list for the `current` and `hourly` parameters
    fn variables() -> String {
        REQUESTED_VARIABLES.join(",")
    }

    fn map_send_error(err: &reqwest::Error) -> WeatherError {
        if err.is_connect() || err.is_timeout() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = ?latitude, lon = ?longitude))]
    async fn fetch_forecast(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<RawForecast, WeatherError> {
        let url = self.forecast_url();
        let variables = Self::variables();
        let query = ForecastQuery {
            latitude,
            longitude,
            current: &variables,
            hourly: &variables,
        };

        debug!(url = %url, variables = %variables, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json::<RawForecast>()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        // Berlin
        self.fetch_forecast(Some(52.52), Some(13.41)).await.is_ok()
    }
}
