//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::{ForecastPort, UpstreamForecast};
use async_trait::async_trait;
use domain::{Coordinates, HourlySeries};
use integration_weather::{OpenMeteoClient, RawForecast, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the Open-Meteo forecast API
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e)
            | WeatherError::ParseError(e) => ApplicationError::ExternalService(e),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_forecast(raw: RawForecast) -> UpstreamForecast {
        UpstreamForecast {
            current: raw.current,
            hourly: raw.hourly.map(HourlySeries::from_columns),
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = ?coordinates.latitude(), lon = ?coordinates.longitude()))]
    async fn fetch_forecast(
        &self,
        coordinates: &Coordinates,
    ) -> Result<UpstreamForecast, ApplicationError> {
        let result = self
            .client
            .fetch_forecast(coordinates.latitude(), coordinates.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(raw) => {
                debug!(
                    has_current = raw.current.is_some(),
                    hourly_columns = raw.hourly.as_ref().map_or(0, |h| h.len()),
                    "Retrieved forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get forecast");
            },
        }

        result.map(Self::map_forecast)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
