//! Forecast fetcher port
//!
//! Defines the interface for retrieving the raw upstream forecast.

use async_trait::async_trait;
use domain::{Coordinates, HourlySeries, RawFields};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Raw forecast as delivered by the upstream API
///
/// Sections are optional because the upstream may omit them; the
/// normalizer reports a missing section as malformed data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpstreamForecast {
    /// Current conditions, one value per variable
    pub current: Option<RawFields>,
    /// Hourly columns aligned by index
    pub hourly: Option<HourlySeries>,
}

/// Port for fetching forecasts from the upstream weather service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch current conditions and the hourly series for the coordinates
    ///
    /// Any failure to obtain a usable response (transport error, non-2xx
    /// status, undecodable body) is reported as an error.
    async fn fetch_forecast(
        &self,
        coordinates: &Coordinates,
    ) -> Result<UpstreamForecast, ApplicationError>;

    /// Check if the upstream service is reachable
    async fn is_available(&self) -> bool;
}
