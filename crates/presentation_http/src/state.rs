//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast use case
    pub forecast_service: Arc<ForecastService>,
}

impl AppState {
    #[must_use]
    pub fn new(forecast_service: ForecastService) -> Self {
        Self {
            forecast_service: Arc::new(forecast_service),
        }
    }
}
