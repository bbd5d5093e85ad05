//! Forecast handlers

use application::{ForecastResponse, IndexContext};
use axum::{Json, body::Bytes, extract::State};
use domain::Coordinates;
use serde::Deserialize;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Forecast request body
///
/// Both fields are optional; missing ones are echoed back as `null` and
/// left out of the upstream query.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl From<ForecastRequest> for Coordinates {
    fn from(request: ForecastRequest) -> Self {
        Self::from_parts(request.latitude, request.longitude)
    }
}

/// Placeholder context shown before the first forecast
pub async fn index(State(state): State<AppState>) -> Json<IndexContext> {
    Json(state.forecast_service.placeholder())
}

/// Forecast for the posted coordinates
///
/// The body is read as JSON whatever its `Content-Type`. Upstream failures
/// still answer 200 with `{"error": "Failed fetching."}` as the forecast.
pub async fn forecast(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ForecastResponse>, ApiError> {
    let request: ForecastRequest = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?;
    debug!(latitude = ?request.latitude, longitude = ?request.longitude, "Forecast requested");

    let response = state
        .forecast_service
        .get_forecast(request.into())
        .await?;

    Ok(Json(response))
}
