//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Forecast page: placeholder on GET, forecast on POST
        .route(
            "/",
            get(handlers::forecast::index).post(handlers::forecast::forecast),
        )
        // Attach state
        .with_state(state)
}
