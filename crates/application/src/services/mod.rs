//! Application services - Use case implementations

mod forecast_normalizer;
mod forecast_presenter;
mod forecast_service;

pub use forecast_normalizer::{
    DEFAULT_HOURLY_ENTRIES, HourlyOverflow, HourlyWindowConfig, find_start_index,
    normalize_current, select_hourly_window,
};
pub use forecast_presenter::{
    DEFAULT_ICON_BASE_URL, ForecastPresenter, HourlyForecasts, RenderedForecast,
};
pub use forecast_service::{
    FETCH_FAILED_MESSAGE, ForecastPayload, ForecastResponse, ForecastService,
    ForecastServiceConfig, IndexContext, LOADING_MESSAGE,
};
