//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod forecast_adapter;
mod system_clock;
mod weather_codes;

pub use forecast_adapter::ForecastAdapter;
pub use system_clock::SystemClock;
pub use weather_codes::load_weather_codes;
