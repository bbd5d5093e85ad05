//! Domain entities

mod forecast_record;
mod hourly_series;

pub use forecast_record::{ForecastRecord, RawFields, fields, parse_upstream_timestamp};
pub use hourly_series::HourlySeries;
