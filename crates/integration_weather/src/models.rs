//! Weather data models
//!
//! Types for the parts of the Open-Meteo forecast response this crate reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw forecast body as returned by Open-Meteo
///
/// `current` maps variable name to a scalar. `hourly` maps variable name to
/// an array aligned by index with `hourly.time`. Either section may be absent
/// if the upstream omitted it; shape validation happens downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawForecast {
    /// Current conditions
    #[serde(default)]
    pub current: Option<Map<String, Value>>,
    /// Hourly columns
    #[serde(default)]
    pub hourly: Option<BTreeMap<String, Vec<Value>>>,
}

/// Query string sent to the `/forecast` endpoint
#[derive(Debug, Serialize)]
pub(crate) struct ForecastQuery<'a> {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub current: &'a str,
    pub hourly: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_forecast_ignores_envelope_fields() {
        let raw: RawForecast = serde_json::from_value(json!({
            "latitude": 52.52,
            "longitude": 13.42,
            "timezone": "GMT",
            "current": {"time": "2024-01-15T12:00", "weather_code": 3},
            "hourly": {"time": ["2024-01-15T00:00"], "weather_code": [3]}
        }))
        .unwrap();

        assert_eq!(raw.current.unwrap()["weather_code"], json!(3));
        assert_eq!(raw.hourly.unwrap()["time"].len(), 1);
    }

    #[test]
    fn raw_forecast_tolerates_missing_sections() {
        let raw: RawForecast = serde_json::from_value(json!({"latitude": 1.0})).unwrap();
        assert!(raw.current.is_none());
        assert!(raw.hourly.is_none());
    }

    #[test]
    fn hourly_may_contain_nulls() {
        let raw: RawForecast = serde_json::from_value(json!({
            "hourly": {"precipitation": [0.0, null]}
        }))
        .unwrap();
        assert_eq!(raw.hourly.unwrap()["precipitation"][1], Value::Null);
    }
}
