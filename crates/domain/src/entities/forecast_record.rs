//! Forecast record entity
//!
//! One point-in-time forecast: timestamp, temperature, precipitation and
//! weather code. Built per request from raw upstream fields.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DomainError;

/// Untyped field bag as delivered by the upstream API
pub type RawFields = Map<String, Value>;

/// Upstream field names
pub mod fields {
    pub const TIME: &str = "time";
    pub const TEMPERATURE: &str = "temperature_2m";
    pub const PRECIPITATION: &str = "precipitation";
    pub const WEATHER_CODE: &str = "weather_code";

    /// Variables requested for both the current and the hourly section
    pub const REQUESTED_VARIABLES: [&str; 3] = [WEATHER_CODE, TEMPERATURE, PRECIPITATION];
}

/// A single forecast at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Forecast instant in UTC
    pub timestamp: DateTime<Utc>,
    /// Air temperature at 2m in °C
    pub temperature: f64,
    /// Precipitation in mm
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: u8,
}

impl ForecastRecord {
    /// Create a record from typed values
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        temperature: f64,
        precipitation: f64,
        weather_code: u8,
    ) -> Self {
        Self {
            timestamp,
            temperature,
            precipitation,
            weather_code,
        }
    }

    /// Build a record from a raw upstream field bag
    ///
    /// All four of `time`, `temperature_2m`, `precipitation` and
    /// `weather_code` must be present. Other fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MalformedUpstreamData` if a field is missing or has the wrong
    /// type, and `InvalidDateTime` if `time` cannot be parsed.
    pub fn from_fields(raw: &RawFields) -> Result<Self, DomainError> {
        let time = required(raw, fields::TIME)?
            .as_str()
            .ok_or_else(|| DomainError::invalid_field(fields::TIME, "string"))?;

        Ok(Self {
            timestamp: parse_upstream_timestamp(time)?,
            temperature: number(raw, fields::TEMPERATURE)?,
            precipitation: number(raw, fields::PRECIPITATION)?,
            weather_code: weather_code(required(raw, fields::WEATHER_CODE)?)?,
        })
    }

    /// ISO-8601 timestamp in UTC, e.g. `2024-01-15T13:00:00+00:00`
    #[must_use]
    pub fn iso_time(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

fn required<'a>(raw: &'a RawFields, field: &str) -> Result<&'a Value, DomainError> {
    raw.get(field).ok_or_else(|| DomainError::missing_field(field))
}

fn number(raw: &RawFields, field: &str) -> Result<f64, DomainError> {
    required(raw, field)?
        .as_f64()
        .ok_or_else(|| DomainError::invalid_field(field, "number"))
}

fn weather_code(value: &Value) -> Result<u8, DomainError> {
    value
        .as_u64()
        .and_then(|code| u8::try_from(code).ok())
        .ok_or_else(|| DomainError::invalid_field(fields::WEATHER_CODE, "weather code"))
}

/// Parse an upstream timestamp into UTC
///
/// Open-Meteo sends naive timestamps (`2024-01-15T13:00`). These are taken to
/// be UTC as-is, with no timezone conversion. Offset-carrying RFC 3339
/// timestamps are converted to UTC.
///
/// # Errors
///
/// Returns `InvalidDateTime` if no supported format matches.
pub fn parse_upstream_timestamp(s: &str) -> Result<DateTime<Utc>, DomainError> {
    // 2024-01-15T13:00
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    // With seconds
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    Err(DomainError::InvalidDateTime(format!(
        "Invalid datetime format: {s}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixture must be an object"),
        }
    }

    #[test]
    fn from_fields_reads_all_four() {
        let record = ForecastRecord::from_fields(&raw(json!({
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature_2m": 5.5,
            "precipitation": 0.2,
            "weather_code": 3
        })))
        .unwrap();

        assert_eq!(record.iso_time(), "2024-01-15T12:00:00+00:00");
        assert!((record.temperature - 5.5).abs() < f64::EPSILON);
        assert!((record.precipitation - 0.2).abs() < f64::EPSILON);
        assert_eq!(record.weather_code, 3);
    }

    #[test]
    fn from_fields_accepts_integer_temperature() {
        let record = ForecastRecord::from_fields(&raw(json!({
            "time": "2024-01-15T12:00",
            "temperature_2m": 5,
            "precipitation": 0,
            "weather_code": 0
        })))
        .unwrap();
        assert!((record.temperature - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn from_fields_missing_field_is_malformed() {
        let err = ForecastRecord::from_fields(&raw(json!({
            "time": "2024-01-15T12:00",
            "temperature_2m": 5.5,
            "weather_code": 3
        })))
        .unwrap_err();

        assert!(matches!(err, DomainError::MalformedUpstreamData(_)));
        assert!(err.to_string().contains("precipitation"));
    }

    #[test]
    fn from_fields_null_temperature_is_malformed() {
        let err = ForecastRecord::from_fields(&raw(json!({
            "time": "2024-01-15T12:00",
            "temperature_2m": null,
            "precipitation": 0.0,
            "weather_code": 3
        })))
        .unwrap_err();
        assert!(matches!(err, DomainError::MalformedUpstreamData(_)));
    }

    #[test]
    fn from_fields_out_of_range_code_is_malformed() {
        let err = ForecastRecord::from_fields(&raw(json!({
            "time": "2024-01-15T12:00",
            "temperature_2m": 1.0,
            "precipitation": 0.0,
            "weather_code": 300
        })))
        .unwrap_err();
        assert!(err.to_string().contains("weather_code"));
    }

    #[test]
    fn from_fields_bad_time_is_invalid_datetime() {
        let err = ForecastRecord::from_fields(&raw(json!({
            "time": "yesterday",
            "temperature_2m": 1.0,
            "precipitation": 0.0,
            "weather_code": 1
        })))
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidDateTime(_)));
    }

    #[test]
    fn parse_naive_is_taken_as_utc() {
        let dt = parse_upstream_timestamp("2026-02-05T14:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2026-02-05 14:00");
    }

    #[test]
    fn parse_with_seconds() {
        let dt = parse_upstream_timestamp("2026-02-05T14:00:30").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "14:00:30");
    }

    #[test]
    fn parse_rfc3339_converts_to_utc() {
        let dt = parse_upstream_timestamp("2026-02-05T14:00:00+02:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "12:00");
    }

    #[test]
    fn parse_rejects_date_only() {
        assert!(parse_upstream_timestamp("2026-02-05").is_err());
        assert!(parse_upstream_timestamp("invalid").is_err());
    }

    #[test]
    fn iso_time_has_utc_offset() {
        let record = ForecastRecord::new(
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            1.0,
            0.0,
            0,
        );
        assert_eq!(record.iso_time(), "2024-01-15T09:00:00+00:00");
    }
}
