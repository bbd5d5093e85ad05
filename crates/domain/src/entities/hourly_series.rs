//! Hourly forecast series
//!
//! Upstream hourly data arrives column-wise: one array per variable, all
//! aligned by index with the `time` array.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::forecast_record::{ForecastRecord, RawFields, fields, parse_upstream_timestamp};
use crate::errors::DomainError;

/// Parallel hourly columns keyed by variable name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlySeries {
    columns: BTreeMap<String, Vec<Value>>,
}

impl HourlySeries {
    /// Create a series from its columns
    #[must_use]
    pub fn from_columns(columns: BTreeMap<String, Vec<Value>>) -> Self {
        Self { columns }
    }

    /// Number of hours, taken from the `time` column
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.get(fields::TIME).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse the `time` column in order
    ///
    /// # Errors
    ///
    /// Returns `MalformedUpstreamData` if there is no `time` column or an
    /// entry is not a string, `InvalidDateTime` if an entry cannot be parsed.
    pub fn times(&self) -> Result<Vec<DateTime<Utc>>, DomainError> {
        self.columns
            .get(fields::TIME)
            .ok_or_else(|| DomainError::missing_field(fields::TIME))?
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .ok_or_else(|| DomainError::invalid_field(fields::TIME, "string"))
                    .and_then(parse_upstream_timestamp)
            })
            .collect()
    }

    /// Collect the values of every column at `index` into a field bag
    ///
    /// # Errors
    ///
    /// Returns `MalformedUpstreamData` if any column is shorter than `index`.
    pub fn row(&self, index: usize) -> Result<RawFields, DomainError> {
        self.columns
            .iter()
            .map(|(name, column)| {
                column
                    .get(index)
                    .cloned()
                    .map(|value| (name.clone(), value))
                    .ok_or_else(|| {
                        DomainError::MalformedUpstreamData(format!(
                            "column `{name}` has no entry at index {index}"
                        ))
                    })
            })
            .collect()
    }

    /// Build the forecast record at `index`
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::row`] and [`ForecastRecord::from_fields`].
    pub fn record_at(&self, index: usize) -> Result<ForecastRecord, DomainError> {
        ForecastRecord::from_fields(&self.row(index)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> HourlySeries {
        serde_json::from_value(json!({
            "time": ["2024-01-15T00:00", "2024-01-15T01:00", "2024-01-15T02:00"],
            "temperature_2m": [1.0, 1.5, 2.0],
            "precipitation": [0.0, 0.1, 0.0],
            "weather_code": [0, 61, 3]
        }))
        .unwrap()
    }

    #[test]
    fn len_follows_time_column() {
        assert_eq!(series().len(), 3);
        assert!(HourlySeries::default().is_empty());
    }

    #[test]
    fn times_are_parsed_in_order() {
        let times = series().times().unwrap();
        assert_eq!(times.len(), 3);
        assert!(times.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn times_without_time_column_is_malformed() {
        let series = HourlySeries::from_columns(BTreeMap::from([(
            "temperature_2m".to_string(),
            vec![json!(1.0)],
        )]));
        assert!(matches!(
            series.times(),
            Err(DomainError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn record_at_reads_aligned_values() {
        let record = series().record_at(1).unwrap();
        assert_eq!(record.iso_time(), "2024-01-15T01:00:00+00:00");
        assert_eq!(record.weather_code, 61);
        assert!((record.precipitation - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn row_past_end_is_malformed() {
        let err = series().row(3).unwrap_err();
        assert!(matches!(err, DomainError::MalformedUpstreamData(_)));
    }

    #[test]
    fn short_column_is_malformed() {
        let series: HourlySeries = serde_json::from_value(json!({
            "time": ["2024-01-15T00:00", "2024-01-15T01:00"],
            "temperature_2m": [1.0],
            "precipitation": [0.0, 0.0],
            "weather_code": [0, 0]
        }))
        .unwrap();
        assert!(series.record_at(0).is_ok());
        assert!(series.record_at(1).is_err());
    }
}
