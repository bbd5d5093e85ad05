//! Coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair as supplied by the caller
///
/// Neither component is range-checked and either may be absent. Bad input is
/// forwarded to the upstream forecast API, which rejects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    #[serde(default)]
    latitude: Option<f64>,
    /// Longitude in degrees
    #[serde(default)]
    longitude: Option<f64>,
}

impl Coordinates {
    /// Create coordinates from both components
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Create coordinates where either component may be missing
    #[must_use]
    pub const fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(value: Option<f64>) -> String {
            value.map_or_else(|| "?".to_string(), |v| format!("{v:.6}"))
        }
        write!(f, "{}, {}", part(self.latitude), part(self.longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_both_components() {
        let coords = Coordinates::new(52.52, 13.405);
        assert_eq!(coords.latitude(), Some(52.52));
        assert_eq!(coords.longitude(), Some(13.405));
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let coords = Coordinates::new(123.0, -500.0);
        assert_eq!(coords.latitude(), Some(123.0));
        assert_eq!(coords.longitude(), Some(-500.0));
    }

    #[test]
    fn missing_component_stays_absent() {
        let coords = Coordinates::from_parts(Some(1.0), None);
        assert_eq!(coords.longitude(), None);
        assert_eq!(Coordinates::default().latitude(), None);
    }

    #[test]
    fn display_formats_missing_parts() {
        assert_eq!(
            Coordinates::new(52.52, 13.405).to_string(),
            "52.520000, 13.405000"
        );
        assert_eq!(Coordinates::from_parts(None, Some(1.5)).to_string(), "?, 1.500000");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let coords: Coordinates = serde_json::from_str(r#"{"latitude": 10.0}"#).unwrap();
        assert_eq!(coords.latitude(), Some(10.0));
        assert_eq!(coords.longitude(), None);
    }

    #[test]
    fn serializes_missing_as_null() {
        let json = serde_json::to_value(Coordinates::from_parts(None, Some(2.0))).unwrap();
        assert_eq!(json, serde_json::json!({"latitude": null, "longitude": 2.0}));
    }
}
