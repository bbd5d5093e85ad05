//! WMO weather code lookup table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::DomainError;

/// Description used when a weather code is not in the table
pub const UNDEFINED_DESCRIPTION: &str = "undefined";

const BUILTIN_TABLE: &str = include_str!("../../data/wmo_codes.json");

/// A single row of the weather code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCodeEntry {
    /// Human-readable description (e.g. "Clear sky")
    pub description: String,
    /// Icon family on the icon host (e.g. "01"), without day/night suffix
    #[serde(rename = "icon")]
    pub icon_base_name: String,
}

/// Immutable mapping from WMO weather code to description and icon
///
/// Loaded once at start-up and shared read-only between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherCodeTable {
    entries: HashMap<u8, WeatherCodeEntry>,
}

impl WeatherCodeTable {
    /// The table shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeatherCodeTable` if the embedded JSON is broken.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_TABLE)
    }

    /// Parse a table from a JSON object keyed by code:
    /// `{"0": {"description": "Clear sky", "icon": "01"}, ...}`
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeatherCodeTable` if the JSON does not have that shape
    /// or a key is not a code in `0..=255`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let entries: HashMap<u8, WeatherCodeEntry> = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidWeatherCodeTable(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Build a table from explicit entries
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (u8, WeatherCodeEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a code
    #[must_use]
    pub fn get(&self, code: u8) -> Option<&WeatherCodeEntry> {
        self.entries.get(&code)
    }

    /// Description for a code, or `"undefined"` if the code is unknown
    #[must_use]
    pub fn description(&self, code: u8) -> &str {
        self.get(code)
            .map_or(UNDEFINED_DESCRIPTION, |e| e.description.as_str())
    }

    /// Icon base name for a code, if known
    #[must_use]
    pub fn icon_base_name(&self, code: u8) -> Option<&str> {
        self.get(code).map(|e| e.icon_base_name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
