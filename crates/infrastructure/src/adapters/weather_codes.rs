//! Weather code table loading

use std::path::Path;

use application::error::ApplicationError;
use domain::WeatherCodeTable;
use tracing::info;

/// Load the weather code table from `path`, or the built-in table if unset
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the file cannot be read or
/// is not a valid table.
pub fn load_weather_codes(path: Option<&Path>) -> Result<WeatherCodeTable, ApplicationError> {
    let table = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                ApplicationError::Configuration(format!(
                    "Cannot read weather codes from {}: {e}",
                    path.display()
                ))
            })?;
            WeatherCodeTable::from_json(&json)
        },
        None => WeatherCodeTable::builtin(),
    }
    .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    info!(
        codes = table.len(),
        source = %path.map_or_else(|| "builtin".into(), |p| p.display().to_string()),
        "Loaded weather code table"
    );
    Ok(table)
}
