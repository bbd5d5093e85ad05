//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and wires up
//! configuration and logging for the server binary.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig, WeatherAppConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
