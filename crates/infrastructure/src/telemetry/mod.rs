//! Logging initialization
//!
//! Sets up the `tracing` subscriber for the server binary.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
