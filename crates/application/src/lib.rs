//! Application layer - Use cases and orchestration
//!
//! Turns a raw upstream forecast into the compact summary shown to clients:
//! hourly window selection, weather-code lookup, day/night icons and
//! response assembly. Talks to the outside world only through ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
