//! Domain layer for hourcast
//!
//! Contains the forecast records, the weather-code lookup table, the day/night
//! rule and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
