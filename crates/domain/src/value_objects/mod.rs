//! Value Objects - Immutable, identity-less domain primitives

mod coordinates;
mod day_period;
mod timezone;
mod weather_code;

pub use coordinates::Coordinates;
pub use day_period::DayPeriod;
pub use timezone::Timezone;
pub use weather_code::{UNDEFINED_DESCRIPTION, WeatherCodeEntry, WeatherCodeTable};
