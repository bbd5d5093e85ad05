//! Wall clock adapter

use application::ports::ClockPort;
use chrono::{DateTime, Utc};
use domain::Timezone;

/// Reads the system clock; day/night and dates use the configured timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    #[must_use]
    pub const fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn timezone(&self) -> Timezone {
        self.timezone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_system_zone() {
        assert_eq!(SystemClock::default().timezone(), Timezone::System);
    }

    #[test]
    fn now_moves_forward() {
        let clock = SystemClock::new(Timezone::utc());
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
