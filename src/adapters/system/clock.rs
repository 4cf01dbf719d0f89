// Clock implementations: wall clock time and a fixed instant.

use crate::core::ports::Clock;
use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Used by tests and scripted sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod clock_tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_today_from_now() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 59).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[rstest]
    fn it_should_move_forward_with_the_wall_clock() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
