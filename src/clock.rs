//! Where "now" comes from.

use chrono::{Local, NaiveDate, NaiveDateTime};

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Invalid timestamp '{0}'. Expected format: YYYY-MM-DD HH:MM")]
    InvalidTimestamp(String),
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Parse `YYYY-MM-DD HH:MM`, also accepting a `T` separator and seconds.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        const FORMATS: [&str; 4] =
            ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
        let input = input.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
            .map(FixedClock)
            .ok_or_else(|| ClockError::InvalidTimestamp(input.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_fixed_clock_parse() {
        let clock = FixedClock::parse("2026-10-16 14:30").unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(clock.now().hour(), 14);

        assert!(FixedClock::parse("2026-10-16T14:30:15").is_ok());
        assert!(FixedClock::parse("tomorrow").is_err());
    }
}
