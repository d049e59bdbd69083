//! Time source for file stamps, listings and the `date`/`time` commands.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Where the namespace gets "now" from.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant. Used by tests and reproducible sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Build from calendar fields, `None` if they do not form a valid time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// `MM/DD/YY`, as shown in directory listings.
pub fn dos_date(at: &NaiveDateTime) -> String {
    at.format("%m/%d/%y").to_string()
}

/// `HH:MM`, as shown in directory listings.
pub fn dos_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dos_formats_pad_fields() {
        let clock = FixedClock::at(2024, 3, 7, 9, 5).unwrap();
        assert_eq!(dos_date(&clock.now()), "03/07/24");
        assert_eq!(dos_time(&clock.now()), "09:05");
    }

    #[test]
    fn invalid_calendar_fields() {
        assert!(FixedClock::at(2024, 2, 30, 0, 0).is_none());
        assert!(FixedClock::at(2024, 1, 1, 24, 0).is_none());
    }
}
