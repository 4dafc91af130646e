//! Calendar date source used for counter rollover.

use chrono::{Local, NaiveDate};
use std::cell::Cell;

/// Format used for persisted calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies the current calendar date in the device timezone.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock for deterministic rollover.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    /// Moves the clock forward by `days` calendar days.
    pub fn advance_days(&self, days: u64) {
        let next = self
            .today
            .get()
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.today.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Renders `date` as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a persisted `YYYY-MM-DD` date. Returns `None` for anything else.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date, Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn date_text_round_trips_and_rejects_garbage() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid date");
        assert_eq!(format_date(date), "2026-12-31");
        assert_eq!(parse_date("2026-12-31"), Some(date));
        assert_eq!(parse_date("31.12.2026"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn fixed_clock_advances_across_month_end() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date"));
        clock.advance_days(1);
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
        );
    }
}
