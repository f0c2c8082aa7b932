//! Source of "today" for attendance records.

use crate::utils::date;
use chrono::NaiveDate;

pub trait Clock {
    /// Current calendar day.
    fn today(&self) -> NaiveDate;
}

/// Local wall clock of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        date::today()
    }
}

/// Always returns the same day. Useful for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
