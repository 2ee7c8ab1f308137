//! Source of "today" and "now".
//!
//! Classification depends on the current date, so every caller goes through a
//! `Clock` instead of reading the wall clock directly.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

pub trait Clock {
    /// Current calendar date in the operator's local zone.
    fn today(&self) -> NaiveDate;

    /// Current instant, used to timestamp log entries.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time. `today` is read in the local time zone at call time.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a given instant. `today` is the UTC date of that instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Clock at midnight UTC of `today`.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            now: today.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
