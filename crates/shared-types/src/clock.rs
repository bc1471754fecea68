//! # Clock Port
//!
//! Source of the issuance date. Both the register's `Date of Issue` and the
//! exam schedule are computed from the same reading, so a request never
//! straddles midnight inconsistently.

use chrono::NaiveDate;

/// Abstract interface for the current calendar date (for testability).
pub trait Clock: Send + Sync {
    /// Today's date in the issuing office's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Default clock using the local system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
