use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::tasks::error::TaskError;

/// Format of every date the validator compares.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for deadline checks.
///
/// The validator never reads the system time directly; it asks its clock.
/// Tests pin the date with [`FixedClock`].
pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;

    /// Returns the current date as a zero-padded `YYYY-MM-DD` string.
    fn today_iso(&self) -> String {
        self.today().format(ISO_DATE_FORMAT).to_string()
    }
}

/// Reads the UTC calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock pinned to `date`.
    pub fn new(date: NaiveDate) -> Self {
        FixedClock(date)
    }

    /// Creates a clock pinned to a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidDate`] if `date` is not a valid calendar date
    /// in `YYYY-MM-DD` form.
    ///
    /// # Examples
    /// ```rust
    /// use todo_form::tasks::clock::{Clock, FixedClock};
    ///
    /// let clock = FixedClock::from_iso("2026-10-19").unwrap();
    /// assert_eq!(clock.today_iso(), "2026-10-19");
    ///
    /// assert!(FixedClock::from_iso("19/10/2026").is_err());
    /// ```
    pub fn from_iso(date: &str) -> Result<Self, TaskError> {
        NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
            .map(FixedClock)
            .map_err(|e| TaskError::InvalidDate(format!("'{date}': {e}")))
    }

    /// The pinned date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
