//! Query date resolution.
//!
//! The Nexon Open API only guarantees stable per-character data for days that
//! have fully elapsed, so every search asks for yesterday's snapshot.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar day rendered as `YYYY-MM-DD` in query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateStamp(NaiveDate);

impl DateStamp {
    /// Wraps an explicit calendar day.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the day before today's local wall-clock date.
    #[must_use]
    pub fn yesterday() -> Self {
        Self::day_before(local_today())
    }

    /// Returns the day before `today`.
    ///
    /// Month, year and leap-day rollover all come from chrono's calendar
    /// arithmetic. The only date without a predecessor is chrono's minimum
    /// representable day, which is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use maplestat::domain::DateStamp;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// assert_eq!(DateStamp::day_before(today).to_string(), "2024-02-29");
    /// ```
    #[must_use]
    pub fn day_before(today: NaiveDate) -> Self {
        Self(today.pred_opt().unwrap_or(today))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

/// Today's date in the local time zone.
#[must_use]
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
