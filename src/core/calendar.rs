//! Calendar math on UTC timestamps
//!
//! Used by date-range queries and by the list card formatting.

use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Granularity for [`DateExt::is_same`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Year,
    Month,
    Day,
}

/// Calendar helpers for [`DateTime<Utc>`]
pub trait DateExt: Sized {
    /// Midnight at the start of the day
    fn start_of_day(&self) -> Self;

    /// Last whole second of the day (23:59:59)
    fn end_of_day(&self) -> Self;

    /// Midnight on the first day of the month
    fn first_day_of_month(&self) -> Self;

    /// Add days first, then months. Month arithmetic clamps to the last
    /// valid day (Jan 31 + 1 month = Feb 28/29).
    fn adding(&self, days: i64, months: i32) -> Self;

    fn subtracting(&self, days: i64) -> Self {
        self.adding(-days, 0)
    }

    fn is_weekend(&self) -> bool;

    /// Day of week with Monday = 0 … Sunday = 6
    fn weekday_index(&self) -> u32;

    fn is_same(&self, other: &Self, granularity: Granularity) -> bool;

    /// Every day of this timestamp's month, each at midnight
    fn month_days(&self) -> Vec<Self>;

    /// Abbreviated day name, e.g. "Tue"
    fn day_name(&self) -> String;

    /// Full day name, e.g. "Tuesday"
    fn full_day_name(&self) -> String;

    /// Abbreviated month name, e.g. "Jan"
    fn month_name(&self) -> String;

    /// Full month name, e.g. "January"
    fn full_month_name(&self) -> String;
}

impl DateExt for DateTime<Utc> {
    fn start_of_day(&self) -> Self {
        self.date_naive().and_time(NaiveTime::MIN).and_utc()
    }

    fn end_of_day(&self) -> Self {
        self.start_of_day() + Duration::days(1) - Duration::seconds(1)
    }

    fn first_day_of_month(&self) -> Self {
        Utc.with_ymd_and_hms(self.year(), self.month(), 1, 0, 0, 0)
            .single()
            .unwrap_or_else(|| self.start_of_day())
    }

    fn adding(&self, days: i64, months: i32) -> Self {
        let shifted = self
            .checked_add_signed(Duration::days(days))
            .unwrap_or(*self);
        let delta = Months::new(months.unsigned_abs());
        let moved = if months >= 0 {
            shifted.checked_add_months(delta)
        } else {
            shifted.checked_sub_months(delta)
        };
        moved.unwrap_or(shifted)
    }

    fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn weekday_index(&self) -> u32 {
        self.weekday().num_days_from_monday()
    }

    fn is_same(&self, other: &Self, granularity: Granularity) -> bool {
        let same_year = self.year() == other.year();
        match granularity {
            Granularity::Year => same_year,
            Granularity::Month => same_year && self.month() == other.month(),
            Granularity::Day => self.date_naive() == other.date_naive(),
        }
    }

    fn month_days(&self) -> Vec<Self> {
        let first = self.first_day_of_month();
        let month = first.month();
        std::iter::successors(Some(first), |day| Some(*day + Duration::days(1)))
            .take_while(|day| day.month() == month)
            .collect()
    }

    fn day_name(&self) -> String {
        self.format("%a").to_string()
    }

    fn full_day_name(&self) -> String {
        self.format("%A").to_string()
    }

    fn month_name(&self) -> String {
        self.format("%b").to_string()
    }

    fn full_month_name(&self) -> String {
        self.format("%B").to_string()
    }
}

/// Inclusive range of placement times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The whole calendar day containing `date`
    pub fn day(date: DateTime<Utc>) -> Self {
        Self::new(date.start_of_day(), date.end_of_day())
    }

    /// The whole calendar month containing `date`
    pub fn month(date: DateTime<Utc>) -> Self {
        let start = date.first_day_of_month();
        let end = start.adding(0, 1) - Duration::seconds(1);
        Self::new(start, end)
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        self.start <= *date && *date <= self.end
    }
}
