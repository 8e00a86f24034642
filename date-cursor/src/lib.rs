#![doc = include_str!("../README.md")]

mod clock;
mod error;
mod pattern;
mod utils;

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};

pub use chrono::Locale;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::{Error, Result};
pub use crate::pattern::DatePattern;

/// Lowercase three-letter key of a weekday, as used to index weekday labels.
///
/// ```
/// use chrono::Weekday;
/// use date_cursor::weekday_key;
///
/// assert_eq!(weekday_key(Weekday::Mon), "mon");
/// assert_eq!(weekday_key(Weekday::Sun), "sun");
/// ```
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

/// A calendar day which can be moved around by a number of days, months or
/// years.
///
/// Moving methods update the cursor in place and return it back so that they
/// can be chained. A cursor is never left in an invalid state: if an
/// operation fails, the cursor keeps its previous value.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateCursor(NaiveDate);

impl DateCursor {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a cursor from its components.
    ///
    /// ```
    /// use date_cursor::DateCursor;
    ///
    /// assert!(DateCursor::from_ymd(2016, 2, 29).is_ok());
    /// assert!(DateCursor::from_ymd(2015, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| Error::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a date of the form `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| Error::InvalidDate(raw.to_string()))
    }

    /// Current day according to given clock.
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.today())
    }

    /// Build a cursor from optional components, missing ones are taken from
    /// the current date of the clock.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_cursor::{DateCursor, FixedClock};
    ///
    /// let clock = FixedClock(NaiveDate::from_ymd_opt(2016, 4, 18).unwrap());
    /// let day = DateCursor::create(&clock, Some(1), None, None).unwrap();
    /// assert_eq!(day.to_string(), "2016-04-01");
    /// ```
    pub fn create(
        clock: &impl Clock,
        day: Option<u32>,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Self> {
        let today = clock.today();

        Self::from_ymd(
            year.unwrap_or(today.year()),
            month.unwrap_or(today.month()),
            day.unwrap_or(today.day()),
        )
    }

    /// First day of the current year, shifted by `delta` years.
    pub fn first_of_year(clock: &impl Clock, delta: i32) -> Result<Self> {
        let mut res = Self::from_ymd(clock.today().year(), 1, 1)?;
        res.add_years(delta)?;
        Ok(res)
    }

    /// First day of the current month, shifted by `delta` months.
    pub fn first_of_month(clock: &impl Clock, delta: i32) -> Result<Self> {
        let today = clock.today();
        let mut res = Self::from_ymd(today.year(), today.month(), 1)?;
        res.add_months(delta)?;
        Ok(res)
    }

    /// Easter sunday of given year in the Gregorian calendar.
    ///
    /// ```
    /// use date_cursor::DateCursor;
    ///
    /// assert_eq!(DateCursor::easter(2016).unwrap().to_string(), "2016-03-27");
    /// ```
    pub fn easter(year: i32) -> Result<Self> {
        utils::easter(year).map(Self).ok_or(Error::OutOfRange)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Get an independent copy of this cursor.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Move by a signed amount of days.
    pub fn add_days(&mut self, days: i64) -> Result<&mut Self> {
        let delta = Days::new(days.unsigned_abs());

        let res = if days >= 0 {
            self.0.checked_add_days(delta)
        } else {
            self.0.checked_sub_days(delta)
        };

        self.0 = res.ok_or(Error::OutOfRange)?;
        Ok(self)
    }

    /// Move by a signed amount of months, the day is clamped to the length of
    /// the target month.
    ///
    /// ```
    /// use date_cursor::DateCursor;
    ///
    /// let mut day: DateCursor = "2016-01-31".parse().unwrap();
    /// day.add_months(1).unwrap();
    /// assert_eq!(day.to_string(), "2016-02-29");
    /// ```
    pub fn add_months(&mut self, months: i32) -> Result<&mut Self> {
        let delta = Months::new(months.unsigned_abs());

        let res = if months >= 0 {
            self.0.checked_add_months(delta)
        } else {
            self.0.checked_sub_months(delta)
        };

        self.0 = res.ok_or(Error::OutOfRange)?;
        Ok(self)
    }

    /// Move by a signed amount of years, February 29th becomes February 28th
    /// on non-leap years.
    pub fn add_years(&mut self, years: i32) -> Result<&mut Self> {
        let months = years.checked_mul(12).ok_or(Error::OutOfRange)?;
        self.add_months(months)
    }

    /// Move week-ends to a workday: sundays always become the next monday,
    /// saturdays become the next monday if `next` is set or the previous
    /// friday otherwise.
    pub fn force_workday(&mut self, next: bool) -> Result<&mut Self> {
        match self.0.weekday() {
            Weekday::Sun => self.add_days(1),
            Weekday::Sat if next => self.add_days(2),
            Weekday::Sat => self.add_days(-1),
            _ => Ok(self),
        }
    }

    pub fn days_in_month(&self) -> u32 {
        utils::count_days_in_month(self.0)
    }

    pub fn is_last_of_month(&self) -> bool {
        self.0.day() == self.days_in_month()
    }

    /// ISO weekday, from 1 for monday to 7 for sunday.
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn weekday_key(&self) -> &'static str {
        weekday_key(self.0.weekday())
    }

    /// ISO week-based year and week number.
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.0.iso_week();
        (week.year(), week.week())
    }

    /// Render this day with a strftime-like pattern, see [`DatePattern`] for
    /// the supported syntax.
    ///
    /// ```
    /// use date_cursor::{DateCursor, Locale};
    ///
    /// let day: DateCursor = "2016-04-01".parse().unwrap();
    /// assert_eq!(day.format_localized("%a %#d", Locale::en_US).unwrap(), "Fri 1");
    /// assert_eq!(day.format_localized("%A", Locale::fr_FR).unwrap(), "vendredi");
    /// ```
    pub fn format_localized(&self, format: &str, locale: Locale) -> Result<String> {
        let pattern = DatePattern::new(format)?;
        Ok(self.format_pattern(&pattern, locale))
    }

    /// Render this day with a pattern that was already validated.
    pub fn format_pattern(&self, pattern: &DatePattern, locale: Locale) -> String {
        self.0
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern.chrono_format(), locale)
            .to_string()
    }
}

impl From<NaiveDate> for DateCursor {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateCursor> for NaiveDate {
    fn from(cursor: DateCursor) -> Self {
        cursor.0
    }
}

impl FromStr for DateCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DateCursor {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for DateCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl fmt::Debug for DateCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateCursor({self})")
    }
}
