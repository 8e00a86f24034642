//! Spans of days covered by a calendar.

use chrono::{Datelike, NaiveDate};
use date_cursor::{Clock, DateCursor};

use crate::error::Result;

/// Anything that can be interpreted as a calendar day: chrono dates, cursors
/// or strings of the form `YYYY-MM-DD`.
pub trait IntoDate {
    fn into_date(self) -> Result<NaiveDate>;
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self)
    }
}

impl IntoDate for DateCursor {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(self.date())
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<NaiveDate> {
        Ok(DateCursor::parse(self)?.date())
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<NaiveDate> {
        self.as_str().into_date()
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<NaiveDate> {
        self.as_str().into_date()
    }
}

/// A span of days, including `from` and excluding `till`.
///
/// A range where `till` doesn't come after `from` is empty.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub till: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, till: NaiveDate) -> Self {
        Self { from, till }
    }

    /// Build a range from any pair of date-like values.
    ///
    /// ```
    /// use wall_calendar::DateRange;
    ///
    /// let range = DateRange::span("2016-02-28", "2016-03-02").unwrap();
    /// assert_eq!(range.len(), 3);
    /// assert!(DateRange::span("2016-02-30", "2016-03-02").is_err());
    /// ```
    pub fn span(from: impl IntoDate, till: impl IntoDate) -> Result<Self> {
        Ok(Self::new(from.into_date()?, till.into_date()?))
    }

    /// The range covering a full year, the current year of the clock if
    /// omitted.
    pub fn for_year(clock: &impl Clock, year: Option<i32>) -> Result<Self> {
        let year = year.unwrap_or_else(|| clock.today().year());
        let from = DateCursor::from_ymd(year, 1, 1)?;
        let mut till = from.copy();
        till.add_years(1)?;
        Ok(Self::new(from.date(), till.date()))
    }

    /// The range covering a full month, the current month of the clock if
    /// omitted.
    pub fn for_month(clock: &impl Clock, month: Option<u32>, year: Option<i32>) -> Result<Self> {
        Self::for_months(clock, 1, month, year)
    }

    /// The range covering `|count|` full months including the anchor month:
    /// the following months if `count` is positive and the previous ones if
    /// it is negative.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wall_calendar::{DateRange, FixedClock};
    ///
    /// let clock = FixedClock(NaiveDate::from_ymd_opt(2016, 4, 18).unwrap());
    ///
    /// assert_eq!(
    ///     DateRange::for_months(&clock, -3, None, None).unwrap(),
    ///     DateRange::span("2016-02-01", "2016-05-01").unwrap(),
    /// );
    ///
    /// assert_eq!(
    ///     DateRange::for_months(&clock, 2, Some(12), Some(2015)).unwrap(),
    ///     DateRange::span("2015-12-01", "2016-02-01").unwrap(),
    /// );
    /// ```
    pub fn for_months(
        clock: &impl Clock,
        count: i32,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Self> {
        let today = clock.today();
        let year = year.unwrap_or(today.year());
        let month = month.unwrap_or(today.month());

        let mut from = DateCursor::from_ymd(year, month, 1)?;
        let mut till = from.copy();
        till.add_months(1)?;

        let extra = i32::try_from(count.unsigned_abs().saturating_sub(1))
            .map_err(|_| date_cursor::Error::OutOfRange)?;

        if count > 0 {
            till.add_months(extra)?;
        } else if count < 0 {
            from.add_months(-extra)?;
        }

        Ok(Self::new(from.date(), till.date()))
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.till
    }

    /// Number of days in this range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        (self.till - self.from)
            .num_days()
            .try_into()
            .expect("time not monotonic while comparing dates")
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date < self.till
    }

    /// Iterate over the days of this range.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let till = self.till;
        self.from.iter_days().take_while(move |day| *day < till)
    }
}
