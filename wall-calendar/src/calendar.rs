use std::cell::OnceCell;

use date_cursor::{Clock, DatePattern, Locale, SystemClock};

use crate::entries::{DatedEntry, EntryBook};
use crate::error::Result;
use crate::first_weekday::FirstWeekday;
use crate::grid::{CalendarSheet, GridBuilder};
use crate::range::{DateRange, IntoDate};
use crate::weekdays::{WeekdayFormat, WeekdayLabels};

/// Default class given to entries by [`Calendar::add_holidays`].
pub const HOLIDAY_CLASS: &str = "holiday";

const DEFAULT_DAY_FORMAT: &str = "%#d";
const DEFAULT_MONTH_FORMAT: &str = "%B";
const DEFAULT_YEAR_FORMAT: &str = "%Y";

/// A range of days and the settings used to render them.
///
/// ```
/// use wall_calendar::{Calendar, DatedEntry, FirstWeekday};
///
/// let sheet = Calendar::span("2016-03-28", "2016-04-04")?
///     .with_first_weekday(FirstWeekday::for_country("US"))
///     .with_weekday_format(["M", "T", "W", "T", "F", "S", "S"])
///     .add_holidays([DatedEntry::parse("2016-04-01")?.with_title("Foo")])
///     .build()?;
///
/// assert_eq!(sheet.days().count(), 7);
/// assert_eq!(sheet.weekdays.keys().next(), Some("sun"));
/// # Ok::<(), wall_calendar::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Calendar {
    range: DateRange,
    first_weekday: FirstWeekday,
    locale: Locale,
    day_format: String,
    month_format: String,
    year_format: String,
    weekday_format: WeekdayFormat,
    entries: EntryBook,
    /// Lazily built from first weekday, weekday format and locale
    weekdays: OnceCell<WeekdayLabels>,
}

impl Calendar {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            first_weekday: FirstWeekday::default(),
            locale: Locale::en_US,
            day_format: DEFAULT_DAY_FORMAT.to_string(),
            month_format: DEFAULT_MONTH_FORMAT.to_string(),
            year_format: DEFAULT_YEAR_FORMAT.to_string(),
            weekday_format: WeekdayFormat::default(),
            entries: EntryBook::default(),
            weekdays: OnceCell::new(),
        }
    }

    /// Calendar for all days from `from`, until the day before `till`.
    pub fn span(from: impl IntoDate, till: impl IntoDate) -> Result<Self> {
        Ok(Self::new(DateRange::span(from, till)?))
    }

    /// Calendar for a given year, or the current year if omitted.
    pub fn for_year(year: Option<i32>) -> Result<Self> {
        Self::for_year_on(&SystemClock, year)
    }

    /// Calendar for a given month, or the current month if omitted.
    pub fn for_month(month: Option<u32>, year: Option<i32>) -> Result<Self> {
        Self::for_months_on(&SystemClock, 1, month, year)
    }

    /// Calendar for `|count|` months following (if positive) or preceding (if
    /// negative) a given month, including this month.
    pub fn for_months(count: i32, month: Option<u32>, year: Option<i32>) -> Result<Self> {
        Self::for_months_on(&SystemClock, count, month, year)
    }

    /// Same as [`Calendar::for_year`], reading current date from `clock`.
    pub fn for_year_on(clock: &impl Clock, year: Option<i32>) -> Result<Self> {
        Ok(Self::new(DateRange::for_year(clock, year)?))
    }

    /// Same as [`Calendar::for_months`], reading current date from `clock`.
    pub fn for_months_on(
        clock: &impl Clock,
        count: i32,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Self> {
        Ok(Self::new(DateRange::for_months(clock, count, month, year)?))
    }

    // --
    // -- Builder Methods
    // --

    /// Format of day labels, for example `%d` or `%#d`.
    pub fn with_day_format(self, format: impl Into<String>) -> Self {
        Self { day_format: format.into(), ..self }
    }

    /// Format of month labels, for example `%b`, `%B` or `%m`, possibly
    /// combined with `%Y` or `%y`.
    pub fn with_month_format(self, format: impl Into<String>) -> Self {
        Self { month_format: format.into(), ..self }
    }

    /// Format of year labels, for example `%Y`, `%y` or an empty string.
    pub fn with_year_format(self, format: impl Into<String>) -> Self {
        Self { year_format: format.into(), ..self }
    }

    /// Format of weekday labels: either a pattern such as `%a` or `%A`, or
    /// seven labels starting with monday.
    pub fn with_weekday_format(self, format: impl Into<WeekdayFormat>) -> Self {
        Self {
            weekday_format: format.into(),
            weekdays: OnceCell::new(),
            ..self
        }
    }

    /// Weekday displayed in the first column of each week.
    pub fn with_first_weekday(self, first_weekday: impl Into<FirstWeekday>) -> Self {
        Self {
            first_weekday: first_weekday.into(),
            weekdays: OnceCell::new(),
            ..self
        }
    }

    /// Language used to render the names of months and weekdays.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, weekdays: OnceCell::new(), ..self }
    }

    /// Attach entries to their days, all tagged with given class.
    pub fn add_entries(
        mut self,
        entries: impl IntoIterator<Item = DatedEntry>,
        class: &str,
    ) -> Self {
        for entry in entries {
            self.entries.insert(&entry, class);
        }

        self
    }

    /// Attach entries to their days, tagged with the class `"holiday"`.
    pub fn add_holidays(self, entries: impl IntoIterator<Item = DatedEntry>) -> Self {
        self.add_entries(entries, HOLIDAY_CLASS)
    }

    // --
    // -- Getters
    // --

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn first_weekday(&self) -> FirstWeekday {
        self.first_weekday
    }

    pub fn entries(&self) -> &EntryBook {
        &self.entries
    }

    /// Labels of the weekday header, which are only rendered again after a
    /// change to the first weekday, the weekday format or the locale.
    pub fn weekdays(&self) -> Result<&WeekdayLabels> {
        if let Some(labels) = self.weekdays.get() {
            return Ok(labels);
        }

        let labels = WeekdayLabels::build(self.first_weekday, &self.weekday_format, self.locale)?;
        Ok(self.weekdays.get_or_init(|| labels))
    }

    /// Build the full structure of the calendar.
    pub fn build(&self) -> Result<CalendarSheet> {
        let weekdays = self.weekdays()?.clone();

        let builder = GridBuilder {
            first_weekday: self.first_weekday,
            locale: self.locale,
            day_format: DatePattern::new(&self.day_format)?,
            month_format: DatePattern::new(&self.month_format)?,
            year_format: DatePattern::new(&self.year_format)?,
            entries: &self.entries,
        };

        let years = builder.build(&self.range)?;

        #[cfg(feature = "log")]
        log::trace!(
            "Built calendar with {} years from {} till {}",
            years.len(),
            self.range.from,
            self.range.till,
        );

        Ok(CalendarSheet { weekdays, years })
    }
}
