//! Split a range of days into years, months, weeks and days.
//!
//! The output nodes serialize into a sparse tree: empty labels, empty entry
//! lists, zero `leading` and missing `following` are left out.

use std::mem::take;

use chrono::Datelike;
use date_cursor::{DateCursor, DatePattern, Locale};

use crate::entries::{Entry, EntryBook};
use crate::error::Result;
use crate::first_weekday::FirstWeekday;
use crate::range::DateRange;
use crate::weekdays::WeekdayLabels;

#[cfg(feature = "serde")]
fn is_zero(value: &u8) -> bool {
    *value == 0
}

/// The whole structure of a calendar, ready to be rendered.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalendarSheet {
    /// Header labels, in column order
    pub weekdays: WeekdayLabels,
    pub years: Vec<YearNode>,
}

impl CalendarSheet {
    pub fn months(&self) -> impl Iterator<Item = &MonthNode> {
        self.years.iter().flat_map(|year| &year.months)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &WeekNode> {
        self.months().flat_map(|month| &month.weeks)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayNode> {
        self.weeks().flat_map(|week| &week.days)
    }
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearNode {
    /// The year number
    pub time: i32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub label: String,
    pub months: Vec<MonthNode>,
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthNode {
    /// Formatted as `YYYY-MM`
    pub time: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub label: String,
    /// Formatted as `MM`
    pub month: String,
    pub weeks: Vec<WeekNode>,
}

/// A row of the calendar.
///
/// A week is cut at the bounds of its month and of the rendered range, so it
/// may have less than 7 days. The cells left blank are counted by `leading`
/// and `following`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeekNode {
    /// ISO week formatted as `YYYY-Www`, only for weeks starting on monday
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub time: Option<String>,
    /// ISO week number formatted as `ww`, only for weeks starting on monday
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// Number of blank cells before the first day
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero"))]
    pub leading: u8,
    /// Number of blank cells after the last day
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub following: Option<u8>,
    pub days: Vec<DayNode>,
}

impl WeekNode {
    /// Number of cells of the row, blank or not.
    pub fn width(&self) -> usize {
        usize::from(self.leading) + self.days.len() + usize::from(self.following.unwrap_or(0))
    }
}

#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayNode {
    /// Formatted as `YYYY-MM-DD`
    pub time: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub label: String,
    /// Actual weekday of this day (`"mon"`, `"tue"`, ...)
    pub weekday: &'static str,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub entries: Vec<Entry>,
}

/// Walks a range of days and groups them into nodes.
#[derive(Clone, Debug)]
pub struct GridBuilder<'a> {
    pub first_weekday: FirstWeekday,
    pub locale: Locale,
    pub day_format: DatePattern,
    pub month_format: DatePattern,
    pub year_format: DatePattern,
    pub entries: &'a EntryBook,
}

impl GridBuilder<'_> {
    /// Build the nodes for each year covered by the range, which is empty if
    /// the range doesn't contain any day.
    pub fn build(&self, range: &DateRange) -> Result<Vec<YearNode>> {
        let mut years = Vec::new();

        if range.is_empty() {
            #[cfg(feature = "log")]
            log::debug!(
                "Empty calendar range from {} till {}",
                range.from,
                range.till
            );

            return Ok(years);
        }

        // ISO week numbers are only meaningful when weeks start on monday
        let iso_weeks = self.first_weekday == FirstWeekday::MONDAY;

        let mut year = YearNode::default();
        let mut month = MonthNode::default();
        let mut week = WeekNode::default();
        let mut day = DateCursor::new(range.from);
        let mut first = true;

        loop {
            let date = day.date();
            let mut next = day.copy();
            next.add_days(1)?;

            let last = next.date() >= range.till;
            let wd = self.first_weekday.column_of(date.weekday());
            let end_of_month = day.is_last_of_month();

            // first day in year
            if first || (date.month() == 1 && date.day() == 1) {
                year = YearNode {
                    time: date.year(),
                    label: day.format_pattern(&self.year_format, self.locale),
                    months: Vec::new(),
                };
            }

            // first day in month
            if first || date.day() == 1 {
                month = MonthNode {
                    time: date.format("%Y-%m").to_string(),
                    label: day.format_pattern(&self.month_format, self.locale),
                    month: date.format("%m").to_string(),
                    weeks: Vec::new(),
                };
            }

            // first day in week
            if first || wd == 0 || date.day() == 1 {
                let (time, label) = if iso_weeks {
                    let (iso_year, iso_week) = day.iso_week();
                    (
                        Some(format!("{iso_year}-W{iso_week:02}")),
                        Some(format!("{iso_week:02}")),
                    )
                } else {
                    (None, None)
                };

                week = WeekNode {
                    time,
                    label,
                    leading: wd,
                    following: None,
                    days: Vec::new(),
                };
            }

            week.days.push(DayNode {
                time: date.format("%Y-%m-%d").to_string(),
                label: day.format_pattern(&self.day_format, self.locale),
                weekday: day.weekday_key(),
                entries: self.entries.get(date).to_vec(),
            });

            // last day in week
            if last || wd == 6 || end_of_month {
                if wd < 6 {
                    week.following = Some(6 - wd);
                }

                month.weeks.push(take(&mut week));
            }

            // last day in month
            if last || end_of_month {
                year.months.push(take(&mut month));
            }

            // last day in year
            if last || (date.month() == 12 && end_of_month) {
                years.push(take(&mut year));
            }

            if last {
                break;
            }

            day = next;
            first = false;
        }

        Ok(years)
    }
}
