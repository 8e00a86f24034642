#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod calendar;
pub mod entries;
pub mod error;
pub mod first_weekday;
pub mod grid;
pub mod range;
pub mod weekdays;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::Calendar;
pub use crate::entries::{DatedEntry, Entry};
pub use crate::error::{Error, Result, UnknownCountryCode};
pub use crate::first_weekday::FirstWeekday;
pub use crate::grid::{CalendarSheet, DayNode, MonthNode, WeekNode, YearNode};
pub use crate::range::DateRange;
pub use crate::weekdays::{WeekdayFormat, WeekdayLabels};
pub use date_cursor::{Clock, DateCursor, FixedClock, Locale, SystemClock};
