//! Annotations attached to calendar days, such as holidays.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use date_cursor::DateCursor;

use crate::error::Result;

/// A day to be highlighted on the calendar, before it gets classified by
/// [`Calendar::add_entries`](crate::Calendar::add_entries).
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct DatedEntry {
    pub date: NaiveDate,
    pub title: Option<String>,
    pub link: Option<String>,
    /// States this entry applies to, it applies everywhere if empty
    pub states: Vec<String>,
    /// States for which this entry only has a regional scope
    pub regional: Vec<String>,
}

impl DatedEntry {
    pub fn new(date: impl Into<NaiveDate>) -> Self {
        Self {
            date: date.into(),
            title: None,
            link: None,
            states: Vec::new(),
            regional: Vec::new(),
        }
    }

    /// Create an entry from a date of the form `YYYY-MM-DD`.
    ///
    /// ```
    /// use wall_calendar::DatedEntry;
    ///
    /// let entry = DatedEntry::parse("2016-04-01").unwrap().with_title("Foo");
    /// assert_eq!(entry.title.as_deref(), Some("Foo"));
    /// assert!(DatedEntry::parse("2016-04-31").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(Self::new(DateCursor::parse(raw)?))
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..self }
    }

    pub fn with_link(self, link: impl Into<String>) -> Self {
        Self { link: Some(link.into()), ..self }
    }

    pub fn with_states<S: Into<String>>(
        self,
        states: impl IntoIterator<Item = S>,
        regional: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            regional: regional.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Check if this entry applies to given state. Entries with no state
    /// restriction apply everywhere, and an empty state matches any entry.
    ///
    /// ```
    /// use wall_calendar::DatedEntry;
    ///
    /// let entry = DatedEntry::parse("2016-04-01").unwrap().with_states(["foo"], []);
    /// assert!(entry.in_state("foo"));
    /// assert!(entry.in_state(""));
    /// assert!(!entry.in_state("bar"));
    /// ```
    pub fn in_state(&self, state: &str) -> bool {
        state.is_empty() || self.states.is_empty() || self.states.iter().any(|s| s == state)
    }

    pub fn is_regional(&self, state: &str) -> bool {
        self.regional.iter().any(|s| s == state)
    }
}

impl From<NaiveDate> for DatedEntry {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

/// An annotation displayed on a day of the calendar.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub class: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub link: Option<String>,
}

/// Entries of a calendar, indexed by date and kept in insertion order for
/// each date.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct EntryBook(BTreeMap<NaiveDate, Vec<Entry>>);

impl EntryBook {
    pub fn insert(&mut self, entry: &DatedEntry, class: &str) {
        let non_empty = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());

        self.0.entry(entry.date).or_default().push(Entry {
            class: class.to_string(),
            title: non_empty(&entry.title),
            link: non_empty(&entry.link),
        });
    }

    /// Entries registered for a given date, in insertion order.
    pub fn get(&self, date: NaiveDate) -> &[Entry] {
        self.0.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of entries over all dates.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Entry)> + '_ {
        self.0
            .iter()
            .flat_map(|(date, entries)| entries.iter().map(move |entry| (*date, entry)))
    }
}
