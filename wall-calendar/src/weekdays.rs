//! Labels displayed in the header of each week.

use chrono::{Datelike, Weekday};
use date_cursor::{weekday_key, DateCursor, DatePattern, Locale};

use crate::error::Result;
use crate::first_weekday::FirstWeekday;

/// How weekday labels are rendered.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum WeekdayFormat {
    /// A strftime-like pattern, typically `%a` or `%A`.
    Pattern(String),
    /// Explicit labels, starting with monday.
    Labels([String; 7]),
}

impl Default for WeekdayFormat {
    fn default() -> Self {
        Self::Pattern("%a".to_string())
    }
}

impl From<&str> for WeekdayFormat {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl From<String> for WeekdayFormat {
    fn from(pattern: String) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<[&str; 7]> for WeekdayFormat {
    fn from(labels: [&str; 7]) -> Self {
        Self::Labels(labels.map(str::to_string))
    }
}

impl From<[String; 7]> for WeekdayFormat {
    fn from(labels: [String; 7]) -> Self {
        Self::Labels(labels)
    }
}

/// Label of each of the seven weekdays, ordered by column.
///
/// Labels are indexed by weekday, whichever weekday comes first: only their
/// order and, for a [`WeekdayFormat::Labels`] format, their values depend on
/// the first weekday.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct WeekdayLabels(Vec<(Weekday, String)>);

impl WeekdayLabels {
    /// Render labels for each weekday.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use wall_calendar::{FirstWeekday, Locale, WeekdayFormat, WeekdayLabels};
    ///
    /// let format = WeekdayFormat::from(["M", "T", "W", "T", "F", "S", "s"]);
    /// let labels = WeekdayLabels::build(FirstWeekday::SUNDAY, &format, Locale::en_US).unwrap();
    /// assert_eq!(labels.keys().next(), Some("sun"));
    /// assert_eq!(labels.get(Weekday::Sun), Some("s"));
    /// ```
    pub fn build(
        first_weekday: FirstWeekday,
        format: &WeekdayFormat,
        locale: Locale,
    ) -> Result<Self> {
        let labels = match format {
            WeekdayFormat::Labels(labels) => first_weekday
                .columns()
                .map(|weekday| {
                    let label = &labels[weekday.num_days_from_monday() as usize];
                    (weekday, label.clone())
                })
                .collect(),
            WeekdayFormat::Pattern(pattern) => {
                let pattern = DatePattern::new(pattern)?;

                // 2014-01-06 is a monday
                let mut day = DateCursor::from_ymd(2014, 1, 6)?;
                day.add_days(first_weekday.offset().into())?;
                let mut labels = Vec::with_capacity(7);

                for _ in 0..7 {
                    labels.push((day.date().weekday(), day.format_pattern(&pattern, locale)));
                    day.add_days(1)?;
                }

                labels
            }
        };

        Ok(Self(labels))
    }

    pub fn get(&self, weekday: Weekday) -> Option<&str> {
        self.0
            .iter()
            .find(|(wd, _)| *wd == weekday)
            .map(|(_, label)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys of the weekdays in column order (`"mon"`, `"tue"`, ...).
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(weekday, _)| weekday_key(*weekday))
    }

    /// Iterate over pairs of key and label in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0
            .iter()
            .map(|(weekday, label)| (weekday_key(*weekday), label.as_str()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for WeekdayLabels {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (key, label) in self.iter() {
            map.serialize_entry(key, label)?;
        }

        map.end()
    }
}
