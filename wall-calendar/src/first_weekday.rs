//! Which day of the week is displayed in the first column of a calendar.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::Weekday;

use crate::error::{Error, Result, UnknownCountryCode};

include!(concat!(env!("OUT_DIR"), "/first_weekday.rs"));

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The weekday opening each week of a calendar, monday by default.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FirstWeekday(Weekday);

impl FirstWeekday {
    pub const MONDAY: Self = Self(Weekday::Mon);
    pub const SATURDAY: Self = Self(Weekday::Sat);
    pub const SUNDAY: Self = Self(Weekday::Sun);

    /// Get the first weekday from its offset from monday.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use wall_calendar::FirstWeekday;
    ///
    /// assert_eq!(FirstWeekday::from_offset(6).unwrap().weekday(), Weekday::Sun);
    /// assert!(FirstWeekday::from_offset(7).is_err());
    /// ```
    pub fn from_offset(offset: u8) -> Result<Self> {
        WEEKDAYS
            .get(usize::from(offset))
            .copied()
            .map(Self)
            .ok_or(Error::InvalidFirstWeekday(offset))
    }

    /// Get the usual first weekday for an ISO 3166 country code, falling back
    /// to monday for unknown countries.
    ///
    /// ```
    /// use wall_calendar::FirstWeekday;
    ///
    /// assert_eq!(FirstWeekday::for_country("US"), FirstWeekday::SUNDAY);
    /// assert_eq!(FirstWeekday::for_country("se"), FirstWeekday::MONDAY);
    /// assert_eq!(FirstWeekday::for_country("??"), FirstWeekday::MONDAY);
    /// ```
    pub fn for_country(code: &str) -> Self {
        Self::try_for_country(code).unwrap_or_else(|_err| {
            #[cfg(feature = "log")]
            log::debug!("{_err}, weeks will start on monday");
            Self::MONDAY
        })
    }

    /// Get the usual first weekday for an ISO 3166 country code, territories
    /// which are not listed in CLDR data are rejected.
    pub fn try_for_country(code: &str) -> std::result::Result<Self, UnknownCountryCode> {
        let offset = lookup_country(&code.trim().to_ascii_uppercase())
            .ok_or_else(|| UnknownCountryCode(code.to_string()))?;

        Ok(Self(WEEKDAYS[usize::from(offset)]))
    }

    pub fn weekday(self) -> Weekday {
        self.0
    }

    /// Offset of this weekday from monday, from 0 to 6.
    pub fn offset(self) -> u8 {
        self.0.num_days_from_monday() as u8
    }

    /// Index of the column displaying `weekday` in a week starting with this
    /// weekday, from 0 to 6.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use wall_calendar::FirstWeekday;
    ///
    /// assert_eq!(FirstWeekday::MONDAY.column_of(Weekday::Mon), 0);
    /// assert_eq!(FirstWeekday::SUNDAY.column_of(Weekday::Mon), 1);
    /// assert_eq!(FirstWeekday::SUNDAY.column_of(Weekday::Sat), 6);
    /// ```
    pub fn column_of(self, weekday: Weekday) -> u8 {
        ((weekday.number_from_monday() + 6 - u32::from(self.offset())) % 7) as u8
    }

    /// Iterate over the seven weekdays in column order.
    pub fn columns(self) -> impl Iterator<Item = Weekday> {
        let offset = usize::from(self.offset());
        (0..7).map(move |i| WEEKDAYS[(i + offset) % 7])
    }
}

impl Default for FirstWeekday {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<Weekday> for FirstWeekday {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl TryFrom<u8> for FirstWeekday {
    type Error = Error;

    fn try_from(offset: u8) -> Result<Self> {
        Self::from_offset(offset)
    }
}

/// Parse either an offset (`"0"` to `"6"`) or a country code (`"BR"`).
impl FromStr for FirstWeekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(offset) = s.parse::<u8>() {
            return Self::from_offset(offset);
        }

        Ok(Self::try_for_country(s)?)
    }
}

impl Display for FirstWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
