use chrono::{Local, NaiveDate};

/// Source for the current date, used wherever a date component is left
/// unspecified by the caller.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Read the current date from the local time of the system.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that is stuck on a given day.
///
/// ```
/// use chrono::NaiveDate;
/// use date_cursor::{Clock, FixedClock};
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 1).unwrap();
/// assert_eq!(FixedClock(day).today(), day);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
