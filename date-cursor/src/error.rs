use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// A date string or a year/month/day triplet that doesn't describe a calendar day.
    InvalidDate(String),
    /// A format pattern containing a specifier that can't be rendered.
    InvalidFormat(String),
    /// Date arithmetic went beyond the supported range of dates.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`"),
            Self::InvalidFormat(pattern) => write!(f, "invalid date format `{pattern}`"),
            Self::OutOfRange => write!(f, "date is out of the supported range"),
        }
    }
}

impl std::error::Error for Error {}
