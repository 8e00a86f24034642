use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnknownCountryCode(pub String);

impl Display for UnknownCountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown ISO code `{}`", self.0)
    }
}

impl std::error::Error for UnknownCountryCode {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An invalid date, format or date arithmetic overflow.
    Date(date_cursor::Error),
    /// A first weekday offset outside of `0..=6`.
    InvalidFirstWeekday(u8),
    UnknownCountryCode(UnknownCountryCode),
}

impl From<date_cursor::Error> for Error {
    fn from(err: date_cursor::Error) -> Self {
        Self::Date(err)
    }
}

impl From<UnknownCountryCode> for Error {
    fn from(err: UnknownCountryCode) -> Self {
        Self::UnknownCountryCode(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(err) => write!(f, "{err}"),
            Self::InvalidFirstWeekday(offset) => {
                write!(f, "invalid first weekday {offset}: expected 0 (monday) to 6 (sunday)")
            }
            Self::UnknownCountryCode(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Date(err) => Some(err),
            Self::InvalidFirstWeekday(_) => None,
            Self::UnknownCountryCode(err) => Some(err),
        }
    }
}
