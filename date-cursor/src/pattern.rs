use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};

use crate::error::{Error, Result};

/// Specifiers that render a number and can thus be asked to drop their padding with `%#`.
const NUMERIC_SPECIFIERS: &str = "CdegGHIjmMNoSuUVwWyY";

/// A strftime-like pattern which has been checked to be renderable.
///
/// On top of chrono's specifiers, a few legacy forms are understood:
///
///  - `%#d`, `%#m`, ...: the number without any padding (`%-d` in chrono)
///  - `%W`: ISO week number (`%V` in chrono)
///  - `%N`: ISO weekday from 1 (Monday) to 7 (Sunday)
///  - `%o`: ISO week-based year
///
/// ```
/// use date_cursor::DatePattern;
///
/// assert!(DatePattern::new("%#d %B %Y").is_ok());
/// assert!(DatePattern::new("%o-W%W").is_ok());
/// assert!(DatePattern::new("50%").is_err());
/// ```
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct DatePattern {
    raw: String,
    translated: String,
}

impl DatePattern {
    pub fn new(raw: &str) -> Result<Self> {
        let translated = translate(raw);

        if StrftimeItems::new(&translated).any(|item| item == Item::Error) {
            return Err(Error::InvalidFormat(raw.to_string()));
        }

        Ok(Self { raw: raw.to_string(), translated })
    }

    /// The pattern as it was written by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn chrono_format(&self) -> &str {
        &self.translated
    }
}

impl FromStr for DatePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Debug for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatePattern({:?})", self.raw)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn translate(raw: &str) -> String {
    let mut res = String::with_capacity(raw.len() + 2);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        res.push(c);

        if c != '%' {
            continue;
        }

        if chars.next_if_eq(&'#').is_some()
            && chars.peek().is_some_and(|spec| NUMERIC_SPECIFIERS.contains(*spec))
        {
            res.push('-');
        }

        let Some(spec) = chars.next() else {
            break;
        };

        res.push(match spec {
            'W' => 'V',
            'N' => 'u',
            'o' => 'G',
            other => other,
        });
    }

    res
}
