use chrono::{Datelike, Months, NaiveDate};

pub(crate) fn count_days_in_month(date: NaiveDate) -> u32 {
    let first_this_month = date
        .with_day(1)
        .expect("first of the month should always exist");

    let Some(first_next_month) = first_this_month.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    (first_next_month - first_this_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

/// Find Easter date for given year.
///
/// See https://en.wikipedia.org/wiki/Date_of_Easter#Anonymous_Gregorian_algorithm
pub(crate) fn easter(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = (h + l - 7 * m + 114) / 31;
    let o = (h + l - 7 * m + 114) % 31;

    NaiveDate::from_ymd_opt(year, n.try_into().ok()?, (o + 1).try_into().ok()?)
}
