mod grid;
mod weekdays;

use crate::CalendarSheet;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

/// A clock stuck on 2016-04-18.
fn clock() -> date_cursor::FixedClock {
    date_cursor::FixedClock(date!("2016-04-18"))
}

/// Check the shape invariants that any built calendar must hold.
fn check_invariants(sheet: &CalendarSheet) {
    for year in &sheet.years {
        assert!(!year.months.is_empty(), "empty year {}", year.time);

        for month in &year.months {
            assert!(!month.weeks.is_empty(), "empty month {}", month.time);
            assert!(month.time.starts_with(&year.time.to_string()));

            for week in &month.weeks {
                assert!((1..=7).contains(&week.days.len()));
                assert!(week.leading <= 6);
                assert!(week.following.map_or(true, |following| (1..=6).contains(&following)));
                assert_eq!(week.width(), 7);

                for day in &week.days {
                    assert!(day.time.starts_with(&month.time));
                }
            }
        }
    }
}
