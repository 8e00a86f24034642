use chrono::{Datelike, NaiveDate};

use crate::tests::check_invariants;
use crate::{date, Calendar, DateRange, DatedEntry, Error, FirstWeekday};

const RANGES: [(&str, &str); 6] = [
    ("2016-04-06", "2016-04-07"),
    ("2016-02-01", "2016-03-01"),
    ("2016-02-28", "2016-03-02"),
    ("2015-12-14", "2016-01-19"),
    ("2016-01-01", "2017-01-01"),
    ("2019-11-27", "2021-02-03"),
];

fn sheets() -> impl Iterator<Item = (DateRange, FirstWeekday, crate::CalendarSheet)> {
    RANGES.into_iter().flat_map(|(from, till)| {
        (0..7).map(move |offset| {
            let first_weekday = FirstWeekday::from_offset(offset).unwrap();

            let calendar = Calendar::span(from, till)
                .unwrap()
                .with_first_weekday(first_weekday);

            (*calendar.range(), first_weekday, calendar.build().unwrap())
        })
    })
}

#[test]
fn days_count_matches_range() {
    for (range, _, sheet) in sheets() {
        assert_eq!(sheet.days().count(), range.len(), "{range:?}");
        check_invariants(&sheet);
    }
}

#[test]
fn days_round_trip() {
    for (range, _, sheet) in sheets() {
        let days: Vec<NaiveDate> = sheet
            .days()
            .map(|day| NaiveDate::parse_from_str(&day.time, "%Y-%m-%d").unwrap())
            .collect();

        assert_eq!(days, range.days().collect::<Vec<_>>());
    }
}

#[test]
fn iso_weeks_only_start_on_monday() {
    for (_, first_weekday, sheet) in sheets() {
        for week in sheet.weeks() {
            let iso = first_weekday == FirstWeekday::MONDAY;
            assert_eq!(week.time.is_some(), iso);
            assert_eq!(week.label.is_some(), iso);
        }
    }
}

#[test]
fn leading_matches_columns() {
    for (_, first_weekday, sheet) in sheets() {
        for week in sheet.weeks() {
            let first_day = date!(&week.days[0].time);
            let last_day = date!(&week.days[week.days.len() - 1].time);
            assert_eq!(week.leading, first_weekday.column_of(first_day.weekday()));

            assert_eq!(
                week.following.unwrap_or(0),
                6 - first_weekday.column_of(last_day.weekday()),
            );
        }
    }
}

#[test]
fn build_is_idempotent() -> Result<(), Error> {
    let calendar = Calendar::span("2015-12-14", "2016-01-19")?
        .with_first_weekday(FirstWeekday::SUNDAY)
        .add_holidays([DatedEntry::parse("2015-12-25")?]);

    assert_eq!(calendar.build()?, calendar.build()?);
    Ok(())
}

#[test]
fn leap_february() -> Result<(), Error> {
    let sheet = Calendar::for_months_on(&super::clock(), 1, Some(2), Some(2016))?.build()?;
    check_invariants(&sheet);

    assert_eq!(sheet.years.len(), 1);
    assert_eq!(sheet.years[0].months.len(), 1);
    assert_eq!(sheet.days().count(), 29);

    let month = &sheet.years[0].months[0];
    assert_eq!(month.time, "2016-02");
    assert_eq!(month.month, "02");
    assert_eq!(month.label, "February");
    assert_eq!(month.weeks.len(), 5);

    let weeks: Vec<_> = month
        .weeks
        .iter()
        .map(|week| (week.label.as_deref(), week.leading, week.days.len(), week.following))
        .collect();

    assert_eq!(
        weeks,
        [
            (Some("05"), 0, 7, None),
            (Some("06"), 0, 7, None),
            (Some("07"), 0, 7, None),
            (Some("08"), 0, 7, None),
            (Some("09"), 0, 1, Some(6)),
        ],
    );

    Ok(())
}

#[test]
fn span_over_month_boundary() -> Result<(), Error> {
    let sheet = Calendar::span("2016-02-28", "2016-03-02")?.build()?;
    check_invariants(&sheet);

    let days: Vec<_> = sheet.days().map(|day| day.time.as_str()).collect();
    assert_eq!(days, ["2016-02-28", "2016-02-29", "2016-03-01"]);
    assert_eq!(sheet.years.len(), 1);
    assert_eq!(sheet.years[0].time, 2016);

    let months = &sheet.years[0].months;
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].weeks.len(), 2);
    assert_eq!(months[1].weeks.len(), 1);

    // sunday closes the first week, monday 29th is cut by the end of the month
    assert_eq!((months[0].weeks[0].leading, months[0].weeks[0].following), (6, None));
    assert_eq!((months[0].weeks[1].leading, months[0].weeks[1].following), (0, Some(6)));
    assert_eq!((months[1].weeks[0].leading, months[1].weeks[0].following), (1, Some(5)));
    Ok(())
}

#[test]
fn span_over_year_boundary() -> Result<(), Error> {
    let sheet = Calendar::span("2015-12-30", "2016-01-03")?.build()?;
    check_invariants(&sheet);

    let years: Vec<_> = sheet.years.iter().map(|year| year.time).collect();
    assert_eq!(years, [2015, 2016]);

    let december = &sheet.years[0].months[0].weeks[0];
    assert_eq!(december.time.as_deref(), Some("2015-W53"));
    assert_eq!((december.leading, december.following), (2, Some(3)));

    // january 1st opens a new row, which still belongs to last ISO week of 2015
    let january = &sheet.years[1].months[0].weeks[0];
    assert_eq!(january.time.as_deref(), Some("2015-W53"));
    assert_eq!(january.label.as_deref(), Some("53"));
    assert_eq!((january.leading, january.following), (4, Some(1)));
    assert_eq!(january.days.len(), 2);
    Ok(())
}

#[test]
fn sunday_first() -> Result<(), Error> {
    let sheet = Calendar::for_months_on(&super::clock(), 1, Some(5), Some(2016))?
        .with_first_weekday(FirstWeekday::for_country("US"))
        .build()?;

    check_invariants(&sheet);
    let weeks = &sheet.years[0].months[0].weeks;

    // 2016-05-01 is a sunday
    assert_eq!(weeks[0].leading, 0);
    assert_eq!(weeks[0].days[0].weekday, "sun");
    assert_eq!(weeks[0].days[6].weekday, "sat");
    assert!(weeks.iter().all(|week| week.time.is_none() && week.label.is_none()));

    // 2016-05-31 is a tuesday
    let last = &weeks[weeks.len() - 1];
    assert_eq!((last.days.len(), last.following), (3, Some(4)));
    Ok(())
}

#[test]
fn entries_on_their_day_only() -> Result<(), Error> {
    let sheet = Calendar::for_months_on(&super::clock(), 1, Some(4), Some(2016))?
        .add_holidays([DatedEntry::parse("2016-04-01")?.with_title("Foo")])
        .build()?;

    for day in sheet.days() {
        if day.time == "2016-04-01" {
            assert_eq!(day.entries.len(), 1);
            assert_eq!(day.entries[0].class, "holiday");
            assert_eq!(day.entries[0].title.as_deref(), Some("Foo"));
            assert_eq!(day.entries[0].link, None);
        } else {
            assert!(day.entries.is_empty(), "unexpected entry on {}", day.time);
        }
    }

    Ok(())
}

#[test]
fn entries_outside_range_are_ignored() -> Result<(), Error> {
    let sheet = Calendar::span("2016-04-01", "2016-04-08")?
        .add_holidays([DatedEntry::parse("2016-04-08")?, DatedEntry::parse("2016-03-31")?])
        .build()?;

    assert!(sheet.days().all(|day| day.entries.is_empty()));
    Ok(())
}

#[test]
fn reversed_range_is_empty() -> Result<(), Error> {
    let sheet = Calendar::span("2016-04-08", "2016-04-01")?.build()?;
    assert!(sheet.years.is_empty());
    assert_eq!(sheet.weekdays.len(), 7);
    Ok(())
}

#[test]
fn custom_labels() -> Result<(), Error> {
    let sheet = Calendar::span("2016-04-01", "2016-04-02")?
        .with_day_format("%d")
        .with_month_format("%b %y")
        .with_year_format("")
        .build()?;

    let year = &sheet.years[0];
    assert_eq!(year.label, "");
    assert_eq!(year.months[0].label, "Apr 16");
    assert_eq!(year.months[0].weeks[0].days[0].label, "01");
    Ok(())
}
