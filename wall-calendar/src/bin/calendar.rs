use std::env;

use chrono::{Datelike, Local};

use wall_calendar::{Calendar, FirstWeekday};

fn main() {
    let today = Local::now().date_naive();
    let mut args = env::args().skip(1);

    let (year, month) = match args.next() {
        Some(raw) => {
            let (year, month) = raw.split_once('-').expect("Usage: ./calendar [YYYY-MM] [COUNTRY]");
            (
                year.parse().expect("invalid year"),
                month.parse().expect("invalid month"),
            )
        }
        None => (today.year(), today.month()),
    };

    let first_weekday = args
        .next()
        .map(|country| FirstWeekday::for_country(&country))
        .unwrap_or_default();

    let sheet = match Calendar::for_month(Some(month), Some(year)).and_then(|calendar| {
        calendar
            .with_first_weekday(first_weekday)
            .with_month_format("%B %Y")
            .with_weekday_format("%a")
            .build()
    }) {
        Ok(sheet) => sheet,
        Err(err) => panic!("{err}"),
    };

    for month in sheet.months() {
        println!("{:^27}", month.label);

        let header: Vec<_> = sheet
            .weekdays
            .iter()
            .map(|(_, label)| format!("{label:>3}"))
            .collect();

        println!("{}", header.join(" "));

        for week in &month.weeks {
            let mut cells = vec!["   ".to_string(); usize::from(week.leading)];

            for day in &week.days {
                let mark = if day.entries.is_empty() { ' ' } else { '*' };
                cells.push(format!("{:>2}{mark}", day.label));
            }

            print!("{}", cells.join(" "));

            if let Some(label) = &week.label {
                let padding = usize::from(week.following.unwrap_or(0)) * 4;
                print!("{:padding$}  W{label}", "");
            }

            println!();
        }
    }
}
