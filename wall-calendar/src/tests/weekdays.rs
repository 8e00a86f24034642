use chrono::Weekday;
use date_cursor::Locale;

use crate::{Error, FirstWeekday, WeekdayFormat, WeekdayLabels};

const KEYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

#[test]
fn pattern_labels() -> Result<(), Error> {
    let labels = WeekdayLabels::build(FirstWeekday::MONDAY, &"%a".into(), Locale::en_US)?;

    assert_eq!(
        labels.iter().collect::<Vec<_>>(),
        [
            ("mon", "Mon"),
            ("tue", "Tue"),
            ("wed", "Wed"),
            ("thu", "Thu"),
            ("fri", "Fri"),
            ("sat", "Sat"),
            ("sun", "Sun"),
        ],
    );

    Ok(())
}

#[test]
fn always_seven_keys() -> Result<(), Error> {
    let formats = [
        WeekdayFormat::default(),
        WeekdayFormat::from("%A"),
        WeekdayFormat::from(["1", "2", "3", "4", "5", "6", "7"]),
    ];

    for format in &formats {
        for offset in 0..7 {
            let first_weekday = FirstWeekday::from_offset(offset)?;
            let labels = WeekdayLabels::build(first_weekday, format, Locale::en_US)?;
            let mut keys: Vec<_> = labels.keys().collect();
            assert_eq!(keys[0], KEYS[usize::from(offset)]);
            keys.sort_by_key(|key| KEYS.iter().position(|k| k == key));
            assert_eq!(keys, KEYS);
        }
    }

    Ok(())
}

#[test]
fn explicit_labels_follow_their_weekday() -> Result<(), Error> {
    let format = WeekdayFormat::from(["1", "2", "3", "4", "5", "6", "7"]);

    for offset in 0..7 {
        let first_weekday = FirstWeekday::from_offset(offset)?;
        let labels = WeekdayLabels::build(first_weekday, &format, Locale::en_US)?;
        assert_eq!(labels.get(Weekday::Mon), Some("1"));
        assert_eq!(labels.get(Weekday::Sun), Some("7"));

        let first_label = labels.iter().next().map(|(_, label)| label.to_string());
        assert_eq!(first_label, Some((offset + 1).to_string()));
    }

    Ok(())
}

#[test]
fn rotated_pattern_labels() -> Result<(), Error> {
    let labels = WeekdayLabels::build(FirstWeekday::SUNDAY, &"%A".into(), Locale::fr_FR)?;
    let values: Vec<_> = labels.iter().map(|(_, label)| label).collect();

    assert_eq!(
        values,
        ["dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi"],
    );

    Ok(())
}

#[test]
fn invalid_pattern() {
    assert!(WeekdayLabels::build(FirstWeekday::MONDAY, &"%".into(), Locale::en_US).is_err());
}
