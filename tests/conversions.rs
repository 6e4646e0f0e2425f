//! Day-by-day sweeps over both conversion algorithms.

use chrono::{Datelike, NaiveDate, NaiveTime};
use persian_calendar::bridge::{gregorian_to_persian, persian_to_gregorian};
use persian_calendar::julian::{julian_to_persian, persian_to_julian};
use persian_calendar::{days_in_month, CalendarError, JulianDay, PersianDate, PersianDateFields};

/// Days from 1 January 1 CE (chrono's day 1) back to Julian Day 0
const CE_TO_JULIAN_DAY: i64 = 1_721_425;
/// Years in which the day walk and the 2820-year cycle agree on every day
const SHARED_YEARS: std::ops::RangeInclusive<i32> = 1244..=1402;

fn gregorian_of(jdn: JulianDay) -> (i32, i32, i32) {
    let days = i32::try_from(jdn.get() - CE_TO_JULIAN_DAY).expect("day count fits in i32");
    let date = NaiveDate::from_num_days_from_ce_opt(days).expect("date in chrono range");
    (date.year(), date.month0() as i32, date.day() as i32)
}

fn each_persian_day(years: std::ops::RangeInclusive<i32>, mut f: impl FnMut(i32, i32, i32)) {
    for year in years {
        for month in 1..=12u8 {
            for day in 1..=days_in_month(year, month).expect("month in range") {
                f(year, i32::from(month) - 1, i32::from(day));
            }
        }
    }
}

#[test]
fn julian_round_trip_is_exact() {
    let mut previous: Option<i64> = None;
    each_persian_day(1..=3000, |year, month0, day| {
        let jdn = persian_to_julian(i64::from(year), month0, day);
        assert_eq!(
            julian_to_persian(jdn),
            (i64::from(year), month0, day),
            "{year}/{month0}/{day}"
        );
        if let Some(previous) = previous {
            assert_eq!(jdn.get(), previous + 1, "gap before {year}/{month0}/{day}");
        }
        previous = Some(jdn.get());
    });
}

#[test]
fn bridge_round_trip_over_gregorian_days() {
    let mut date = NaiveDate::from_ymd_opt(1600, 3, 20).expect("valid start");
    let end = NaiveDate::from_ymd_opt(2300, 12, 31).expect("valid end");
    while date <= end {
        let gregorian = (date.year(), date.month0() as i32, date.day() as i32);
        let persian = gregorian_to_persian(gregorian.0, gregorian.1, gregorian.2).expect("month in range");
        assert_eq!(
            persian_to_gregorian(persian.0, persian.1, persian.2).expect("month in range"),
            gregorian,
            "{date}"
        );
        date = date.succ_opt().expect("next day");
    }
}

#[test]
fn bridge_agrees_with_julian_days() {
    each_persian_day(SHARED_YEARS, |year, month0, day| {
        let jdn = persian_to_julian(i64::from(year), month0, day);
        assert_eq!(
            persian_to_gregorian(year, month0, day).expect("month in range"),
            gregorian_of(jdn),
            "{year}/{month0}/{day}"
        );
    });
}

#[test]
fn nowruz_1370_on_both_paths() {
    let jdn = persian_to_julian(1370, 0, 1);
    assert_eq!(jdn, JulianDay::new(2_448_337));
    assert_eq!(gregorian_of(jdn), (1991, 2, 21));
    assert_eq!(persian_to_gregorian(1370, 0, 1).expect("month in range"), (1991, 2, 21));
    assert_eq!(gregorian_to_persian(1991, 2, 21).expect("month in range"), (1370, 0, 1));

    let fields = PersianDateFields::new(1370, 1, 1).expect("valid date");
    assert_eq!(PersianDateFields::from_julian(jdn).expect("year in range"), fields);

    let date = PersianDate::from_millis(669_513_600_000, chrono_tz::Tz::UTC).expect("instant in range");
    assert_eq!(date.fields(), fields);
    assert_eq!(date.julian_day(), jdn);
}

#[test]
fn bridge_starts_at_farvardin_979() {
    assert_eq!(gregorian_to_persian(1600, 2, 20), Ok((979, 0, 1)));
    assert_eq!(persian_to_gregorian(979, 0, 1), Ok((1600, 2, 20)));
    assert!(matches!(
        gregorian_to_persian(1600, 2, 19),
        Err(CalendarError::OutsideBridgeRange { .. })
    ));
    assert!(matches!(
        persian_to_gregorian(978, 11, 29),
        Err(CalendarError::OutsideBridgeRange { .. })
    ));
    assert!(PersianDate::from_persian(978, 1, 1, chrono_tz::Tz::UTC).is_err());
}

#[test]
fn bridge_round_trip_over_persian_days() {
    for year in 979..=2000 {
        for month0 in 0..12 {
            let longest = if month0 < 6 { 31 } else { 30 };
            for day in 1..=longest {
                let gregorian = persian_to_gregorian(year, month0, day).expect("in range");
                // Esfand 30 only exists when it is not already 1 Farvardin
                if month0 == 11 && day == 30 && Ok(gregorian) == persian_to_gregorian(year + 1, 0, 1) {
                    continue;
                }
                assert_eq!(
                    gregorian_to_persian(gregorian.0, gregorian.1, gregorian.2),
                    Ok((year, month0, day)),
                    "{year}/{month0}/{day}"
                );
            }
        }
    }
}

#[test]
fn every_date_fits_its_month() {
    let mut date = NaiveDate::from_ymd_opt(1600, 3, 20).expect("valid start");
    let end = NaiveDate::from_ymd_opt(2300, 12, 31).expect("valid end");
    while date <= end {
        let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
        let persian = PersianDate::from_millis(millis, chrono_tz::Tz::UTC).expect("in range");
        let (month, day) = (persian.persian_month(), persian.persian_day());
        let longest = if month <= 6 { 31 } else { 30 };

        assert!((1..=12).contains(&month), "{date}: month {month}");
        assert!((1..=longest).contains(&day), "{date}: day {day}");
        if SHARED_YEARS.contains(&persian.persian_year()) {
            assert!(day <= persian.month_length(), "{date}: {persian}");
        }
        date = date.succ_opt().expect("next day");
    }
}
