use chrono::{TimeZone, Utc};
use chrono_tz::Tz;

use crate::zone::REFERENCE_ZONE;
use crate::{PersianDate, PersianDateFields};

/// Validated fields; panics on an invalid triple.
pub fn persian(year: i32, month: u8, day: u8) -> PersianDateFields {
    PersianDateFields::new(year, month, day).unwrap()
}

pub fn utc_millis(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .unwrap()
        .timestamp_millis()
}

/// A `PersianDate` in UTC at the given Gregorian date and time.
pub fn utc_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> PersianDate {
    PersianDate::from_millis(utc_millis(year, month, day, hour, minute, second), Tz::UTC).unwrap()
}

/// Start of a Persian day in Tehran.
pub fn tehran_midnight(year: i32, month: u8, day: u8) -> i64 {
    PersianDate::from_persian(year, month, day, REFERENCE_ZONE)
        .unwrap()
        .millis()
}

/// `hours` after the start of a Persian day in Tehran.
pub fn tehran_at(year: i32, month: u8, day: u8, hours: i64) -> i64 {
    tehran_midnight(year, month, day) + hours * 3_600_000
}
