use crate::consts::{
    DATE_DELIMITER, ESFAND, ESFAND_DAYS_LEAP, MAX_MONTH, PERSIAN_DAYS_IN_MONTH, PERSIAN_MONTH_NAMES,
    PERSIAN_WEEK_DAY_NAMES,
};
use crate::julian::{is_persian_leap_year, julian_to_persian, persian_to_julian};
use crate::parser::PersianDateParser;
use crate::prelude::*;
use crate::ParseError;
use std::fmt;
use std::str::FromStr;

/// A continuous day count since noon, January 1, 4713 BC (proleptic Julian).
///
/// Used as the calendar-agnostic interchange between Persian fields and
/// absolute time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "JD {_0}")]
pub struct JulianDay(i64);

impl JulianDay {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day count as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// A Persian calendar date: year, 1-based month and day.
///
/// Field order matters: the derived `Ord` compares year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersianDateFields {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

impl PersianDateFields {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` when the
    /// triple is not a date of the Persian calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        PersianDateParser::validate(year, i32::from(month), i32::from(day))
    }

    /// Builds fields without validation; callers guarantee the triple came out
    /// of one of the conversion algorithms.
    pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts a Julian Day Number to Persian fields.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` when the year does not fit in an i32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_julian(jdn: JulianDay) -> Result<Self, ParseError> {
        let (year, month0, day) = julian_to_persian(jdn);
        let year = i32::try_from(year)
            .map_err(|_| ParseError::InvalidYear(if year > 0 { i32::MAX } else { i32::MIN }))?;
        Ok(Self::from_parts(year, (month0 + 1) as u8, day as u8))
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 (Farvardin) through 12 (Esfand)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub fn julian_day(&self) -> JulianDay {
        persian_to_julian(
            i64::from(self.year),
            i32::from(self.month) - 1,
            i32::from(self.day),
        )
    }

    pub fn is_leap_year(&self) -> bool {
        is_persian_leap_year(i64::from(self.year))
    }

    pub fn month_name(&self) -> &'static str {
        PERSIAN_MONTH_NAMES[usize::from(self.month - 1)]
    }

    pub fn month_length(&self) -> u8 {
        days_in_month(self.year, self.month).unwrap_or_default()
    }

    /// Short form joined by `delimiter`, e.g. `1400/01/01`
    pub fn to_string_with(&self, delimiter: &str) -> String {
        format!(
            "{}{delimiter}{}{delimiter}{}",
            zero_pad(i64::from(self.year)),
            zero_pad(i64::from(self.month)),
            zero_pad(i64::from(self.day)),
        )
    }
}

impl fmt::Display for PersianDateFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(DATE_DELIMITER))
    }
}

impl FromStr for PersianDateFields {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersianDateParser::default().parse(s)
    }
}

impl serde::Serialize for PersianDateFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDateFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week in the Persian order, Saturday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Position in the Persian week, Saturday = 0
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn persian_name(self) -> &'static str {
        PERSIAN_WEEK_DAY_NAMES[self as usize]
    }

    /// Weekday of a Julian day; Julian Day 0 was a Monday.
    pub const fn from_julian_day(jdn: JulianDay) -> Self {
        match (jdn.get() + 2).rem_euclid(7) {
            0 => Self::Saturday,
            1 => Self::Sunday,
            2 => Self::Monday,
            3 => Self::Tuesday,
            4 => Self::Wednesday,
            5 => Self::Thursday,
            _ => Self::Friday,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// Calendar field addressed by `PersianDate::add_persian_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    /// Raw zone offset; never addable
    #[display(fmt = "zone offset")]
    ZoneOffset,
    /// Daylight-saving offset; never addable
    #[display(fmt = "DST offset")]
    DstOffset,
}

// Helper functions

/// Days in `month` (1-based) of Persian `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` unless `month` is in `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, ParseError> {
    if month == 0 || month > MAX_MONTH {
        return Err(ParseError::InvalidMonth(i32::from(month)));
    }

    if month == ESFAND && is_persian_leap_year(i64::from(year)) {
        Ok(ESFAND_DAYS_LEAP)
    } else {
        Ok(PERSIAN_DAYS_IN_MONTH[usize::from(month - 1)])
    }
}

/// Prefixes values up to 9 with a zero; negative values get one too.
pub(crate) fn zero_pad(value: i64) -> String {
    if value <= 9 { format!("0{value}") } else { value.to_string() }
}
