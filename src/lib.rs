//! Persian (Jalali/Shamsi) calendar engine.
//!
//! The Persian calendar has 12 months: the first six hold 31 days, the next
//! five 30 days, and Esfand 29 days in a common year or 30 in a leap year.
//! Leap years follow a 2820-year great grand cycle of 683 leap years, which
//! keeps the average year within a fraction of a second of the tropical year.
//!
//! The crate provides
//! - [`julian`]: Persian date <-> Julian Day Number arithmetic and the leap rule,
//! - [`bridge`]: a separate day-counting Gregorian <-> Persian conversion,
//! - [`PersianDateParser`]: validated parsing of delimited date strings,
//! - [`PersianDate`]: an instant in a time zone kept in sync with its Persian fields,
//! - [`CanonicalDays`] and [`DateSelection`]: day-granularity comparisons and the
//!   selection state a date-range picker is driven by.

pub mod bridge;
mod canonical;
mod config;
mod consts;
mod date;
pub mod julian;
mod parser;
mod prelude;
mod selection;
#[cfg(test)]
mod test_utils;
mod types;
pub mod zone;

pub use canonical::{CanonicalDays, Clock, DayType, FixedClock, SystemClock};
pub use config::CalendarConfig;
pub use consts::*;
pub use date::PersianDate;
pub use parser::PersianDateParser;
pub use selection::{DateSelection, RangeError};
pub use types::{days_in_month, CalendarField, JulianDay, PersianDateFields, Weekday};

use crate::prelude::*;
use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Rejection of a date string or of a year/month/day triple.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (must be at least 1)")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: u8, day: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for conversions and `PersianDate` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Malformed or invalid date input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A 0-indexed month outside `-11..=11` reached the Gregorian bridge.
    #[error("month index {0} is outside -11..=11")]
    MonthOutOfRange(i32),

    /// Zone and DST offsets cannot be shifted.
    #[error("field {0} cannot be added to a Persian date")]
    DisallowedField(CalendarField),

    /// Comparison against a value that is not a `PersianDate`.
    #[error("cannot compare a PersianDate with {0}")]
    TypeMismatch(&'static str),

    /// The instant is outside the range chrono can represent.
    #[error("instant {0} ms is out of range")]
    InstantOutOfRange(i64),

    /// The Julian day maps to an instant outside the millisecond range.
    #[error("{0} is out of range")]
    JulianDayOutOfRange(JulianDay),

    /// The Gregorian date produced by a conversion cannot be represented.
    #[error("Gregorian date {year}/{month0}/{day} (0-indexed month) is out of range")]
    UnrepresentableDate { year: i32, month0: i32, day: i32 },

    /// The date lies before 1 Farvardin 979 (20 March 1600) or past the last
    /// year the day-counting conversion accepts.
    #[error("date {year}/{month0}/{day} (0-indexed month) is outside the day-counting range")]
    OutsideBridgeRange { year: i32, month0: i32, day: i32 },

    /// Adding `amount` of `field` overflowed.
    #[error("adding {amount} {field} overflows")]
    FieldOverflow { field: CalendarField, amount: i32 },

    /// The wall-clock time falls in a gap of the zone.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: Tz },
}

/// Coarse classification of [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Wrong token count or non-numeric token
    #[display(fmt = "format error")]
    Format,
    /// Year, month or day outside the calendar
    #[display(fmt = "invalid date")]
    InvalidDate,
    /// Bad month index or disallowed field
    #[display(fmt = "invalid argument")]
    InvalidArgument,
    #[display(fmt = "type mismatch")]
    TypeMismatch,
    /// Not representable as an instant
    #[display(fmt = "out of range")]
    OutOfRange,
}

impl ParseError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) | Self::EmptyInput => ErrorKind::Format,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. } => {
                ErrorKind::InvalidDate
            }
        }
    }
}

impl CalendarError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(err) => err.kind(),
            Self::MonthOutOfRange(_) | Self::DisallowedField(_) => ErrorKind::InvalidArgument,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::InstantOutOfRange(_)
            | Self::JulianDayOutOfRange(_)
            | Self::UnrepresentableDate { .. }
            | Self::OutsideBridgeRange { .. }
            | Self::FieldOverflow { .. }
            | Self::NonexistentLocalTime { .. } => ErrorKind::OutOfRange,
        }
    }
}
