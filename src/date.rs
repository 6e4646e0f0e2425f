use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::bridge::{gregorian_to_persian, persian_to_gregorian};
use crate::consts::{
    DATE_DELIMITER, ESFAND, ESFAND_DAYS_LEAP, FARVARDIN, MAX_DAY, MILLIS_JULIAN_EPOCH, MILLIS_PER_DAY,
    MIN_DAY, SHAHRIVAR, TIME_SEPARATOR_WORD,
};
use crate::julian::{ceil, is_persian_leap_year, persian_to_julian};
use crate::parser::PersianDateParser;
use crate::prelude::*;
use crate::types::{zero_pad, CalendarField, JulianDay, PersianDateFields, Weekday};
use crate::zone::{at_millis, resolve_local, system_zone};
use crate::CalendarError;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;
const MILLIS_PER_SECOND: i64 = 1000;

/// An instant in a time zone together with its Persian calendar date.
///
/// The instant and the Persian fields are always consistent: every setter
/// computes a new instant and re-derives the fields from the Gregorian date
/// of that instant in the value's zone. A setter that fails leaves the value
/// untouched.
///
/// Two conversion paths are in play. Setters that take a whole date
/// (`set_persian_date`, `add_persian_date` on years and months) go through
/// the day-counting [`crate::bridge`]; setters of a single field
/// (`set_persian_year`, `set_persian_month`, `set_persian_day`) build a Julian
/// Day with [`crate::julian`] and keep the UTC time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersianDate {
    datetime: DateTime<Tz>,
    fields: PersianDateFields,
}

impl PersianDate {
    /// Creates a date from milliseconds since the Unix epoch, seen in `zone`.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if chrono cannot represent the
    /// instant, and `CalendarError::OutsideBridgeRange` for local dates before
    /// 20 March 1600.
    pub fn from_millis(millis: i64, zone: Tz) -> Result<Self, CalendarError> {
        Self::from_datetime(at_millis(zone, millis)?)
    }

    /// Creates a date from a zoned chrono date-time.
    ///
    /// # Errors
    /// Returns `CalendarError::OutsideBridgeRange` when the local date falls
    /// before 20 March 1600 (1 Farvardin 979) or past the bridge's last year.
    pub fn from_datetime(datetime: DateTime<Tz>) -> Result<Self, CalendarError> {
        let fields = persian_fields_of(&datetime)?;
        tracing::trace!(instant = %datetime, persian = %fields, "derived Persian fields");
        Ok(Self { datetime, fields })
    }

    /// Creates a date at local midnight of a validated Persian date in `zone`.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` when the fields are not a calendar date.
    pub fn from_persian(year: i32, month: u8, day: u8, zone: Tz) -> Result<Self, CalendarError> {
        let fields = PersianDateFields::new(year, month, day)?;
        Self::from_fields(fields, zone)
    }

    /// Creates a date at local midnight of `fields` in `zone`.
    ///
    /// # Errors
    /// Fails when the date cannot be represented as an instant in `zone`.
    pub fn from_fields(fields: PersianDateFields, zone: Tz) -> Result<Self, CalendarError> {
        let (year, month0, day) = persian_to_gregorian(
            fields.year(),
            i32::from(fields.month()) - 1,
            i32::from(fields.day()),
        )?;
        Self::at_gregorian(zone, (year, month0, day), NaiveTime::MIN)
    }

    /// The current moment in the system zone.
    ///
    /// # Errors
    /// Never fails for a sane system clock.
    pub fn now() -> Result<Self, CalendarError> {
        Self::now_in(system_zone())
    }

    /// The current moment in `zone`.
    ///
    /// # Errors
    /// Never fails for a sane system clock.
    pub fn now_in(zone: Tz) -> Result<Self, CalendarError> {
        Self::from_datetime(Utc::now().with_timezone(&zone))
    }

    /// Builds a date from a Gregorian `(year, month0, day)` and a local time.
    /// Days past the end of the month roll into the following months.
    fn at_gregorian(
        zone: Tz,
        (year, month0, day): (i32, i32, i32),
        time: NaiveTime,
    ) -> Result<Self, CalendarError> {
        let unrepresentable = CalendarError::UnrepresentableDate { year, month0, day };
        let date = u32::try_from(month0 + 1)
            .ok()
            .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
            .and_then(|first| shift_days(first.and_time(time), i64::from(day) - 1))
            .ok_or(unrepresentable)?;
        Self::from_datetime(resolve_local(zone, date)?)
    }

    /// Milliseconds since the Unix epoch
    pub fn millis(&self) -> i64 {
        self.datetime.timestamp_millis()
    }

    pub fn zone(&self) -> Tz {
        self.datetime.timezone()
    }

    pub const fn datetime(&self) -> DateTime<Tz> {
        self.datetime
    }

    pub const fn fields(&self) -> PersianDateFields {
        self.fields
    }

    pub const fn persian_year(&self) -> i32 {
        self.fields.year
    }

    /// Month, 1 (Farvardin) through 12 (Esfand)
    pub const fn persian_month(&self) -> u8 {
        self.fields.month
    }

    pub const fn persian_day(&self) -> u8 {
        self.fields.day
    }

    pub fn julian_day(&self) -> JulianDay {
        self.fields.julian_day()
    }

    pub fn persian_month_name(&self) -> &'static str {
        self.fields.month_name()
    }

    /// Weekday of the local date
    pub fn weekday(&self) -> Weekday {
        Weekday::from(self.datetime.weekday())
    }

    pub fn persian_week_day_name(&self) -> &'static str {
        self.weekday().persian_name()
    }

    /// Weekday on which the current Persian month starts.
    pub fn first_weekday_of_month(&self) -> Weekday {
        let first = persian_to_julian(
            i64::from(self.fields.year),
            i32::from(self.fields.month) - 1,
            1,
        );
        Weekday::from_julian_day(first)
    }

    pub fn is_persian_leap_year(&self) -> bool {
        is_persian_leap_year(i64::from(self.fields.year))
    }

    /// Number of days in the current Persian month.
    pub fn month_length(&self) -> u8 {
        self.fields.month_length()
    }

    /// `1400/01/01`
    pub fn persian_short_date(&self) -> String {
        self.persian_short_date_with(DATE_DELIMITER)
    }

    pub fn persian_short_date_with(&self, delimiter: &str) -> String {
        self.fields.to_string_with(delimiter)
    }

    /// `1400/01/01 09:05:00`
    pub fn persian_short_date_time(&self) -> String {
        format!(
            "{} {}:{}:{}",
            self.persian_short_date(),
            zero_pad(i64::from(self.datetime.hour())),
            zero_pad(i64::from(self.datetime.minute())),
            zero_pad(i64::from(self.datetime.second())),
        )
    }

    /// Weekday, day, month name and year separated by two spaces.
    pub fn persian_long_date(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            self.persian_week_day_name(),
            self.fields.day,
            self.persian_month_name(),
            self.fields.year
        )
    }

    /// Long date followed by the unpadded local time.
    pub fn persian_long_date_time(&self) -> String {
        format!(
            "{} {TIME_SEPARATOR_WORD} {}:{}:{}",
            self.persian_long_date(),
            self.datetime.hour(),
            self.datetime.minute(),
            self.datetime.second()
        )
    }

    /// Moves the value to another instant, keeping its zone.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if chrono cannot represent `millis`.
    pub fn set_millis(&mut self, millis: i64) -> Result<(), CalendarError> {
        *self = Self::from_millis(millis, self.zone())?;
        Ok(())
    }

    /// Keeps the instant and re-derives the Persian fields in `zone`.
    ///
    /// # Errors
    /// Only fails for instants outside the range the bridge counts in.
    pub fn set_zone(&mut self, zone: Tz) -> Result<(), CalendarError> {
        *self = Self::from_datetime(self.datetime.with_timezone(&zone))?;
        Ok(())
    }

    /// Sets the whole Persian date, keeping the local time of day.
    ///
    /// Days past the end of the month roll forward (31 Mehr becomes 1 Aban).
    ///
    /// # Errors
    /// Returns `CalendarError::MonthOutOfRange` unless `month` is in `-10..=12`.
    pub fn set_persian_date(&mut self, year: i32, month: i32, day: i32) -> Result<(), CalendarError> {
        tracing::debug!(year, month, day, "set Persian date");
        let gregorian = persian_to_gregorian(year, month.saturating_sub(1), day)?;
        *self = Self::at_gregorian(self.zone(), gregorian, self.datetime.time())?;
        Ok(())
    }

    /// Sets the year and resets the day to 1, keeping the month.
    ///
    /// The time elapsed since UTC midnight is kept, not the local time of day.
    /// In a zone away from UTC the local date can therefore land a day off the
    /// requested one. In Tehran a value at 02:00 local time lands on the
    /// following day.
    ///
    /// # Errors
    /// Returns an out-of-range error if the new instant cannot be represented.
    pub fn set_persian_year(&mut self, year: i32) -> Result<(), CalendarError> {
        tracing::debug!(year, "set Persian year");
        let jdn = persian_to_julian(
            julian_year(year),
            i32::from(self.fields.month) - 1,
            1,
        );
        self.set_julian_day(jdn)
    }

    /// Sets the month (1-based) and resets the day to 1.
    ///
    /// The time elapsed since UTC midnight is kept, not the local time of day.
    /// In a zone away from UTC the local date can therefore land a day off the
    /// requested one. In Tehran a value at 02:00 local time lands on the
    /// following day.
    ///
    /// # Errors
    /// Returns an out-of-range error if the new instant cannot be represented.
    pub fn set_persian_month(&mut self, month: i32) -> Result<(), CalendarError> {
        tracing::debug!(month, "set Persian month");
        let jdn = persian_to_julian(julian_year(self.fields.year), month.saturating_sub(1), 1);
        self.set_julian_day(jdn)
    }

    /// Sets the day of the current month.
    ///
    /// The time elapsed since UTC midnight is kept, not the local time of day.
    /// In a zone away from UTC the local date can therefore land a day off the
    /// requested one. In Tehran a value at 02:00 local time lands on the
    /// following day.
    ///
    /// # Errors
    /// Returns an out-of-range error if the new instant cannot be represented.
    pub fn set_persian_day(&mut self, day: i32) -> Result<(), CalendarError> {
        tracing::debug!(day, "set Persian day");
        let jdn = persian_to_julian(
            julian_year(self.fields.year),
            i32::from(self.fields.month) - 1,
            day,
        );
        self.set_julian_day(jdn)
    }

    /// Moves to Julian day `jdn`, keeping the time elapsed since UTC midnight.
    #[allow(clippy::cast_precision_loss)]
    fn set_julian_day(&mut self, jdn: JulianDay) -> Result<(), CalendarError> {
        let time_of_day = ceil(
            (self.millis() - MILLIS_JULIAN_EPOCH) as f64,
            MILLIS_PER_DAY as f64,
        );
        let millis = jdn
            .get()
            .checked_mul(MILLIS_PER_DAY)
            .and_then(|m| m.checked_add(MILLIS_JULIAN_EPOCH))
            .and_then(|m| m.checked_add(time_of_day))
            .ok_or(CalendarError::JulianDayOutOfRange(jdn))?;
        self.set_millis(millis)
    }

    /// Adds `amount` of `field`.
    ///
    /// Years and months move in the Persian calendar and keep the day (rolling
    /// forward when the month is shorter). Weeks and days move the local date;
    /// hours and smaller units move the instant.
    ///
    /// # Errors
    /// Returns `CalendarError::DisallowedField` for zone and DST offsets, and
    /// `CalendarError::FieldOverflow` when the result overflows.
    pub fn add_persian_date(&mut self, field: CalendarField, amount: i32) -> Result<(), CalendarError> {
        if amount == 0 {
            return Ok(());
        }
        let overflow = CalendarError::FieldOverflow { field, amount };
        let PersianDateFields { year, month, day } = self.fields;

        match field {
            CalendarField::Year => {
                let year = year.checked_add(amount).ok_or(overflow)?;
                self.set_persian_date(year, i32::from(month), i32::from(day))
            }
            CalendarField::Month => {
                let total = i64::from(month) - 1 + i64::from(amount);
                let year = i32::try_from(i64::from(year) + total.div_euclid(12)).map_err(|_| overflow)?;
                let month = total.rem_euclid(12) as i32 + 1;
                self.set_persian_date(year, month, i32::from(day))
            }
            CalendarField::Week => self.add_local_days(i64::from(amount) * 7, overflow),
            CalendarField::Day => self.add_local_days(i64::from(amount), overflow),
            CalendarField::Hour => self.add_millis(amount, MILLIS_PER_HOUR, overflow),
            CalendarField::Minute => self.add_millis(amount, MILLIS_PER_MINUTE, overflow),
            CalendarField::Second => self.add_millis(amount, MILLIS_PER_SECOND, overflow),
            CalendarField::Millisecond => self.add_millis(amount, 1, overflow),
            CalendarField::ZoneOffset | CalendarField::DstOffset => {
                Err(CalendarError::DisallowedField(field))
            }
        }
    }

    fn add_local_days(&mut self, days: i64, overflow: CalendarError) -> Result<(), CalendarError> {
        let local = shift_days(self.datetime.naive_local(), days).ok_or(overflow)?;
        *self = Self::from_datetime(resolve_local(self.zone(), local)?)?;
        Ok(())
    }

    fn add_millis(&mut self, amount: i32, unit: i64, overflow: CalendarError) -> Result<(), CalendarError> {
        let millis = i64::from(amount)
            .checked_mul(unit)
            .and_then(|delta| self.millis().checked_add(delta))
            .ok_or(overflow)?;
        self.set_millis(millis)
    }

    /// Parses `text` with `delimiter` and applies it with `set_persian_date`.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` when the text is not a valid Persian date.
    pub fn parse(&mut self, text: &str, delimiter: &str) -> Result<(), CalendarError> {
        let fields = PersianDateParser::new(delimiter).parse(text)?;
        self.set_persian_date(fields.year, i32::from(fields.month), i32::from(fields.day))
    }

    /// Orders by Persian year, month and day; the time of day is ignored.
    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.fields.cmp(&other.fields)
    }

    /// [`compare_to`](Self::compare_to) against a dynamically typed value.
    ///
    /// # Errors
    /// Returns `CalendarError::TypeMismatch` unless `other` is a `PersianDate`.
    pub fn try_compare(&self, other: &dyn Any) -> Result<Ordering, CalendarError> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.compare_to(other))
            .ok_or(CalendarError::TypeMismatch("a value that is not a PersianDate"))
    }
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fields, f)
    }
}

/// Persian fields of the local Gregorian date of `datetime`.
///
/// The day walk numbers Esfand 30 by its own 33-year cycle, so only the
/// month table bounds are checked here, not the 2820-year leap rule.
#[allow(clippy::cast_possible_wrap)]
fn persian_fields_of(datetime: &DateTime<Tz>) -> Result<PersianDateFields, CalendarError> {
    let (year, month0, day) = (datetime.year(), datetime.month0() as i32, datetime.day() as i32);
    let (p_year, p_month0, p_day) = gregorian_to_persian(year, month0, day)?;

    let month = u8::try_from(p_month0 + 1)
        .ok()
        .filter(|month| (FARVARDIN..=ESFAND).contains(month));
    let longest = |month: u8| if month > SHAHRIVAR { ESFAND_DAYS_LEAP } else { MAX_DAY };
    let day_of_month = month.and_then(|month| {
        u8::try_from(p_day)
            .ok()
            .filter(|day| (MIN_DAY..=longest(month)).contains(day))
            .map(|day| (month, day))
    });

    day_of_month
        .map(|(month, day)| PersianDateFields::from_parts(p_year, month, day))
        .ok_or(CalendarError::OutsideBridgeRange { year, month0, day })
}

/// Year 0 does not exist in the Julian day arithmetic; non-positive years shift by one.
const fn julian_year(year: i32) -> i64 {
    if year > 0 { year as i64 } else { year as i64 + 1 }
}

fn shift_days(local: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    if days >= 0 {
        local.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        local.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
