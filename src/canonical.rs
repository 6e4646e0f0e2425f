//! Day-granularity comparisons in a reference zone.
//!
//! Every instant is reduced to the start of its local day in the zone the
//! [`CanonicalDays`] value was built for (Asia/Tehran by default), so two
//! instants on the same calendar day compare equal regardless of time of day
//! or of the zone they were produced in.

use std::ops::RangeInclusive;

use chrono::{NaiveTime, Utc};
use chrono_tz::Tz;

use crate::date::PersianDate;
use crate::prelude::*;
use crate::zone::{at_millis, resolve_local, REFERENCE_ZONE};
use crate::{CalendarError, MAX_MONTH};

/// Source of the current moment.
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// The host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// How a calendar cell relates to today and to the selected range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DayType {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "day")]
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalDays {
    zone: Tz,
}

impl Default for CanonicalDays {
    fn default() -> Self {
        Self::new(REFERENCE_ZONE)
    }
}

impl CanonicalDays {
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Start of the local day containing `millis`.
    ///
    /// When midnight falls in a daylight-saving gap the day starts at the
    /// first instant after the gap.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if chrono cannot represent `millis`.
    pub fn canonical_day_instant(&self, millis: i64) -> Result<i64, CalendarError> {
        let local = at_millis(self.zone, millis)?.date_naive().and_time(NaiveTime::MIN);
        Ok(resolve_local(self.zone, local)?.timestamp_millis())
    }

    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if either instant is out of range.
    pub fn is_same_day(&self, a: i64, b: i64) -> Result<bool, CalendarError> {
        Ok(self.canonical_day_instant(a)? == self.canonical_day_instant(b)?)
    }

    /// Whether the day of `millis` lies strictly after the day of `start` and
    /// strictly before the day of `end`. False when either bound is missing.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if an instant is out of range.
    pub fn is_strictly_between(
        &self,
        millis: i64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<bool, CalendarError> {
        let (Some(start), Some(end)) = (start, end) else {
            return Ok(false);
        };
        let day = self.canonical_day_instant(millis)?;
        Ok(self.canonical_day_instant(start)? < day && day < self.canonical_day_instant(end)?)
    }

    /// Classifies the day of `millis`.
    ///
    /// `Today` is checked first. Start and end labels replace it, but only when
    /// both bounds are set and fall on different days; a one-day selection
    /// labels its day as a plain `Day` (or `Today`).
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if an instant is out of range.
    pub fn day_type(
        &self,
        millis: i64,
        now: i64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<DayType, CalendarError> {
        let day = self.canonical_day_instant(millis)?;
        let mut day_type = if day == self.canonical_day_instant(now)? {
            DayType::Today
        } else {
            DayType::Day
        };

        if let (Some(start), Some(end)) = (start, end) {
            let start = self.canonical_day_instant(start)?;
            let end = self.canonical_day_instant(end)?;
            if start != end {
                if day == start {
                    day_type = DayType::Start;
                } else if day == end {
                    day_type = DayType::End;
                }
            }
        }
        Ok(day_type)
    }

    /// Start of today according to `clock`.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` for a clock outside chrono's range.
    pub fn today(&self, clock: &impl Clock) -> Result<PersianDate, CalendarError> {
        let start = self.canonical_day_instant(clock.now_millis())?;
        PersianDate::from_millis(start, self.zone)
    }

    /// Start of a Persian day in this zone.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` when the fields are not a calendar date.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<PersianDate, CalendarError> {
        PersianDate::from_persian(year, month, day, self.zone)
    }

    /// The first day of every month of `years`, in calendar order.
    ///
    /// # Errors
    /// Fails when a year is outside the range the calendar can represent.
    pub fn month_starts(&self, years: RangeInclusive<i32>) -> Result<Vec<PersianDate>, CalendarError> {
        years
            .flat_map(|year| (1..=MAX_MONTH).map(move |month| (year, month)))
            .map(|(year, month)| self.date(year, month, 1))
            .collect()
    }

    /// Index of the month of `date` in [`month_starts`](Self::month_starts)
    /// for the same `years`, if the date falls inside them.
    pub fn month_position(years: &RangeInclusive<i32>, date: &PersianDate) -> Option<usize> {
        if !years.contains(&date.persian_year()) {
            return None;
        }
        let offset = usize::try_from(date.persian_year() - years.start()).ok()?;
        Some(offset * usize::from(MAX_MONTH) + usize::from(date.persian_month()) - 1)
    }
}
