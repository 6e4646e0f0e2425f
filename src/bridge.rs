//! Gregorian <-> Persian conversion by day counting.
//!
//! Independent of the Julian Day arithmetic in [`crate::julian`]: Gregorian
//! days are counted from 1600 through its 400/100/4-year blocks, shifted by
//! the 79-day offset between 1 January 1600 and 1 Farvardin 979, and laid out
//! on 33-year Persian sub-cycles. Both directions take and return 0-indexed
//! months.
//!
//! The count starts at 1 Farvardin 979 (20 March 1600). Earlier dates fall
//! outside the day walk and are rejected, as are years past [`MAX_BRIDGE_YEAR`].

use crate::CalendarError;
use crate::consts::{GREGORIAN_DAYS_IN_MONTH, PERSIAN_DAYS_IN_MONTH};

const GREGORIAN_BASE_YEAR: i32 = 1600;
const PERSIAN_BASE_YEAR: i32 = 979;
/// Days between 1600-01-01 and 979-01-01 (Persian)
const EPOCH_DIFFERENCE: i32 = 79;

/// Days in a 33-year Persian sub-cycle
const PERSIAN_CYCLE_DAYS: i32 = 12_053;
/// Days in a 4-year block containing one leap year
const FOUR_YEAR_DAYS: i32 = 1461;
/// Days in 400 Gregorian years
const GREGORIAN_CYCLE_DAYS: i32 = 146_097;
/// Days in a Gregorian century starting with a leap year
const LEAP_CENTURY_DAYS: i32 = 36_525;
/// Days in a Gregorian century without a leading leap year
const CENTURY_DAYS: i32 = 36_524;

/// Largest year either direction accepts
pub const MAX_BRIDGE_YEAR: i32 = 200_000;

const LAST_MONTH_INDEX: usize = 11;
const FEBRUARY_INDEX: usize = 1;

/// Year, 0-indexed month and day as used during the day walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearMonthDay {
    year: i32,
    month: i32,
    day: i32,
}

impl YearMonthDay {
    fn checked(year: i32, month: i32, day: i32, base_year: i32) -> Result<Self, CalendarError> {
        if !(-11..=11).contains(&month) {
            return Err(CalendarError::MonthOutOfRange(month));
        }
        let date = Self { year, month, day };
        if !(base_year..=MAX_BRIDGE_YEAR).contains(&year) {
            return Err(date.out_of_range());
        }
        Ok(date)
    }

    const fn out_of_range(self) -> CalendarError {
        CalendarError::OutsideBridgeRange {
            year: self.year,
            month0: self.month,
            day: self.day,
        }
    }

    /// Adds the 1-based day to a day count, rejecting counts before the base date.
    fn day_number(self, days_before: i32) -> Result<i32, CalendarError> {
        self.day
            .checked_sub(1)
            .and_then(|day| days_before.checked_add(day))
            .filter(|&days| days >= 0)
            .ok_or_else(|| self.out_of_range())
    }

    const fn into_tuple(self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

const fn is_gregorian_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Sum of the first `months` entries of a month-length table.
fn days_before_month(table: &[u8; 12], months: i32) -> i32 {
    table
        .iter()
        .take(usize::try_from(months).unwrap_or(0))
        .map(|&days| i32::from(days))
        .sum()
}

/// Converts a Gregorian `(year, month0, day)` to a Persian `(year, month0, day)`.
///
/// # Errors
/// Returns `CalendarError::MonthOutOfRange` if `month0` is outside `-11..=11`,
/// and `CalendarError::OutsideBridgeRange` for dates before 20 March 1600 or
/// past [`MAX_BRIDGE_YEAR`].
pub fn gregorian_to_persian(year: i32, month0: i32, day: i32) -> Result<(i32, i32, i32), CalendarError> {
    let gregorian = YearMonthDay::checked(year, month0, day, GREGORIAN_BASE_YEAR)?;
    Ok(gregorian_day_walk(gregorian)?.into_tuple())
}

fn gregorian_day_walk(gregorian: YearMonthDay) -> Result<YearMonthDay, CalendarError> {
    let g_year = gregorian.year - GREGORIAN_BASE_YEAR;

    let mut g_day_no =
        365 * g_year + (g_year + 3) / 4 - (g_year + 99) / 100 + (g_year + 399) / 400;
    g_day_no += days_before_month(&GREGORIAN_DAYS_IN_MONTH, gregorian.month);
    if gregorian.month > 1 && is_gregorian_leap(g_year) {
        g_day_no += 1;
    }

    let mut p_day_no = gregorian.day_number(g_day_no - EPOCH_DIFFERENCE)?;
    let cycles = p_day_no / PERSIAN_CYCLE_DAYS;
    p_day_no %= PERSIAN_CYCLE_DAYS;

    let mut p_year = PERSIAN_BASE_YEAR + 33 * cycles + 4 * (p_day_no / FOUR_YEAR_DAYS);
    p_day_no %= FOUR_YEAR_DAYS;
    if p_day_no >= 366 {
        p_year += (p_day_no - 1) / 365;
        p_day_no = (p_day_no - 1) % 365;
    }

    let mut month = 0;
    while month < LAST_MONTH_INDEX && p_day_no >= i32::from(PERSIAN_DAYS_IN_MONTH[month]) {
        p_day_no -= i32::from(PERSIAN_DAYS_IN_MONTH[month]);
        month += 1;
    }

    Ok(YearMonthDay {
        year: p_year,
        month: month as i32,
        day: p_day_no + 1,
    })
}

/// Converts a Persian `(year, month0, day)` to a Gregorian `(year, month0, day)`.
///
/// Days past the end of a month roll into the following months.
///
/// # Errors
/// Returns `CalendarError::MonthOutOfRange` if `month0` is outside `-11..=11`,
/// and `CalendarError::OutsideBridgeRange` for dates before 1 Farvardin 979 or
/// past [`MAX_BRIDGE_YEAR`].
pub fn persian_to_gregorian(year: i32, month0: i32, day: i32) -> Result<(i32, i32, i32), CalendarError> {
    let persian = YearMonthDay::checked(year, month0, day, PERSIAN_BASE_YEAR)?;
    Ok(persian_day_walk(persian)?.into_tuple())
}

fn persian_day_walk(persian: YearMonthDay) -> Result<YearMonthDay, CalendarError> {
    let p_year = persian.year - PERSIAN_BASE_YEAR;

    let mut p_day_no = 365 * p_year + (p_year / 33) * 8 + (p_year % 33 + 3) / 4;
    p_day_no += days_before_month(&PERSIAN_DAYS_IN_MONTH, persian.month);
    let p_day_no = persian.day_number(p_day_no)?;

    let mut g_day_no = p_day_no
        .checked_add(EPOCH_DIFFERENCE)
        .ok_or_else(|| persian.out_of_range())?;
    let mut g_year = GREGORIAN_BASE_YEAR + 400 * (g_day_no / GREGORIAN_CYCLE_DAYS);
    g_day_no %= GREGORIAN_CYCLE_DAYS;

    let mut leap = true;
    if g_day_no >= LEAP_CENTURY_DAYS {
        g_day_no -= 1;
        g_year += 100 * (g_day_no / CENTURY_DAYS);
        g_day_no %= CENTURY_DAYS;
        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    g_year += 4 * (g_day_no / FOUR_YEAR_DAYS);
    g_day_no %= FOUR_YEAR_DAYS;
    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        g_year += g_day_no / 365;
        g_day_no %= 365;
    }

    let month_length = |month: usize| {
        let days = i32::from(GREGORIAN_DAYS_IN_MONTH[month]);
        if month == FEBRUARY_INDEX && leap {
            days + 1
        } else {
            days
        }
    };

    let mut month = 0;
    while month < LAST_MONTH_INDEX && g_day_no >= month_length(month) {
        g_day_no -= month_length(month);
        month += 1;
    }

    Ok(YearMonthDay {
        year: g_year,
        month: month as i32,
        day: g_day_no + 1,
    })
}
