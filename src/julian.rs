//! Persian date <-> Julian Day Number arithmetic.
//!
//! The Persian calendar groups years into a great grand cycle of 2820 years
//! holding 683 leap years, so converting to and from a Julian Day Number is a
//! matter of dividing, rounding and multiplying around the cycle base year 474.
//! Julian Day 1948321 (1 Farvardin 1) is the focal point.

use crate::consts::{CYCLE_BASE_YEAR, GRAND_CYCLE_DAYS, GRAND_CYCLE_YEARS, PERSIAN_EPOCH};
use crate::types::JulianDay;

/// Days from 1 Farvardin through the end of Shahrivar (six 31-day months)
const FIRST_HALF_DAYS: i64 = 186;
/// `cycle year` value at the last day of a great grand cycle
const CYCLE_LAST_DAY: i64 = GRAND_CYCLE_DAYS - 1;

/// Floored-division remainder `x - y * floor(x / y)`.
///
/// Named `ceil` after the "ceil" of the calendar algorithm it was taken from;
/// it is not a ceiling.
#[allow(clippy::cast_possible_truncation)]
pub fn ceil(x: f64, y: f64) -> i64 {
    (x - y * (x / y).floor()) as i64
}

#[allow(clippy::cast_precision_loss)]
fn cycle_year(year: i64) -> i64 {
    ceil((year - CYCLE_BASE_YEAR) as f64, GRAND_CYCLE_YEARS as f64) + CYCLE_BASE_YEAR
}

/// Converts a Persian date to its Julian Day Number.
///
/// `month0` is 0-indexed (0 = Farvardin). Out-of-range months are not
/// rejected; the offset formula simply extends past the year.
pub fn persian_to_julian(year: i64, month0: i32, day: i32) -> JulianDay {
    let ep_year = cycle_year(year);
    let month0 = i64::from(month0);
    let month_days = if month0 < 7 {
        31 * month0
    } else {
        30 * month0 + 6
    };

    JulianDay::new(
        365 * (ep_year - 1)
            + (682 * ep_year - 110).div_euclid(2816)
            + (PERSIAN_EPOCH - 1)
            + GRAND_CYCLE_DAYS * (year - CYCLE_BASE_YEAR).div_euclid(GRAND_CYCLE_YEARS)
            + month_days
            + i64::from(day),
    )
}

/// Converts a Julian Day Number to `(year, month0, day)`, month 0-indexed.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn julian_to_persian(jdn: JulianDay) -> (i64, i32, i32) {
    let jdn = jdn.get();
    let since_epoch = jdn - persian_to_julian(475, 0, 1).get();
    let c_year = ceil(since_epoch as f64, GRAND_CYCLE_DAYS as f64);
    let y_cycle = if c_year == CYCLE_LAST_DAY {
        GRAND_CYCLE_YEARS
    } else {
        (2816 * c_year + 1_031_337).div_euclid(1_028_522)
    };
    let year = CYCLE_BASE_YEAR
        + GRAND_CYCLE_YEARS * since_epoch.div_euclid(GRAND_CYCLE_DAYS)
        + y_cycle;

    let day_of_year = 1 + jdn - persian_to_julian(year, 0, 1).get();
    let month0 = if day_of_year > FIRST_HALF_DAYS {
        ((day_of_year - 6) as f64 / 30.0).ceil() as i64 - 1
    } else {
        (day_of_year as f64 / 31.0).ceil() as i64 - 1
    };
    let month0 = month0 as i32;
    let day = (jdn - (persian_to_julian(year, month0, 1).get() - 1)) as i32;

    (year, month0, day)
}

/// Returns true if `year` is a leap year of the Persian calendar.
#[allow(clippy::cast_precision_loss)]
pub fn is_persian_leap_year(year: i64) -> bool {
    let base = ceil((year - CYCLE_BASE_YEAR) as f64, GRAND_CYCLE_YEARS as f64);
    ceil((38 + base + CYCLE_BASE_YEAR) as f64 * 682.0, 2816.0) < 682
}

/// Packs `(year, month0, day)` as `year << 16 | month0 << 8 | day`.
pub const fn pack(year: i64, month0: i32, day: i32) -> i64 {
    (year << 16) | ((month0 as i64) << 8) | day as i64
}

/// Inverse of [`pack`] for non-negative years.
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack(packed: i64) -> (i64, i32, i32) {
    (packed >> 16, ((packed >> 8) & 0xff) as i32, (packed & 0xff) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_is_floored_remainder() {
        assert_eq!(ceil(7.0, 3.0), 1);
        assert_eq!(ceil(-7.0, 3.0), 2);
        assert_eq!(ceil(-473.0, 2820.0), 2347);
        assert_eq!(ceil(6.0, 3.0), 0);
    }

    #[test]
    fn test_known_julian_days() {
        struct TestCase {
            date: (i64, i32, i32),
            jdn: i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date: (1, 0, 1),
                jdn: 1_948_321,
                description: "Persian epoch",
            },
            TestCase {
                date: (475, 0, 1),
                jdn: 2_121_446,
                description: "start of the grand cycle",
            },
            TestCase {
                date: (1361, 2, 1),
                jdn: 2_445_112,
                description: "1982-05-22",
            },
            TestCase {
                date: (1370, 0, 1),
                jdn: 2_448_337,
                description: "1991-03-21",
            },
            TestCase {
                date: (1399, 11, 30),
                jdn: 2_459_294,
                description: "leap day 1399",
            },
            TestCase {
                date: (1400, 0, 1),
                jdn: 2_459_295,
                description: "2021-03-21",
            },
            TestCase {
                date: (1403, 0, 1),
                jdn: 2_460_390,
                description: "2024-03-20",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(
                persian_to_julian(y, m, d).get(),
                case.jdn,
                "to julian: {}",
                case.description
            );
            assert_eq!(
                julian_to_persian(JulianDay::new(case.jdn)),
                case.date,
                "from julian: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_second_half_month_offsets() {
        // Mehr starts 186 days into the year
        let farvardin = persian_to_julian(1400, 0, 1).get();
        assert_eq!(persian_to_julian(1400, 6, 1).get() - farvardin, 186);
        assert_eq!(persian_to_julian(1400, 11, 1).get() - farvardin, 336);
        assert_eq!(julian_to_persian(JulianDay::new(farvardin + 186)), (1400, 6, 1));
        assert_eq!(julian_to_persian(JulianDay::new(farvardin + 185)), (1400, 5, 31));
    }

    #[test]
    fn test_round_trip_around_year_boundaries() {
        for year in [1, 474, 475, 1300, 1399, 1400, 2820, 3294] {
            for (month0, day) in [(0, 1), (5, 31), (6, 1), (11, 29)] {
                let jdn = persian_to_julian(year, month0, day);
                assert_eq!(
                    julian_to_persian(jdn),
                    (year, month0, day),
                    "{year}/{month0}/{day}"
                );
            }
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_persian_leap_year(1391));
        assert!(!is_persian_leap_year(1390));
        assert!(is_persian_leap_year(1399));
        assert!(!is_persian_leap_year(1400));
        assert!(is_persian_leap_year(1375));
        assert!(is_persian_leap_year(1408));
    }

    #[test]
    fn test_leap_year_matches_year_length() {
        for year in 1200..1600 {
            let length = persian_to_julian(year + 1, 0, 1).get() - persian_to_julian(year, 0, 1).get();
            assert_eq!(length == 366, is_persian_leap_year(year), "year {year}");
        }
    }

    #[test]
    fn test_pack_unpack() {
        let packed = pack(1400, 11, 29);
        assert_eq!(packed, (1400 << 16) | (11 << 8) | 29);
        assert_eq!(unpack(packed), (1400, 11, 29));
    }
}
