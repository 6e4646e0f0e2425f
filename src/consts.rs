/// Milliseconds since 1970-01-01 of 00:00:00 UTC on Julian Day 0
pub const MILLIS_JULIAN_EPOCH: i64 = -210_866_803_200_000;

/// Milliseconds in one day (`24 * 60 * 60 * 1000`)
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian Day Number of 1 Farvardin 1 (March 19, 622 A.D.)
pub const PERSIAN_EPOCH: i64 = 1_948_321;

/// Length in years of the great grand cycle of the Persian calendar
pub(crate) const GRAND_CYCLE_YEARS: i64 = 2820;
/// Days in one great grand cycle
pub(crate) const GRAND_CYCLE_DAYS: i64 = 1_029_983;
/// Base year the grand cycle arithmetic is anchored on
pub(crate) const CYCLE_BASE_YEAR: i64 = 474;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// Maximum day number any month can hold
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin
pub const FARVARDIN: u8 = 1;
/// Last month with 31 days (Shahrivar)
pub const SHAHRIVAR: u8 = 6;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Persian month (0-indexed), Esfand shown for a common year
pub const PERSIAN_DAYS_IN_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days in each Gregorian month (0-indexed), February shown for a common year
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Persian month names, Farvardin first
pub const PERSIAN_MONTH_NAMES: [&str; 12] = [
    "\u{0641}\u{0631}\u{0648}\u{0631}\u{062f}\u{06cc}\u{0646}",
    "\u{0627}\u{0631}\u{062f}\u{06cc}\u{0628}\u{0647}\u{0634}\u{062a}",
    "\u{062e}\u{0631}\u{062f}\u{0627}\u{062f}",
    "\u{062a}\u{06cc}\u{0631}",
    "\u{0645}\u{0631}\u{062f}\u{0627}\u{062f}",
    "\u{0634}\u{0647}\u{0631}\u{06cc}\u{0648}\u{0631}",
    "\u{0645}\u{0647}\u{0631}",
    "\u{0622}\u{0628}\u{0627}\u{0646}",
    "\u{0622}\u{0630}\u{0631}",
    "\u{062f}\u{06cc}",
    "\u{0628}\u{0647}\u{0645}\u{0646}",
    "\u{0627}\u{0633}\u{0641}\u{0646}\u{062f}",
];

/// Persian weekday names; the week starts on Saturday (index 0)
pub const PERSIAN_WEEK_DAY_NAMES: [&str; 7] = [
    "\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{06cc}\u{06a9}\u{200c}\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{062f}\u{0648}\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{0633}\u{0647}\u{200c}\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{0686}\u{0647}\u{0627}\u{0631}\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{067e}\u{0646}\u{062c}\u{200c}\u{0634}\u{0646}\u{0628}\u{0647}",
    "\u{062c}\u{0645}\u{0639}\u{0647}",
];

/// Word placed between the date and the time in long date-time strings ("hour")
pub const TIME_SEPARATOR_WORD: &str = "\u{0633}\u{0627}\u{0639}\u{062a}";

/// Default delimiter of short date strings and the parser
pub const DATE_DELIMITER: &str = "/";

/// IANA name of the reference zone used for day canonicalization (IRST)
pub const REFERENCE_ZONE_NAME: &str = "Asia/Tehran";
