use crate::consts::{DATE_DELIMITER, ESFAND, ESFAND_DAYS_LEAP, MAX_DAY, MAX_MONTH, MIN_DAY, SHAHRIVAR};
use crate::julian::is_persian_leap_year;
use crate::types::PersianDateFields;
use crate::ParseError;

/// Splits a delimited `year<d>month<d>day` string and validates it as a
/// Persian calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersianDateParser {
    delimiter: String,
}

impl Default for PersianDateParser {
    fn default() -> Self {
        Self::new(DATE_DELIMITER)
    }
}

impl PersianDateParser {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Parses `text` into validated Persian fields.
    ///
    /// # Errors
    /// `EmptyInput` or `InvalidFormat` when the text is not three integer tokens
    /// separated by the delimiter; `InvalidYear`, `InvalidMonth` or `InvalidDay`
    /// when the tokens do not form a calendar date.
    pub fn parse(&self, text: &str) -> Result<PersianDateFields, ParseError> {
        let result = self.parse_tokens(text);
        if let Err(err) = &result {
            tracing::debug!(input = text, delimiter = %self.delimiter, error = %err, "rejected Persian date");
        }
        result
    }

    fn parse_tokens(&self, text: &str) -> Result<PersianDateFields, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if self.delimiter.is_empty() {
            return Err(ParseError::InvalidFormat("empty delimiter".to_owned()));
        }

        let parts: Vec<&str> = text.split(self.delimiter.as_str()).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "{text} is not a Persian date: expected 3 parts separated by '{}', found {}",
                self.delimiter,
                parts.len()
            )));
        }

        let year = Self::parse_i32(parts[0])?;
        let month = Self::parse_i32(parts[1])?;
        let day = Self::parse_i32(parts[2])?;

        Self::validate(year, month, day)
    }

    /// Helper to parse i32 with better error messages
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Checks calendar validity of a year, 1-based month and day.
    pub(crate) fn validate(year: i32, month: i32, day: i32) -> Result<PersianDateFields, ParseError> {
        if year < 1 {
            return Err(ParseError::InvalidYear(year));
        }
        let month = u8::try_from(month)
            .ok()
            .filter(|m| (1..=MAX_MONTH).contains(m))
            .ok_or(ParseError::InvalidMonth(month))?;

        let invalid_day = ParseError::InvalidDay { year, month, day };
        let day = u8::try_from(day)
            .ok()
            .filter(|d| (MIN_DAY..=MAX_DAY).contains(d))
            .ok_or_else(|| invalid_day.clone())?;

        if month > SHAHRIVAR && day == MAX_DAY {
            return Err(invalid_day);
        }
        if month == ESFAND && day == ESFAND_DAYS_LEAP && !is_persian_leap_year(i64::from(year)) {
            return Err(invalid_day);
        }

        Ok(PersianDateFields::from_parts(year, month, day))
    }
}
