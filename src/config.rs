use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalDays;
use crate::consts::DATE_DELIMITER;
use crate::date::PersianDate;
use crate::parser::PersianDateParser;
use crate::selection::DateSelection;
use crate::zone::{system_zone, REFERENCE_ZONE};
use crate::CalendarError;

/// Calendar settings; every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Zone of new dates. `None` uses the system zone.
    #[serde(default)]
    pub zone: Option<Tz>,

    /// Zone in which days are compared.
    #[serde(default = "default_reference_zone")]
    pub reference_zone: Tz,

    /// Separator between year, month and day in date strings.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_reference_zone() -> Tz {
    REFERENCE_ZONE
}
fn default_delimiter() -> String {
    DATE_DELIMITER.to_owned()
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            zone: None,
            reference_zone: default_reference_zone(),
            delimiter: default_delimiter(),
        }
    }
}

impl CalendarConfig {
    pub fn zone(&self) -> Tz {
        self.zone.unwrap_or_else(system_zone)
    }

    pub const fn canonical_days(&self) -> CanonicalDays {
        CanonicalDays::new(self.reference_zone)
    }

    pub fn parser(&self) -> PersianDateParser {
        PersianDateParser::new(self.delimiter.as_str())
    }

    pub const fn selection(&self) -> DateSelection {
        DateSelection::new(self.canonical_days())
    }

    /// # Errors
    /// Never fails for a sane system clock.
    pub fn now(&self) -> Result<PersianDate, CalendarError> {
        PersianDate::now_in(self.zone())
    }

    /// Start of a Persian day in the configured zone.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` when the fields are not a calendar date.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<PersianDate, CalendarError> {
        PersianDate::from_persian(year, month, day, self.zone())
    }

    /// Parses `text` with the configured delimiter into the start of that day.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` when the text is not a valid Persian date.
    pub fn parse_date(&self, text: &str) -> Result<PersianDate, CalendarError> {
        let fields = self.parser().parse(text)?;
        PersianDate::from_fields(fields, self.zone())
    }
}
