use crate::canonical::{CanonicalDays, Clock, DayType};
use crate::CalendarError;

/// Start and end of a day range picked one day at a time.
///
/// Bounds are instants in milliseconds; every predicate compares them at day
/// granularity through [`CanonicalDays`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    days:  CanonicalDays,
    start: Option<i64>,
    end:   Option<i64>,
}

/// Error type for selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start is after end.
    #[error("Invalid date range: start ({start} ms) is after end ({end} ms)")]
    InvalidRange { start: i64, end: i64 },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl DateSelection {
    /// An empty selection compared in the zone of `days`.
    pub const fn new(days: CanonicalDays) -> Self {
        Self {
            days,
            start: None,
            end: None,
        }
    }

    /// A selection seeded with initial bounds, each moved to the start of its day.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both bounds are given and start > end.
    pub fn with_initial(
        days: CanonicalDays,
        start: Option<i64>,
        end: Option<i64>,
    ) -> Result<Self, RangeError> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(RangeError::InvalidRange { start, end });
            }
        }
        Ok(Self {
            days,
            start: start.map(|ms| days.canonical_day_instant(ms)).transpose()?,
            end: end.map(|ms| days.canonical_day_instant(ms)).transpose()?,
        })
    }

    pub const fn start(&self) -> Option<i64> {
        self.start
    }

    pub const fn end(&self) -> Option<i64> {
        self.end
    }

    pub const fn days(&self) -> CanonicalDays {
        self.days
    }

    /// Feeds one picked instant into the selection.
    ///
    /// The first pick becomes the start. The next pick becomes the end if it is
    /// not before the start; any other pick restarts the selection from it.
    pub fn select(&mut self, millis: i64) {
        match (self.start, self.end) {
            (None, _) => self.start = Some(millis),
            (Some(start), None) if start <= millis => self.end = Some(millis),
            _ => {
                self.end = None;
                self.start = Some(millis);
            }
        }
        tracing::trace!(start = ?self.start, end = ?self.end, "selection updated");
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Both bounds set and in order.
    pub fn is_complete(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start <= end)
    }

    /// Whether `millis` falls on the start day or the end day.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if an instant is out of range.
    pub fn is_selected(&self, millis: i64) -> Result<bool, CalendarError> {
        for bound in self.start.iter().chain(self.end.iter()) {
            if self.days.is_same_day(millis, *bound)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether `millis` falls strictly between the start and end days.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if an instant is out of range.
    pub fn is_in_range(&self, millis: i64) -> Result<bool, CalendarError> {
        self.days.is_strictly_between(millis, self.start, self.end)
    }

    /// Classifies the day of `millis` against today and the selected bounds.
    ///
    /// # Errors
    /// Returns `CalendarError::InstantOutOfRange` if an instant is out of range.
    pub fn day_type(&self, millis: i64, clock: &impl Clock) -> Result<DayType, CalendarError> {
        self.days
            .day_type(millis, clock.now_millis(), self.start, self.end)
    }
}
