//! Time-zone lookup and wall-clock resolution.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use chrono_tz::Tz;

use crate::CalendarError;
use crate::prelude::*;

/// The reference zone for day canonicalization (Iran Standard Time).
pub const REFERENCE_ZONE: Tz = chrono_tz::Asia::Tehran;

/// Returns the host's IANA zone, or UTC when it cannot be determined.
pub fn system_zone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!(zone = %name, "unknown system time zone, falling back to UTC");
            Tz::UTC
        }),
        Err(err) => {
            tracing::warn!(error = %err, "cannot read system time zone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Interprets `millis` since the Unix epoch in `zone`.
///
/// # Errors
/// Returns `CalendarError::InstantOutOfRange` if chrono cannot represent it.
pub fn at_millis(zone: Tz, millis: i64) -> Result<DateTime<Tz>, CalendarError> {
    zone.timestamp_millis_opt(millis)
        .single()
        .ok_or(CalendarError::InstantOutOfRange(millis))
}

/// Resolves a wall-clock time in `zone` to an instant.
///
/// Ambiguous times take the earlier instant. Times inside a spring-forward gap
/// move forward by one hour.
///
/// # Errors
/// Returns `CalendarError::NonexistentLocalTime` if no instant matches even
/// after the shift.
pub fn resolve_local(zone: Tz, local: NaiveDateTime) -> Result<DateTime<Tz>, CalendarError> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => local
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|shifted| zone.from_local_datetime(&shifted).earliest())
            .ok_or(CalendarError::NonexistentLocalTime { local, zone }),
    }
}
