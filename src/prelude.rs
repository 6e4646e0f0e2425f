//! Prelude module for the persian_calendar crate.
//!
//! Re-exports the derive macros from derive_more and the chrono traits most
//! modules need to read calendar fields off a `DateTime`.

#[allow(unused_imports)]
pub use chrono::{Datelike, TimeZone, Timelike};
#[allow(unused_imports)]
pub use derive_more::{Display, From, Into};
