//! Calendar-aware durations and wall-clock times.
//!
//! This crate contains:
//! - [`Duration`]: fixed seconds and calendar months kept in separate counters
//! - Calendar arithmetic: applying durations with end-of-month clamping
//! - [`WallClock`]: a time of day with no date
//! - Formatting and parsing durations at long, short and micro verbosity
//! - Interval helpers: `until`, `since`, `between`
//!
//! Absolute times are `chrono::NaiveDateTime` and dates are `chrono::NaiveDate`.
//! There is no time zone handling.

pub mod calendar;
mod duration;
mod error;
mod format;
pub mod interval;
mod unit;
mod wall;

pub use calendar::{Direction, apply, days_in_month, is_leap_year};
pub use duration::Duration;
pub use error::{Error, Result};
pub use format::Style;
pub use interval::{between, since, until};
pub use unit::{Family, SECONDS_PER_MONTH, Unit};
pub use wall::{HourFormat, Meridiem, SECONDS_PER_DAY, WallClock, WallFields, WallFormat};
