//! Elapsed time between absolute moments.
//!
//! Results only ever fill the seconds counter; call
//! [`Duration::average`] to express them in months.

use chrono::NaiveDateTime;

use crate::calendar;
use crate::duration::Duration;
use crate::error::{Error, Result};

/// Time from now until `target`, which must lie in the future.
pub fn until(target: NaiveDateTime) -> Result<Duration> {
    until_from(calendar::now(), target)
}

/// Time from `target`, which must lie in the past, until now.
pub fn since(target: NaiveDateTime) -> Result<Duration> {
    since_from(calendar::now(), target)
}

/// [`until`] against an explicit reference moment.
pub fn until_from(now: NaiveDateTime, target: NaiveDateTime) -> Result<Duration> {
    if target <= now {
        return Err(Error::TimeIsInThePast { target });
    }
    Ok(between(now, target))
}

/// [`since`] against an explicit reference moment.
pub fn since_from(now: NaiveDateTime, target: NaiveDateTime) -> Result<Duration> {
    if target >= now {
        return Err(Error::TimeIsInTheFuture { target });
    }
    Ok(between(target, now))
}

/// Absolute whole seconds between `a` and `b`, in either order.
#[must_use]
pub fn between(a: NaiveDateTime, b: NaiveDateTime) -> Duration {
    Duration::seconds((b - a).num_seconds().unsigned_abs())
}
