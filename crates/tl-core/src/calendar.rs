//! Calendar-correct date arithmetic.
//!
//! Calendar units move the year/month fields and clamp the day down to the
//! end of the target month. Fixed units are then added as plain elapsed
//! seconds, carrying across day, month and year boundaries as usual.

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, SubsecRound, TimeDelta};

use crate::duration::Duration;
use crate::error::{Error, Result};

/// Which way a duration is applied to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Before,
    After,
}

/// Gregorian leap-year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
///
/// Returns 0 for a month outside `1..=12`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Applies `duration` to `origin` in the given direction.
///
/// One month before March 31st is the last day of February, never March 2nd.
pub fn apply(
    origin: NaiveDateTime,
    duration: Duration,
    direction: Direction,
) -> Result<NaiveDateTime> {
    let shifted = shift_months(origin, duration.calendar_months(), direction)?;
    shift_seconds(shifted, duration.fixed_seconds(), direction)
}

fn shift_months(origin: NaiveDateTime, months: u64, direction: Direction) -> Result<NaiveDateTime> {
    if months == 0 {
        return Ok(origin);
    }
    let months = i64::try_from(months).map_err(|_| Error::OutOfRange {
        reason: "calendar months exceed i64",
    })?;
    let total = i64::from(origin.year()) * 12 + i64::from(origin.month0());
    let shifted = match direction {
        Direction::After => total.checked_add(months),
        Direction::Before => total.checked_sub(months),
    }
    .ok_or(Error::OutOfRange {
        reason: "month arithmetic overflowed",
    })?;

    let year = i32::try_from(shifted.div_euclid(12)).map_err(|_| Error::OutOfRange {
        reason: "year exceeds i32",
    })?;
    let month = u32::try_from(shifted.rem_euclid(12) + 1).map_err(|_| Error::OutOfRange {
        reason: "month index out of range",
    })?;

    let last_day = days_in_month(year, month);
    let day = origin.day().min(last_day);
    if day < origin.day() {
        tracing::debug!(
            year,
            month,
            from = origin.day(),
            to = day,
            "clamped day to end of month"
        );
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(origin.time()))
        .ok_or(Error::OutOfRange {
            reason: "date outside supported calendar range",
        })
}

fn shift_seconds(
    origin: NaiveDateTime,
    seconds: u64,
    direction: Direction,
) -> Result<NaiveDateTime> {
    if seconds == 0 {
        return Ok(origin);
    }
    let delta = i64::try_from(seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or(Error::OutOfRange {
            reason: "seconds exceed representable delta",
        })?;
    match direction {
        Direction::After => origin.checked_add_signed(delta),
        Direction::Before => origin.checked_sub_signed(delta),
    }
    .ok_or(Error::OutOfRange {
        reason: "date-time outside supported range",
    })
}

/// The current local moment, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The day before [`today`].
pub fn yesterday() -> Result<NaiveDate> {
    today().checked_sub_days(Days::new(1)).ok_or(Error::OutOfRange {
        reason: "no day before the earliest date",
    })
}

/// The day after [`today`].
pub fn tomorrow() -> Result<NaiveDate> {
    today().checked_add_days(Days::new(1)).ok_or(Error::OutOfRange {
        reason: "no day after the latest date",
    })
}

impl Duration {
    /// This duration before `time`.
    pub fn before(self, time: NaiveDateTime) -> Result<NaiveDateTime> {
        apply(time, self, Direction::Before)
    }

    /// This duration after `time`.
    pub fn after(self, time: NaiveDateTime) -> Result<NaiveDateTime> {
        apply(time, self, Direction::After)
    }

    /// This duration before the current moment.
    pub fn ago(self) -> Result<NaiveDateTime> {
        self.ago_from(now())
    }

    /// This duration after the current moment.
    pub fn from_now(self) -> Result<NaiveDateTime> {
        self.from_now_from(now())
    }

    /// [`ago`](Self::ago) against an explicit reference moment.
    pub fn ago_from(self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.before(now)
    }

    /// [`from_now`](Self::from_now) against an explicit reference moment.
    pub fn from_now_from(self, now: NaiveDateTime) -> Result<NaiveDateTime> {
        self.after(now)
    }
}
