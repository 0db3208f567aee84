//! The dual-counter duration value.
//!
//! A [`Duration`] keeps fixed-length units (seconds through weeks) and
//! calendar units (months and years) in separate counters, because a month
//! has no single length in seconds. The two only meet through
//! [`Duration::average`] and [`Duration::unaverage`].

use std::iter::Sum;
use std::ops::Add;

use crate::error::{Error, Result};
use crate::unit::{Family, SECONDS_PER_MONTH, Unit};
use crate::wall::{SECONDS_PER_DAY, WallClock};

/// An unsigned amount of elapsed time.
///
/// Direction (before/after, ago/from now) is supplied by the operation that
/// consumes the value, never stored in it. Two durations are equal when both
/// counters are equal, so `Duration::months(1) != Duration::days(30)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    fixed_seconds: u64,
    calendar_months: u64,
}

impl Duration {
    /// The empty duration.
    pub const ZERO: Self = Self {
        fixed_seconds: 0,
        calendar_months: 0,
    };

    /// Builds a duration from raw counter values.
    #[must_use]
    pub const fn from_parts(fixed_seconds: u64, calendar_months: u64) -> Self {
        Self {
            fixed_seconds,
            calendar_months,
        }
    }

    /// Builds a duration of `n` units.
    ///
    /// Saturates at `u64::MAX` in the relevant counter.
    #[must_use]
    pub const fn of(n: u64, unit: Unit) -> Self {
        let value = n.saturating_mul(unit.multiplier());
        match unit.family() {
            Family::Fixed => Self::from_parts(value, 0),
            Family::Calendar => Self::from_parts(0, value),
        }
    }

    #[must_use]
    pub const fn seconds(n: u64) -> Self {
        Self::of(n, Unit::Second)
    }

    #[must_use]
    pub const fn minutes(n: u64) -> Self {
        Self::of(n, Unit::Minute)
    }

    #[must_use]
    pub const fn hours(n: u64) -> Self {
        Self::of(n, Unit::Hour)
    }

    #[must_use]
    pub const fn days(n: u64) -> Self {
        Self::of(n, Unit::Day)
    }

    #[must_use]
    pub const fn weeks(n: u64) -> Self {
        Self::of(n, Unit::Week)
    }

    #[must_use]
    pub const fn months(n: u64) -> Self {
        Self::of(n, Unit::Month)
    }

    #[must_use]
    pub const fn years(n: u64) -> Self {
        Self::of(n, Unit::Year)
    }

    /// Sums any number of durations counter-wise.
    ///
    /// Order has no effect on the result.
    pub fn combine<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        parts.into_iter().fold(Self::ZERO, Self::plus)
    }

    /// Counter-wise sum, saturating on overflow.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self {
            fixed_seconds: self.fixed_seconds.saturating_add(other.fixed_seconds),
            calendar_months: self.calendar_months.saturating_add(other.calendar_months),
        }
    }

    /// The fixed-unit counter, in seconds.
    #[must_use]
    pub const fn fixed_seconds(self) -> u64 {
        self.fixed_seconds
    }

    /// The calendar-unit counter, in months.
    #[must_use]
    pub const fn calendar_months(self) -> u64 {
        self.calendar_months
    }

    /// Returns `true` if both counters are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.fixed_seconds == 0 && self.calendar_months == 0
    }

    /// Moves every whole mean month out of the seconds counter.
    ///
    /// Lossy in the sense that [`unaverage`](Self::unaverage) will not give
    /// back the original split, though the total elapsed seconds survive.
    #[must_use]
    pub const fn average(self) -> Self {
        Self {
            fixed_seconds: self.fixed_seconds % SECONDS_PER_MONTH,
            calendar_months: self
                .calendar_months
                .saturating_add(self.fixed_seconds / SECONDS_PER_MONTH),
        }
    }

    /// Moves the whole months counter into seconds at the mean month length.
    #[must_use]
    pub const fn unaverage(self) -> Self {
        Self {
            fixed_seconds: self
                .fixed_seconds
                .saturating_add(self.calendar_months.saturating_mul(SECONDS_PER_MONTH)),
            calendar_months: 0,
        }
    }

    /// Whole `unit`s held in that unit's own counter.
    ///
    /// No conversion between counters happens here: `Duration::years(1)`
    /// reports zero seconds until it is [`unaverage`](Self::unaverage)d.
    #[must_use]
    pub const fn get(self, unit: Unit) -> u64 {
        let counter = match unit.family() {
            Family::Fixed => self.fixed_seconds,
            Family::Calendar => self.calendar_months,
        };
        counter / unit.multiplier()
    }

    /// Interprets this duration as time elapsed since midnight.
    ///
    /// Fails with [`Error::TimeOutOfBounds`] when the months counter is
    /// nonzero or the seconds reach a full day.
    pub fn to_wall(self) -> Result<WallClock> {
        if self.calendar_months != 0 {
            return Err(Error::out_of_bounds(format!(
                "{} calendar month(s) have no wall-clock meaning",
                self.calendar_months
            )));
        }
        if self.fixed_seconds >= u64::from(SECONDS_PER_DAY) {
            return Err(Error::out_of_bounds(format!(
                "{} seconds is a day or longer",
                self.fixed_seconds
            )));
        }
        let secs = i64::try_from(self.fixed_seconds)
            .map_err(|_| Error::out_of_bounds("seconds exceed one day"))?;
        WallClock::from_seconds(secs)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::combine(iter)
    }
}

impl From<WallClock> for Duration {
    fn from(wall: WallClock) -> Self {
        wall.to_relative()
    }
}
