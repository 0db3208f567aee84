//! Time of day with no date attached.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use regex::Regex;

use crate::calendar;
use crate::duration::Duration;
use crate::error::{Error, Result};

/// Seconds in one civil day (no leap seconds).
pub const SECONDS_PER_DAY: u32 = 86_400;

/// `H:MM[:SS][ AM|PM]`, meridiem case-insensitive.
static WALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*([AaPp][Mm]))?$").unwrap()
});

/// Before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" => Ok(Self::Am),
            "pm" => Ok(Self::Pm),
            _ => Err(Error::invalid("meridiem", s)),
        }
    }
}

/// How hours are counted when reading or rendering a [`WallClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HourFormat {
    /// 1 through 12, paired with a [`Meridiem`].
    #[default]
    TwelveHour,
    /// 0 through 23.
    TwentyFourHour,
}

impl FromStr for HourFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "12" | "twelve_hour" => Ok(Self::TwelveHour),
            "24" | "twenty_four_hour" => Ok(Self::TwentyFourHour),
            _ => Err(Error::invalid("hour format", s)),
        }
    }
}

/// Rendering options for [`WallClock::format`].
///
/// The default is twelve-hour with seconds and meridiem: `1:05:00 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallFormat {
    pub hour_format: HourFormat,
    /// Append `:SS`.
    pub seconds: bool,
    /// Append ` AM`/` PM`. Ignored in twenty-four-hour form.
    pub meridiem: bool,
}

impl Default for WallFormat {
    fn default() -> Self {
        Self {
            hour_format: HourFormat::TwelveHour,
            seconds: true,
            meridiem: true,
        }
    }
}

/// A field mapping for [`WallClock::from_fields`].
///
/// Missing minute and second default to 0. A missing hour defaults to 0,
/// or to 12 when a meridiem is given (so `{ meridiem: Pm }` is noon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallFields {
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub meridiem: Option<Meridiem>,
}

/// A time of day, stored as seconds since midnight in `0..86_400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallClock {
    seconds: u32,
}

impl WallClock {
    pub const MIDNIGHT: Self = Self { seconds: 0 };
    pub const NOON: Self = Self {
        seconds: SECONDS_PER_DAY / 2,
    };

    /// Builds a wall-clock time from 24-hour fields.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 {
            return Err(Error::out_of_bounds(format!("hour {hour} not in 0..=23")));
        }
        Self::from_hms(hour, minute, second)
    }

    /// Builds a wall-clock time from 12-hour fields.
    pub fn with_meridiem(hour: u32, minute: u32, second: u32, meridiem: Meridiem) -> Result<Self> {
        Self::from_hms(twenty_four_hour(hour, meridiem)?, minute, second)
    }

    /// Builds a wall-clock time from seconds since midnight.
    pub fn from_seconds(seconds: i64) -> Result<Self> {
        u32::try_from(seconds)
            .ok()
            .filter(|s| *s < SECONDS_PER_DAY)
            .map(|seconds| Self { seconds })
            .ok_or_else(|| Error::out_of_bounds(format!("{seconds} not in 0..86400 seconds")))
    }

    /// Builds a wall-clock time from any subset of its fields.
    ///
    /// Fields are summed, so `{ second: 1800 }` is half past midnight. Only
    /// the total must fall within one day. With a meridiem, the hour must
    /// be in `1..=12`.
    pub fn from_fields(fields: WallFields) -> Result<Self> {
        let hour = match fields.meridiem {
            Some(meridiem) => twenty_four_hour(fields.hour.unwrap_or(12), meridiem)?,
            None => fields.hour.unwrap_or(0),
        };
        let total = i64::from(hour)
            .checked_mul(3_600)
            .zip(i64::from(fields.minute.unwrap_or(0)).checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(i64::from(fields.second.unwrap_or(0))))
            .ok_or_else(|| Error::out_of_bounds("field total overflowed"))?;
        Self::from_seconds(total)
    }

    /// The time-of-day part of an absolute time.
    #[must_use]
    pub fn from_datetime(time: NaiveDateTime) -> Self {
        Self {
            seconds: time.num_seconds_from_midnight() % SECONDS_PER_DAY,
        }
    }

    /// The current local time of day.
    pub fn now() -> Self {
        Self::from_datetime(calendar::now())
    }

    fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if minute > 59 {
            return Err(Error::out_of_bounds(format!("minute {minute} not in 0..=59")));
        }
        if second > 59 {
            return Err(Error::out_of_bounds(format!("second {second} not in 0..=59")));
        }
        Self::from_seconds(i64::from(hour * 3_600 + minute * 60 + second))
    }

    /// The hour in the requested format.
    #[must_use]
    pub const fn hour(self, format: HourFormat) -> u32 {
        let hour = self.seconds / 3_600;
        match format {
            HourFormat::TwentyFourHour => hour,
            HourFormat::TwelveHour => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.seconds / 60 % 60
    }

    #[must_use]
    pub const fn second(self) -> u32 {
        self.seconds % 60
    }

    #[must_use]
    pub const fn meridiem(self) -> Meridiem {
        if self.hour(HourFormat::TwentyFourHour) < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Seconds since midnight.
    #[must_use]
    pub const fn in_seconds(self) -> u32 {
        self.seconds
    }

    /// Whole minutes since midnight.
    #[must_use]
    pub const fn in_minutes(self) -> u32 {
        self.seconds / 60
    }

    /// Whole hours since midnight.
    #[must_use]
    pub const fn in_hours(self) -> u32 {
        self.seconds / 3_600
    }

    /// This time of day on `date`.
    #[must_use]
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        // under one day, so the result never leaves `date`
        date.and_time(NaiveTime::MIN) + TimeDelta::seconds(i64::from(self.seconds))
    }

    /// This time of day on the current local date.
    pub fn today_at(self) -> NaiveDateTime {
        self.on(calendar::today())
    }

    /// Elapsed time since midnight.
    #[must_use]
    pub fn to_relative(self) -> Duration {
        Duration::from_parts(u64::from(self.seconds), 0)
    }

    /// Renders with explicit options.
    #[must_use]
    pub fn format(self, options: WallFormat) -> String {
        let seconds = if options.seconds {
            format!(":{:02}", self.second())
        } else {
            String::new()
        };
        let meridiem = if options.meridiem && options.hour_format == HourFormat::TwelveHour {
            format!(" {}", self.meridiem())
        } else {
            String::new()
        };
        format!(
            "{}:{:02}{seconds}{meridiem}",
            self.hour(options.hour_format),
            self.minute()
        )
    }
}

/// Converts a 12-hour clock hour to 0..=23.
fn twenty_four_hour(hour: u32, meridiem: Meridiem) -> Result<u32> {
    if !(1..=12).contains(&hour) {
        return Err(Error::out_of_bounds(format!(
            "hour {hour} not in 1..=12 with {meridiem}"
        )));
    }
    Ok(match meridiem {
        Meridiem::Am => hour % 12,
        Meridiem::Pm => hour % 12 + 12,
    })
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(WallFormat::default()))
    }
}

impl FromStr for WallClock {
    type Err = Error;

    /// Accepts `H:MM[:SS] AM|PM` (12-hour) or `HH:MM[:SS]` (24-hour).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tracing::trace!(input = s, "parsing wall-clock time");
        let caps = WALL_RE
            .captures(s.trim())
            .ok_or_else(|| Error::parse(s, "wall-clock time"))?;
        let field = |i: usize| -> Result<u32> {
            caps.get(i).map_or(Ok(0), |m| {
                m.as_str()
                    .parse()
                    .map_err(|_| Error::parse(s, "wall-clock time"))
            })
        };
        let (hour, minute, second) = (field(1)?, field(2)?, field(3)?);
        match caps.get(4) {
            Some(m) => Self::with_meridiem(hour, minute, second, m.as_str().parse()?),
            None => Self::new(hour, minute, second),
        }
    }
}

impl TryFrom<i64> for WallClock {
    type Error = Error;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        Self::from_seconds(seconds)
    }
}

impl From<WallClock> for u32 {
    fn from(wall: WallClock) -> Self {
        wall.seconds
    }
}
