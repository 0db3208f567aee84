//! The unit-tag vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Seconds in a mean Gregorian month (365.2425 days / 12).
///
/// This is the only bridge between the fixed and calendar counters of a
/// [`Duration`](crate::Duration).
pub const SECONDS_PER_MONTH: u64 = 2_629_746;

/// Which counter of a duration a unit feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Constant-length units, counted in seconds.
    Fixed,
    /// Variable-length units, counted in months.
    Calendar,
}

/// A unit of time.
///
/// Variants are declared largest first, which is also the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// The counter this unit is stored in.
    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Self::Year | Self::Month => Family::Calendar,
            Self::Week | Self::Day | Self::Hour | Self::Minute | Self::Second => Family::Fixed,
        }
    }

    /// How many counter steps one of this unit is worth.
    ///
    /// Seconds for fixed units, months for calendar units.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Year => 12,
            Self::Month | Self::Second => 1,
            Self::Week => 604_800,
            Self::Day => 86_400,
            Self::Hour => 3_600,
            Self::Minute => 60,
        }
    }

    /// Singular English name, e.g. `"minute"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// Abbreviation used by the short style.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Year => "yr",
            Self::Month => "mn",
            Self::Week => "wk",
            Self::Day => "dy",
            Self::Hour => "hr",
            Self::Minute => "min",
            Self::Second => "sec",
        }
    }

    /// Single letter used by the micro style.
    ///
    /// Month and minute are told apart by case: `M` is month, `m` is minute.
    #[must_use]
    pub const fn micro_label(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "M",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }

    /// Resolves any label the formatter can emit back to a unit.
    ///
    /// Long names (singular or plural) and short labels are matched
    /// case-insensitively. Micro letters are case-sensitive because `M`
    /// and `m` differ.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if let Some(unit) = Self::ALL.into_iter().find(|u| u.micro_label() == label) {
            return Some(unit);
        }
        let lower = label.to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Self::ALL.into_iter().find(|u| {
            u.name() == lower
                || u.name() == singular
                || u.short_label() == lower
                || u.short_label() == singular
        })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|u| u.name() == singular)
            .ok_or_else(|| Error::invalid("unit", s))
    }
}
