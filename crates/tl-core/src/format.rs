//! Human-readable rendering and parsing of durations.
//!
//! Each counter is decomposed on its own, largest unit first: months into
//! years and months, seconds into weeks, days, hours, minutes and seconds.
//! Units are then listed year first, second last, with zero units dropped.
//!
//! | unit   | long     | short | micro |
//! |--------|----------|-------|-------|
//! | year   | `year`   | `yr`  | `y`   |
//! | month  | `month`  | `mn`  | `M`   |
//! | week   | `week`   | `wk`  | `w`   |
//! | day    | `day`    | `dy`  | `d`   |
//! | hour   | `hour`   | `hr`  | `h`   |
//! | minute | `minute` | `min` | `m`   |
//! | second | `second` | `sec` | `s`   |

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::unit::Unit;

/// One `<count><label>` item, with optional space between.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*([A-Za-z]+)").unwrap());

/// Verbosity of [`Duration::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Every unit, spelled out: `1 hour, 3 minutes, 4 seconds`.
    #[default]
    Long,
    /// The two largest units, abbreviated: `1hr 3min`.
    Short,
    /// The largest unit only, one letter: `1h`.
    Micro,
}

impl Style {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Micro => "micro",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            "micro" => Ok(Self::Micro),
            _ => Err(Error::invalid("style", s)),
        }
    }
}

impl Duration {
    /// Nonzero `(count, unit)` pairs, largest unit first.
    #[must_use]
    pub fn components(self) -> Vec<(u64, Unit)> {
        let months = self.calendar_months();
        let mut rest = self.fixed_seconds();
        let mut parts = vec![(months / 12, Unit::Year), (months % 12, Unit::Month)];
        for unit in [Unit::Week, Unit::Day, Unit::Hour, Unit::Minute, Unit::Second] {
            parts.push((rest / unit.multiplier(), unit));
            rest %= unit.multiplier();
        }
        parts.retain(|(n, _)| *n != 0);
        parts
    }

    /// Renders this duration in the given style.
    ///
    /// A zero duration renders as zero seconds in that style.
    #[must_use]
    pub fn format(self, style: Style) -> String {
        let mut parts = self.components();
        if parts.is_empty() {
            parts.push((0, Unit::Second));
        }
        match style {
            Style::Long => parts
                .iter()
                .map(|&(n, unit)| {
                    let plural = if n == 1 { "" } else { "s" };
                    format!("{n} {}{plural}", unit.name())
                })
                .collect::<Vec<_>>()
                .join(", "),
            Style::Short => parts
                .iter()
                .take(2)
                .map(|&(n, unit)| format!("{n}{}", unit.short_label()))
                .collect::<Vec<_>>()
                .join(" "),
            Style::Micro => {
                let (n, unit) = parts[0];
                format!("{n}{}", unit.micro_label())
            }
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Style::Long))
    }
}

impl FromStr for Duration {
    type Err = Error;

    /// Reads back anything [`Duration::format`] produces.
    ///
    /// Items may appear in any order, separated by commas or whitespace.
    /// Repeated units add up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tracing::trace!(input = s, "parsing duration");
        let text = s.trim();
        let mut total = Self::ZERO;
        let mut cursor = 0;
        let mut items = 0;

        for caps in TOKEN_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if !is_separator(&text[cursor..whole.start()], items) {
                return Err(Error::parse(s, "duration"));
            }
            cursor = whole.end();
            items += 1;

            let n: u64 = caps[1].parse().map_err(|_| Error::parse(s, "duration"))?;
            let unit = Unit::from_label(&caps[2]).ok_or_else(|| Error::invalid("unit", &caps[2]))?;
            total = total.plus(Self::of(n, unit));
        }

        if items == 0 || cursor != text.len() {
            return Err(Error::parse(s, "duration"));
        }
        Ok(total)
    }
}

/// Text between two items: nothing before the first, commas/spaces after.
fn is_separator(gap: &str, items_so_far: usize) -> bool {
    if items_so_far == 0 {
        return gap.is_empty();
    }
    !gap.is_empty() && gap.chars().all(|c| c == ',' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Duration {
        Duration::combine([Duration::hours(1), Duration::minutes(3), Duration::seconds(4)])
    }

    #[test]
    fn long_style_lists_every_unit() {
        assert_eq!(sample().format(Style::Long), "1 hour, 3 minutes, 4 seconds");
        assert_eq!(sample().to_string(), "1 hour, 3 minutes, 4 seconds");
    }

    #[test]
    fn short_style_keeps_two_largest() {
        assert_eq!(sample().format(Style::Short), "1hr 3min");
    }

    #[test]
    fn micro_style_keeps_largest() {
        assert_eq!(sample().format(Style::Micro), "1h");
    }

    #[test]
    fn zero_units_are_skipped() {
        let d = Duration::days(2) + Duration::seconds(1);
        assert_eq!(d.format(Style::Long), "2 days, 1 second");
        assert_eq!(d.format(Style::Short), "2dy 1sec");
    }

    #[test]
    fn both_families_in_order() {
        let d = Duration::combine([
            Duration::years(2),
            Duration::months(1),
            Duration::weeks(1),
            Duration::days(1),
            Duration::hours(5),
        ]);
        assert_eq!(d.format(Style::Long), "2 years, 1 month, 1 week, 1 day, 5 hours");
        assert_eq!(d.format(Style::Short), "2yr 1mn");
        assert_eq!(d.format(Style::Micro), "2y");
    }

    #[test]
    fn counters_decompose_independently() {
        // 14 months and 90 minutes never borrow from each other.
        let d = Duration::months(14) + Duration::minutes(90);
        assert_eq!(d.format(Style::Long), "1 year, 2 months, 1 hour, 30 minutes");
    }

    #[test]
    fn micro_tells_month_from_minute() {
        assert_eq!(Duration::months(3).format(Style::Micro), "3M");
        assert_eq!(Duration::minutes(3).format(Style::Micro), "3m");
    }

    #[test]
    fn zero_renders_as_zero_seconds() {
        assert_eq!(Duration::ZERO.format(Style::Long), "0 seconds");
        assert_eq!(Duration::ZERO.format(Style::Short), "0sec");
        assert_eq!(Duration::ZERO.format(Style::Micro), "0s");
    }

    #[test]
    fn averaged_weeks_render_with_a_month() {
        let d = Duration::weeks(5).average();
        assert_eq!(d.format(Style::Short), "1mn 4dy");
    }

    #[test]
    fn style_tags() {
        assert_eq!("Short".parse::<Style>().unwrap(), Style::Short);
        let err = "verbose".parse::<Style>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { kind: "style", .. }));
    }

    #[test]
    fn parses_every_style() {
        assert_eq!("1 hour, 3 minutes, 4 seconds".parse::<Duration>().unwrap(), sample());
        assert_eq!(
            "1hr 3min".parse::<Duration>().unwrap(),
            Duration::hours(1) + Duration::minutes(3)
        );
        assert_eq!("1h".parse::<Duration>().unwrap(), Duration::hours(1));
        assert_eq!("3M".parse::<Duration>().unwrap(), Duration::months(3));
    }

    #[test]
    fn long_rendering_parses_back() {
        let d = Duration::combine([
            Duration::years(3),
            Duration::months(11),
            Duration::weeks(2),
            Duration::seconds(59),
        ]);
        assert_eq!(d.format(Style::Long).parse::<Duration>().unwrap(), d);
    }

    #[test]
    fn parse_sums_repeats_in_any_order() {
        assert_eq!(
            "5 minutes 2 hours, 10 minutes".parse::<Duration>().unwrap(),
            Duration::hours(2) + Duration::minutes(15)
        );
    }

    #[test]
    fn parse_rejects_unknown_units() {
        let err = "3 fortnights".parse::<Duration>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { kind: "unit", .. }));
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for input in ["", "hour", "1 hour; 2 minutes", "about 1h", "1h later", "1h2m"] {
            let err = input.parse::<Duration>().unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "{input:?}");
        }
    }
}
