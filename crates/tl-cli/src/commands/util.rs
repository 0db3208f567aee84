//! Shared utilities for CLI commands.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use tl_core::{Duration, Style, calendar};

use crate::{Config, RenderArgs};

/// Output format for absolute times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse an absolute time relative to `now`.
///
/// Supports:
/// - `now`
/// - `today`, `yesterday`, `tomorrow` (midnight, counted from `now`)
/// - "2026-01-15 10:30:00" or "2026-01-15T10:30:00"
/// - "2026-01-15" (midnight)
pub fn parse_datetime(s: &str, now: NaiveDateTime) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    let midnight = |date: Option<NaiveDate>| {
        date.map(|d| d.and_time(chrono::NaiveTime::MIN))
            .with_context(|| format!("no date for {s}"))
    };
    match s.to_ascii_lowercase().as_str() {
        "now" => return Ok(now),
        "today" => return midnight(Some(now.date())),
        "yesterday" => return midnight(now.date().pred_opt()),
        "tomorrow" => return midnight(now.date().succ_opt()),
        _ => {}
    }
    for format in [DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    anyhow::bail!("Invalid time: {s}. Use YYYY-MM-DD[ HH:MM:SS] or 'now'")
}

/// Parse a calendar date.
///
/// Supports "YYYY-MM-DD", `today`, `yesterday` and `tomorrow`.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(calendar::today()),
        "yesterday" => calendar::yesterday().context("failed to compute yesterday"),
        "tomorrow" => calendar::tomorrow().context("failed to compute tomorrow"),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {s}. Use YYYY-MM-DD")),
    }
}

/// Format an absolute time for output.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Render a duration with command-line options falling back to config.
pub fn render_duration(
    duration: Duration,
    render: RenderArgs,
    config: &Config,
) -> anyhow::Result<String> {
    let style: Style = match render.style {
        Some(style) => style,
        None => config.style().context("invalid style in configuration")?,
    };
    let duration = if render.average {
        duration.average()
    } else {
        duration
    };
    Ok(duration.format(style))
}
