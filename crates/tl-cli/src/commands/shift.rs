//! Shift commands: `tl shift`, `tl ago`, `tl from-now`.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tl_core::{Direction, Duration};

use super::util::{format_datetime, parse_datetime};

/// Applies `duration` to `time` and prints the result.
pub fn run<W: Write>(
    writer: &mut W,
    time: &str,
    duration: Duration,
    direction: Direction,
    now: NaiveDateTime,
) -> Result<()> {
    let origin = parse_datetime(time, now)?;
    let shifted = tl_core::apply(origin, duration, direction)
        .with_context(|| format!("failed to shift {} by {duration}", format_datetime(origin)))?;
    tracing::debug!(%origin, %shifted, ?direction, "shifted time");
    writeln!(writer, "{}", format_datetime(shifted))?;
    Ok(())
}

/// Prints the moment `duration` before `now`.
pub fn ago<W: Write>(writer: &mut W, duration: Duration, now: NaiveDateTime) -> Result<()> {
    let time = duration
        .ago_from(now)
        .with_context(|| format!("failed to compute {duration} ago"))?;
    writeln!(writer, "{}", format_datetime(time))?;
    Ok(())
}

/// Prints the moment `duration` after `now`.
pub fn from_now<W: Write>(writer: &mut W, duration: Duration, now: NaiveDateTime) -> Result<()> {
    let time = duration
        .from_now_from(now)
        .with_context(|| format!("failed to compute {duration} from now"))?;
    writeln!(writer, "{}", format_datetime(time))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn shift_after_clamps_to_month_end() {
        let got = output(|w| {
            run(w, "2000-01-31 03:45:00", Duration::months(1), Direction::After, now())
        });
        assert_eq!(got, "2000-02-29 03:45:00\n");
    }

    #[test]
    fn shift_before_clamps_to_month_end() {
        let got = output(|w| {
            run(w, "2000-03-31 03:45:00", Duration::months(1), Direction::Before, now())
        });
        assert_eq!(got, "2000-02-29 03:45:00\n");
    }

    #[test]
    fn shift_from_now() {
        let d = Duration::days(1) + Duration::hours(2);
        let got = output(|w| run(w, "now", d, Direction::After, now()));
        assert_eq!(got, "2024-04-01 11:00:00\n");
    }

    #[test]
    fn shift_reports_overflow() {
        let mut out = Vec::new();
        let err = run(&mut out, "now", Duration::years(1_000_000), Direction::After, now())
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to shift 2024-03-31 09:00:00"));
    }

    #[test]
    fn ago_and_from_now() {
        assert_eq!(
            output(|w| ago(w, Duration::months(1), now())),
            "2024-02-29 09:00:00\n"
        );
        assert_eq!(
            output(|w| from_now(w, Duration::weeks(2), now())),
            "2024-04-14 09:00:00\n"
        );
    }
}
