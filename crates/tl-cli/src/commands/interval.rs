//! Interval commands: `tl between`, `tl until`, `tl since`.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tl_core::interval;

use super::util::{parse_datetime, render_duration};
use crate::{Config, RenderArgs};

pub fn between<W: Write>(
    writer: &mut W,
    config: &Config,
    from: &str,
    to: &str,
    render: RenderArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let from = parse_datetime(from, now)?;
    let to = parse_datetime(to, now)?;
    let duration = interval::between(from, to);
    writeln!(writer, "{}", render_duration(duration, render, config)?)?;
    Ok(())
}

pub fn until<W: Write>(
    writer: &mut W,
    config: &Config,
    time: &str,
    render: RenderArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let target = parse_datetime(time, now)?;
    let duration = interval::until_from(now, target).context("cannot count down to it")?;
    writeln!(writer, "{}", render_duration(duration, render, config)?)?;
    Ok(())
}

pub fn since<W: Write>(
    writer: &mut W,
    config: &Config,
    time: &str,
    render: RenderArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let target = parse_datetime(time, now)?;
    let duration = interval::since_from(now, target).context("cannot count up from it")?;
    writeln!(writer, "{}", render_duration(duration, render, config)?)?;
    Ok(())
}
