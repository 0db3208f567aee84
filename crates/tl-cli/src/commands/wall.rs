//! `tl wall`: parse and render a time of day.

use std::io::Write;

use anyhow::{Context, Result};
use tl_core::{HourFormat, WallClock};

use super::util::{format_datetime, parse_date};
use crate::{Config, WallArgs};

pub fn run<W: Write>(writer: &mut W, config: &Config, args: &WallArgs) -> Result<()> {
    let wall: WallClock = args
        .time
        .parse()
        .with_context(|| format!("failed to read {:?} as a time of day", args.time))?;

    if let Some(date) = &args.on {
        let date = parse_date(date)?;
        writeln!(writer, "{}", format_datetime(wall.on(date)))?;
        return Ok(());
    }

    let mut format = config.wall_format();
    if args.twenty_four_hour {
        format.hour_format = HourFormat::TwentyFourHour;
    }
    if args.no_seconds {
        format.seconds = false;
    }
    if args.no_meridiem {
        format.meridiem = false;
    }
    writeln!(writer, "{}", wall.format(format))?;
    Ok(())
}
