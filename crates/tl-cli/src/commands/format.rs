//! `tl format`: parse a duration and render it again.

use std::io::Write;

use anyhow::Result;
use tl_core::Duration;

use super::util::render_duration;
use crate::{Config, RenderArgs};

pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    duration: Duration,
    render: RenderArgs,
    unaverage: bool,
) -> Result<()> {
    let duration = if unaverage {
        duration.unaverage()
    } else {
        duration
    };
    writeln!(writer, "{}", render_duration(duration, render, config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use tl_core::Style;

    fn render(style: Option<Style>, average: bool) -> RenderArgs {
        RenderArgs { style, average }
    }

    fn format(input: &str, render: RenderArgs, unaverage: bool) -> String {
        let mut out = Vec::new();
        run(&mut out, &Config::default(), input.parse().unwrap(), render, unaverage).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn format_every_style() {
        let input = "1h 3m 4s";
        let all = [Style::Long, Style::Short, Style::Micro]
            .map(|s| format(input, render(Some(s), false), false))
            .concat();
        assert_snapshot!(all, @r"
        1 hour, 3 minutes, 4 seconds
        1hr 3min
        1h
        ");
    }

    #[test]
    fn format_average_and_unaverage() {
        assert_eq!(
            format("5 weeks", render(None, true), false),
            "1 month, 4 days, 13 hours, 30 minutes, 54 seconds\n"
        );
        assert_eq!(
            format("2 months", render(None, false), true),
            "8 weeks, 4 days, 20 hours, 58 minutes, 12 seconds\n"
        );
    }

    #[test]
    fn format_uses_configured_style() {
        let config = Config {
            style: "short".to_string(),
            ..Config::default()
        };
        let mut out = Vec::new();
        run(&mut out, &config, Duration::days(9), render(None, false), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1wk 2dy\n");
    }
}
