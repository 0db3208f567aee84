//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tl_core::{Duration, Style};

/// Calendar-aware duration arithmetic.
///
/// Applies mixed-unit durations to dates with month-end clamping, measures
/// intervals, and renders durations and times of day.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a duration to a point in time.
    Shift {
        /// `YYYY-MM-DD[ HH:MM:SS]` or `now`.
        time: String,

        /// Duration such as "1 month, 2 days" or "1mn 2dy".
        duration: Duration,

        /// Move backwards instead of forwards.
        #[arg(long)]
        before: bool,
    },

    /// The moment a duration before now.
    Ago {
        duration: Duration,
    },

    /// The moment a duration after now.
    FromNow {
        duration: Duration,
    },

    /// Parse a duration and render it again.
    Format {
        duration: Duration,

        #[command(flatten)]
        render: RenderArgs,

        /// Fold calendar months into seconds first.
        #[arg(long, conflicts_with = "average")]
        unaverage: bool,
    },

    /// Time between two moments, in either order.
    Between {
        from: String,
        to: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Time from now until a future moment.
    Until {
        time: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Time since a past moment.
    Since {
        time: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Parse and render a time of day.
    Wall(WallArgs),
}

/// Options shared by commands that print a duration.
#[derive(Debug, Clone, Copy, Args)]
pub struct RenderArgs {
    /// long, short or micro. Defaults to the configured style.
    #[arg(long)]
    pub style: Option<Style>,

    /// Express whole mean months as months.
    #[arg(long)]
    pub average: bool,
}

/// Arguments for `tl wall`.
#[derive(Debug, Args)]
pub struct WallArgs {
    /// `H:MM[:SS] AM|PM` or `HH:MM[:SS]`.
    pub time: String,

    /// Render with hours 0-23.
    #[arg(long)]
    pub twenty_four_hour: bool,

    /// Drop the seconds field.
    #[arg(long)]
    pub no_seconds: bool,

    /// Drop the AM/PM suffix.
    #[arg(long)]
    pub no_meridiem: bool,

    /// Place the time on a date (`YYYY-MM-DD`, today, yesterday, tomorrow).
    #[arg(long)]
    pub on: Option<String>,
}
