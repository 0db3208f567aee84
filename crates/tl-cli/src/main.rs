use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{format, interval, shift, wall};
use tl_cli::{Cli, Commands, Config};
use tl_core::{Direction, calendar};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let now = calendar::now();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Shift {
            time,
            duration,
            before,
        }) => {
            let direction = if before {
                Direction::Before
            } else {
                Direction::After
            };
            shift::run(&mut stdout, &time, duration, direction, now)?;
        }
        Some(Commands::Ago { duration }) => shift::ago(&mut stdout, duration, now)?,
        Some(Commands::FromNow { duration }) => shift::from_now(&mut stdout, duration, now)?,
        Some(Commands::Format {
            duration,
            render,
            unaverage,
        }) => format::run(&mut stdout, &config, duration, render, unaverage)?,
        Some(Commands::Between { from, to, render }) => {
            interval::between(&mut stdout, &config, &from, &to, render, now)?;
        }
        Some(Commands::Until { time, render }) => {
            interval::until(&mut stdout, &config, &time, render, now)?;
        }
        Some(Commands::Since { time, render }) => {
            interval::since(&mut stdout, &config, &time, render, now)?;
        }
        Some(Commands::Wall(args)) => wall::run(&mut stdout, &config, &args)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
