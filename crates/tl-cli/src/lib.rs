//! Calendar duration CLI library.
//!
//! This crate provides the CLI interface over `tl-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, RenderArgs, WallArgs};
pub use config::Config;
