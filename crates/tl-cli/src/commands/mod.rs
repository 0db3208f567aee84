//! CLI subcommand implementations.

pub mod format;
pub mod interval;
pub mod shift;
pub mod util;
pub mod wall;
