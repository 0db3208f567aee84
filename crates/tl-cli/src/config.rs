//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tl_core::{HourFormat, Style, WallFormat};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default duration style: long, short or micro.
    pub style: String,
    /// Render times of day with AM/PM hours.
    pub twelve_hour: bool,
    /// Include seconds when rendering times of day.
    pub seconds: bool,
    /// Include the AM/PM suffix in twelve-hour form.
    pub meridiem: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::Long.as_str().to_string(),
            twelve_hour: true,
            seconds: true,
            meridiem: true,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TL_*)
        figment = figment.merge(Env::prefixed("TL_"));

        figment.extract()
    }

    /// The configured duration style.
    pub fn style(&self) -> tl_core::Result<Style> {
        self.style.parse()
    }

    /// The configured wall-clock rendering.
    pub const fn wall_format(&self) -> WallFormat {
        WallFormat {
            hour_format: if self.twelve_hour {
                HourFormat::TwelveHour
            } else {
                HourFormat::TwentyFourHour
            },
            seconds: self.seconds,
            meridiem: self.meridiem,
        }
    }
}

/// Returns the platform-specific config directory for tl.
///
/// On Linux: `~/.config/tl`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tl"))
}
