#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Terminal weather lookup with a 3-day forecast summary"
)]
pub struct Cli {
    /// City name (default: Nairobi)
    pub city: Option<String>,

    /// Units requested from the weather service
    #[arg(long, value_enum, default_value_t = UnitsArg::Metric)]
    pub units: UnitsArg,

    /// Weather API base URL (falls back to the SKYCAST_API_URL environment variable)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Target FPS for the loading animation (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Force ASCII icons
    #[arg(long)]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long, conflicts_with = "ascii_icons")]
    pub emoji_icons: bool,
}

impl Cli {
    #[must_use]
    pub fn default_city(&self) -> String {
        self.city.clone().unwrap_or_else(|| "Nairobi".to_string())
    }

    #[must_use]
    pub fn api_base_url(&self) -> Option<String> {
        self.base_url
            .clone()
            .or_else(|| std::env::var("SKYCAST_API_URL").ok())
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_base_url().is_none() {
            anyhow::bail!("no weather API base URL: pass --base-url or set SKYCAST_API_URL");
        }
        Ok(())
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }
}
