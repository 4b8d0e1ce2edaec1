//! Command-line argument parsing for the demo
//!
//! Supports:
//! - Choosing how many tiles the dock shows
//! - Loading an explicit config file instead of the user config

use clap::Parser;
use std::path::PathBuf;

use crate::config::DockConfig;
use crate::error::Result;

/// Most tiles the demo palette can tell apart
pub const MAX_ITEMS: usize = 12;

/// Magnifying, reorderable dock demo
#[derive(Parser, Debug)]
#[command(name = "magdock", version, about = "Magnifying, reorderable dock demo")]
pub struct CliArgs {
    /// Number of tiles in the dock
    #[arg(short = 'n', long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(1..=MAX_ITEMS as i64))]
    pub items: u8,

    /// Config file to use instead of ~/.config/magdock/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub item_count: usize,
    pub dock: DockConfig,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    ///
    /// An explicit `--config` must load; the implicit user config falls back
    /// to defaults.
    pub fn into_config(self) -> Result<StartupConfig> {
        let dock = match &self.config {
            Some(path) => DockConfig::load_from(path)?,
            None => DockConfig::load(),
        };
        Ok(StartupConfig {
            item_count: self.items as usize,
            dock,
        })
    }
}
