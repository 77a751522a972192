//! Configuration and CLI argument handling

use crate::countdown::DEFAULT_RESET_DELAY;
use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::time::Duration;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "radial-timer")]
#[command(about = "A countdown timer with an animated radial progress dial")]
#[command(version)]
pub struct Config {
    /// Fill color of the dial, as a hex code or color name
    #[arg(short, long, default_value = "#FF0000")]
    pub color: String,

    /// Radius of the dial in terminal rows
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..=40))]
    pub radius: u16,

    /// Duration to pre-fill, as MM:SS
    #[arg(short, long, default_value = "")]
    pub duration: String,

    /// Delay before the dial resets after the timer finishes, in milliseconds
    #[arg(long, default_value_t = DEFAULT_RESET_DELAY.as_millis() as u64)]
    pub reset_delay_ms: u64,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: "#FF0000".to_string(),
            radius: 8,
            duration: String::new(),
            reset_delay_ms: DEFAULT_RESET_DELAY.as_millis() as u64,
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Grace delay before the post-completion reset
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Publishes this configuration for [`Config::current`].
    ///
    /// Only the first call has an effect; returns `false` for later ones.
    pub fn install(self) -> bool {
        CONFIG.set(self).is_ok()
    }

    /// The installed configuration, or the defaults if none was installed.
    pub fn current() -> Config {
        CONFIG.get().cloned().unwrap_or_default()
    }
}
