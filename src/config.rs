use std::env;

use anyhow::anyhow;

use crate::cli::Args;

/// Runtime settings, read from the environment (and `.env`) then overridden
/// by command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub clear_screen: bool,
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            clear_screen: true,
            channel_buffer: 32,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from a variable lookup. Unset variables fall back to
    /// the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let clear_screen = match lookup("SHOP_CLEAR_SCREEN") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow!("SHOP_CLEAR_SCREEN must be true or false, got '{}'", value))?,
            None => defaults.clear_screen,
        };

        let channel_buffer = match lookup("SHOP_CHANNEL_BUFFER") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| anyhow!("SHOP_CHANNEL_BUFFER must be a number, got '{}'", value))?,
            None => defaults.channel_buffer,
        };

        let config = Config {
            log_filter: lookup("SHOP_LOG").unwrap_or(defaults.log_filter),
            clear_screen,
            channel_buffer,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.channel_buffer == 0 {
            return Err(anyhow!("SHOP_CHANNEL_BUFFER must be greater than zero"));
        }
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("SHOP_LOG must not be empty"));
        }
        Ok(())
    }

    pub fn with_args(mut self, args: &Args) -> Self {
        if args.verbose {
            self.log_filter = "debug".to_string();
        }
        if args.no_clear {
            self.clear_screen = false;
        }
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
