//! Runtime configuration
//!
//! Values start from [`Config::default`], are overridden by `WORDSCAN_*`
//! environment variables and finally by command-line flags.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const ENV_LOG_LEVEL: &str = "WORDSCAN_LOG_LEVEL";
pub const ENV_FORMAT: &str = "WORDSCAN_FORMAT";
pub const ENV_FAIL_FAST: &str = "WORDSCAN_FAIL_FAST";

/// How reports are written to stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter used when no `-v` flag is given
    pub log_level: Option<String>,
    pub format: OutputFormat,
    /// Stop the self-test at the first failed check
    pub fail_fast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            format: OutputFormat::Text,
            fail_fast: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults merged with the process environment
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();
        config.merge_env_vars()?;
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge variables from an arbitrary lookup, so tests never touch the
    /// real environment.
    pub fn merge_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            if !log_level.trim().is_empty() {
                self.log_level = Some(log_level.trim().to_string());
            }
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }

        if let Some(fail_fast) = lookup(ENV_FAIL_FAST) {
            self.fail_fast = parse_bool(ENV_FAIL_FAST, &fail_fast)?;
        }

        Ok(())
    }

    /// Apply flags given on the command line; `None` keeps the current value.
    pub fn apply_cli_overrides(&mut self, format: Option<OutputFormat>, fail_fast: Option<bool>) {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(fail_fast) = fail_fast {
            self.fail_fast = fail_fast;
        }
    }

    /// Tracing filter for the given `-v` count. Any `-v` wins over the
    /// configured level.
    pub fn log_filter(&self, verbose: u8) -> String {
        match (&self.log_level, verbose) {
            (Some(level), 0) => level.clone(),
            _ => get_log_level(verbose).to_string(),
        }
    }
}

/// Get the log level description based on verbosity
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
