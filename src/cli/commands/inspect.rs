//! Inspect command implementation
//!
//! Applies every word helper to words given on the command line.

use crate::config::{Config, OutputFormat};
use crate::core::CollectionError;
use crate::words::WordSummary;
use anyhow::Result;
use tracing::{debug, warn};

/// Print what each helper reports for `words`.
///
/// Fails after printing when the list was empty, since the maximum-based
/// helpers have no answer.
pub fn run_inspect_command(words: &[String], config: &Config) -> Result<()> {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();
    debug!("Inspecting {} words", words.len());

    let summary = WordSummary::new(&words);
    match config.format {
        OutputFormat::Text => print!("{}", summary.render_text()),
        OutputFormat::Json => println!("{}", summary.to_json()?),
    }

    if summary.is_complete() {
        Ok(())
    } else {
        warn!("No maximum exists for an empty word list");
        Err(crate::Error::from(CollectionError::Empty).into())
    }
}
