//! CLI argument structures
//!
//! This module defines the main CLI structure and all subcommand definitions.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Check hand-rolled max-by-key, filter and map against a fixed word list
#[derive(Parser, Debug)]
#[command(name = "wordscan")]
#[command(about = "wordscan - Check hand-rolled max-by-key, filter and map against a word list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv adds thread ids and line numbers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report format written to stdout
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the self-test against the built-in word list (default command)
    Check {
        /// Keep evaluating checks after the first failure
        #[arg(long)]
        no_fail_fast: bool,
    },

    /// Show what every helper reports for the given words
    Inspect {
        /// Words to inspect
        words: Vec<String>,
    },
}
