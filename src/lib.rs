//! # wordscan
//!
//! Hand-rolled versions of three higher-order collection functions, checked
//! against a fixed list of words.
//!
//! ## Usage
//!
//! ```bash
//! wordscan [check [--no-fail-fast]] [--format text|json] [-v...]
//! wordscan inspect <WORD>...
//! ```
//!
//! ## Modules
//!
//! - `core` - `max_by_key`, `filter` and `map`, pure and allocation-returning
//! - `words` - The word list and the helpers that compose the core functions
//! - `selftest` - Literal assertions over the helpers and their report
//! - `config` - Defaults, `WORDSCAN_*` environment variables and CLI overrides
//! - `cli` - Argument parsing and command routing
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod selftest;
pub mod words;

pub use error::{Error, Result};
