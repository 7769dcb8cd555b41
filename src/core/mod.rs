//! Core higher-order collection functions
//!
//! This module contains the pure functions the rest of the crate is built on.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return freshly allocated outputs
//! - Never mutate their input
//! - Call the supplied closure once per relevant element, in order
//! - Perform no I/O and hold no state between calls

pub mod filter;
pub mod map;
pub mod max;

use thiserror::Error;

pub use filter::filter;
pub use map::map;
pub use max::{max_by_key, max_by_key_iter};

/// Failure modes of the core functions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A maximum was requested from a collection with no elements
    #[error("cannot find max in empty list")]
    Empty,
}
