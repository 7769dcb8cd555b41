//! Command implementation modules
//!
//! Each command is implemented as a separate module.

pub mod check;
pub mod inspect;

pub use check::run_check_command;
pub use inspect::run_inspect_command;
