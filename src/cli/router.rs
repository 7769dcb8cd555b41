//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::config::Config;
use anyhow::Result;
use tracing::trace;

/// Execute a CLI command based on the parsed arguments.
///
/// No subcommand runs the self-test.
pub fn execute_command(command: Option<Commands>, mut config: Config) -> Result<()> {
    let command = command.unwrap_or(Commands::Check {
        no_fail_fast: false,
    });
    trace!("Executing {:?} with {:?}", command, config);

    match command {
        Commands::Check { no_fail_fast } => {
            if no_fail_fast {
                config.apply_cli_overrides(None, Some(false));
            }
            run_check_command(&config)
        }
        Commands::Inspect { words } => run_inspect_command(&words, &config),
    }
}
