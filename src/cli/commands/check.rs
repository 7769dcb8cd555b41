//! Self-test command implementation

use crate::config::{Config, OutputFormat};
use crate::error::Error;
use crate::selftest::{default_checks, run_checks, SelfTestReport};
use crate::words::WORDS;
use anyhow::Result;
use tracing::debug;

/// Run the self-test over the built-in word list and print the report
pub fn run_check_command(config: &Config) -> Result<()> {
    debug!(
        "Running self-test over {} words (fail_fast: {})",
        WORDS.len(),
        config.fail_fast
    );

    let report = run_checks(default_checks(&WORDS), config.fail_fast);
    print!("{}", render_report(&report, config.format)?);

    check_passed(&report)
}

pub fn render_report(report: &SelfTestReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(format!("{}\n", report.to_json()?)),
    }
}

fn check_passed(report: &SelfTestReport) -> Result<()> {
    if report.all_passed() {
        return Ok(());
    }

    Err(Error::SelfTestFailed {
        failed: report.total() - report.passed_count(),
        total: report.total(),
    }
    .into())
}
