//! Self-test outcomes and their text/JSON rendering

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Result of evaluating one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Outcomes of a self-test run, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestReport {
    outcomes: Vec<CheckOutcome>,
    total: usize,
}

impl SelfTestReport {
    /// `total` is the number of checks that were scheduled, which exceeds
    /// `outcomes.len()` when a run stopped early.
    pub fn new(outcomes: Vec<CheckOutcome>, total: usize) -> Self {
        Self { outcomes, total }
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.total.saturating_sub(self.outcomes.len())
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count() == self.total
    }

    pub fn first_failure(&self) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| !o.passed)
    }

    /// One line per evaluated check, followed by a summary line when every
    /// check passed
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for outcome in &self.outcomes {
            if outcome.passed {
                let _ = writeln!(out, "{} PASSED!", outcome.name);
            } else {
                let _ = writeln!(
                    out,
                    "{} FAILED: expected {}, got {}",
                    outcome.name, outcome.expected, outcome.actual
                );
            }
        }

        if self.all_passed() {
            out.push_str("All tests PASSED!\n");
        } else if self.skipped_count() > 0 {
            let _ = writeln!(out, "{} check(s) skipped", self.skipped_count());
        }

        out
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
