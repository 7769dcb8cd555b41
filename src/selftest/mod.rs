//! Assertion-based self-test
//!
//! A [`Check`] runs one word helper lazily and compares its result with a
//! literal expectation. [`run_checks`] evaluates checks in order and collects
//! the outcomes into a [`SelfTestReport`].

pub mod report;

pub use report::{CheckOutcome, SelfTestReport};

use crate::core::CollectionError;
use crate::words::{
    last_word_alphabetically, longest_word, short_words, shortest_word, word_lengths,
};
use std::fmt::Debug;
use tracing::{debug, trace};

pub const EXPECTED_LAST_WORD: &str = "the";
pub const EXPECTED_LONGEST_WORD: &str = "laziest";
pub const EXPECTED_SHORTEST_WORD: &str = "a";
pub const EXPECTED_SHORT_WORDS: [&str; 4] = ["a", "fox", "the", "dog"];
pub const EXPECTED_WORD_LENGTHS: [usize; 9] = [5, 7, 5, 1, 5, 3, 3, 3, 4];

/// A named, not yet evaluated assertion
pub struct Check<'a> {
    name: &'static str,
    run: Box<dyn FnOnce() -> CheckOutcome + 'a>,
}

impl<'a> Check<'a> {
    /// Build a check that passes when `evaluate` returns `Ok(expected)`.
    ///
    /// An `Err` from `evaluate` fails the check and its message becomes the
    /// reported actual value.
    pub fn new<T, F>(name: &'static str, expected: T, evaluate: F) -> Self
    where
        T: Debug + PartialEq + 'a,
        F: FnOnce() -> Result<T, CollectionError> + 'a,
    {
        let run = move || {
            let (passed, actual) = match evaluate() {
                Ok(actual) => (actual == expected, format!("{actual:?}")),
                Err(e) => (false, format!("error: {e}")),
            };

            CheckOutcome {
                name: name.to_string(),
                passed,
                expected: format!("{expected:?}"),
                actual,
            }
        };

        Self {
            name,
            run: Box::new(run),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the check, consuming it
    pub fn evaluate(self) -> CheckOutcome {
        (self.run)()
    }
}

/// The five helper checks, in the order the self-test runs them
pub fn default_checks<'a>(words: &'a [&'a str]) -> Vec<Check<'a>> {
    vec![
        Check::new("get_last_word_alphabetically", EXPECTED_LAST_WORD, move || {
            last_word_alphabetically(words)
        }),
        Check::new("get_longest_word", EXPECTED_LONGEST_WORD, move || {
            longest_word(words)
        }),
        Check::new("get_shortest_word", EXPECTED_SHORTEST_WORD, move || {
            shortest_word(words)
        }),
        Check::new("get_short_words", EXPECTED_SHORT_WORDS.to_vec(), move || {
            Ok(short_words(words))
        }),
        Check::new("get_word_lengths", EXPECTED_WORD_LENGTHS.to_vec(), move || {
            Ok(word_lengths(words))
        }),
    ]
}

/// Evaluate `checks` in order.
///
/// With `fail_fast`, evaluation stops at the first failing check and the
/// remaining checks are counted as skipped.
pub fn run_checks(checks: Vec<Check<'_>>, fail_fast: bool) -> SelfTestReport {
    let total = checks.len();
    let mut outcomes = Vec::with_capacity(total);

    for check in checks {
        trace!("Evaluating check {}", check.name());
        let outcome = check.evaluate();

        if outcome.passed {
            debug!("Check {} passed", outcome.name);
        } else {
            debug!(
                "Check {} failed: expected {}, got {}",
                outcome.name, outcome.expected, outcome.actual
            );
        }

        let stop = fail_fast && !outcome.passed;
        outcomes.push(outcome);
        if stop {
            debug!("Stopping after first failure");
            break;
        }
    }

    SelfTestReport::new(outcomes, total)
}
