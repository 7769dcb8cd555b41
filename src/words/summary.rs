//! Every helper applied to a caller-supplied word list

use super::{
    last_word_alphabetically, longest_word, short_words, shortest_word, word_lengths,
};
use crate::core::CollectionError;
use serde::Serialize;
use std::fmt::Write as _;

/// What each helper reports for one list of words.
///
/// The maximum-based fields are `None` when the list is empty; `error` then
/// carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSummary<'a> {
    pub words: Vec<&'a str>,
    pub last_word_alphabetically: Option<&'a str>,
    pub longest_word: Option<&'a str>,
    pub shortest_word: Option<&'a str>,
    pub short_words: Vec<&'a str>,
    pub word_lengths: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> WordSummary<'a> {
    pub fn new(words: &[&'a str]) -> Self {
        let mut error: Option<CollectionError> = None;
        let mut record = |result: Result<&'a str, CollectionError>| match result {
            Ok(word) => Some(word),
            Err(e) => {
                error.get_or_insert(e);
                None
            }
        };

        let last = record(last_word_alphabetically(words));
        let longest = record(longest_word(words));
        let shortest = record(shortest_word(words));

        Self {
            words: words.to_vec(),
            last_word_alphabetically: last,
            longest_word: longest,
            shortest_word: shortest,
            short_words: short_words(words),
            word_lengths: word_lengths(words),
            error: error.map(|e| e.to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn render_text(&self) -> String {
        let missing = |value: Option<&str>| match value {
            Some(word) => word.to_string(),
            None => format!(
                "error: {}",
                self.error.as_deref().unwrap_or("no value")
            ),
        };

        let mut out = String::new();
        let _ = writeln!(out, "words: {:?}", self.words);
        let _ = writeln!(
            out,
            "last_word_alphabetically: {}",
            missing(self.last_word_alphabetically)
        );
        let _ = writeln!(out, "longest_word: {}", missing(self.longest_word));
        let _ = writeln!(out, "shortest_word: {}", missing(self.shortest_word));
        let _ = writeln!(out, "short_words: {:?}", self.short_words);
        let _ = writeln!(out, "word_lengths: {:?}", self.word_lengths);
        out
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WORDS;

    #[test]
    fn test_summary_of_word_list() {
        let summary = WordSummary::new(&WORDS);
        assert!(summary.is_complete());
        assert_eq!(summary.last_word_alphabetically, Some("the"));
        assert_eq!(summary.longest_word, Some("laziest"));
        assert_eq!(summary.shortest_word, Some("a"));
        assert_eq!(summary.short_words, vec!["a", "fox", "the", "dog"]);
        assert_eq!(summary.word_lengths, vec![5, 7, 5, 1, 5, 3, 3, 3, 4]);
    }

    #[test]
    fn test_summary_of_empty_list() {
        let summary = WordSummary::new(&[]);
        assert!(!summary.is_complete());
        assert_eq!(summary.longest_word, None);
        assert!(summary.short_words.is_empty());
        assert_eq!(
            summary.error.as_deref(),
            Some("cannot find max in empty list")
        );
        assert!(summary
            .render_text()
            .contains("longest_word: error: cannot find max in empty list"));
    }

    #[test]
    fn test_render_text() {
        let summary = WordSummary::new(&["over", "dog"]);
        assert_eq!(
            summary.render_text(),
            "words: [\"over\", \"dog\"]\n\
             last_word_alphabetically: over\n\
             longest_word: over\n\
             shortest_word: dog\n\
             short_words: [\"dog\"]\n\
             word_lengths: [4, 3]\n"
        );
    }

    #[test]
    fn test_json_omits_error_when_complete() {
        let json = WordSummary::new(&["fox"]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["longest_word"], "fox");
        assert!(value.get("error").is_none());

        let json = WordSummary::new(&[]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["longest_word"].is_null());
        assert_eq!(value["error"], "cannot find max in empty list");
    }
}
