//! Word-list helpers built on the core functions
//!
//! Each helper answers one question about a list of words by handing a
//! specific key, predicate or transform to [`crate::core`]. Lengths are
//! counted in `char`s.

pub mod summary;

pub use summary::WordSummary;

use crate::core::{filter, map, max_by_key, CollectionError};

/// The word list the self-test runs against
pub const WORDS: [&str; 9] = [
    "jumps", "laziest", "brown", "a", "quick", "fox", "the", "dog", "over",
];

/// Longest length, in characters, that still counts as a short word
pub const SHORT_WORD_MAX_LEN: usize = 3;

fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// The word that sorts last alphabetically
pub fn last_word_alphabetically<'a>(words: &[&'a str]) -> Result<&'a str, CollectionError> {
    max_by_key(words, |word| *word).copied()
}

/// The longest word; the first one wins when several share the length
pub fn longest_word<'a>(words: &[&'a str]) -> Result<&'a str, CollectionError> {
    max_by_key(words, |word| char_len(word)).copied()
}

/// The shortest word, found as the maximum of the negated length
pub fn shortest_word<'a>(words: &[&'a str]) -> Result<&'a str, CollectionError> {
    max_by_key(words, |word| -(char_len(word) as isize)).copied()
}

/// Words of at most [`SHORT_WORD_MAX_LEN`] characters, in their original order
pub fn short_words<'a>(words: &[&'a str]) -> Vec<&'a str> {
    filter(
        |word: &&str| char_len(word) <= SHORT_WORD_MAX_LEN,
        words.iter().copied(),
    )
}

/// The length of every word, position for position
pub fn word_lengths(words: &[&str]) -> Vec<usize> {
    map(|word: &&str| char_len(word), words)
}
