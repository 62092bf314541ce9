//! Shared test fixtures and builders.

#![allow(dead_code)]

use typeahead::{AutocompleteIndex, BinarySearchAutocomplete, IndexKind, TrieAutocomplete};

/// The canonical four-word corpus used throughout the docs.
pub const WORDS: [&str; 4] = ["air", "bat", "bell", "boy"];
pub const WEIGHTS: [f64; 4] = [3.0, 2.0, 4.0, 1.0];

pub fn sample_trie() -> TrieAutocomplete {
    TrieAutocomplete::new(&WORDS, &WEIGHTS).expect("valid fixture")
}

pub fn sample_array() -> BinarySearchAutocomplete {
    BinarySearchAutocomplete::new(&WORDS, &WEIGHTS).expect("valid fixture")
}

pub fn sample_index(kind: IndexKind) -> AutocompleteIndex {
    AutocompleteIndex::build(kind, &WORDS, &WEIGHTS).expect("valid fixture")
}

/// A corpus with nested prefixes, weight ties, and a shared first letter,
/// the shapes that historically break subtree-max caches and range
/// boundaries.
pub fn city_corpus() -> (Vec<&'static str>, Vec<f64>) {
    let words = vec![
        "san antonio",
        "san diego",
        "san francisco",
        "san jose",
        "santa ana",
        "santa clara",
        "santiago",
        "sao paulo",
        "seattle",
        "seoul",
    ];
    let weights = vec![1.5, 1.4, 0.9, 1.0, 0.3, 0.3, 6.0, 21.0, 0.7, 9.8];
    (words, weights)
}
