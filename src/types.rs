//! The building blocks of an autocomplete index.
//!
//! A [`Term`] is an immutable `(word, weight)` pair. Terms are compared three
//! different ways depending on what the caller is doing, and the orderings
//! disagree with each other, so `Term` deliberately does not implement `Ord`:
//!
//! | Comparator                    | Orders by                        | Used for            |
//! |-------------------------------|----------------------------------|---------------------|
//! | [`Term::natural_order`]       | word, lexicographic              | index storage       |
//! | [`Term::prefix_order`]        | first `len` chars of the word    | prefix range search |
//! | [`Term::reverse_weight_order`]| weight, descending               | ranking results     |
//!
//! All character-level comparisons operate on Unicode scalar values
//! (`char`), never on bytes. The first character of `"über"` is `"ü"`, not
//! half of its UTF-8 encoding.
//!
//! # Invariants
//!
//! - **Term**: `weight >= 0.0` and finite. Enforced at construction;
//!   violating it is [`BuildError::InvalidWeight`], not a recoverable state.
//! - NaN and infinite weights are rejected outright: a NaN reaching the
//!   cached subtree maxima would make every weight comparison lie.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// TERM
// =============================================================================

/// An immutable `(word, weight)` pair.
///
/// The weight is validated at construction: non-negative and finite.
/// After that the pair never changes; re-weighting a word means re-inserting
/// it (trie) or rebuilding the index (sorted array).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    word: String,
    weight: f64,
}

impl Term {
    /// Create a term, rejecting negative or non-finite weights.
    pub fn new(word: impl Into<String>, weight: f64) -> Result<Self, BuildError> {
        let word = word.into();
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight { word, weight });
        }
        Ok(Term { word, weight })
    }

    /// The stored word.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The stored weight. Always non-negative and finite.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Consume the term, returning its word.
    #[inline]
    pub fn into_word(self) -> String {
        self.word
    }

    /// A probe term for range searches: the word with a placeholder weight.
    ///
    /// Only meaningful under comparators that ignore weight.
    pub(crate) fn probe(word: &str) -> Term {
        Term {
            word: word.to_string(),
            weight: 0.0,
        }
    }

    /// Natural order: lexicographic by word. Ignores weight.
    #[inline]
    pub fn natural_order(a: &Term, b: &Term) -> Ordering {
        a.word.cmp(&b.word)
    }

    /// Comparator over only the first `len` characters of each word.
    ///
    /// Two terms are equal under this comparator iff their words agree on
    /// the first `len` Unicode scalar values. With `len = 0` everything is
    /// equal, which is exactly what makes the empty prefix match the whole
    /// index.
    pub fn prefix_order(len: usize) -> impl Fn(&Term, &Term) -> Ordering {
        move |a, b| a.word.chars().take(len).cmp(b.word.chars().take(len))
    }

    /// Descending weight. Total order via `f64::total_cmp`.
    #[inline]
    pub fn reverse_weight_order(a: &Term, b: &Term) -> Ordering {
        b.weight.total_cmp(&a.weight)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Construction-time contract violations.
///
/// These are caller errors, raised synchronously at the point of detection
/// and never retried. "No match" at query time is *not* an error; queries
/// return `None` / an empty `Vec` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The parallel word and weight sequences have different lengths.
    LengthMismatch { words: usize, weights: usize },
    /// A weight is negative, NaN, or infinite.
    InvalidWeight { word: String, weight: f64 },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::LengthMismatch { words, weights } => {
                write!(f, "{} words but {} weights", words, weights)
            }
            BuildError::InvalidWeight { word, weight } => {
                write!(f, "invalid weight {} for word '{}'", weight, word)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Structural invariant violations, reported by the `verify()` methods.
///
/// A healthy index never produces these. They exist so tests (and debug
/// builds, via [`crate::contracts`]) can re-derive every invariant from
/// scratch and catch a broken construction path early.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// Sorted-array terms are out of lexicographic order.
    UnsortedTerms { position: usize },
    /// A node's cached subtree maximum disagrees with the recomputed value.
    SubtreeMaxMismatch {
        node: usize,
        cached: f64,
        actual: f64,
    },
    /// A child's parent back-reference does not point at its actual parent.
    BrokenParentLink { node: usize, child: usize },
    /// A child id points outside the node arena.
    ChildOutOfBounds { node: usize, child: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedTerms { position } => {
                write!(f, "terms not sorted at position {}", position)
            }
            InvariantError::SubtreeMaxMismatch {
                node,
                cached,
                actual,
            } => {
                write!(
                    f,
                    "node {} caches subtree max {} but actual max is {}",
                    node, cached, actual
                )
            }
            InvariantError::BrokenParentLink { node, child } => {
                write!(f, "child {} of node {} has a stale parent link", child, node)
            }
            InvariantError::ChildOutOfBounds { node, child } => {
                write!(f, "node {} references child {} outside the arena", node, child)
            }
        }
    }
}

impl std::error::Error for InvariantError {}
