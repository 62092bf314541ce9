//! The autocomplete contract and build-time index selection.
//!
//! [`Autocompletor`] is the flat capability contract both implementations
//! satisfy; there is no hierarchy beyond it. Callers that know which
//! implementation they want use [`TrieAutocomplete`] or
//! [`BinarySearchAutocomplete`] directly. Callers that pick at runtime go
//! through [`AutocompleteIndex`], an enum wrapper selected by [`IndexKind`]
//! at build time.
//!
//! # Choosing a kind
//!
//! - [`IndexKind::Trie`]: O(prefix length) descent plus best-first
//!   expansion proportional to the result count; supports repeated
//!   insertion (weight updates) before queries begin.
//! - [`IndexKind::SortedArray`]: O(log n) range location plus a rank of the
//!   matching range; immutable after construction, denser in memory.
//!
//! Both answer identical queries over identical inputs, modulo the
//! documented tie-break freedom among equal weights.

use crate::sorted::BinarySearchAutocomplete;
use crate::trie::TrieAutocomplete;
use crate::types::BuildError;
use serde::{Deserialize, Serialize};

/// The autocomplete capability: ranked prefix queries over a fixed
/// collection of weighted words.
///
/// Queries are infallible; "no match" is `None` or an empty `Vec`, never an
/// error. Implementations must answer in descending weight order and must
/// not be mutated concurrently with queries.
pub trait Autocompletor {
    /// The highest-weight word starting with `prefix`, if any.
    fn top_match(&self, prefix: &str) -> Option<String>;

    /// Up to `k` words starting with `prefix`, in descending weight order.
    ///
    /// Returns all matches when fewer than `k` exist, and an empty vector
    /// when none do (or when `k` is 0).
    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String>;

    /// The weight stored for an exact word, if present.
    fn weight_of(&self, word: &str) -> Option<f64>;

    /// Number of stored words. The trie counts distinct words; the sorted
    /// array counts stored terms, duplicates included.
    fn len(&self) -> usize;

    /// True when no words are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Autocompletor for TrieAutocomplete {
    fn top_match(&self, prefix: &str) -> Option<String> {
        TrieAutocomplete::top_match(self, prefix)
    }

    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        TrieAutocomplete::top_k_matches(self, prefix, k)
    }

    fn weight_of(&self, word: &str) -> Option<f64> {
        TrieAutocomplete::weight_of(self, word)
    }

    fn len(&self) -> usize {
        TrieAutocomplete::len(self)
    }
}

impl Autocompletor for BinarySearchAutocomplete {
    fn top_match(&self, prefix: &str) -> Option<String> {
        BinarySearchAutocomplete::top_match(self, prefix)
    }

    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        BinarySearchAutocomplete::top_k_matches(self, prefix, k)
    }

    fn weight_of(&self, word: &str) -> Option<f64> {
        BinarySearchAutocomplete::weight_of(self, word)
    }

    fn len(&self) -> usize {
        BinarySearchAutocomplete::len(self)
    }
}

/// Which implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum IndexKind {
    /// Prefix tree with subtree-maximum augmentation.
    #[default]
    Trie,
    /// Lexicographically sorted array with prefix-range binary search.
    SortedArray,
}

/// An autocomplete index whose implementation was selected at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AutocompleteIndex {
    Trie(TrieAutocomplete),
    SortedArray(BinarySearchAutocomplete),
}

impl AutocompleteIndex {
    /// Build the selected implementation from parallel words and weights.
    ///
    /// Validation is identical across kinds: mismatched sequence lengths
    /// and negative or non-finite weights are construction errors.
    pub fn build<S: AsRef<str>>(
        kind: IndexKind,
        words: &[S],
        weights: &[f64],
    ) -> Result<Self, BuildError> {
        match kind {
            IndexKind::Trie => TrieAutocomplete::new(words, weights).map(AutocompleteIndex::Trie),
            IndexKind::SortedArray => {
                BinarySearchAutocomplete::new(words, weights).map(AutocompleteIndex::SortedArray)
            }
        }
    }

    /// The kind selected at build time.
    pub fn kind(&self) -> IndexKind {
        match self {
            AutocompleteIndex::Trie(_) => IndexKind::Trie,
            AutocompleteIndex::SortedArray(_) => IndexKind::SortedArray,
        }
    }
}

impl Autocompletor for AutocompleteIndex {
    fn top_match(&self, prefix: &str) -> Option<String> {
        match self {
            AutocompleteIndex::Trie(index) => index.top_match(prefix),
            AutocompleteIndex::SortedArray(index) => index.top_match(prefix),
        }
    }

    fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        match self {
            AutocompleteIndex::Trie(index) => index.top_k_matches(prefix, k),
            AutocompleteIndex::SortedArray(index) => index.top_k_matches(prefix, k),
        }
    }

    fn weight_of(&self, word: &str) -> Option<f64> {
        match self {
            AutocompleteIndex::Trie(index) => index.weight_of(word),
            AutocompleteIndex::SortedArray(index) => index.weight_of(word),
        }
    }

    fn len(&self) -> usize {
        match self {
            AutocompleteIndex::Trie(index) => index.len(),
            AutocompleteIndex::SortedArray(index) => index.len(),
        }
    }
}
