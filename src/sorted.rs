//! Sorted-array autocomplete index.
//!
//! Terms are stored in one lexicographically sorted `Vec<Term>`. Every word
//! matching a prefix then lives in a contiguous range, and a pair of binary
//! searches under the first-L-characters comparator finds the range
//! boundaries in O(log n) comparator calls. Ranking the range by weight
//! costs O(m log m) for m matches.
//!
//! The array is immutable after construction. There is no incremental
//! insert here: re-weighting means rebuilding the whole index, which is the
//! trade this implementation makes for its simplicity and cache behavior.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SORTED**: `terms` is sorted by [`Term::natural_order`] at all times.
//! 2. **STABLE TIES**: construction and ranking use stable sorts, so terms
//!    with equal weight come out in lexicographic order.

use crate::contracts::check_terms_sorted;
use crate::types::{BuildError, InvariantError, Term};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// =============================================================================
// COMPARATOR-PARAMETERIZED BINARY SEARCH
// =============================================================================

/// First index whose element the comparator considers equal to `key`.
///
/// `items` must be sorted with respect to `cmp`. Invokes the comparator at
/// most `1 + ceil(log2 n)` times: once per halving of the `(low, high)`
/// range plus one final equality check. Returns `None` for an empty slice
/// or when no element compares equal.
pub fn first_index_of<T, F>(items: &[T], key: &T, cmp: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = items.len() - 1;
    // The first equal element, if any, stays within [low, high].
    while low < high {
        let mid = low + (high - low) / 2;
        if cmp(&items[mid], key) == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    (cmp(&items[low], key) == Ordering::Equal).then_some(low)
}

/// Last index whose element the comparator considers equal to `key`.
///
/// Mirror image of [`first_index_of`]: same sortedness requirement, same
/// `1 + ceil(log2 n)` comparator-call bound, `None` when nothing matches.
pub fn last_index_of<T, F>(items: &[T], key: &T, cmp: F) -> Option<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = items.len() - 1;
    while low < high {
        // Round up so `low = mid` always makes progress.
        let mid = low + (high - low + 1) / 2;
        if cmp(&items[mid], key) == Ordering::Greater {
            high = mid - 1;
        } else {
            low = mid;
        }
    }
    (cmp(&items[low], key) == Ordering::Equal).then_some(low)
}

// =============================================================================
// INDEX
// =============================================================================

/// Autocomplete over a lexicographically sorted array of terms.
///
/// Duplicate words are stored as distinct terms (stable construction keeps
/// their input order among equal words); deduplication is the caller's
/// concern, unlike the trie which updates in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarySearchAutocomplete {
    terms: Vec<Term>,
}

impl BinarySearchAutocomplete {
    /// Build the index from parallel words and weights.
    ///
    /// Fails with [`BuildError::LengthMismatch`] if the sequences differ in
    /// length and [`BuildError::InvalidWeight`] on any negative or
    /// non-finite weight.
    pub fn new<S: AsRef<str>>(words: &[S], weights: &[f64]) -> Result<Self, BuildError> {
        if words.len() != weights.len() {
            return Err(BuildError::LengthMismatch {
                words: words.len(),
                weights: weights.len(),
            });
        }
        let mut terms = words
            .iter()
            .zip(weights)
            .map(|(word, &weight)| Term::new(word.as_ref(), weight))
            .collect::<Result<Vec<_>, _>>()?;
        terms.sort_by(Term::natural_order);

        let index = BinarySearchAutocomplete { terms };
        check_terms_sorted(&index);
        Ok(index)
    }

    /// The highest-weight word starting with `prefix`, or `None`.
    ///
    /// Weight ties go to the lexicographically smallest word, matching the
    /// stable ranking of [`top_k_matches`](Self::top_k_matches).
    pub fn top_match(&self, prefix: &str) -> Option<String> {
        let (first, last) = self.match_range(prefix)?;
        let mut best = &self.terms[first];
        for term in &self.terms[first + 1..=last] {
            // Strict comparison keeps the earliest term on ties.
            if term.weight() > best.weight() {
                best = term;
            }
        }
        Some(best.word().to_string())
    }

    /// Up to `k` words starting with `prefix`, in descending weight order.
    ///
    /// Locates the matching range, ranks a copy of it by descending weight
    /// (stable, so equal weights stay lexicographic), and returns the first
    /// `min(k, range length)` words.
    pub fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        let Some((first, last)) = self.match_range(prefix) else {
            return Vec::new();
        };
        let mut matches = self.terms[first..=last].to_vec();
        matches.sort_by(Term::reverse_weight_order);
        matches
            .into_iter()
            .take(k)
            .map(Term::into_word)
            .collect()
    }

    /// The weight stored for `word`, or `None` if absent.
    ///
    /// With duplicate words, returns the weight of the first stored term.
    pub fn weight_of(&self, word: &str) -> Option<f64> {
        let probe = Term::probe(word);
        let index = first_index_of(&self.terms, &probe, Term::natural_order)?;
        Some(self.terms[index].weight())
    }

    /// Number of stored terms (duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The sorted backing terms.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Re-check the sortedness invariant over the whole array.
    pub fn verify(&self) -> Result<(), InvariantError> {
        for position in 1..self.terms.len() {
            let out_of_order = Term::natural_order(&self.terms[position - 1], &self.terms[position])
                == Ordering::Greater;
            if out_of_order {
                return Err(InvariantError::UnsortedTerms { position });
            }
        }
        Ok(())
    }

    /// `[first, last]` bounds of the terms matching `prefix`, or `None`.
    ///
    /// The probe carries a placeholder weight; the prefix comparator never
    /// looks at it. L is counted in characters, not bytes.
    fn match_range(&self, prefix: &str) -> Option<(usize, usize)> {
        let len = prefix.chars().count();
        let probe = Term::probe(prefix);
        let cmp = Term::prefix_order(len);
        let first = first_index_of(&self.terms, &probe, &cmp)?;
        let last = last_index_of(&self.terms, &probe, &cmp)?;
        Some((first, last))
    }
}
