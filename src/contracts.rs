//! Runtime contracts for index invariants.
//!
//! Debug-mode assertions that re-derive the structural invariants after the
//! mutations that could break them. These contracts:
//!
//! 1. Are **zero-cost in release builds** (gated on `debug_assertions`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the `verify()` re-derivations exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant checked                              |
//! |--------------------------|------------------------------------------------|
//! | `check_trie_invariants`  | subtree maxima exact, parent links consistent  |
//! | `check_terms_sorted`     | terms in lexicographic word order              |
//!
//! Queries rely on these invariants without re-checking them; a violation
//! here means a construction or insert path is broken, not that the caller
//! did anything wrong.

use crate::sorted::BinarySearchAutocomplete;
use crate::trie::TrieAutocomplete;

/// Check every trie invariant from scratch (debug builds only).
///
/// # Panics (debug builds only)
/// Panics if any cached subtree maximum or parent back-link is wrong.
#[inline]
pub fn check_trie_invariants(trie: &TrieAutocomplete) {
    if cfg!(debug_assertions) {
        if let Err(violation) = trie.verify() {
            panic!("contract violation in trie: {}", violation);
        }
    }
}

/// Check that the sorted-array terms really are sorted (debug builds only).
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of lexicographic order.
#[inline]
pub fn check_terms_sorted(index: &BinarySearchAutocomplete) {
    if cfg!(debug_assertions) {
        if let Err(violation) = index.verify() {
            panic!("contract violation in sorted index: {}", violation);
        }
    }
}
