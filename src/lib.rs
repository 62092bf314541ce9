//! Weighted prefix autocomplete with two interchangeable indexes.
//!
//! Given a fixed collection of `(word, weight)` pairs, answer two queries:
//! the single highest-weight word starting with a prefix, and the top-k
//! highest-weight words starting with a prefix in descending weight order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│     trie.rs      │     │    sorted.rs     │
//! │ (Term, cmp, │     │ (TrieAutocomplete│     │ (BinarySearch-   │
//! │  errors)    │     │  subtree maxima) │     │  Autocomplete)   │
//! └─────────────┘     └────────┬─────────┘     └────────┬─────────┘
//!        │                     │                        │
//!        │                     ▼                        ▼
//!        │            ┌─────────────────────────────────────────┐
//!        └───────────▶│               index.rs                  │
//!                     │  (Autocompletor trait, IndexKind,       │
//!                     │   AutocompleteIndex enum dispatch)      │
//!                     └─────────────────────────────────────────┘
//! ```
//!
//! Both implementations satisfy the same [`Autocompletor`] contract and are
//! selected at construction time. The trie caches a per-node subtree
//! maximum so queries descend straight toward the best match; the sorted
//! array finds the contiguous prefix range with comparator-parameterized
//! binary search and ranks it by weight. Structural invariants are
//! re-derivable via `verify()` on either index and are asserted in debug
//! builds by the [`contracts`] module.
//!
//! # Usage
//!
//! ```
//! use typeahead::{Autocompletor, AutocompleteIndex, IndexKind};
//!
//! let words = ["air", "bat", "bell", "boy"];
//! let weights = [3.0, 2.0, 4.0, 1.0];
//!
//! let index = AutocompleteIndex::build(IndexKind::Trie, &words, &weights)?;
//! assert_eq!(index.top_match("b").as_deref(), Some("bell"));
//! assert_eq!(index.top_k_matches("b", 2), vec!["bell", "bat"]);
//! # Ok::<(), typeahead::BuildError>(())
//! ```
//!
//! # Concurrency
//!
//! Single-threaded, synchronous. Build fully, then query; concurrent reads
//! are fine once no further mutation happens, but the trie's insert path
//! mutates shared node state and must never interleave with queries.

// Module declarations
pub mod contracts;
mod index;
mod sorted;
mod trie;
mod types;

// Re-exports for public API
pub use index::{AutocompleteIndex, Autocompletor, IndexKind};
pub use sorted::{first_index_of, last_index_of, BinarySearchAutocomplete};
pub use trie::TrieAutocomplete;
pub use types::{BuildError, InvariantError, Term};
