//! Prefix-tree autocomplete index.
//!
//! A character-keyed trie where every node caches the maximum weight among
//! all words stored in its subtree. The cache is what makes the queries
//! fast: `top_match` descends straight toward the best word without visiting
//! the rest of the matching subtree, and `top_k_matches` runs a best-first
//! expansion that pops words in non-increasing weight order.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index.
//! The parent back-reference is an arena index too, which keeps ownership
//! acyclic; it is used only for upward invariant repair, never for traversal
//! or deallocation.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUBTREE_MAX**: after any insertion completes, `subtree_max` of every
//!    node equals the true maximum weight over all termini in its subtree,
//!    including the node itself.
//! 2. **PARENT_LINKS**: `nodes[child].parent == Some(parent)` for every
//!    child edge; the root (id 0, the empty prefix) has no parent.
//! 3. **QUIESCENT_QUERIES**: `subtree_max` only changes during insertion.
//!    Queries treat it as immutable, which is why an insert concurrent with
//!    a query is not allowed: build fully, then share read-only.
//!
//! `verify()` re-derives all of the above from scratch;
//! [`crate::contracts::check_trie_invariants`] runs it in debug builds.

use crate::contracts::check_trie_invariants;
use crate::types::{BuildError, InvariantError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

/// Index into the node arena.
type NodeId = usize;

/// The root node: represents the empty prefix.
const ROOT: NodeId = 0;

/// One character position in the tree.
///
/// The character itself is the key in the parent's `children` map. `word`
/// is `Some` iff this node is a terminus (the final character of a stored
/// word); `weight` is meaningful only for termini and stays 0.0 otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Node {
    /// Next character -> child node. Ordered for deterministic traversal
    /// and serialization.
    children: BTreeMap<char, NodeId>,
    /// Arena index of the parent; `None` only for the root.
    parent: Option<NodeId>,
    /// The complete stored word, if this node is a terminus.
    word: Option<String>,
    /// Weight of the stored word; 0.0 when not a terminus.
    weight: f64,
    /// Maximum weight among all termini in this node's subtree.
    subtree_max: f64,
}

impl Node {
    fn fresh(parent: NodeId, subtree_max: f64) -> Self {
        Node {
            children: BTreeMap::new(),
            parent: Some(parent),
            word: None,
            weight: 0.0,
            subtree_max,
        }
    }
}

/// A heap entry for best-first expansion, ordered by `subtree_max`.
///
/// The node id is a final disambiguator so the ordering is total; ties in
/// priority carry no semantic meaning.
#[derive(Debug)]
struct Candidate {
    priority: f64,
    node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Trie-backed autocomplete index with per-node subtree-maximum weights.
///
/// Built once from parallel word/weight sequences; `insert` also works
/// afterwards (re-inserting an existing word updates its weight), but must
/// never run concurrently with queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrieAutocomplete {
    nodes: Vec<Node>,
    word_count: usize,
}

impl TrieAutocomplete {
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

        let root = Node {
            children: BTreeMap::new(),
            parent: None,
            word: None,
            weight: 0.0,
            subtree_max: 0.0,
        };
        let mut trie = TrieAutocomplete {
            nodes: vec![root],
            word_count: 0,
        };
        for (word, &weight) in words.iter().zip(weights) {
            trie.insert(word.as_ref(), weight)?;
        }
        Ok(trie)
    }

    /// Insert a word, creating intermediate nodes as needed.
    ///
    /// Descending from the root, every ancestor's `subtree_max` is raised to
    /// at least `weight`. If the word already exists its weight is updated
    /// in place (no duplicate nodes); when the new weight is strictly
    /// smaller, the cached maxima on the path back to the root may be stale,
    /// so they are re-derived bottom-up.
    pub fn insert(&mut self, word: &str, weight: f64) -> Result<(), BuildError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(BuildError::InvalidWeight {
                word: word.to_string(),
                weight,
            });
        }

        let mut current = ROOT;
        for ch in word.chars() {
            if self.nodes[current].subtree_max < weight {
                self.nodes[current].subtree_max = weight;
            }
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::fresh(current, weight));
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        let prior = node.word.is_some().then_some(node.weight);
        node.word = Some(word.to_string());
        node.weight = weight;
        if node.subtree_max < weight {
            node.subtree_max = weight;
        }
        match prior {
            None => self.word_count += 1,
            // The old weight may still be cached anywhere on the path up to
            // the root; re-derive each level from corrected children.
            Some(old) if old > weight => self.repair_upward(current),
            Some(_) => {}
        }

        check_trie_invariants(self);
        Ok(())
    }

    /// The highest-weight word starting with `prefix`, or `None`.
    ///
    /// Follows the cached maxima: from the prefix node, repeatedly step into
    /// a child whose `subtree_max` equals the current one, until the node
    /// itself is the maximum-weight terminus of its subtree. Which child is
    /// taken on a priority tie is unspecified.
    pub fn top_match(&self, prefix: &str) -> Option<String> {
        let mut current = self.descend(prefix)?;
        loop {
            let node = &self.nodes[current];
            if let Some(word) = &node.word {
                if node.weight == node.subtree_max {
                    return Some(word.clone());
                }
            }
            let target = node.subtree_max;
            current = node
                .children
                .values()
                .copied()
                .find(|&child| self.nodes[child].subtree_max == target)?;
        }
    }

    /// Up to `k` words starting with `prefix`, in descending weight order.
    ///
    /// Best-first expansion: a max-heap of nodes keyed by `subtree_max`,
    /// seeded with the prefix node. A popped terminus is emitted
    /// immediately; its weight cannot be beaten by anything still in the
    /// heap, because every queued subtree is bounded by its own
    /// `subtree_max`, which is at most the priority that was just popped.
    pub fn top_k_matches(&self, prefix: &str, k: usize) -> Vec<String> {
        let mut words = Vec::new();
        let Some(start) = self.descend(prefix) else {
            return words;
        };

        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            priority: self.nodes[start].subtree_max,
            node: start,
        });
        while words.len() < k {
            let Some(Candidate { node, .. }) = heap.pop() else {
                break;
            };
            let current = &self.nodes[node];
            if let Some(word) = &current.word {
                words.push(word.clone());
            }
            for &child in current.children.values() {
                heap.push(Candidate {
                    priority: self.nodes[child].subtree_max,
                    node: child,
                });
            }
        }
        words
    }

    /// The weight stored for `word`, or `None` if it was never inserted.
    pub fn weight_of(&self, word: &str) -> Option<f64> {
        let node = &self.nodes[self.descend(word)?];
        node.word.as_ref().map(|_| node.weight)
    }

    /// Number of distinct words stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Re-derive every structural invariant from scratch.
    ///
    /// Checks arena bounds, parent back-links, and recomputes each node's
    /// true subtree maximum independently of the caches. Quadratic in the
    /// node count; intended for tests and debug contracts, not hot paths.
    pub fn verify(&self) -> Result<(), InvariantError> {
        for (id, node) in self.nodes.iter().enumerate() {
            for &child in node.children.values() {
                if child >= self.nodes.len() {
                    return Err(InvariantError::ChildOutOfBounds { node: id, child });
                }
                if self.nodes[child].parent != Some(id) {
                    return Err(InvariantError::BrokenParentLink { node: id, child });
                }
            }
        }
        for (id, node) in self.nodes.iter().enumerate() {
            let actual = self.true_subtree_max(id);
            if node.subtree_max != actual {
                return Err(InvariantError::SubtreeMaxMismatch {
                    node: id,
                    cached: node.subtree_max,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Walk the prefix from the root; `None` if any character has no child.
    fn descend(&self, prefix: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in prefix.chars() {
            current = *self.nodes[current].children.get(&ch)?;
        }
        Some(current)
    }

    /// One level of the subtree-max derivation, trusting child caches.
    fn recompute_subtree_max(&self, id: NodeId) -> f64 {
        let node = &self.nodes[id];
        let mut max = if node.word.is_some() { node.weight } else { 0.0 };
        for &child in node.children.values() {
            max = max.max(self.nodes[child].subtree_max);
        }
        max
    }

    /// Repair stale maxima from `start` up to the root.
    ///
    /// Each level is recomputed after the level below it has been written,
    /// so the correction propagates one level at a time rather than being
    /// derived independently per node.
    fn repair_upward(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let max = self.recompute_subtree_max(id);
            self.nodes[id].subtree_max = max;
            current = self.nodes[id].parent;
        }
    }

    /// Full recursive recomputation, ignoring all caches.
    fn true_subtree_max(&self, id: NodeId) -> f64 {
        let node = &self.nodes[id];
        let mut max = if node.word.is_some() { node.weight } else { 0.0 };
        for &child in node.children.values() {
            max = max.max(self.true_subtree_max(child));
        }
        max
    }
}
