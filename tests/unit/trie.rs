//! Trie-specific behavior: subtree-max maintenance across inserts and the
//! best-first expansion order.

use super::common::{city_corpus, sample_trie};
use typeahead::{BuildError, TrieAutocomplete};

#[test]
fn city_corpus_ranks_by_weight() {
    let (words, weights) = city_corpus();
    let trie = TrieAutocomplete::new(&words, &weights).unwrap();

    assert_eq!(trie.top_match("s").as_deref(), Some("sao paulo"));
    assert_eq!(
        trie.top_k_matches("sa", 3),
        vec!["sao paulo", "santiago", "san antonio"]
    );
    assert_eq!(
        trie.top_k_matches("san", 3),
        vec!["santiago", "san antonio", "san diego"]
    );
    assert_eq!(trie.top_k_matches("se", 5), vec!["seoul", "seattle"]);
}

#[test]
fn k_larger_than_match_count_returns_all() {
    let (words, weights) = city_corpus();
    let trie = TrieAutocomplete::new(&words, &weights).unwrap();

    let all = trie.top_k_matches("santa", 50);
    assert_eq!(all.len(), 2);
    assert!(all.contains(&"santa ana".to_string()));
    assert!(all.contains(&"santa clara".to_string()));
}

#[test]
fn repeated_decreases_keep_caches_exact() {
    let (words, weights) = city_corpus();
    let mut trie = TrieAutocomplete::new(&words, &weights).unwrap();

    // Demote the heavy words one after another; every repair runs on a
    // path whose caches were just rewritten by the previous one.
    trie.insert("sao paulo", 0.1).unwrap();
    trie.verify().unwrap();
    assert_eq!(trie.top_match("s").as_deref(), Some("seoul"));

    trie.insert("seoul", 0.2).unwrap();
    trie.verify().unwrap();
    assert_eq!(trie.top_match("s").as_deref(), Some("santiago"));

    trie.insert("santiago", 0.0).unwrap();
    trie.verify().unwrap();
    assert_eq!(trie.top_match("s").as_deref(), Some("san antonio"));

    assert_eq!(trie.len(), words.len());
}

#[test]
fn decrease_on_shared_path_spares_siblings() {
    let mut trie =
        TrieAutocomplete::new(&["bell", "belt", "bench"], &[9.0, 4.0, 2.0]).unwrap();
    trie.insert("bell", 1.0).unwrap();

    // "belt" shares the "bel" path and must now win it; "bench" is on a
    // sibling branch and keeps its cache untouched.
    assert_eq!(trie.top_match("bel").as_deref(), Some("belt"));
    assert_eq!(trie.top_match("ben").as_deref(), Some("bench"));
    assert_eq!(trie.top_k_matches("be", 3), vec!["belt", "bench", "bell"]);
    trie.verify().unwrap();
}

#[test]
fn insert_after_construction_extends_the_index() {
    let mut trie = sample_trie();
    trie.insert("bonus", 7.0).unwrap();

    assert_eq!(trie.len(), 5);
    assert_eq!(trie.top_match("b").as_deref(), Some("bonus"));
    assert_eq!(
        trie.top_k_matches("b", 4),
        vec!["bonus", "bell", "bat", "boy"]
    );
    trie.verify().unwrap();
}

#[test]
fn insert_rejects_invalid_weight_without_corrupting() {
    let mut trie = sample_trie();
    let err = trie.insert("bad", -3.0).unwrap_err();
    assert!(matches!(err, BuildError::InvalidWeight { .. }));

    // The failed insert left nothing behind.
    assert_eq!(trie.len(), 4);
    assert_eq!(trie.weight_of("bad"), None);
    trie.verify().unwrap();
}

#[test]
fn equal_weight_reinsert_is_a_no_op_for_queries() {
    let mut trie = sample_trie();
    let before = trie.top_k_matches("", 10);
    trie.insert("bat", 2.0).unwrap();
    assert_eq!(trie.top_k_matches("", 10), before);
    trie.verify().unwrap();
}
