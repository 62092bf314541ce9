//! Sorted-array behavior: range location, ranking, and the generic binary
//! search helpers on their own.

use super::common::{city_corpus, sample_array};
use std::cmp::Ordering;
use typeahead::{first_index_of, last_index_of, BinarySearchAutocomplete, Term};

#[test]
fn city_corpus_ranks_by_weight() {
    let (words, weights) = city_corpus();
    let index = BinarySearchAutocomplete::new(&words, &weights).unwrap();

    assert_eq!(index.top_match("s").as_deref(), Some("sao paulo"));
    assert_eq!(
        index.top_k_matches("sa", 3),
        vec!["sao paulo", "santiago", "san antonio"]
    );
    assert_eq!(
        index.top_k_matches("san", 3),
        vec!["santiago", "san antonio", "san diego"]
    );
}

#[test]
fn weight_ties_resolve_to_lexicographic_order() {
    let (words, weights) = city_corpus();
    let index = BinarySearchAutocomplete::new(&words, &weights).unwrap();

    // santa ana and santa clara tie at 0.3; stable ranking keeps the
    // lexicographically smaller one first.
    assert_eq!(
        index.top_k_matches("santa", 5),
        vec!["santa ana", "santa clara"]
    );
    assert_eq!(index.top_match("santa").as_deref(), Some("santa ana"));
}

#[test]
fn duplicate_words_are_kept_as_distinct_terms() {
    let index =
        BinarySearchAutocomplete::new(&["echo", "echo", "edge"], &[1.0, 5.0, 3.0]).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(index.top_k_matches("e", 3), vec!["echo", "edge", "echo"]);
    assert_eq!(index.top_match("ec").as_deref(), Some("echo"));
}

#[test]
fn helpers_are_generic_over_element_type() {
    let numbers = [3, 7, 7, 7, 12, 20];
    let cmp = |a: &i32, b: &i32| a.cmp(b);

    assert_eq!(first_index_of(&numbers, &7, cmp), Some(1));
    assert_eq!(last_index_of(&numbers, &7, cmp), Some(3));
    assert_eq!(first_index_of(&numbers, &3, cmp), Some(0));
    assert_eq!(last_index_of(&numbers, &20, cmp), Some(5));
    assert_eq!(first_index_of(&numbers, &8, cmp), None);
    assert_eq!(last_index_of(&numbers, &8, cmp), None);
}

#[test]
fn helpers_handle_single_element_slices() {
    let one = [Term::new("only", 1.0).unwrap()];
    let hit = Term::new("only", 9.0).unwrap();
    let miss = Term::new("other", 9.0).unwrap();

    assert_eq!(first_index_of(&one, &hit, Term::natural_order), Some(0));
    assert_eq!(last_index_of(&one, &hit, Term::natural_order), Some(0));
    assert_eq!(first_index_of(&one, &miss, Term::natural_order), None);
    assert_eq!(last_index_of(&one, &miss, Term::natural_order), None);
}

#[test]
fn prefix_comparator_range_is_contiguous() {
    let index = sample_array();
    let probe = Term::new("b", 0.0).unwrap();
    let cmp = Term::prefix_order(1);

    let first = first_index_of(index.terms(), &probe, &cmp).unwrap();
    let last = last_index_of(index.terms(), &probe, &cmp).unwrap();
    assert!(first <= last);
    for term in &index.terms()[first..=last] {
        assert!(term.word().starts_with('b'));
    }
    for (position, term) in index.terms().iter().enumerate() {
        let in_range = position >= first && position <= last;
        assert_eq!(term.word().starts_with('b'), in_range);
    }
}

#[test]
fn whole_range_comparator_order_is_respected() {
    let (words, weights) = city_corpus();
    let index = BinarySearchAutocomplete::new(&words, &weights).unwrap();

    // Under Ordering::Equal-everywhere (len 0) the range is the entire
    // array.
    let probe = Term::new("", 0.0).unwrap();
    let cmp = Term::prefix_order(0);
    assert_eq!(first_index_of(index.terms(), &probe, &cmp), Some(0));
    assert_eq!(
        last_index_of(index.terms(), &probe, &cmp),
        Some(words.len() - 1)
    );
}
