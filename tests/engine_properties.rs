//! Behavioral tests for the search engines and the result cache, driven
//! entirely through the public API.

use bowix::cache::CachedEngine;
use bowix::engine::{EngineKind, InvertedIndexEngine, SearchEngine};
use bowix::error::EngineError;

const ALL_KINDS: [EngineKind; 3] = [EngineKind::Scan, EngineKind::Bag, EngineKind::Inverted];

/// The three-document corpus used throughout: lowercase single words, so
/// every engine variant agrees on it.
fn fixed_corpus(engine: &mut dyn SearchEngine) {
    engine.add_document("1", "the cat sat").unwrap();
    engine.add_document("2", "the dog sat").unwrap();
    engine.add_document("3", "the cat ran").unwrap();
}

fn names(engine: &dyn SearchEngine, query: &str) -> Vec<String> {
    engine
        .search(query)
        .iter()
        .filter_map(|&id| engine.doc_name(id))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Fixed corpus scenario, checked against every variant
// ============================================================================

#[test]
fn test_single_term_matches() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        assert_eq!(names(engine.as_ref(), "cat"), ["1", "3"], "{kind:?}");
        assert_eq!(names(engine.as_ref(), "dog"), ["2"], "{kind:?}");
    }
}

#[test]
fn test_multi_term_requires_every_term() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        assert_eq!(names(engine.as_ref(), "cat sat"), ["1"], "{kind:?}");
    }
}

#[test]
fn test_term_in_every_document() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        assert_eq!(names(engine.as_ref(), "the"), ["1", "2", "3"], "{kind:?}");
    }
}

#[test]
fn test_unknown_term_yields_empty() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        assert!(engine.search("fish").is_empty(), "{kind:?}");
        assert!(engine.search("cat fish").is_empty(), "{kind:?}");
    }
}

#[test]
fn test_empty_query_yields_empty() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        assert!(engine.search("").is_empty(), "{kind:?}");
    }
}

#[test]
fn test_duplicate_identifier_rejected() {
    for kind in ALL_KINDS {
        let mut engine = kind.build();
        fixed_corpus(engine.as_mut());
        let err = engine.add_document("2", "an impostor").unwrap_err();
        assert_eq!(err, EngineError::DuplicateDocument("2".to_string()));
        assert_eq!(engine.doc_count(), 3, "{kind:?}");
        assert!(engine.search("impostor").is_empty(), "{kind:?}");
    }
}

// ============================================================================
// Inverted index internals
// ============================================================================

#[test]
fn test_queries_are_idempotent() {
    let mut engine = InvertedIndexEngine::new();
    fixed_corpus(&mut engine);
    let first = engine.search("sat");
    for _ in 0..3 {
        assert_eq!(engine.search("sat"), first);
    }
}

#[test]
fn test_results_follow_indexing_order() {
    let mut engine = InvertedIndexEngine::new();
    fixed_corpus(&mut engine);
    engine.add_document("4", "sat upon a mat").unwrap();
    // Doc 4 was indexed last and shows up last, not sorted by name or score.
    assert_eq!(names(&engine, "sat"), ["1", "2", "4"]);
}

#[test]
fn test_term_count_tracks_distinct_terms() {
    let mut engine = InvertedIndexEngine::new();
    fixed_corpus(&mut engine);
    // {the, cat, sat, dog, ran}
    assert_eq!(engine.term_count(), 5);
    engine.add_document("4", "the cat the cat").unwrap();
    assert_eq!(engine.term_count(), 5);
}

#[test]
fn test_query_normalized_like_documents() {
    let mut engine = InvertedIndexEngine::new();
    engine.add_document("notes", "Mrs. O'Leary's CAT!").unwrap();
    assert_eq!(names(&engine, "cat"), ["notes"]);
    assert_eq!(names(&engine, "o leary s"), ["notes"]);
    assert_eq!(names(&engine, "MRS."), ["notes"]);
}

#[test]
fn test_empty_document_is_inert() {
    let mut engine = InvertedIndexEngine::new();
    fixed_corpus(&mut engine);
    engine.add_document("blank", "").unwrap();
    assert_eq!(engine.doc_count(), 4);
    assert_eq!(engine.term_count(), 5);
    assert_eq!(names(&engine, "the"), ["1", "2", "3"]);
}

// ============================================================================
// Cross-variant parity on a generated corpus
// ============================================================================

/// Deterministic word-soup corpus: enough overlap between documents that
/// multi-term queries have non-trivial answers.
fn generated_corpus(engine: &mut dyn SearchEngine) {
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
    ];
    for doc in 0..40usize {
        let mut text = String::new();
        for (pos, word) in words.iter().enumerate() {
            if (doc + pos) % (pos + 2) == 0 {
                text.push_str(word);
                text.push(' ');
            }
        }
        engine.add_document(&format!("doc-{doc:02}"), &text).unwrap();
    }
}

#[test]
fn test_bag_and_inverted_agree() {
    let mut bag = EngineKind::Bag.build();
    let mut inverted = EngineKind::Inverted.build();
    generated_corpus(bag.as_mut());
    generated_corpus(inverted.as_mut());

    let queries = [
        "alpha",
        "hotel",
        "alpha bravo",
        "charlie delta echo",
        "alpha hotel",
        "foxtrot golf",
        "alpha bravo charlie delta",
        "missing",
        "",
    ];
    for query in queries {
        assert_eq!(
            bag.search(query),
            inverted.search(query),
            "parity broke on {query:?}"
        );
    }
}

// ============================================================================
// Cache behavior through the trait
// ============================================================================

#[test]
fn test_cache_transparency() {
    let mut bare = InvertedIndexEngine::new();
    fixed_corpus(&mut bare);

    let mut inner = InvertedIndexEngine::new();
    fixed_corpus(&mut inner);
    let cached = CachedEngine::with_default_capacity(inner);

    // More distinct queries than the cache holds, plus an adjacent repeat.
    let queries = ["cat", "cat", "sat", "the", "cat", "fish", "sat", "", "cat sat"];
    for query in queries {
        assert_eq!(cached.search(query), bare.search(query), "query {query:?}");
    }

    let stats = cached.stats();
    assert_eq!(stats.hits + stats.misses, queries.len() as u64);
    assert!(stats.hits >= 1);
}

#[test]
fn test_cache_stats_only_on_cached_engine() {
    let mut engine = InvertedIndexEngine::new();
    fixed_corpus(&mut engine);
    assert!(engine.cache_stats().is_none());

    let cached = CachedEngine::with_default_capacity(engine);
    cached.search("cat");
    cached.search("cat");
    let stats = cached.cache_stats().expect("wrapper reports stats");
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.capacity, 2);
}

#[test]
fn test_cached_engine_through_trait_object() {
    let mut inner = EngineKind::Inverted.build();
    fixed_corpus(inner.as_mut());
    let engine: Box<dyn SearchEngine> = Box::new(CachedEngine::with_default_capacity(inner));

    assert_eq!(names(engine.as_ref(), "cat"), ["1", "3"]);
    assert_eq!(names(engine.as_ref(), "cat"), ["1", "3"]);
    assert_eq!(engine.cache_stats().map(|stats| stats.hits), Some(1));
}
