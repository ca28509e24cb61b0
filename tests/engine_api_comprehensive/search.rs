//! Similarity Search Tests
//!
//! - ranking by cosine similarity
//! - top-k truncation
//! - empty results and validation

use crate::*;
use std::f64::consts::FRAC_1_SQRT_2;

fn abc_engine() -> VectorEngine {
    let engine = create_engine_with_collection();
    engine.insert("col", "a", vec![1.0, 0.0, 0.0], Metadata::new()).unwrap();
    engine.insert("col", "b", vec![0.0, 1.0, 0.0], Metadata::new()).unwrap();
    engine.insert("col", "c", vec![1.0, 1.0, 0.0], Metadata::new()).unwrap();
    engine
}

/// D = 3, query [1,0,0], top 2: a (1.0) then c (~0.707), b excluded
#[test]
fn test_search_reference_scenario() {
    let engine = abc_engine();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 2, None).unwrap();

    assert_eq!(hit_ids(&hits), vec!["a", "c"]);
    assert!((hits[0].score - 1.0).abs() < 1e-9);
    assert!((hits[1].score - FRAC_1_SQRT_2).abs() < 1e-9);
}

#[test]
fn test_search_top_k_zero_returns_all() {
    let engine = abc_engine();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 0, None).unwrap();

    assert_eq!(hit_ids(&hits), vec!["a", "c", "b"]);
    assert_eq!(hits[2].score, 0.0);
}

#[test]
fn test_search_top_k_exceeds_size_returns_all() {
    let engine = abc_engine();
    let hits = engine.search("col", &[1.0, 0.0, 0.0], 100, None).unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_search_sorted_descending() {
    let engine = create_engine(4);
    engine.create_collection("many").unwrap();
    for i in 0..50 {
        let v = vec![(i % 7) as f64, (i % 3) as f64 - 1.0, (i % 5) as f64, 1.0];
        engine.insert("many", &format!("v{}", i), v, Metadata::new()).unwrap();
    }

    let hits = engine.search("many", &[1.0, -1.0, 0.5, 0.0], 0, None).unwrap();

    assert_eq!(hits.len(), 50);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_search_negation_scores_minus_one() {
    let engine = create_engine_with_collection();
    engine.insert("col", "neg", vec![-1.0, -2.0, -3.0], Metadata::new()).unwrap();

    let hits = engine.search("col", &[1.0, 2.0, 3.0], 0, None).unwrap();
    assert!((hits[0].score + 1.0).abs() < 1e-9);
}

/// Zero vectors score exactly 0, both stored and as the query
#[test]
fn test_search_zero_vectors() {
    let engine = create_engine_with_collection();
    engine.insert("col", "zero", vec![0.0, 0.0, 0.0], Metadata::new()).unwrap();
    engine.insert("col", "one", vec![1.0, 0.0, 0.0], Metadata::new()).unwrap();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 0, None).unwrap();
    assert_eq!(hit_ids(&hits), vec!["one", "zero"]);
    assert_eq!(hits[1].score, 0.0);

    let hits = engine.search("col", &[0.0, 0.0, 0.0], 0, None).unwrap();
    assert!(hits.iter().all(|h| h.score == 0.0));
}

#[test]
fn test_search_empty_collection() {
    let engine = create_engine_with_collection();
    let hits = engine.search("col", &[1.0, 0.0, 0.0], 5, None).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_search_dimension_mismatch() {
    let engine = abc_engine();
    assert_eq!(
        engine.search("col", &[1.0, 0.0], 2, None),
        Err(VectorError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
}

/// Hits carry the full item, including metadata and timestamps
#[test]
fn test_search_hit_contains_item() {
    let engine = create_engine_with_collection();
    engine
        .insert("col", "a", vec![1.0, 0.0, 0.0], meta([("title", Value::from("hello"))]))
        .unwrap();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 1, None).unwrap();
    assert_eq!(hits[0].item, engine.get("col", "a").unwrap());
}

#[test]
fn test_search_reflects_updates_and_deletes() {
    let engine = abc_engine();
    engine.update("col", "b", vec![1.0, 0.0, 0.0], None).unwrap();
    engine.delete("col", "a").unwrap();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 1, None).unwrap();
    assert_eq!(hit_ids(&hits), vec!["b"]);
}

/// Exact matches rank first even at extreme finite magnitudes
#[test]
fn test_search_extreme_magnitudes_rank_exact_match_first() {
    let engine = create_engine_with_collection();
    engine.insert("col", "huge", vec![1e200, 0.0, 0.0], Metadata::new()).unwrap();
    engine.insert("col", "tiny", vec![0.0, 1e-200, 0.0], Metadata::new()).unwrap();
    engine.insert("col", "mid", vec![1.0, 1.0, 0.0], Metadata::new()).unwrap();

    let hits = engine.search("col", &[1e200, 0.0, 0.0], 0, None).unwrap();
    assert_eq!(hit_ids(&hits), vec!["huge", "mid", "tiny"]);
    assert!((hits[0].score - 1.0).abs() < 1e-9);

    let hits = engine.search("col", &[0.0, 1e-200, 0.0], 1, None).unwrap();
    assert_eq!(hit_ids(&hits), vec!["tiny"]);
    assert!((hits[0].score - 1.0).abs() < 1e-9);
}
