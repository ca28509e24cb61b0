//! Batch Insert Tests
//!
//! batch_insert validates the entire batch before committing any item.

use crate::*;
use raydb_core::{NewItem, Timestamp};

fn five_items_with_bad_third() -> Vec<NewItem> {
    vec![
        NewItem::new("v1", vec![1.0, 0.0, 0.0]),
        NewItem::new("v2", vec![0.0, 1.0, 0.0]),
        NewItem::new("v3", vec![0.0, 0.0]),
        NewItem::new("v4", vec![0.0, 0.0, 1.0]),
        NewItem::new("v5", vec![1.0, 1.0, 1.0]),
    ]
}

#[test]
fn test_batch_insert_basic() {
    let engine = create_engine_with_collection();
    let items = vec![
        NewItem::new("v1", vec![1.0, 0.0, 0.0]).with_metadata(meta([("type", Value::from("a"))])),
        NewItem::new("v2", vec![0.0, 1.0, 0.0]).with_metadata(meta([("type", Value::from("b"))])),
        NewItem::new("v3", vec![0.0, 0.0, 1.0]),
    ];

    engine.batch_insert("col", items).unwrap();

    assert_eq!(engine.count("col").unwrap(), 3);
    assert_eq!(
        engine.get("col", "v1").unwrap().metadata.get("type"),
        Some(&Value::from("a"))
    );
    assert!(engine.get("col", "v3").unwrap().metadata.is_empty());
}

/// Item 3 of 5 has the wrong dimension: nothing is inserted
#[test]
fn test_batch_insert_mid_batch_dimension_mismatch() {
    let engine = create_engine_with_collection();
    engine.insert("col", "existing", vec![1.0, 0.0, 0.0], Metadata::new()).unwrap();

    let result = engine.batch_insert("col", five_items_with_bad_third());

    assert_eq!(
        result,
        Err(VectorError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(engine.count("col").unwrap(), 1);
    for id in ["v1", "v2", "v3", "v4", "v5"] {
        assert_err_kind(engine.get("col", id), "ItemNotFound");
    }
}

/// A conflict with a stored id rejects the whole batch
#[test]
fn test_batch_insert_conflicts_with_existing() {
    let engine = create_engine_with_collection();
    engine.insert("col", "v2", vec![0.0, 0.0, 1.0], Metadata::new()).unwrap();

    let result = engine.batch_insert(
        "col",
        vec![
            NewItem::new("v1", vec![1.0, 0.0, 0.0]),
            NewItem::new("v2", vec![0.0, 1.0, 0.0]),
        ],
    );

    assert_eq!(
        result,
        Err(VectorError::DuplicateId {
            collection: "col".to_string(),
            id: "v2".to_string()
        })
    );
    assert_eq!(engine.count("col").unwrap(), 1);
    assert_eq!(engine.get("col", "v2").unwrap().vector, vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_batch_insert_repeated_id_in_batch() {
    let engine = create_engine_with_collection();
    let result = engine.batch_insert(
        "col",
        vec![
            NewItem::new("same", vec![1.0, 0.0, 0.0]),
            NewItem::new("other", vec![0.0, 1.0, 0.0]),
            NewItem::new("same", vec![0.0, 0.0, 1.0]),
        ],
    );
    assert_err_kind(result, "DuplicateId");
    assert_eq!(engine.count("col").unwrap(), 0);
}

/// The first violation in input order is reported
#[test]
fn test_batch_insert_reports_first_violation() {
    let engine = create_engine_with_collection();
    engine.insert("col", "taken", vec![1.0, 0.0, 0.0], Metadata::new()).unwrap();

    let result = engine.batch_insert(
        "col",
        vec![
            NewItem::new("ok", vec![1.0, 0.0, 0.0]),
            NewItem::new("taken", vec![1.0, 0.0, 0.0]),
            NewItem::new("bad", vec![1.0]),
        ],
    );
    assert_err_kind(result, "DuplicateId");
}

#[test]
fn test_batch_insert_empty() {
    let engine = create_engine_with_collection();
    engine.batch_insert("col", Vec::new()).unwrap();
    assert_eq!(engine.count("col").unwrap(), 0);
}

#[test]
fn test_batch_insert_timestamps() {
    let engine = create_engine_with_collection();
    let imported = Timestamp::from_micros(1_600_000_000_000_000);

    engine
        .batch_insert(
            "col",
            vec![
                NewItem::new("imported", vec![1.0, 0.0, 0.0]).with_created_at(imported),
                NewItem::new("fresh", vec![0.0, 1.0, 0.0]),
            ],
        )
        .unwrap();

    let imported_item = engine.get("col", "imported").unwrap();
    let fresh = engine.get("col", "fresh").unwrap();

    assert_eq!(imported_item.created_at, imported);
    assert!(imported_item.updated_at > imported);
    assert_eq!(fresh.created_at, fresh.updated_at);
    // One commit time for the whole batch
    assert_eq!(imported_item.updated_at, fresh.updated_at);
}

/// A carried creation time ahead of the local clock never leaves
/// updated_at behind created_at
#[test]
fn test_batch_insert_future_created_at() {
    let engine = create_engine_with_collection();
    let ahead = Timestamp::from_micros(Timestamp::now().as_micros() + 3_600_000_000);

    engine
        .batch_insert(
            "col",
            vec![NewItem::new("skewed", vec![1.0, 0.0, 0.0]).with_created_at(ahead)],
        )
        .unwrap();

    let item = engine.get("col", "skewed").unwrap();
    assert_eq!(item.created_at, ahead);
    assert!(item.updated_at >= item.created_at);

    // Later mutations stay monotonic from there
    engine.update("col", "skewed", vec![0.0, 1.0, 0.0], None).unwrap();
    assert!(engine.get("col", "skewed").unwrap().updated_at >= ahead);
}

#[test]
fn test_batch_items_searchable() {
    let engine = create_engine_with_collection();
    engine
        .batch_insert(
            "col",
            (0..10)
                .map(|i| NewItem::new(format!("v{}", i), vec![1.0, i as f64, 0.0]))
                .collect(),
        )
        .unwrap();

    let hits = engine.search("col", &[1.0, 0.0, 0.0], 3, None).unwrap();
    assert_eq!(hit_ids(&hits), vec!["v0", "v1", "v2"]);
}
