//! Tests for the batch aggregator.
//!
//! Covers:
//! - Table shape, 1-based indexing and insertion order
//! - Confidence percentage rounding and the empty-set 0.00 case
//! - Order-preserving verdict filtering
//! - Idempotent reset

mod common;

use common::{det, make_result};
use openscan::{ResultBatch, Verdict};

#[test]
fn test_table_rows_follow_insertion_order() {
    let mut batch = ResultBatch::new();
    batch.add(make_result(
        "first.png",
        Verdict::Normal,
        vec![det(0.0, 0.0, 10.0, 10.0, 0.8542)],
    ));
    batch.add(make_result("second.png", Verdict::NoOpening, vec![]));

    let rows = batch.to_table();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].image_name, "first.png");
    assert_eq!(rows[0].verdict, "normal");
    assert_eq!(rows[0].confidence, 85.42);

    assert_eq!(rows[1].index, 2);
    assert_eq!(rows[1].verdict, "no opening");
    assert_eq!(rows[1].confidence, 0.00);
}

#[test]
fn test_confidence_uses_highest_surviving_score() {
    let mut batch = ResultBatch::new();
    batch.add(make_result(
        "multi.png",
        Verdict::Abnormal,
        vec![
            det(0.0, 0.0, 10.0, 10.0, 0.75),
            det(50.0, 50.0, 60.0, 60.0, 0.9),
            det(100.0, 100.0, 110.0, 110.0, 0.81),
        ],
    ));

    assert_eq!(batch.to_table()[0].confidence, 90.00);
}

#[test]
fn test_filter_by_verdict_preserves_order() {
    let mut batch = ResultBatch::new();
    for (name, verdict) in [
        ("01.png", Verdict::NoOpening),
        ("02.png", Verdict::Normal),
        ("03.png", Verdict::Abnormal),
        ("04.png", Verdict::Abnormal),
        ("05.png", Verdict::NoOpening),
    ] {
        batch.add(make_result(name, verdict, vec![]));
    }

    let abnormal = batch.filter_by_verdict(Verdict::Abnormal);
    assert_eq!(abnormal.len(), 2);
    assert_eq!(abnormal[0].image_name, "03.png");
    assert_eq!(abnormal[1].image_name, "04.png");

    // Filtering reads, never mutates.
    assert_eq!(batch.len(), 5);
}

#[test]
fn test_reset_is_idempotent_and_empties_the_table() {
    let mut batch = ResultBatch::new();
    batch.add(make_result("a.png", Verdict::Normal, vec![]));
    batch.add(make_result("b.png", Verdict::Abnormal, vec![]));

    batch.reset();
    assert!(batch.is_empty());
    assert_eq!(batch.to_table().len(), 0);

    batch.reset();
    assert!(batch.is_empty());
}

#[test]
fn test_filtering_an_empty_batch_yields_nothing() {
    let batch = ResultBatch::new();
    assert!(batch.filter_by_verdict(Verdict::Abnormal).is_empty());
}
