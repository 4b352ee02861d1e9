//! Pairwise overlap between axis-aligned boxes.

use crate::models::BoundingBox;

/// Denominator guard so two degenerate, coincident boxes yield 0 instead
/// of dividing by zero.
const UNION_EPS: f32 = 1e-6;

/// Intersection over union of two well-formed boxes, in [0, 1].
pub fn iou(a: &BoundingBox, b: &BoundingBox) -> f32 {
    debug_assert!(a.is_valid() && b.is_valid());

    let inter_w = (a.x2.min(b.x2) - a.x1.max(b.x1)).max(0.0);
    let inter_h = (a.y2.min(b.y2) - a.y1.max(b.y1)).max(0.0);
    let inter = inter_w * inter_h;

    let union = a.area() + b.area() - inter;
    inter / (union + UNION_EPS)
}

/// IoU of `a` against every box in `others`, preserving the order of
/// `others`.
pub fn iou_many(a: &BoundingBox, others: &[BoundingBox]) -> Vec<f32> {
    others.iter().map(|b| iou(a, b)).collect()
}
