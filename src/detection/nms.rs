//! Greedy non-max suppression over one image's candidate detections.

use std::cmp::Ordering;

use crate::detection::geometry;
use crate::error::PipelineError;
use crate::models::{BoundingBox, Detection};

/// Returns indices into `dets` to keep, in selection order (highest score
/// first).
///
/// A candidate is removed when its IoU with an already-kept box is
/// strictly greater than `iou_threshold`; overlap exactly at the
/// threshold survives. At a threshold of 1.0 even identical boxes are
/// kept, since IoU never exceeds 1.
pub fn suppress(dets: &[Detection], iou_threshold: f32) -> Result<Vec<usize>, PipelineError> {
    if let Some(bad) = dets.iter().find(|d| !d.bbox.is_valid()) {
        return Err(PipelineError::InvalidGeometry(bad.bbox));
    }
    if dets.is_empty() {
        return Ok(Vec::new());
    }

    // Score descending. The sort is stable, so equal scores stay in
    // original index order and detector output order decides which of two
    // tied overlapping boxes survives.
    let mut remaining: Vec<usize> = (0..dets.len()).collect();
    remaining.sort_by(|&a, &b| {
        dets[b]
            .score
            .partial_cmp(&dets[a].score)
            .unwrap_or(Ordering::Equal)
    });

    let mut keep = Vec::new();
    while !remaining.is_empty() {
        let current = remaining.remove(0);
        keep.push(current);
        if remaining.is_empty() {
            break;
        }

        let current_box = dets[current].bbox;
        let others: Vec<BoundingBox> = remaining.iter().map(|&i| dets[i].bbox).collect();
        let overlaps = geometry::iou_many(&current_box, &others);

        remaining = remaining
            .into_iter()
            .zip(overlaps)
            .filter(|(_, overlap)| *overlap <= iou_threshold)
            .map(|(i, _)| i)
            .collect();
    }

    Ok(keep)
}
