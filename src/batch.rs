//! Ordered accumulation of per-image results for one folder session.

use std::path::PathBuf;

use crate::models::{ImageResult, Verdict};

/// One display row of the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position in the batch.
    pub index: usize,
    pub image_name: String,
    pub verdict: &'static str,
    /// Highest surviving score as a percentage, rounded to two decimals;
    /// 0.00 when nothing survived.
    pub confidence: f32,
    pub image_path: PathBuf,
}

/// Ordered result collection for one processing session.
///
/// Owned by the caller and passed by reference to whoever needs it; `add`
/// and `reset` are the only mutations, and one writer is active at a
/// time. Row order is always insertion order.
#[derive(Debug, Default)]
pub struct ResultBatch {
    results: Vec<ImageResult>,
}

impl ResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every accumulated result. Idempotent, and the only way to
    /// shrink a batch: single-entry removal is not supported.
    pub fn reset(&mut self) {
        self.results.clear();
    }

    /// Appends in processing order. No dedup by name is enforced; callers
    /// must not submit the same folder twice in one session.
    pub fn add(&mut self, result: ImageResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[ImageResult] {
        &self.results
    }

    /// One row per result, in insertion order.
    pub fn to_table(&self) -> Vec<TableRow> {
        self.results
            .iter()
            .enumerate()
            .map(|(i, r)| TableRow {
                index: i + 1,
                image_name: r.image_name.clone(),
                verdict: r.verdict.label(),
                confidence: r
                    .max_score()
                    .map(|s| (s * 100.0 * 100.0).round() / 100.0)
                    .unwrap_or(0.0),
                image_path: r.image_path.clone(),
            })
            .collect()
    }

    /// Order-preserving subset with the given verdict.
    pub fn filter_by_verdict(&self, verdict: Verdict) -> Vec<&ImageResult> {
        self.results
            .iter()
            .filter(|r| r.verdict == verdict)
            .collect()
    }
}
