use std::path::PathBuf;

/// Axis-aligned box in image pixel space, corner form: (x1, y1) top-left,
/// (x2, y2) bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// A box is well-formed when both corner pairs are ordered.
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// One detector hit: a box, its confidence and the category id the
/// detector assigned. Read-only downstream of the detector.
#[derive(Debug, Clone)]
pub struct Detection {
    pub bbox: BoundingBox,
    /// Confidence in [0, 1].
    pub score: f32,
    pub label: u32,
}

/// Three-way outcome for one image. Always derived by the pipeline,
/// never set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoOpening,
    Normal,
    Abnormal,
}

impl Verdict {
    /// Display label used in the result table.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoOpening => "no opening",
            Verdict::Normal => "normal",
            Verdict::Abnormal => "abnormal (open)",
        }
    }
}

/// Final record for one processed image. Created exactly once at the end
/// of a pipeline run; only a full batch reset removes it.
#[derive(Debug, Clone)]
pub struct ImageResult {
    pub image_name: String,
    pub image_path: PathBuf,
    /// Post-filter, post-suppression detections.
    pub detections: Vec<Detection>,
    pub verdict: Verdict,
}

impl ImageResult {
    /// Highest surviving detection score, if anything survived.
    pub fn max_score(&self) -> Option<f32> {
        self.detections
            .iter()
            .map(|d| d.score)
            .fold(None, |best: Option<f32>, s| Some(best.map_or(s, |b| b.max(s))))
    }
}
