use thiserror::Error;

use crate::models::BoundingBox;

/// Error kinds surfaced by the detection core.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A box with unordered corners reached the suppression stage. This is
    /// a contract violation; the pipeline drops such detections before
    /// suppression, so seeing it means a caller bypassed that step.
    #[error("invalid box geometry: ({0:?})")]
    InvalidGeometry(BoundingBox),

    /// Detector or classifier failed for one image. Recoverable: the batch
    /// skips the image and continues.
    #[error("inference failed for '{image}': {cause}")]
    Inference { image: String, cause: anyhow::Error },

    /// A threshold outside [0, 1] was supplied. Rejected at configuration
    /// time, never clamped.
    #[error("{name} must lie in [0, 1], got {value}")]
    Configuration { name: &'static str, value: f32 },
}
