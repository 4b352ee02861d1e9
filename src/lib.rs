pub mod batch;
pub mod config;
pub mod detection;
pub mod error;
pub mod export;
pub mod models;

pub use batch::{ResultBatch, TableRow};
pub use config::{PipelineConfig, VerdictMap};
pub use detection::{Classifier, DetectionPipeline, Detector};
pub use error::PipelineError;
pub use models::{BoundingBox, Detection, ImageResult, Verdict};
