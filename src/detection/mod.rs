pub mod geometry;
pub mod nms;

#[cfg(feature = "backend-mock")]
pub mod mock;

use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;

use crate::batch::ResultBatch;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::models::{Detection, ImageResult, Verdict};

/// Open-vocabulary detector capability. Model identity and weights are
/// opaque; implementations score candidate boxes for the given prompt.
pub trait Detector {
    fn detect(&self, image: &DynamicImage, text_prompt: &str) -> Result<Vec<Detection>>;
}

/// Whole-image classifier capability returning an opaque label string.
pub trait Classifier {
    fn classify(&self, image: &DynamicImage) -> Result<String>;
}

impl<T: Detector + ?Sized> Detector for &T {
    fn detect(&self, image: &DynamicImage, text_prompt: &str) -> Result<Vec<Detection>> {
        (**self).detect(image, text_prompt)
    }
}

impl<T: Classifier + ?Sized> Classifier for &T {
    fn classify(&self, image: &DynamicImage) -> Result<String> {
        (**self).classify(image)
    }
}

/// Per-image orchestration: score filter, suppression, conditional
/// classification, verdict.
pub struct DetectionPipeline<D: Detector, C: Classifier> {
    detector: D,
    classifier: C,
    config: PipelineConfig,
}

impl<D: Detector, C: Classifier> DetectionPipeline<D, C> {
    pub fn new(detector: D, classifier: C, config: PipelineConfig) -> Self {
        Self {
            detector,
            classifier,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Post-processes one image's raw detector output: strict score
    /// filter, invalid-geometry rejection, then greedy suppression.
    pub fn postprocess(&self, raw: Vec<Detection>) -> Result<Vec<Detection>, PipelineError> {
        let mut filtered: Vec<Detection> = raw
            .into_iter()
            .filter(|d| d.score > self.config.score_threshold)
            .collect();

        // Malformed boxes must never reach the suppression stage.
        let before = filtered.len();
        filtered.retain(|d| d.bbox.is_valid());
        if self.config.verbose && filtered.len() < before {
            println!(
                "  Rejected {} detection(s) with invalid geometry",
                before - filtered.len()
            );
        }

        let keep = nms::suppress(&filtered, self.config.iou_threshold)?;
        Ok(keep.into_iter().map(|i| filtered[i].clone()).collect())
    }

    /// Runs the full pipeline for one already-decoded image.
    ///
    /// The classifier is invoked exactly once, and only when at least one
    /// detection survived filtering and suppression. Classifier calls are
    /// expensive; an empty final set short-circuits to `NoOpening`.
    pub fn process_image(
        &self,
        image_name: &str,
        image_path: &Path,
        image: &DynamicImage,
    ) -> Result<ImageResult, PipelineError> {
        let raw = self
            .detector
            .detect(image, &self.config.text_prompt)
            .map_err(|cause| PipelineError::Inference {
                image: image_name.to_string(),
                cause,
            })?;

        if self.config.verbose {
            println!("  {} raw detection(s)", raw.len());
        }

        let detections = self.postprocess(raw)?;

        let verdict = if detections.is_empty() {
            Verdict::NoOpening
        } else {
            let label = self
                .classifier
                .classify(image)
                .map_err(|cause| PipelineError::Inference {
                    image: image_name.to_string(),
                    cause,
                })?;
            self.config.verdict_map.verdict_for(&label)
        };

        if self.config.verbose {
            println!(
                "  {} detection(s) kept, verdict: {}",
                detections.len(),
                verdict.label()
            );
        }

        Ok(ImageResult {
            image_name: image_name.to_string(),
            image_path: image_path.to_path_buf(),
            detections,
            verdict,
        })
    }

    /// Processes every image of a folder sequentially, in listing order,
    /// against the shared batch.
    ///
    /// A failed image (decode or inference) is skipped and reported in the
    /// returned list; results recorded before and after it are kept.
    pub fn process_folder(
        &self,
        folder: &Path,
        batch: &mut ResultBatch,
    ) -> Result<Vec<PipelineError>> {
        let mut failures = Vec::new();

        for path in list_images(folder)? {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            if self.config.verbose {
                println!("Processing {}...", name);
            }

            match self.run_one(&name, &path) {
                Ok(result) => batch.add(result),
                Err(err) => {
                    eprintln!("  Skipping image: {}", err);
                    failures.push(err);
                }
            }
        }

        Ok(failures)
    }

    fn run_one(&self, name: &str, path: &Path) -> Result<ImageResult, PipelineError> {
        let image = image::ImageReader::open(path)
            .map_err(anyhow::Error::from)
            .and_then(|r| r.decode().map_err(anyhow::Error::from))
            .map_err(|cause| PipelineError::Inference {
                image: name.to_string(),
                cause,
            })?;

        self.process_image(name, path, &image)
    }
}

/// Image files of a folder in name order. Matches the formats the
/// inspection cameras produce (.jpg / .png).
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "png"))
        })
        .collect();
    paths.sort();
    Ok(paths)
}
