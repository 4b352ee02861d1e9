#![allow(dead_code)]

use std::cell::Cell;
use std::path::PathBuf;

use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Rgb};
use tempfile::NamedTempFile;

use openscan::{BoundingBox, Classifier, Detection, Detector, ImageResult, Verdict};

/// Detector stub replaying the same scripted detection set for every
/// image.
pub struct ScriptedDetector {
    detections: Vec<Detection>,
    fail: bool,
}

impl ScriptedDetector {
    pub fn returning(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            detections: Vec::new(),
            fail: true,
        }
    }
}

impl Detector for ScriptedDetector {
    fn detect(&self, _image: &DynamicImage, _text_prompt: &str) -> Result<Vec<Detection>> {
        if self.fail {
            anyhow::bail!("detector backend unavailable");
        }
        Ok(self.detections.clone())
    }
}

/// Classifier stub returning a fixed label and counting invocations.
pub struct ScriptedClassifier {
    label: String,
    fail: bool,
    pub calls: Cell<usize>,
}

impl ScriptedClassifier {
    pub fn labelled(label: &str) -> Self {
        Self {
            label: label.to_string(),
            fail: false,
            calls: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            label: String::new(),
            fail: true,
            calls: Cell::new(0),
        }
    }
}

impl Classifier for ScriptedClassifier {
    fn classify(&self, _image: &DynamicImage) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            anyhow::bail!("classifier backend unavailable");
        }
        Ok(self.label.clone())
    }
}

/// Shorthand for a labelless detection.
pub fn det(x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Detection {
    Detection {
        bbox: BoundingBox::new(x1, y1, x2, y2),
        score,
        label: 0,
    }
}

pub fn boxed(x1: f32, y1: f32, x2: f32, y2: f32) -> BoundingBox {
    BoundingBox::new(x1, y1, x2, y2)
}

/// In-memory 64x64 mid-grey image for pipeline calls that never touch
/// pixel data.
pub fn test_image() -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(64, 64, Rgb([128u8, 128, 128])))
}

/// Creates a grey test PNG on disk and returns the temp file. The file is
/// cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32) -> NamedTempFile {
    let img = ImageBuffer::from_pixel(width, height, Rgb([128u8, 128, 128]));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// Builds an ImageResult directly, bypassing the pipeline.
pub fn make_result(name: &str, verdict: Verdict, detections: Vec<Detection>) -> ImageResult {
    ImageResult {
        image_name: name.to_string(),
        image_path: PathBuf::from(format!("/images/{}", name)),
        detections,
        verdict,
    }
}
