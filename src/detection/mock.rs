//! Deterministic synthetic backend so the tool runs end to end without
//! model weights.

use anyhow::Result;
use image::DynamicImage;

use super::{Classifier, Detector};
use crate::models::{BoundingBox, Detection};

/// Emits a centered candidate box plus a slightly shifted, lower-scored
/// echo of it, sized from the image dimensions. The echo exercises the
/// suppression path on every image.
#[derive(Debug, Default)]
pub struct MockDetector;

impl Detector for MockDetector {
    fn detect(&self, image: &DynamicImage, _text_prompt: &str) -> Result<Vec<Detection>> {
        let w = image.width() as f32;
        let h = image.height() as f32;
        if w < 8.0 || h < 8.0 {
            return Ok(Vec::new());
        }

        let primary = BoundingBox::new(w * 0.25, h * 0.25, w * 0.75, h * 0.75);
        let echo = BoundingBox::new(w * 0.27, h * 0.27, w * 0.77, h * 0.77);

        Ok(vec![
            Detection {
                bbox: primary,
                score: 0.9,
                label: 0,
            },
            Detection {
                bbox: echo,
                score: 0.8,
                label: 0,
            },
        ])
    }
}

/// Labels images by mean brightness: dark scenes read as open. The label
/// strings mirror the default verdict map.
#[derive(Debug, Default)]
pub struct MockClassifier;

impl Classifier for MockClassifier {
    fn classify(&self, image: &DynamicImage) -> Result<String> {
        let gray = image.to_luma8();
        let count = (gray.width() as u64 * gray.height() as u64).max(1);
        let sum: u64 = gray.pixels().map(|p| p[0] as u64).sum();
        let mean = sum / count;

        Ok(if mean < 96 { "N-03" } else { "Y-03" }.to_string())
    }
}
