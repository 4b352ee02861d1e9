//! Annotated export of the abnormal subset: each source image is copied
//! with its kept detection boxes drawn on, then written to the
//! destination folder under its original name.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::batch::ResultBatch;
use crate::models::{Detection, Verdict};

const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
/// Outline thickness in pixels.
const BOX_WEIGHT: i32 = 2;
const SCORE_BAR_HEIGHT: u32 = 6;

/// Writes an annotated copy of every `Abnormal` image into `dest` and
/// returns the written paths.
///
/// An empty batch, or one with no abnormal entries, yields an empty list;
/// that is a notice for the operator, not an error.
pub fn export_abnormal(batch: &ResultBatch, dest: &Path, verbose: bool) -> Result<Vec<PathBuf>> {
    if batch.is_empty() {
        if verbose {
            println!("No results to export");
        }
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dest)
        .with_context(|| format!("creating export folder {}", dest.display()))?;

    let mut written = Vec::new();
    for result in batch.filter_by_verdict(Verdict::Abnormal) {
        let image = image::ImageReader::open(&result.image_path)
            .with_context(|| format!("opening {}", result.image_path.display()))?
            .decode()
            .with_context(|| format!("decoding {}", result.image_path.display()))?;
        let mut canvas = image.to_rgb8();

        for det in &result.detections {
            draw_detection(&mut canvas, det);
        }

        let out_path = dest.join(&result.image_name);
        canvas
            .save(&out_path)
            .with_context(|| format!("writing {}", out_path.display()))?;
        if verbose {
            println!("  Exported {}", out_path.display());
        }
        written.push(out_path);
    }

    Ok(written)
}

/// Hollow rectangle around the box plus a score bar above it whose width
/// is the kept score as a fraction of the box width.
fn draw_detection(canvas: &mut RgbImage, det: &Detection) {
    let x = det.bbox.x1.round() as i32;
    let y = det.bbox.y1.round() as i32;
    let w = det.bbox.width().round().max(1.0) as u32;
    let h = det.bbox.height().round().max(1.0) as u32;

    for inset in 0..BOX_WEIGHT {
        let shrink = (2 * inset) as u32;
        let rect = Rect::at(x + inset, y + inset)
            .of_size(w.saturating_sub(shrink).max(1), h.saturating_sub(shrink).max(1));
        draw_hollow_rect_mut(canvas, rect, BOX_COLOR);
    }

    let bar_w = ((w as f32) * det.score.clamp(0.0, 1.0)).round().max(1.0) as u32;
    let bar = Rect::at(x, y - SCORE_BAR_HEIGHT as i32 - 2).of_size(bar_w, SCORE_BAR_HEIGHT);
    draw_filled_rect_mut(canvas, bar, BOX_COLOR);
}
