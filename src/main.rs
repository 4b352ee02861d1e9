use clap::Parser;
use std::path::PathBuf;

use openscan::export::export_abnormal;
use openscan::{DetectionPipeline, PipelineConfig, ResultBatch};

#[cfg(not(feature = "backend-mock"))]
compile_error!("no detector backend enabled; build with the backend-mock feature");

#[derive(Parser)]
#[command(name = "openscan")]
#[command(about = "Detect and classify safety openings in site images")]
struct Cli {
    /// Folder of images to inspect
    #[arg(value_name = "FOLDER")]
    image_folder: PathBuf,

    /// Folder for annotated copies of abnormal images
    #[arg(short, long, value_name = "DIR", default_value = "results")]
    out_dir: PathBuf,

    /// Text prompt handed to the open-vocabulary detector
    #[arg(long, default_value = "manhole")]
    prompt: String,

    /// Minimum detector score; detections at or below are dropped
    #[arg(long, default_value_t = 0.7)]
    score_threshold: f32,

    /// Overlap above which a lower-scored box is suppressed
    #[arg(long, default_value_t = 0.5)]
    iou_threshold: f32,

    /// Skip writing annotated copies of abnormal images
    #[arg(long)]
    no_export: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = PipelineConfig::new(args.score_threshold, args.iou_threshold)?
        .with_text_prompt(args.prompt)
        .with_verbose(args.verbose);

    #[cfg(feature = "backend-mock")]
    let pipeline = DetectionPipeline::new(
        openscan::detection::mock::MockDetector,
        openscan::detection::mock::MockClassifier,
        config,
    );

    let mut batch = ResultBatch::new();
    let failures = pipeline.process_folder(&args.image_folder, &mut batch)?;

    println!("\n=== Inspection Results ===");
    if batch.is_empty() {
        println!("No images processed.");
    } else {
        println!(
            "{:<5} {:<30} {:<16} {:>9}  {}",
            "No.", "Image", "Verdict", "Conf (%)", "Path"
        );
        for row in batch.to_table() {
            println!(
                "{:<5} {:<30} {:<16} {:>9.2}  {}",
                row.index,
                row.image_name,
                row.verdict,
                row.confidence,
                row.image_path.display()
            );
        }
    }

    if !failures.is_empty() {
        println!("\n{} image(s) failed and were skipped:", failures.len());
        for failure in &failures {
            println!("  {}", failure);
        }
    }

    if !args.no_export {
        let written = export_abnormal(&batch, &args.out_dir, args.verbose)?;
        println!(
            "\nExported {} annotated image(s) to {}",
            written.len(),
            args.out_dir.display()
        );
    }

    Ok(())
}
