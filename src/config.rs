use crate::error::PipelineError;
use crate::models::Verdict;

/// Maps the classifier's opaque label strings onto verdicts. The two
/// designated labels are configuration, not algorithm: any label outside
/// the map reads as "no opening".
#[derive(Debug, Clone)]
pub struct VerdictMap {
    pub normal_label: String,
    pub abnormal_label: String,
}

impl VerdictMap {
    pub fn new(normal_label: impl Into<String>, abnormal_label: impl Into<String>) -> Self {
        Self {
            normal_label: normal_label.into(),
            abnormal_label: abnormal_label.into(),
        }
    }

    pub fn verdict_for(&self, label: &str) -> Verdict {
        if label == self.normal_label {
            Verdict::Normal
        } else if label == self.abnormal_label {
            Verdict::Abnormal
        } else {
            Verdict::NoOpening
        }
    }
}

impl Default for VerdictMap {
    fn default() -> Self {
        // Label strings emitted by the deployed classifier checkpoint.
        Self::new("Y-03", "N-03")
    }
}

/// Runtime parameters of the per-image pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Detections scoring at or below this are dropped (strict filter).
    pub score_threshold: f32,
    /// Overlap above which a lower-scored box is suppressed.
    pub iou_threshold: f32,
    /// Open-vocabulary prompt handed to the detector.
    pub text_prompt: String,
    pub verdict_map: VerdictMap,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Builds a config, rejecting thresholds outside [0, 1].
    pub fn new(score_threshold: f32, iou_threshold: f32) -> Result<Self, PipelineError> {
        check_unit_interval("score_threshold", score_threshold)?;
        check_unit_interval("iou_threshold", iou_threshold)?;
        Ok(Self {
            score_threshold,
            iou_threshold,
            ..Self::default()
        })
    }

    pub fn with_text_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.text_prompt = prompt.into();
        self
    }

    pub fn with_verdict_map(mut self, map: VerdictMap) -> Self {
        self.verdict_map = map;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.7,
            iou_threshold: 0.5,
            text_prompt: "manhole".to_string(),
            verdict_map: VerdictMap::default(),
            verbose: false,
        }
    }
}

fn check_unit_interval(name: &'static str, value: f32) -> Result<(), PipelineError> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&value) {
        return Err(PipelineError::Configuration { name, value });
    }
    Ok(())
}
