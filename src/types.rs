use std::fmt;

// File extension that marks a valid per-scene prediction file
pub const PRED_EXTENSION: &str = "npy";

// Instance id reserved for "no instance" in prediction volumes
pub const BACKGROUND_ID: i64 = -1;

// Every exported mask is reported with this semantic class and confidence
pub const MASK_LABEL_ID: u32 = 1;
pub const MASK_CONFIDENCE: f32 = 1.0;

/// One binary instance mask derived from a scene's prediction volume.
///
/// `index` is the 0-based position in the ascending-id enumeration order and
/// appears verbatim in the output filename (`<scene>_mask<index>.txt`).
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceMask {
    pub index: usize,
    pub values: Vec<u8>,
}

impl InstanceMask {
    pub fn file_name(&self, scene: &str) -> String {
        format!("{}_mask{}.txt", scene, self.index)
    }
}

/// One line of a scene manifest: relative mask path, class id, confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub mask_path: String,
    pub label_id: u32,
    pub confidence: f32,
}

impl fmt::Display for ManifestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.1}", self.mask_path, self.label_id, self.confidence)
    }
}

/// Masks and manifest entries produced from a single scene volume.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMasks {
    pub masks: Vec<InstanceMask>,
    pub manifest: Vec<ManifestEntry>,
}

/// Flattened prediction volume, dispatched on the on-disk element type.
///
/// Integer volumes cover the common case; float volumes keep exact-equality
/// semantics (no epsilon) for instance enumeration.
#[derive(Debug, Clone)]
pub enum Volume {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl Volume {
    pub fn len(&self) -> usize {
        match self {
            Volume::Int(v) => v.len(),
            Volume::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of processing one scene in the batch driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOutcome {
    Converted { scene: String, masks: usize },
    SkippedEmpty { scene: String },
    Failed { scene: String, reason: String },
}

// Struct to hold batch processing statistics
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProcessingStats {
    pub scenes_total: usize,
    pub scenes_converted: usize,
    pub scenes_skipped_empty: usize,
    pub scenes_failed: usize,
    pub masks_written: usize,
}

impl ProcessingStats {
    pub fn from_outcomes(outcomes: &[SceneOutcome]) -> Self {
        let mut stats = Self {
            scenes_total: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                SceneOutcome::Converted { masks, .. } => {
                    stats.scenes_converted += 1;
                    stats.masks_written += masks;
                }
                SceneOutcome::SkippedEmpty { .. } => stats.scenes_skipped_empty += 1,
                SceneOutcome::Failed { .. } => stats.scenes_failed += 1,
            }
        }
        stats
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Scenes processed: {}", self.scenes_total);
        log::info!("Scenes converted: {}", self.scenes_converted);
        log::info!("Masks written: {}", self.masks_written);
        log::info!("Skipped (empty volume): {}", self.scenes_skipped_empty);
        log::info!("Failed scenes: {}", self.scenes_failed);

        if self.scenes_failed > 0 {
            log::warn!(
                "{} of {} scenes failed; their outputs are missing or incomplete",
                self.scenes_failed,
                self.scenes_total
            );
        }
    }
}
