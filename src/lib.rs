//! Offline data converters for a ScanNet scene-understanding pipeline
//!
//! This library backs two command-line tools: a per-scene label-image
//! exporter that remaps raw ScanNet label ids into a target taxonomy, and a
//! prediction-format converter that turns per-point instance volumes into
//! per-instance binary mask files plus an evaluation manifest.

pub mod batch;
pub mod config;
pub mod export;
pub mod io;
pub mod label_map;
pub mod masks;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use batch::{process_scene, run_batch};
pub use config::{ConvertArgs, ExportArgs};
pub use export::export_scenes;
pub use label_map::{remap_label_image, LabelMapping, RawLabelImage};
pub use masks::{convert_scene, convert_volume, distinct_instances};
pub use types::{
    InstanceMask, ManifestEntry, ProcessingStats, SceneMasks, SceneOutcome, Volume,
};
