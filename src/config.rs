use clap::Parser;
use std::str::FromStr;

/// Command-line arguments for the ScanNet label-image exporter.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ExportArgs {
    /// Directory containing per-scene ScanNet data (one subdirectory per scene)
    #[arg(long = "scannet_path")]
    pub scannet_path: String,

    /// Directory to write exported 2D data into
    #[arg(long = "output_path")]
    pub output_path: String,

    /// Path to the label mapping TSV (e.g. scannetv2-labels.combined.tsv)
    #[arg(long = "label_map_file")]
    pub label_map_file: String,

    /// Which raw label images to export ('label' or 'label-filt')
    #[arg(long = "label_type", default_value = "label-filt")]
    pub label_type: String,

    /// Export every nth frame
    #[arg(long = "frame_skip", default_value_t = 20, value_parser = validate_positive)]
    pub frame_skip: u32,

    /// Exported image width
    #[arg(long = "output_image_width", default_value_t = 640, value_parser = validate_positive)]
    pub output_image_width: u32,

    /// Exported image height
    #[arg(long = "output_image_height", default_value_t = 480, value_parser = validate_positive)]
    pub output_image_height: u32,

    /// Name of the TSV column holding raw label ids
    #[arg(long = "label_from", default_value = "id")]
    pub label_from: String,

    /// Name of the TSV column holding target label ids
    #[arg(long = "label_to", default_value = "nyu40id")]
    pub label_to: String,
}

/// Command-line arguments for the prediction-to-mask converter.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct ConvertArgs {
    /// Directory containing per-scene prediction volumes (.npy)
    #[arg(long = "pred_path")]
    pub pred_path: String,

    /// Directory to write mask files and manifests into
    #[arg(long = "save_path")]
    pub save_path: String,

    /// Number of parallel workers
    #[arg(long = "workers", default_value_t = 8, value_parser = validate_workers)]
    pub workers: usize,
}

// Validate that a numeric flag is at least 1
fn validate_positive(s: &str) -> Result<u32, String> {
    match u32::from_str(s) {
        Ok(val) if val >= 1 => Ok(val),
        _ => Err("value must be a positive integer".to_string()),
    }
}

fn validate_workers(s: &str) -> Result<usize, String> {
    match usize::from_str(s) {
        Ok(val) if val >= 1 => Ok(val),
        _ => Err("workers must be a positive integer".to_string()),
    }
}
