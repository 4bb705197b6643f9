use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .progress_chars("#>-"),
    );
    pb
}

/// Parse a frame index from a file like `120.png`; returns None for files
/// that are not numerically named label images.
pub fn frame_index(path: &Path) -> Option<u32> {
    if path.extension().is_some_and(|ext| ext == "png") {
        path.file_stem()?.to_str()?.parse().ok()
    } else {
        None
    }
}
