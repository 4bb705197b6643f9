use image::imageops::{self, FilterType};
use log::{error, info};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ExportArgs;
use crate::label_map::{remap_label_image, LabelMapping, RawLabelImage};
use crate::utils::{create_progress_bar, frame_index};

/// Export remapped label images for every scene under `scannet_path`.
///
/// Loading the label mapping is a fatal precondition; after that, a scene
/// that fails (missing label directory, unreadable frame) is logged and the
/// remaining scenes continue.
pub fn export_scenes(args: &ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mapping = LabelMapping::from_tsv(
        Path::new(&args.label_map_file),
        &args.label_from,
        &args.label_to,
    )?;
    info!(
        "Loaded {} label mappings ({} -> {})",
        mapping.len(),
        args.label_from,
        args.label_to
    );

    let scannet_path = Path::new(&args.scannet_path);
    let output_path = Path::new(&args.output_path);
    fs::create_dir_all(output_path)?;

    let scenes = discover_scenes(scannet_path)?;
    info!("Found {} scenes", scenes.len());

    let pb = create_progress_bar(scenes.len() as u64, "Scenes");
    let mut failed = 0usize;
    for scene_dir in &scenes {
        if let Err(e) = export_scene_labels(scene_dir, output_path, &mapping, args) {
            error!("Failed to export scene {}: {}", scene_dir.display(), e);
            failed += 1;
        }
        pb.inc(1);
    }
    pb.finish_with_message("Label export complete");

    if failed > 0 {
        log::warn!("{} of {} scenes failed to export", failed, scenes.len());
    }
    Ok(())
}

/// Scene directories under the dataset root, sorted by name.
pub fn discover_scenes(scannet_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut scenes: Vec<PathBuf> = fs::read_dir(scannet_path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    scenes.sort();
    Ok(scenes)
}

/// Export every `frame_skip`-th label frame of one scene: load the raw
/// 16-bit label image, resize with nearest-neighbor to the target size,
/// remap ids, and write the 8-bit result.
pub fn export_scene_labels(
    scene_dir: &Path,
    output_path: &Path,
    mapping: &LabelMapping,
    args: &ExportArgs,
) -> io::Result<()> {
    let scene = scene_dir
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "scene directory name is not valid UTF-8")
        })?;

    let label_dir = scene_dir.join(&args.label_type);
    if !label_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("label path {} does not exist", label_dir.display()),
        ));
    }

    let output_label_dir = output_path.join(scene).join("label");
    fs::create_dir_all(&output_label_dir)?;

    let mut frames: Vec<(u32, PathBuf)> = fs::read_dir(&label_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter_map(|path| frame_index(&path).map(|index| (index, path)))
        .filter(|(index, _)| index % args.frame_skip == 0)
        .collect();
    frames.sort();

    frames.par_iter().try_for_each(|(index, path)| {
        let raw: RawLabelImage = image::open(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
            .to_luma16();
        let resized = imageops::resize(
            &raw,
            args.output_image_width,
            args.output_image_height,
            FilterType::Nearest,
        );
        let mapped = remap_label_image(&resized, mapping)?;
        mapped
            .save(output_label_dir.join(format!("{}.png", index)))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    })
}
