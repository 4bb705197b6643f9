use log::{error, warn};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::config::ConvertArgs;
use crate::io::{discover_scene_files, load_volume, write_scene_outputs};
use crate::masks::convert_volume;
use crate::types::{ProcessingStats, SceneOutcome};
use crate::utils::create_progress_bar;

/// Convert every per-scene prediction file under `pred_path` into mask files
/// and manifests, fanning scenes out over a pool of `workers` threads.
///
/// Scenes are fully independent; one failing scene is logged and counted
/// without aborting the batch.
pub fn run_batch(args: &ConvertArgs) -> Result<ProcessingStats, Box<dyn std::error::Error>> {
    let pred_path = Path::new(&args.pred_path);
    let save_path = Path::new(&args.save_path);
    fs::create_dir_all(save_path)?;

    let files = discover_scene_files(pred_path)?;
    log::info!("Found {} prediction files in {}", files.len(), pred_path.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.workers)
        .build()?;

    let pb = create_progress_bar(files.len() as u64, "Scenes");
    let outcomes: Vec<SceneOutcome> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let outcome = process_scene(file, save_path);
                if let SceneOutcome::Failed { scene, reason } = &outcome {
                    error!("Failed to process scene {}: {}", scene, reason);
                }
                pb.inc(1);
                outcome
            })
            .collect()
    });
    pb.finish_with_message("Scene processing complete");

    Ok(ProcessingStats::from_outcomes(&outcomes))
}

/// Convert a single prediction file; all failures are folded into the
/// returned outcome so the caller can keep the batch running.
pub fn process_scene(file: &Path, save_path: &Path) -> SceneOutcome {
    let scene = match file.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) => stem.to_string(),
        None => {
            return SceneOutcome::Failed {
                scene: file.display().to_string(),
                reason: "file name is not valid UTF-8".to_string(),
            }
        }
    };

    let volume = match load_volume(file) {
        Ok(volume) => volume,
        Err(e) => {
            return SceneOutcome::Failed {
                scene,
                reason: format!("failed to load volume: {}", e),
            }
        }
    };

    if volume.is_empty() {
        warn!("{} is empty, skipping", file.display());
        return SceneOutcome::SkippedEmpty { scene };
    }

    let outputs = convert_volume(&scene, &volume);
    match write_scene_outputs(save_path, &scene, &outputs) {
        Ok(()) => SceneOutcome::Converted {
            scene,
            masks: outputs.masks.len(),
        },
        Err(e) => SceneOutcome::Failed {
            scene,
            reason: format!("failed to write outputs: {}", e),
        },
    }
}
