use glob::{glob, Pattern};
use ndarray::ArrayD;
use ndarray_npy::ReadNpyExt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::types::{SceneMasks, Volume};

/// Collect all per-scene prediction files under `pred_path`, sorted by path.
/// Files with any other extension are ignored silently.
pub fn discover_scene_files(pred_path: &Path) -> io::Result<Vec<PathBuf>> {
    // The directory portion must be escaped or metacharacters in the path
    // (e.g. brackets) would turn the pattern into a non-matching one
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&pred_path.display().to_string()),
        crate::types::PRED_EXTENSION
    );
    let mut files: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Load a prediction volume from an .npy file, flattened in row-major order.
///
/// Integer dtypes are widened to i64; f32 is widened (exactly) to f64.
pub fn load_volume(path: &Path) -> io::Result<Volume> {
    let bytes = fs::read(path)?;

    if let Ok(array) = ArrayD::<i64>::read_npy(Cursor::new(&bytes)) {
        return Ok(Volume::Int(array.iter().copied().collect()));
    }
    if let Ok(array) = ArrayD::<i32>::read_npy(Cursor::new(&bytes)) {
        return Ok(Volume::Int(array.iter().map(|&v| i64::from(v)).collect()));
    }
    if let Ok(array) = ArrayD::<f64>::read_npy(Cursor::new(&bytes)) {
        return Ok(Volume::Float(array.iter().copied().collect()));
    }
    if let Ok(array) = ArrayD::<f32>::read_npy(Cursor::new(&bytes)) {
        return Ok(Volume::Float(array.iter().map(|&v| f64::from(v)).collect()));
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{} is not an i32/i64/f32/f64 npy array", path.display()),
    ))
}

/// Write one scene's mask files and manifest under `save_path`.
///
/// The scene folder and the manifest are created unconditionally, so a scene
/// with zero foreground instances still yields an empty manifest file.
pub fn write_scene_outputs(save_path: &Path, scene: &str, outputs: &SceneMasks) -> io::Result<()> {
    let scene_folder = save_path.join(scene);
    fs::create_dir_all(&scene_folder)?;

    for mask in &outputs.masks {
        let mask_path = scene_folder.join(mask.file_name(scene));
        let mut writer = BufWriter::new(File::create(&mask_path)?);
        for value in &mask.values {
            writeln!(writer, "{}", value)?;
        }
        writer.flush()?;
    }

    // Manifest lines are newline-joined with no trailing newline
    let manifest_path = save_path.join(format!("{}.txt", scene));
    let lines: Vec<String> = outputs.manifest.iter().map(|entry| entry.to_string()).collect();
    fs::write(manifest_path, lines.join("\n"))
}
