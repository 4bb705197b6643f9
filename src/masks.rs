use std::cmp::Ordering;

use crate::types::{
    InstanceMask, ManifestEntry, SceneMasks, Volume, BACKGROUND_ID, MASK_CONFIDENCE, MASK_LABEL_ID,
};

/// An element type that can appear in a prediction volume.
///
/// Float volumes use plain exact `==` equality for instance matching and a
/// total order for sorting; no epsilon semantics are introduced anywhere.
pub trait InstanceId: Copy + PartialEq + Send + Sync {
    fn is_background(self) -> bool;
    fn cmp_ids(&self, other: &Self) -> Ordering;
}

impl InstanceId for i64 {
    fn is_background(self) -> bool {
        self == BACKGROUND_ID
    }

    fn cmp_ids(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl InstanceId for f64 {
    fn is_background(self) -> bool {
        self == BACKGROUND_ID as f64
    }

    fn cmp_ids(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Distinct non-background values of `volume` in ascending order.
///
/// This order fixes the mask index used in filenames and manifest lines and
/// is an external observable contract of the converter.
pub fn distinct_instances<T: InstanceId>(volume: &[T]) -> Vec<T> {
    let mut ids: Vec<T> = volume.iter().copied().filter(|v| !v.is_background()).collect();
    ids.sort_unstable_by(InstanceId::cmp_ids);
    ids.dedup();
    ids
}

/// Convert a flattened prediction volume into per-instance binary masks and
/// the matching manifest entries for one scene.
///
/// A volume with no foreground instances yields zero masks and an empty
/// manifest; the caller is expected to have filtered out zero-element
/// volumes beforehand.
pub fn convert_scene<T: InstanceId>(scene: &str, volume: &[T]) -> SceneMasks {
    let instances = distinct_instances(volume);

    let mut masks = Vec::with_capacity(instances.len());
    let mut manifest = Vec::with_capacity(instances.len());
    for (index, id) in instances.into_iter().enumerate() {
        let values = volume
            .iter()
            .map(|&v| u8::from(v == id))
            .collect::<Vec<u8>>();
        let mask = InstanceMask { index, values };
        manifest.push(ManifestEntry {
            mask_path: format!("{}/{}", scene, mask.file_name(scene)),
            label_id: MASK_LABEL_ID,
            confidence: MASK_CONFIDENCE,
        });
        masks.push(mask);
    }

    SceneMasks { masks, manifest }
}

/// Dispatch on the volume's element type.
pub fn convert_volume(scene: &str, volume: &Volume) -> SceneMasks {
    match volume {
        Volume::Int(data) => convert_scene(scene, data),
        Volume::Float(data) => convert_scene(scene, data),
    }
}
