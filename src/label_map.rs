use std::collections::HashMap;
use std::io;
use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

/// Raw label images are stored as 16-bit grayscale PNGs.
pub type RawLabelImage = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Translation table from a dataset-native label id space to a target
/// taxonomy's id space, loaded once from a TSV resource.
///
/// Target ids must fit the 8-bit output format; rows with a target outside
/// [0, 255] are rejected at load time rather than silently truncated.
#[derive(Debug, Clone, Default)]
pub struct LabelMapping {
    map: HashMap<u16, u8>,
}

impl LabelMapping {
    pub fn from_pairs<I>(pairs: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = (u16, u32)>,
    {
        let mut map = HashMap::new();
        for (from, to) in pairs {
            let to = u8::try_from(to).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("target label id {} for raw id {} does not fit 8-bit output", to, from),
                )
            })?;
            map.insert(from, to);
        }
        Ok(Self { map })
    }

    /// Load the mapping from a tab-separated file with named header columns.
    pub fn from_tsv(path: &Path, from_col: &str, to_col: &str) -> io::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_path(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let headers = reader
            .headers()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let from_idx = column_index(headers, from_col, path)?;
        let to_idx = column_index(headers, to_col, path)?;

        let mut pairs = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let from_field = record.get(from_idx).unwrap_or("").trim();
            let to_field = record.get(to_idx).unwrap_or("").trim();
            // Rows without a target id have no translation and are skipped
            if to_field.is_empty() {
                continue;
            }
            let from = parse_field::<u16>(from_field, from_col, path)?;
            let to = parse_field::<u32>(to_field, to_col, path)?;
            pairs.push((from, to));
        }
        Self::from_pairs(pairs)
    }

    pub fn get(&self, raw_id: u16) -> Option<u8> {
        self.map.get(&raw_id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> io::Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("column '{}' not found in {}", name, path.display()),
        )
    })
}

fn parse_field<T: std::str::FromStr>(field: &str, col: &str, path: &Path) -> io::Result<T> {
    field.parse::<T>().map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid value '{}' in column '{}' of {}", field, col, path.display()),
        )
    })
}

/// Rewrite every pixel that is a key of `mapping` to its mapped id and cast
/// the result to 8 bits. Pixels absent from the mapping pass through
/// unchanged; a pass-through value above 255 is an error rather than a
/// silent truncation.
pub fn remap_label_image(image: &RawLabelImage, mapping: &LabelMapping) -> io::Result<GrayImage> {
    let mut mapped = GrayImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(mapped.pixels_mut()) {
        let raw = src.0[0];
        let id = match mapping.get(raw) {
            Some(id) => id,
            None => u8::try_from(raw).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unmapped label id {} does not fit 8-bit output", raw),
                )
            })?,
        };
        dst.0 = [id];
    }
    Ok(mapped)
}
