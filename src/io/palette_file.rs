//! JSON persistence of palettes as ordered lists of `[r, g, b]` arrays

use crate::color::palette::{Palette, Rgb};
use crate::io::error::{PatternError, Result, WithPath, invalid_palette_file};
use serde_json::Value;
use std::path::Path;

/// Serialize a palette to a JSON array of `[r, g, b]` arrays
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn palette_to_json(palette: &Palette) -> Result<String> {
    Ok(serde_json::to_string(palette)?)
}

/// Parse a JSON palette document
///
/// Every entry must be a 3-element array of finite numbers; channels are
/// rounded and clamped to `[0, 255]`. Any bad entry rejects the whole
/// document.
///
/// # Errors
///
/// Returns `InvalidPaletteFile` for invalid JSON, a non-array document, or
/// the first malformed entry
pub fn parse_palette_json(text: &str) -> Result<Palette> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = document else {
        return Err(invalid_palette_file(&"document is not an array of colors"));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(entry).ok_or_else(|| {
            invalid_palette_file(&format!(
                "entry {index} is not a 3-element numeric array: {entry}"
            ))
        }))
        .collect()
}

fn parse_entry(entry: &Value) -> Option<Rgb> {
    match entry.as_array()?.as_slice() {
        [r, g, b] => Rgb::from_channels(r.as_f64()?, g.as_f64()?, b.as_f64()?),
        _ => None,
    }
}

/// Write a palette to a JSON file
///
/// # Errors
///
/// Returns a `FileSystem` error if the file cannot be written
pub fn save_palette(palette: &Palette, path: &Path) -> Result<()> {
    let json = palette_to_json(palette)?;
    std::fs::write(path, json).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "write palette",
        source: e,
    })
}

/// Read a palette from a JSON file
///
/// # Errors
///
/// Returns a `FileSystem` error if the file cannot be read, or
/// `InvalidPaletteFile` carrying the path if its contents are malformed
pub fn load_palette(path: &Path) -> Result<Palette> {
    let text = std::fs::read_to_string(path).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "read palette",
        source: e,
    })?;
    parse_palette_json(&text).with_path(path)
}
