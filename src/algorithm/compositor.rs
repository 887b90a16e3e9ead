//! Rasterizes a tile grid into pixels
//!
//! Each square is filled with its bottom-right color, then the triangle
//! spanned by its top-left, top-right and bottom-left corners is painted
//! with the top-left color. Colors are selected, never blended.

use crate::color::palette::Rgb;
use crate::io::error::{PatternError, Result};
use crate::spatial::tiles::TileGrid;
use image::{ImageBuffer, Rgba, RgbaImage};

/// Whether the pixel at local offset `(i, j)` inside a tile belongs to the top-left triangle
///
/// Pixel centres lying exactly on the diagonal go to the bottom-right half.
pub const fn in_top_left_triangle(i: u32, j: u32, tile_size: u32) -> bool {
    i + j + 1 < tile_size
}

/// Paint the canvas region of `grid` using colors from the luminance-ordered palette
///
/// # Errors
///
/// Returns `InvalidPaletteIndex` if the grid references a color outside
/// `ordered`, or `InvalidParameter` if a canvas tile is missing from the grid
pub fn composite(grid: &TileGrid, ordered: &[Rgb], width: u32, height: u32) -> Result<RgbaImage> {
    let tile_size = grid.window().tile_size;
    let mut image: RgbaImage = ImageBuffer::new(width, height);

    for y in 0..height {
        let row = i64::from(y / tile_size);
        let j = y % tile_size;
        for x in 0..width {
            let col = i64::from(x / tile_size);
            let i = x % tile_size;

            let [top_left, bottom_right] = grid.indices_at(col, row).ok_or_else(|| {
                crate::io::error::invalid_parameter(
                    "grid",
                    &format!("tile ({col}, {row})"),
                    &"tile grid does not cover the canvas",
                )
            })?;
            let index = if in_top_left_triangle(i, j, tile_size) {
                top_left
            } else {
                bottom_right
            };
            let color = ordered
                .get(index)
                .ok_or(PatternError::InvalidPaletteIndex {
                    index,
                    len: ordered.len(),
                })?;

            image.put_pixel(x, y, Rgba([color.r(), color.g(), color.b(), u8::MAX]));
        }
    }

    Ok(image)
}
