//! Tile window over the canvas and per-tile palette assignments
//!
//! Tiles are addressed in tile coordinates: tile `(col, row)` covers pixels
//! starting at `(col * tile_size, row * tile_size)`. The window extends past
//! the canvas by a margin so edge tiles are computed like interior ones.

use crate::io::configuration::{CENTROID_FAR, CENTROID_NEAR};
use ndarray::Array2;

/// Rectangular range of tile coordinates covering a canvas plus margin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileWindow {
    /// Tile coordinate of the first column (negative with a margin)
    pub first_col: i64,
    /// Tile coordinate of the first row (negative with a margin)
    pub first_row: i64,
    /// Number of columns in the window
    pub cols: usize,
    /// Number of rows in the window
    pub rows: usize,
    /// Tile edge length in pixels
    pub tile_size: u32,
}

impl TileWindow {
    /// Window covering a `width` x `height` canvas with `margin` extra tiles per side
    pub fn covering(width: u32, height: u32, tile_size: u32, margin: u32) -> Self {
        let tile = tile_size.max(1);
        let span = |pixels: u32| pixels.div_ceil(tile) as usize + 2 * margin as usize;
        Self {
            first_col: -i64::from(margin),
            first_row: -i64::from(margin),
            cols: span(width),
            rows: span(height),
            tile_size: tile,
        }
    }

    /// Total number of tiles in the window
    pub const fn tile_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Tile coordinate of the window row at `offset`
    pub const fn row_at(&self, offset: usize) -> i64 {
        self.first_row + offset as i64
    }

    /// Tile coordinate of the window column at `offset`
    pub const fn col_at(&self, offset: usize) -> i64 {
        self.first_col + offset as i64
    }

    fn offsets(&self, col: i64, row: i64) -> Option<(usize, usize)> {
        let col_offset = usize::try_from(col - self.first_col).ok()?;
        let row_offset = usize::try_from(row - self.first_row).ok()?;
        (col_offset < self.cols && row_offset < self.rows).then_some((row_offset, col_offset))
    }
}

/// Pixel-space sample points of a tile's two triangles
///
/// The first lies nearer the top-left corner, the second nearer the
/// bottom-right, so each triangle reads its own region of the noise field.
pub fn centroids(col: i64, row: i64, tile_size: u32) -> [(f64, f64); 2] {
    let size = f64::from(tile_size);
    let px = (col * i64::from(tile_size)) as f64;
    let py = (row * i64::from(tile_size)) as f64;
    [
        (px + size * CENTROID_NEAR, py + size * CENTROID_NEAR),
        (px + size * CENTROID_FAR, py + size * CENTROID_FAR),
    ]
}

/// Palette index pairs for every tile in a window
///
/// Each entry holds `[top_left, bottom_right]` indices into the
/// luminance-ordered palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    window: TileWindow,
    indices: Array2<[usize; 2]>,
}

impl TileGrid {
    /// Grid for `window` with every tile assigned index 0 on both halves
    pub fn new(window: TileWindow) -> Self {
        Self {
            window,
            indices: Array2::from_elem((window.rows, window.cols), [0, 0]),
        }
    }

    /// Window this grid covers
    pub const fn window(&self) -> &TileWindow {
        &self.window
    }

    /// Index pair of the tile at tile coordinates, if inside the window
    pub fn indices_at(&self, col: i64, row: i64) -> Option<[usize; 2]> {
        let offsets = self.window.offsets(col, row)?;
        self.indices.get(offsets).copied()
    }

    /// Assign the index pair of a tile; returns false outside the window
    pub fn set(&mut self, col: i64, row: i64, pair: [usize; 2]) -> bool {
        let Some(offsets) = self.window.offsets(col, row) else {
            return false;
        };
        self.indices.get_mut(offsets).is_some_and(|slot| {
            *slot = pair;
            true
        })
    }

    /// Every index in the grid, top-left before bottom-right per tile
    pub fn all_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().flat_map(|pair| pair.iter().copied())
    }
}
