//! Spatial data structures for the tile grid

/// Tile window and palette index grid
pub mod tiles;

pub use tiles::{TileGrid, TileWindow};
