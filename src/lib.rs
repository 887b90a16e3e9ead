//! Seeded diagonal-tile pattern generator
//!
//! Every square tile is split by its diagonal into two triangles. Each
//! triangle samples a fractal value-noise field, and the sample is ranked
//! against the field's own distribution so palette colors are used evenly.
//! Given the same seed and parameters the pattern is reproducible; an
//! optional grain pass adds fresh per-pixel variation on every render.

#![forbid(unsafe_code)]

/// Render pipeline, tile compositing and grain
pub mod algorithm;
/// Noise value distribution and palette usage analysis
pub mod analysis;
/// Colors, palettes and presets
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Pseudo-random numbers and noise fields
pub mod math;
/// Tile window and per-tile palette assignments
pub mod spatial;

pub use algorithm::renderer::{CancelToken, PatternRenderer, RenderConfig, render_pattern};
pub use color::{Palette, PalettePreset, Rgb};
pub use io::error::{PatternError, Result};
pub use math::random::Seed;
