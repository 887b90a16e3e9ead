//! Palette storage and presets

/// Ordered palette and RGB color type
pub mod palette;
/// Built-in palette presets
pub mod presets;

pub use palette::{Palette, Rgb};
pub use presets::PalettePreset;
