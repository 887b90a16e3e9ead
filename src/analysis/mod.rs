//! Analysis modules for value distribution and palette usage

/// Histogram equalization of noise values onto palette indices
pub mod equalization;
/// Palette usage statistics
pub mod usage;
