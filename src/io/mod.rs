/// Command-line parsing and the render-and-export job
pub mod cli;
/// Defaults, limits and algorithm constants
pub mod configuration;
/// Error types and path context
pub mod error;
/// PNG export
pub mod image;
/// Palette JSON persistence
pub mod palette_file;
/// Render progress display
pub mod progress;
