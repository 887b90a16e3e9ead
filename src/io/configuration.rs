//! Generator constants and runtime configuration defaults

// Render defaults
/// Default export width in pixels
pub const DEFAULT_WIDTH: u32 = 512;
/// Default export height in pixels
pub const DEFAULT_HEIGHT: u32 = 512;
/// Default export tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 48;
/// Default grain magnitude (0 disables grain)
pub const DEFAULT_NOISE_SOFTNESS: f64 = 8.0;
/// Default spatial noise scale in pixels per lattice cell
pub const DEFAULT_RANDOMNESS_SOFTNESS: f64 = 64.0;

// Equalization
/// Number of fBm samples used to build the equalization curve
pub const EQUALIZATION_SAMPLE_COUNT: usize = 2000;
/// Sample coordinates are drawn from `[0, EQUALIZATION_SAMPLE_SPAN)` on both axes
pub const EQUALIZATION_SAMPLE_SPAN: f64 = 50.0;

// Fractal noise
/// Number of summed noise octaves
pub const FBM_OCTAVES: u32 = 4;
/// Frequency multiplier between octaves
pub const FBM_LACUNARITY: f64 = 2.0;
/// Amplitude multiplier between octaves
pub const FBM_GAIN: f64 = 0.55;

// Tile sampling
/// Relative position of the top-left triangle's sample point inside a tile
pub const CENTROID_NEAR: f64 = 0.33;
/// Relative position of the bottom-right triangle's sample point inside a tile
pub const CENTROID_FAR: f64 = 0.66;
/// Extra tiles computed around the canvas on every side
pub const TILE_MARGIN: u32 = 1;

/// Replacement state for a zero seed (xorshift is stuck at zero)
pub const ZERO_SEED_REPLACEMENT: u32 = 0x811C_9DC5;

// Input boundary limits enforced by the command line
/// Largest accepted canvas edge in pixels
pub const MAX_DIMENSION: u32 = 8192;
/// Largest accepted tile edge in pixels
pub const MAX_TILE_SIZE: u32 = 1024;
/// Largest accepted grain magnitude
pub const MAX_NOISE_SOFTNESS: f64 = 255.0;
/// Smallest accepted spatial noise scale
pub const MIN_RANDOMNESS_SOFTNESS: f64 = 1.0;

// Output settings
/// Prefix for generated file names (`pattern-512x512.png`)
pub const OUTPUT_PREFIX: &str = "pattern";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
