//! Render pipeline from configuration to pixel buffer
//!
//! Stages: validate, sort the palette by luminance, build the equalization
//! curve, assign palette indices to every tile, composite, then apply grain.
//! Everything before grain is a pure function of the configuration.

use crate::algorithm::compositor::composite;
use crate::algorithm::grain::apply_grain;
use crate::analysis::equalization::Equalizer;
use crate::color::palette::{Palette, Rgb};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_NOISE_SOFTNESS, DEFAULT_RANDOMNESS_SOFTNESS, DEFAULT_TILE_SIZE,
    DEFAULT_WIDTH, EQUALIZATION_SAMPLE_COUNT, EQUALIZATION_SAMPLE_SPAN, TILE_MARGIN,
};
use crate::io::error::{PatternError, Result, invalid_palette, invalid_parameter};
use crate::math::noise::{FractalParams, LatticeNoise, fbm};
use crate::math::random::{Seed, XorShift32};
use crate::spatial::tiles::{TileGrid, TileWindow, centroids};
use image::RgbaImage;
use log::{debug, warn};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Everything a render depends on
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pattern seed
    pub seed: Seed,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Colors in stored order
    pub palette: Palette,
    /// Pixels per noise lattice cell; larger values give larger color regions
    pub randomness_softness: f64,
    /// Grain magnitude; 0 disables grain
    pub noise_softness: f64,
}

impl RenderConfig {
    /// Configuration with default dimensions and softness values
    pub const fn new(seed: Seed, palette: Palette) -> Self {
        Self {
            seed,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            palette,
            randomness_softness: DEFAULT_RANDOMNESS_SOFTNESS,
            noise_softness: DEFAULT_NOISE_SOFTNESS,
        }
    }

    /// Reject parameters the pipeline cannot honour
    ///
    /// Values are rejected rather than clamped; clamping belongs to the
    /// input layer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero dimension or tile size, a
    /// non-finite or non-positive randomness softness, or a non-finite or
    /// negative noise softness; `InvalidPalette` for an empty palette
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter("height", &self.height, &"must be positive"));
        }
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be positive",
            ));
        }
        if !self.randomness_softness.is_finite() || self.randomness_softness <= 0.0 {
            return Err(invalid_parameter(
                "randomness_softness",
                &self.randomness_softness,
                &"must be finite and greater than zero",
            ));
        }
        if !self.noise_softness.is_finite() || self.noise_softness < 0.0 {
            return Err(invalid_parameter(
                "noise_softness",
                &self.noise_softness,
                &"must be finite and not negative",
            ));
        }
        if self.palette.is_empty() {
            return Err(invalid_palette(&"palette has no colors to draw tiles with"));
        }
        Ok(())
    }
}

/// Shared flag for stopping a render between tile rows
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; renders holding a clone stop at the next row
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configured single-use render of one pattern
pub struct PatternRenderer<'a> {
    config: &'a RenderConfig,
    ordered: Vec<Rgb>,
    params: FractalParams,
    cancel: Option<CancelToken>,
    row_observer: Option<Box<dyn FnMut(usize, usize) + 'a>>,
}

impl<'a> PatternRenderer<'a> {
    /// Validate the configuration and prepare the luminance-ordered palette
    ///
    /// # Errors
    ///
    /// Returns any error from [`RenderConfig::validate`]
    pub fn new(config: &'a RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ordered: config.palette.sorted_by_luminance(),
            params: FractalParams::default(),
            cancel: None,
            row_observer: None,
        })
    }

    /// Stop with `Cancelled` once `token` is cancelled
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Call `observer(rows_done, rows_total)` after each tile row
    #[must_use]
    pub fn with_row_observer(mut self, observer: impl FnMut(usize, usize) + 'a) -> Self {
        self.row_observer = Some(Box::new(observer));
        self
    }

    /// Palette sorted by luminance, as indexed by the tile grid
    pub fn ordered_palette(&self) -> &[Rgb] {
        &self.ordered
    }

    /// Compute the palette index pair of every tile in the window
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if the cancel token fires before the last row
    pub fn tile_grid(&mut self) -> Result<TileGrid> {
        let config = self.config;
        let mut field = LatticeNoise::new(config.seed);
        let mut rng = XorShift32::from_seed(config.seed);
        let equalizer = Equalizer::build(
            &mut field,
            &mut rng,
            EQUALIZATION_SAMPLE_COUNT,
            EQUALIZATION_SAMPLE_SPAN,
            &self.params,
        );

        let window = TileWindow::covering(
            config.width,
            config.height,
            config.tile_size,
            TILE_MARGIN,
        );
        if config.tile_size > config.width && config.tile_size > config.height {
            warn!(
                "Tile size {} exceeds the {}x{} canvas; only one tile is visible",
                config.tile_size, config.width, config.height
            );
        }
        debug!(
            "Rendering seed {} over {}x{} tiles ({} palette colors)",
            field.seed(),
            window.cols,
            window.rows,
            self.ordered.len()
        );

        let palette_len = self.ordered.len();
        let softness = config.randomness_softness;
        let mut grid = TileGrid::new(window);

        for row_offset in 0..window.rows {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                return Err(PatternError::Cancelled { row: row_offset });
            }

            let row = window.row_at(row_offset);
            for col_offset in 0..window.cols {
                let col = window.col_at(col_offset);
                let [(ax, ay), (bx, by)] = centroids(col, row, config.tile_size);
                let top_left = fbm(&mut field, ax / softness, ay / softness, &self.params);
                let bottom_right = fbm(&mut field, bx / softness, by / softness, &self.params);
                grid.set(
                    col,
                    row,
                    [
                        equalizer.color_index(top_left, palette_len),
                        equalizer.color_index(bottom_right, palette_len),
                    ],
                );
            }

            if let Some(observer) = self.row_observer.as_mut() {
                observer(row_offset + 1, window.rows);
            }
        }

        debug!(
            "Lattice cache: {} points, {} hits, {} misses",
            field.cached_points(),
            field.stats.hits,
            field.stats.misses
        );
        Ok(grid)
    }

    /// Produce the final RGBA pixel buffer
    ///
    /// Grain, when enabled, draws from `grain_rng` only.
    ///
    /// # Errors
    ///
    /// Returns `Cancelled` if cancelled mid-render; no partial buffer is returned
    pub fn render<R: Rng + ?Sized>(&mut self, grain_rng: &mut R) -> Result<RgbaImage> {
        let grid = self.tile_grid()?;
        let mut image = composite(&grid, &self.ordered, self.config.width, self.config.height)?;
        apply_grain(&mut image, self.config.noise_softness, grain_rng);
        Ok(image)
    }
}

/// Render `config` in one call
///
/// # Errors
///
/// Returns `InvalidParameter` or `InvalidPalette` when validation fails
pub fn render_pattern<R: Rng + ?Sized>(config: &RenderConfig, grain_rng: &mut R) -> Result<RgbaImage> {
    PatternRenderer::new(config)?.render(grain_rng)
}
