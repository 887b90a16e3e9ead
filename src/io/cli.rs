//! Command-line interface for rendering patterns to PNG files

use crate::algorithm::grain::clock_seeded_rng;
use crate::algorithm::renderer::{PatternRenderer, RenderConfig};
use crate::analysis::usage::ColorUsage;
use crate::color::palette::{Palette, Rgb};
use crate::color::presets::PalettePreset;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_NOISE_SOFTNESS, DEFAULT_RANDOMNESS_SOFTNESS, DEFAULT_TILE_SIZE,
    DEFAULT_WIDTH, MAX_DIMENSION, MAX_NOISE_SOFTNESS, MAX_TILE_SIZE, MIN_RANDOMNESS_SOFTNESS,
    OUTPUT_PREFIX,
};
use crate::io::error::Result;
use crate::io::image::export_png;
use crate::io::palette_file::{load_palette, save_palette};
use crate::io::progress::RenderProgress;
use crate::math::random::Seed;
use clap::Parser;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tilepattern")]
#[command(
    author,
    version,
    about = "Render seeded diagonal-tile patterns to PNG"
)]
/// Command-line arguments for the pattern renderer
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path (defaults to pattern-<width>x<height>.png)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Seed text; the same text always gives the same pattern (random if omitted)
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Image width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION)))]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION)))]
    pub height: u32,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TILE_SIZE)))]
    pub tile_size: u32,

    /// Grain strength added after drawing (0 disables grain)
    #[arg(short, long, default_value_t = DEFAULT_NOISE_SOFTNESS, value_parser = parse_noise_softness)]
    pub noise_softness: f64,

    /// Pixels per noise cell; larger values give larger color regions
    #[arg(short, long, default_value_t = DEFAULT_RANDOMNESS_SOFTNESS, value_parser = parse_randomness_softness)]
    pub randomness_softness: f64,

    /// Starting palette preset
    #[arg(short, long, value_enum, default_value_t = PalettePreset::Dark)]
    pub preset: PalettePreset,

    /// Start from an empty palette instead of a preset
    #[arg(long, conflicts_with = "load_palette")]
    pub new_palette: bool,

    /// Start from a palette JSON file instead of a preset
    #[arg(short, long, value_name = "FILE")]
    pub load_palette: Option<PathBuf>,

    /// Remove the color at this index of the starting palette (repeatable)
    #[arg(long = "remove", value_name = "INDEX")]
    pub remove: Vec<usize>,

    /// Append a color as #rrggbb or r,g,b (repeatable)
    #[arg(short, long = "color", value_name = "COLOR")]
    pub colors: Vec<Rgb>,

    /// Write the final palette to a JSON file
    #[arg(long, value_name = "FILE")]
    pub save_palette: Option<PathBuf>,

    /// Disable the grain overlay regardless of noise softness
    #[arg(long)]
    pub no_grain: bool,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report pipeline details
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_noise_softness(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && (0.0..=MAX_NOISE_SOFTNESS).contains(&value) {
        Ok(value)
    } else {
        Err(format!("must be between 0 and {MAX_NOISE_SOFTNESS}"))
    }
}

fn parse_randomness_softness(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value >= MIN_RANDOMNESS_SOFTNESS {
        Ok(value)
    } else {
        Err(format!("must be a finite number of at least {MIN_RANDOMNESS_SOFTNESS}"))
    }
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Output path, defaulting to `pattern-<width>x<height>.png`
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{OUTPUT_PREFIX}-{}x{}.png",
                self.width, self.height
            ))
        })
    }

    /// Grain magnitude after applying `--no-grain`
    pub const fn effective_noise_softness(&self) -> f64 {
        if self.no_grain {
            0.0
        } else {
            self.noise_softness
        }
    }

    /// Assemble the palette: starting palette, then removals, then appended colors
    ///
    /// Removal indices refer to the starting palette regardless of order.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette file cannot be loaded or a removal
    /// index is out of range
    pub fn build_palette(&self) -> Result<Palette> {
        let mut palette = if self.new_palette {
            Palette::new()
        } else if let Some(path) = &self.load_palette {
            load_palette(path)?
        } else {
            self.preset.palette()
        };

        let mut removals = self.remove.clone();
        removals.sort_unstable_by(|a, b| b.cmp(a));
        removals.dedup();
        for index in removals {
            palette.remove(index)?;
        }

        for &color in &self.colors {
            palette.push(color);
        }
        Ok(palette)
    }

    /// Render configuration for this invocation
    pub fn render_config(&self, seed: Seed, palette: Palette) -> RenderConfig {
        RenderConfig {
            seed,
            width: self.width,
            height: self.height,
            tile_size: self.tile_size,
            palette,
            randomness_softness: self.randomness_softness,
            noise_softness: self.effective_noise_softness(),
        }
    }
}

/// Runs one render-and-export job described by the command line
pub struct PatternExporter {
    cli: Cli,
}

impl PatternExporter {
    /// Create an exporter for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the palette, render, and write the PNG
    ///
    /// Returns the path of the written image.
    ///
    /// # Errors
    ///
    /// Returns an error if palette assembly, palette saving, rendering or
    /// export fails
    pub fn run(&self) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path();

        let palette = self.cli.build_palette()?;
        if let Some(path) = &self.cli.save_palette {
            save_palette(&palette, path)?;
            info!("Saved {} colors to {}", palette.len(), path.display());
        }

        let seed = Seed::resolve(self.cli.seed.as_deref());
        info!("Using seed {seed}");
        let config = self.cli.render_config(seed, palette);

        let progress = self.cli.should_show_progress().then(|| {
            RenderProgress::new(
                &output_path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy(),
            )
        });

        let mut renderer = PatternRenderer::new(&config)?;
        if let Some(progress) = &progress {
            renderer = renderer.with_row_observer(move |done, total| progress.update(done, total));
        }

        let image = match renderer.render(&mut clock_seeded_rng()) {
            Ok(image) => image,
            Err(error) => {
                if let Some(progress) = &progress {
                    progress.abandon();
                }
                return Err(error);
            }
        };
        if let Some(progress) = &progress {
            progress.finish("done");
        }

        if config.noise_softness <= 0.0 {
            let usage = ColorUsage::tally(&image, renderer.ordered_palette());
            for (index, color) in renderer.ordered_palette().iter().enumerate() {
                debug!("{color}: {:.1}% of pixels", usage.share(index) * 100.0);
            }
        }

        export_png(&image, &output_path)?;
        debug!("Finished in {:.2?}", start_time.elapsed());
        Ok(output_path)
    }
}
