//! Histogram equalization of fractal noise onto palette indices
//!
//! Raw fBm output clusters around the middle of `[0, 1)`. Ranking each value
//! against an empirical sample of the same field spreads palette usage evenly.

use crate::math::noise::{FractalParams, LatticeNoise, fbm};
use crate::math::random::XorShift32;

/// Sorted empirical sample of a noise field's values
#[derive(Debug, Clone)]
pub struct Equalizer {
    samples: Vec<f64>,
}

impl Equalizer {
    /// Sample the field at `sample_count` pseudo-random points
    ///
    /// Coordinates are drawn from `rng` in `[0, span)`, x before y, so the
    /// curve is a pure function of the seed behind `field` and `rng`.
    pub fn build(
        field: &mut LatticeNoise,
        rng: &mut XorShift32,
        sample_count: usize,
        span: f64,
        params: &FractalParams,
    ) -> Self {
        let samples = (0..sample_count)
            .map(|_| {
                let x = rng.next_f64() * span;
                let y = rng.next_f64() * span;
                fbm(field, x, y, params)
            })
            .collect();
        Self::from_samples(samples)
    }

    /// Build from arbitrary samples, sorting them ascending
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(f64::total_cmp);
        Self { samples }
    }

    /// Sorted samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the curve has no samples
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Fraction of samples strictly below `value`
    ///
    /// Uses the first sample `>= value`; when none exists the value ranks at
    /// the 100th percentile. An empty curve ranks everything at 1.0.
    pub fn percentile(&self, value: f64) -> f64 {
        let index = self.samples.partition_point(|&sample| sample < value);
        if index == self.samples.len() {
            1.0
        } else {
            index as f64 / self.samples.len() as f64
        }
    }

    /// Map a noise value to an index in `[0, palette_len)`
    ///
    /// Returns 0 for an empty palette.
    pub fn color_index(&self, value: f64, palette_len: usize) -> usize {
        let scaled = (self.percentile(value) * palette_len as f64).floor() as usize;
        scaled.min(palette_len.saturating_sub(1))
    }
}
