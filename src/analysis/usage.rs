//! Palette usage statistics for rendered images and index streams

use crate::color::palette::Rgb;
use image::RgbaImage;
use std::collections::HashMap;

/// Pixel counts per palette entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorUsage {
    /// Count per palette position; duplicate colors credit the first position
    pub counts: Vec<usize>,
    /// Pixels whose color is not in the palette (only after grain)
    pub unmatched: usize,
}

impl ColorUsage {
    /// Count how many pixels use each palette color
    pub fn tally(image: &RgbaImage, palette: &[Rgb]) -> Self {
        let mut lookup = HashMap::with_capacity(palette.len());
        for (index, color) in palette.iter().enumerate() {
            lookup.entry(color.0).or_insert(index);
        }

        let mut counts = vec![0usize; palette.len()];
        let mut unmatched = 0;
        for pixel in image.pixels() {
            let [r, g, b, _] = pixel.0;
            match lookup.get(&[r, g, b]).and_then(|&i| counts.get_mut(i)) {
                Some(count) => *count += 1,
                None => unmatched += 1,
            }
        }

        Self { counts, unmatched }
    }

    /// Total number of tallied pixels
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unmatched
    }

    /// Fraction of pixels using the palette color at `index`
    pub fn share(&self, index: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.counts.get(index).copied().unwrap_or(0) as f64 / total as f64
    }

    /// Whether every pixel is exactly one of the palette colors
    pub const fn is_contained(&self) -> bool {
        self.unmatched == 0
    }
}

/// Histogram of palette indices; indices outside the palette are ignored
pub fn index_distribution(indices: impl IntoIterator<Item = usize>, palette_len: usize) -> Vec<usize> {
    let mut counts = vec![0usize; palette_len];
    for index in indices {
        if let Some(count) = counts.get_mut(index) {
            *count += 1;
        }
    }
    counts
}
