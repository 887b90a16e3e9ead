//! Ordered color palette with luminance sorting for rendering
//!
//! The stored order is the user's insertion order and is never changed by
//! rendering; the renderer works on a luminance-sorted copy.

use crate::io::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a color from arbitrary numeric channels, rounded and clamped to `[0, 255]`
    ///
    /// Returns `None` if any channel is not finite.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Option<Self> {
        let channel = |v: f64| v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8);
        Some(Self([channel(r)?, channel(g)?, channel(b)?]))
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Relative luminance (Rec. 709 weights) on the 0-255 scale
    pub fn luminance(self) -> f64 {
        0.0722f64.mul_add(
            f64::from(self.b()),
            0.2126f64.mul_add(f64::from(self.r()), 0.7152 * f64::from(self.g())),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

impl FromStr for Rgb {
    type Err = PatternError;

    /// Parse `#rrggbb`, `rrggbb` or `r,g,b`
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = |reason: &str| PatternError::InvalidColor {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        if text.contains(',') {
            let channels = text
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| invalid(&format!("non-numeric channel ({e})")))?;
            return match channels.as_slice() {
                [r, g, b] => {
                    Self::from_channels(*r, *g, *b).ok_or_else(|| invalid("channel is not finite"))
                }
                _ => Err(invalid("expected exactly three channels")),
            };
        }

        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid("expected six hexadecimal digits"));
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| invalid("non-hexadecimal digit"))
        };
        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

/// Ordered, possibly empty sequence of colors
///
/// Duplicates are allowed; insertion order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create an empty palette
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Create a palette from colors in the given order
    pub const fn from_colors(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Append a color at the end
    pub fn push(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    /// Remove the color at `index`, shifting later colors down
    ///
    /// # Errors
    ///
    /// Returns `InvalidPaletteIndex` if `index` is out of range
    pub fn remove(&mut self, index: usize) -> Result<Rgb> {
        if index >= self.colors.len() {
            return Err(PatternError::InvalidPaletteIndex {
                index,
                len: self.colors.len(),
            });
        }
        Ok(self.colors.remove(index))
    }

    /// Replace every color, e.g. when loading a preset or a file
    pub fn replace(&mut self, colors: Vec<Rgb>) {
        self.colors = colors;
    }

    /// Colors in stored order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Ordered list of RGB triples for persistence
    pub fn export(&self) -> Vec<[u8; 3]> {
        self.colors.iter().map(|c| c.0).collect()
    }

    /// Copy sorted by ascending luminance; equal luminances keep stored order
    pub fn sorted_by_luminance(&self) -> Vec<Rgb> {
        let mut ordered = self.colors.clone();
        ordered.sort_by(|a, b| {
            a.luminance()
                .partial_cmp(&b.luminance())
                .unwrap_or(Ordering::Equal)
        });
        ordered
    }
}

impl From<Vec<Rgb>> for Palette {
    fn from(colors: Vec<Rgb>) -> Self {
        Self::from_colors(colors)
    }
}

impl FromIterator<Rgb> for Palette {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        Self::from_colors(iter.into_iter().collect())
    }
}
