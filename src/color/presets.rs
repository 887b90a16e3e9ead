//! Built-in four-color palettes

use crate::color::palette::{Palette, Rgb};
use clap::ValueEnum;

/// Named palette presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PalettePreset {
    /// Near-black grays
    #[default]
    Dark,
    /// Near-white grays
    Light,
    /// Saturated sky blue
    Blue,
    /// Dark blue-tinted grays
    RoldBlue,
    /// Signal red
    Red,
    /// Leaf green
    Green,
    /// Amber yellow
    Yellow,
}

impl PalettePreset {
    /// Every preset, in display order
    pub const ALL: [Self; 7] = [
        Self::Dark,
        Self::Light,
        Self::Blue,
        Self::RoldBlue,
        Self::Red,
        Self::Green,
        Self::Yellow,
    ];

    /// Colors of this preset in stored order
    pub const fn colors(self) -> [Rgb; 4] {
        match self {
            Self::Dark => [
                Rgb::new(45, 45, 45),
                Rgb::new(42, 42, 42),
                Rgb::new(39, 39, 39),
                Rgb::new(36, 36, 36),
            ],
            Self::Light => [
                Rgb::new(255, 255, 255),
                Rgb::new(250, 250, 250),
                Rgb::new(240, 240, 240),
                Rgb::new(235, 235, 235),
            ],
            Self::Blue => [
                Rgb::new(0, 180, 255),
                Rgb::new(0, 175, 255),
                Rgb::new(0, 170, 255),
                Rgb::new(0, 165, 255),
            ],
            Self::RoldBlue => [
                Rgb::new(35, 35, 45),
                Rgb::new(30, 30, 40),
                Rgb::new(25, 25, 35),
                Rgb::new(20, 20, 30),
            ],
            Self::Red => [
                Rgb::new(226, 35, 26),
                Rgb::new(222, 34, 26),
                Rgb::new(218, 34, 25),
                Rgb::new(216, 33, 25),
            ],
            Self::Green => [
                Rgb::new(6, 171, 80),
                Rgb::new(2, 183, 87),
                Rgb::new(44, 191, 106),
                Rgb::new(54, 194, 114),
            ],
            Self::Yellow => [
                Rgb::new(246, 150, 2),
                Rgb::new(246, 162, 2),
                Rgb::new(246, 173, 2),
                Rgb::new(246, 183, 2),
            ],
        }
    }

    /// Fresh palette holding this preset
    pub fn palette(self) -> Palette {
        Palette::from_colors(self.colors().to_vec())
    }
}
