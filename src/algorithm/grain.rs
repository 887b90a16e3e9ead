//! Film-grain overlay applied after compositing
//!
//! Grain draws from its own generator, never the pattern seed, so a fixed
//! pattern looks freshly grainy on every render. Pass a seeded generator to
//! reproduce grain in tests.

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Generator seeded from the wall clock
pub fn clock_seeded_rng() -> StdRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    StdRng::seed_from_u64(nanos)
}

/// Shift each pixel's RGB channels by one shared offset in `[-softness/2, softness/2)`
///
/// Channels are shifted with [`shift_channel`]; alpha is untouched.
/// A non-positive or non-finite softness leaves the image unchanged.
pub fn apply_grain<R: Rng + ?Sized>(image: &mut RgbaImage, noise_softness: f64, rng: &mut R) {
    if !noise_softness.is_finite() || noise_softness <= 0.0 {
        return;
    }

    for pixel in image.pixels_mut() {
        let offset = (rng.random::<f64>() - 0.5) * noise_softness;
        for channel in pixel.0.iter_mut().take(3) {
            *channel = shift_channel(*channel, offset);
        }
    }
}

/// Add `offset` to a channel, rounding halves to even and clamping to `[0, 255]`
pub fn shift_channel(value: u8, offset: f64) -> u8 {
    (f64::from(value) + offset)
        .round_ties_even()
        .clamp(0.0, 255.0) as u8
}
