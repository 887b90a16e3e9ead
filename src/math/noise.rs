//! Seeded lattice value noise with bilinear interpolation and fractal summation
//!
//! Lattice values are hashed from their integer coordinates, so they can be
//! queried in any order and remain stable. Results are memoised per field.

use crate::io::configuration::{FBM_GAIN, FBM_LACUNARITY, FBM_OCTAVES};
use crate::math::random::{Seed, XorShift32};
use std::collections::HashMap;

const HASH_X: u32 = 374_761_393;
const HASH_Y: u32 = 668_265_263;
const MIX: u32 = 0x045D_9F3B;

/// Cache key for a lattice point under a given seed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeKey {
    seed: u32,
    x: i32,
    y: i32,
}

/// Performance metrics for the lattice cache
#[derive(Default, Debug, Clone, Copy)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Memoised lattice noise field for one seed
///
/// Scoped to a single render; nothing is shared between renders.
#[derive(Debug, Clone)]
pub struct LatticeNoise {
    seed: Seed,
    cache: HashMap<LatticeKey, f64>,
    /// Cache performance statistics
    pub stats: CacheStats,
}

impl LatticeNoise {
    /// Create an empty field for the given seed
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Seed this field was built from
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of distinct lattice points evaluated so far
    pub fn cached_points(&self) -> usize {
        self.cache.len()
    }

    /// Pseudo-random value in `[0, 1)` at an integer lattice point
    pub fn noise_at(&mut self, xi: i32, yi: i32) -> f64 {
        use std::collections::hash_map::Entry;

        let key = LatticeKey {
            seed: self.seed.value(),
            x: xi,
            y: yi,
        };
        match self.cache.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                *entry.insert(lattice_value(key.seed, xi, yi))
            }
        }
    }
}

/// Avalanche an integer so nearby inputs give unrelated outputs
pub const fn mix32(mut x: u32) -> u32 {
    x = x.wrapping_mul(MIX);
    x ^= x >> 16;
    x = x.wrapping_mul(MIX);
    x ^= x >> 16;
    x
}

// The first xorshift output is nearly linear in its state; the key must be
// avalanched first or seeds differing in low bits give near-identical fields.
fn lattice_value(seed: u32, xi: i32, yi: i32) -> f64 {
    let position = (xi as u32)
        .wrapping_mul(HASH_X)
        .wrapping_add((yi as u32).wrapping_mul(HASH_Y));
    XorShift32::new(mix32(position ^ mix32(seed))).next_f64()
}

/// Bilinear interpolation of the four lattice values enclosing `(x, y)`
///
/// Exactly equals [`LatticeNoise::noise_at`] at integer coordinates.
// Plain multiply-add keeps results bit-identical with or without FMA support
#[allow(clippy::suboptimal_flops)]
pub fn value_noise_at(field: &mut LatticeNoise, x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let tx = x - x0;
    let ty = y - y0;
    let (xi, yi) = (x0 as i32, y0 as i32);

    let v00 = field.noise_at(xi, yi);
    let v10 = field.noise_at(xi.wrapping_add(1), yi);
    let v01 = field.noise_at(xi, yi.wrapping_add(1));
    let v11 = field.noise_at(xi.wrapping_add(1), yi.wrapping_add(1));

    let top = v00 * (1.0 - tx) + v10 * tx;
    let bottom = v01 * (1.0 - tx) + v11 * tx;
    top * (1.0 - ty) + bottom * ty
}

/// Octave configuration for fractal Brownian motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Number of summed octaves
    pub octaves: u32,
    /// Frequency multiplier between octaves
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves
    pub gain: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: FBM_OCTAVES,
            lacunarity: FBM_LACUNARITY,
            gain: FBM_GAIN,
        }
    }
}

/// Fractal Brownian motion normalised by the total amplitude
///
/// Stays in `[0, 1)` because every octave does. Zero octaves yield `0.0`.
#[allow(clippy::suboptimal_flops)]
pub fn fbm(field: &mut LatticeNoise, x: f64, y: f64, params: &FractalParams) -> f64 {
    let mut sum = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut total = 0.0;

    for _ in 0..params.octaves {
        sum += amplitude * value_noise_at(field, x * frequency, y * frequency);
        total += amplitude;
        amplitude *= params.gain;
        frequency *= params.lacunarity;
    }

    if total > 0.0 { sum / total } else { 0.0 }
}
