//! Mathematical utilities for the generator

/// Lattice value noise and fractal summation
pub mod noise;
/// Seed derivation and deterministic pseudo-random numbers
pub mod random;
