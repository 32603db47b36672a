//! Numeric constants shared across the vector operations.

/// Nonzero magnitudes below this are treated as denormal noise by
/// [`fix_invalid`](crate::buffer::fix_invalid).
pub const DENORMAL_LIMIT: f32 = 1e-24;

/// Degrees to radians.
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Radians to degrees.
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Seed used by [`GaussianNoise::default`](crate::noise::GaussianNoise).
pub const DEFAULT_NOISE_SEED: u64 = 0x5EED_F00D;
