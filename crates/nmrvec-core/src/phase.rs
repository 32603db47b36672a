//! Phase correction of complex data held as separate real/imaginary buffers.
//!
//! Each point is rotated by `φ`:
//! ```text
//! re' = cos(φ)*re - sin(φ)*im
//! im' = cos(φ)*im + sin(φ)*re
//! ```

use crate::config::DEG_TO_RAD;
use crate::types::Cplx;

/// Zero- and first-order phase correction.
///
/// Rotates points `start..=end` (1-based, inclusive) by
/// `φ(i) = p0 + p1 * i / length` degrees, where `i` is the 0-based point
/// index and `length = min(real.len(), imag.len())`. `start` is raised to at
/// least 1 and `end` lowered to at most `length`; an empty range or
/// `p0 == p1 == 0` leaves the data untouched.
///
/// The first-order reference is the length of the slices passed in. To
/// phase part of a spectrum against the full spectrum length, pass the full
/// buffers and select the part with `start` and `end`.
pub fn phase_constant_rate(
    real: &mut [f32],
    imag: &mut [f32],
    start: usize,
    end: usize,
    p0: f32,
    p1: f32,
) {
    let length = real.len().min(imag.len());
    if length == 0 || (p0 == 0.0 && p1 == 0.0) {
        return;
    }
    let first = start.max(1) - 1;
    let last = end.min(length);
    if first >= last {
        return;
    }

    let p0 = p0 * DEG_TO_RAD;
    let p1 = p1 * DEG_TO_RAD;
    for i in first..last {
        let phi = p0 + p1 * i as f32 / length as f32;
        rotate_point(real, imag, i, phi);
    }
}

/// Rotate every point by its own angle in radians from `phase`.
///
/// Runs over the common length of the three buffers.
pub fn phase_by_vector(real: &mut [f32], imag: &mut [f32], phase: &[f32]) {
    let length = real.len().min(imag.len()).min(phase.len());
    for (i, &phi) in phase.iter().enumerate().take(length) {
        rotate_point(real, imag, i, phi);
    }
}

#[inline]
fn rotate_point(real: &mut [f32], imag: &mut [f32], i: usize, phi: f32) {
    let rotated = Cplx::new(real[i], imag[i]).rotate(phi);
    real[i] = rotated.re;
    imag[i] = rotated.im;
}
