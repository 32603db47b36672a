//! Elementwise arithmetic.
//!
//! `dest op= src` style updates, scalar updates, masking and clipping.
//! Binary operations run over the common prefix of `dest` and `src`.

use crate::types::{split_complex_mut, Cplx};
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// `dest[i] += src[i]`
pub fn add(dest: &mut [f32], src: &[f32]) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d += s;
    }
}

/// `dest[i] -= src[i]`
pub fn subtract(dest: &mut [f32], src: &[f32]) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d -= s;
    }
}

/// `dest[i] *= src[i]`
pub fn multiply(dest: &mut [f32], src: &[f32]) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d *= s;
    }
}

/// `dest[i] /= src[i]`, with division by zero defined as `0`.
pub fn divide(dest: &mut [f32], src: &[f32]) {
    for (d, &s) in dest.iter_mut().zip(src) {
        *d = if s == 0.0 { 0.0 } else { *d / s };
    }
}

/// `vec[i] += val`
pub fn add_scalar(vec: &mut [f32], val: f32) {
    for v in vec.iter_mut() {
        *v += val;
    }
}

/// `vec[i] *= val`
pub fn multiply_scalar(vec: &mut [f32], val: f32) {
    for v in vec.iter_mut() {
        *v *= val;
    }
}

/// `vec[i] = val`
pub fn set_all(vec: &mut [f32], val: f32) {
    vec.fill(val);
}

/// `dest[i] += val * src[i]`
pub fn scaled_accumulate(dest: &mut [f32], src: &[f32], val: f32) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d += val * s;
    }
}

/// `dest[i] *= val * src[i]`
pub fn scaled_multiply(dest: &mut [f32], src: &[f32], val: f32) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d *= val * s;
    }
}

/// `dest[i] = val * src[i]`
pub fn scale_copy(dest: &mut [f32], src: &[f32], val: f32) {
    for (d, s) in dest.iter_mut().zip(src) {
        *d = val * s;
    }
}

/// Zero `dest[i]` wherever `src[i] == 0`.
pub fn mask_zero(dest: &mut [f32], src: &[f32]) {
    for (d, &s) in dest.iter_mut().zip(src) {
        if s == 0.0 {
            *d = 0.0;
        }
    }
}

/// Zero `dest[i]` wherever `src[i] != 0`.
pub fn mask_non_zero(dest: &mut [f32], src: &[f32]) {
    for (d, &s) in dest.iter_mut().zip(src) {
        if s != 0.0 {
            *d = 0.0;
        }
    }
}

/// Keep the magnitude of `dest[i]`, take the sign of `src[i]`.
pub fn transfer_sign(dest: &mut [f32], src: &[f32]) {
    for (d, &s) in dest.iter_mut().zip(src) {
        let magnitude = d.abs();
        *d = if s.is_sign_negative() { -magnitude } else { magnitude };
    }
}

/// Zero every element whose magnitude is below `|thresh|`.
pub fn clip_below(vec: &mut [f32], thresh: f32) {
    let limit = thresh.abs();
    for v in vec.iter_mut() {
        if v.abs() < limit {
            *v = 0.0;
        }
    }
}

/// Clamp every element whose magnitude exceeds `|thresh|` to `±|thresh|`.
pub fn clip_above(vec: &mut [f32], thresh: f32) {
    let limit = thresh.abs();
    for v in vec.iter_mut() {
        if *v > limit {
            *v = limit;
        } else if *v < -limit {
            *v = -limit;
        }
    }
}

/// Threshold with linear compression or expansion past the boundary.
///
/// With `t = |thresh|`:
///
/// - `thresh > 0`: values beyond `±t` move toward the boundary,
///   `sign(x) * (t + (|x| - t) * val)`. Values inside are unchanged.
/// - `thresh < 0`: values beyond `±t` move away from the boundary,
///   `sign(x) * (t + (|x| - t) * (1 + val))`. Values inside become zero.
///
/// `thresh == 0` leaves the buffer untouched.
pub fn soft_clip_threshold(vec: &mut [f32], val: f32, thresh: f32) {
    if thresh == 0.0 {
        return;
    }
    let limit = thresh.abs();
    let expand = thresh < 0.0;

    for v in vec.iter_mut() {
        let magnitude = v.abs();
        if magnitude > limit {
            let excess = magnitude - limit;
            let shaped = if expand {
                limit + excess * (1.0 + val)
            } else {
                limit + excess * val
            };
            *v = if *v < 0.0 { -shaped } else { shaped };
        } else if expand {
            *v = 0.0;
        }
    }
}

/// Multiply a split-complex buffer by a complex scalar in place.
///
/// Odd or empty buffers are left untouched.
pub fn complex_scale(buf: &mut [f32], value: Cplx) {
    let Some((re, im)) = split_complex_mut(buf) else {
        return;
    };
    for (r, i) in re.iter_mut().zip(im.iter_mut()) {
        let product = Cplx::new(*r, *i).multiply(value);
        *r = product.re;
        *i = product.im;
    }
}
