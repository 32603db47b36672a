//! Scalar reductions.
//!
//! Every reduction returns `0.0` for an empty buffer. Two-buffer reductions
//! work on the common prefix of their arguments.

use crate::config::RAD_TO_DEG;
use crate::types::{split_complex, Cplx};
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// Sum of all elements.
#[must_use]
pub fn sum(vec: &[f32]) -> f32 {
    vec.iter().sum()
}

/// Sum of the positive elements.
#[must_use]
pub fn sum_positive(vec: &[f32]) -> f32 {
    vec.iter().filter(|&&x| x > 0.0).sum()
}

/// Sum of the negative elements.
#[must_use]
pub fn sum_negative(vec: &[f32]) -> f32 {
    vec.iter().filter(|&&x| x < 0.0).sum()
}

/// Sum of squares.
#[must_use]
pub fn sum_of_squares(vec: &[f32]) -> f32 {
    vec.iter().map(|x| x * x).sum()
}

/// Arithmetic mean.
#[must_use]
pub fn mean(vec: &[f32]) -> f32 {
    if vec.is_empty() {
        return 0.0;
    }
    sum(vec) / vec.len() as f32
}

/// Root mean square: `sqrt(sum_of_squares / n)`.
#[must_use]
pub fn rms(vec: &[f32]) -> f32 {
    if vec.is_empty() {
        return 0.0;
    }
    (sum_of_squares(vec) / vec.len() as f32).sqrt()
}

/// Smallest value.
#[must_use]
pub fn min(vec: &[f32]) -> f32 {
    fold_first(vec, |best, x| if x < best { x } else { best })
}

/// Largest value.
#[must_use]
pub fn max(vec: &[f32]) -> f32 {
    fold_first(vec, |best, x| if x > best { x } else { best })
}

/// Smallest magnitude.
#[must_use]
pub fn min_abs(vec: &[f32]) -> f32 {
    signed_min_abs(vec).abs()
}

/// Largest magnitude.
#[must_use]
pub fn max_abs(vec: &[f32]) -> f32 {
    signed_max_abs(vec).abs()
}

/// Value with the smallest magnitude, sign retained. First wins ties.
#[must_use]
pub fn signed_min_abs(vec: &[f32]) -> f32 {
    fold_first(vec, |best, x| if x.abs() < best.abs() { x } else { best })
}

/// Value with the largest magnitude, sign retained. First wins ties.
#[must_use]
pub fn signed_max_abs(vec: &[f32]) -> f32 {
    fold_first(vec, |best, x| if x.abs() > best.abs() { x } else { best })
}

/// Spread between the largest and smallest value.
#[must_use]
pub fn range(vec: &[f32]) -> f32 {
    max(vec) - min(vec)
}

/// Sample variance with Bessel's correction. Needs at least two points.
#[must_use]
pub fn variance(vec: &[f32]) -> f32 {
    let n = vec.len();
    if n < 2 {
        return 0.0;
    }
    let avg = mean(vec);
    let sum_dev: f32 = vec.iter().map(|x| (x - avg) * (x - avg)).sum();
    sum_dev / (n - 1) as f32
}

/// Sample standard deviation, `sqrt(variance)`.
#[must_use]
pub fn std_dev(vec: &[f32]) -> f32 {
    variance(vec).sqrt()
}

/// Median.
///
/// Not implemented: always returns `0.0`, matching the established
/// behavior callers normalize against.
#[must_use]
pub fn median(_vec: &[f32]) -> f32 {
    0.0
}

/// Noise floor estimate.
///
/// Not implemented: always returns `0.0`, like [`median`].
#[must_use]
pub fn noise_estimate(_vec: &[f32]) -> f32 {
    0.0
}

/// Inner product over the common length.
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
#[must_use]
pub fn l2_norm(vec: &[f32]) -> f32 {
    sum_of_squares(vec).sqrt()
}

/// Pearson correlation coefficient.
///
/// Both inputs are divided by the larger of their max-abs values before
/// accumulating, to keep the products in range. Returns `0.0` when that
/// scale or the denominator is zero.
#[must_use]
pub fn pearson_correlation(x: &[f32], y: &[f32]) -> f32 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);

    let scale = max_abs(x).max(max_abs(y));
    if scale == 0.0 {
        return 0.0;
    }
    let inv = 1.0 / scale;

    let x_avg = sum(x) * inv / n as f32;
    let y_avg = sum(y) * inv / n as f32;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a * inv - x_avg;
        let dy = b * inv - y_avg;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).abs().sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    sxy / denom
}

/// RMS of the pointwise difference, `sqrt(mean((a - b)^2))`.
#[must_use]
pub fn rms_distance(a: &[f32], b: &[f32]) -> f32 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum_sq: f32 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    (sum_sq / n as f32).sqrt()
}

/// Least-squares scale `s` minimizing `||a - s*b||`.
///
/// Returns `0.0` if `b` is all zeros.
#[must_use]
pub fn best_scale(a: &[f32], b: &[f32]) -> f32 {
    let bb = sum_of_squares(&b[..a.len().min(b.len())]);
    if bb == 0.0 {
        return 0.0;
    }
    dot(a, b) / bb
}

/// Scale `b` in place by [`best_scale`] and return the factor.
pub fn apply_best_scale(a: &[f32], b: &mut [f32]) -> f32 {
    let scale = best_scale(a, b);
    let n = a.len().min(b.len());
    for value in &mut b[..n] {
        *value *= scale;
    }
    scale
}

/// Complex least-squares fit of one split-complex buffer onto another.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComplexFit {
    /// Complex scale `s` minimizing `||a - s*b||`
    pub scale: Cplx,
    /// Phase of the fit in degrees, `atan2(-s.im, s.re)`
    pub phase_deg: f32,
}

/// Fit split-complex `b` onto split-complex `a`.
///
/// Both buffers hold `n` real parts followed by `n` imaginary parts. The
/// complex scale is `(b^H a) / (b^H b)`. Odd, empty or mismatched buffers
/// and an all-zero `b` give the all-zero fit.
#[must_use]
pub fn best_complex_scale(a: &[f32], b: &[f32]) -> ComplexFit {
    if a.len() != b.len() {
        return ComplexFit::default();
    }
    let (Some((a_re, a_im)), Some((b_re, b_im))) = (split_complex(a), split_complex(b)) else {
        return ComplexFit::default();
    };

    let mut num_re = 0.0;
    let mut num_im = 0.0;
    let mut denom = 0.0;
    for i in 0..a_re.len() {
        num_re += b_re[i] * a_re[i] + b_im[i] * a_im[i];
        num_im += b_re[i] * a_im[i] - b_im[i] * a_re[i];
        denom += b_re[i] * b_re[i] + b_im[i] * b_im[i];
    }

    if denom == 0.0 {
        return ComplexFit::default();
    }

    let scale = Cplx::new(num_re / denom, num_im / denom);
    ComplexFit {
        scale,
        phase_deg: RAD_TO_DEG * (-scale.im).atan2(scale.re),
    }
}

/// Fold starting from the first element; `0.0` for an empty buffer.
#[inline]
fn fold_first(vec: &[f32], pick: impl Fn(f32, f32) -> f32) -> f32 {
    match vec.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |best, &x| pick(best, x)),
        None => 0.0,
    }
}
