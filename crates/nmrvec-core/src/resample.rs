//! Resampling, interpolation and band operations.
//!
//! Linear and bilinear interpolation map output index `i` onto the source
//! position `i * (in - 1) / (out - 1)` and blend the two bracketing
//! samples. Positions and neighbors are clamped to the source, so nothing
//! is extrapolated.

use crate::error::{VecError, VecResult};
use crate::matrix::{FlatMatrix, FlatMatrixMut};
use crate::types::Band;

/// Source position and upper neighbor for one output index.
///
/// Returns `(lower, upper, frac)` with `lower <= upper < in_size`. The
/// position is split in integer arithmetic so equal sizes land exactly on
/// source points at any length.
#[inline]
fn bracket(index: usize, in_size: usize, out_size: usize) -> (usize, usize, f32) {
    let last = in_size - 1;
    if out_size < 2 || last == 0 {
        return (0, 0, 0.0);
    }
    let span = (out_size - 1) as u64;
    let scaled = index.min(out_size - 1) as u64 * last as u64;
    let lower = ((scaled / span) as usize).min(last);
    let upper = (lower + 1).min(last);
    let frac = (scaled % span) as f32 / span as f32;
    (lower, upper, frac)
}

/// Resample `src` onto `dest.len()` points by linear interpolation.
///
/// Equal sizes reproduce `src` exactly; a single output point takes
/// `src[0]`. Empty buffers are a no-op.
pub fn linear_interp(dest: &mut [f32], src: &[f32]) {
    if dest.is_empty() || src.is_empty() {
        return;
    }
    let out_size = dest.len();
    for (i, d) in dest.iter_mut().enumerate() {
        let (lo, hi, frac) = bracket(i, src.len(), out_size);
        *d = src[lo] * (1.0 - frac) + src[hi] * frac;
    }
}

/// Resample a flat matrix onto the shape of `output` by bilinear
/// interpolation, mapping rows and columns independently.
pub fn bilinear_interp_2d(input: &FlatMatrix<'_>, output: &mut FlatMatrixMut<'_>) {
    let (in_cols, in_rows) = (input.cols(), input.rows());
    let (out_cols, out_rows) = (output.cols(), output.rows());

    for row in 0..out_rows {
        let (r0, r1, fr) = bracket(row, in_rows, out_rows);
        for col in 0..out_cols {
            let (c0, c1, fc) = bracket(col, in_cols, out_cols);

            let top = input.get(r0, c0) * (1.0 - fc) + input.get(r0, c1) * fc;
            let bottom = input.get(r1, c0) * (1.0 - fc) + input.get(r1, c1) * fc;
            output.set(row, col, top * (1.0 - fr) + bottom * fr);
        }
    }
}

/// Copy each band of `src` into consecutive positions of `dest`.
///
/// Bands are inclusive and may be given in either order (see
/// [`Band::new`]). Every band is checked before anything is written, so a
/// rejected call leaves `dest` untouched. Returns the total number of points
/// moved.
///
/// # Errors
///
/// [`VecError::BandOutOfRange`] if a band reaches past `src`,
/// [`VecError::DestinationOverflow`] if the bands need more room than `dest`.
pub fn move_bands_to_dest(dest: &mut [f32], src: &[f32], bands: &[Band]) -> VecResult<usize> {
    if dest.is_empty() || src.is_empty() || bands.is_empty() {
        return Ok(0);
    }

    let mut needed = 0;
    for raw in bands {
        let band = Band::new(raw.lower, raw.upper);
        if !band.fits(src.len()) {
            log::debug!(
                "band move rejected: [{}, {}] outside {} source points",
                band.lower,
                band.upper,
                src.len()
            );
            return Err(VecError::BandOutOfRange {
                lower: band.lower,
                upper: band.upper,
                len: src.len(),
            });
        }
        needed += band.len();
    }
    if needed > dest.len() {
        log::debug!(
            "band move rejected: {} points into {} destination points",
            needed,
            dest.len()
        );
        return Err(VecError::DestinationOverflow {
            needed,
            available: dest.len(),
        });
    }

    let mut cursor = 0;
    for raw in bands {
        let band = Band::new(raw.lower, raw.upper);
        let size = band.len();
        dest[cursor..cursor + size].copy_from_slice(&src[band.lower..=band.upper]);
        cursor += size;
    }
    Ok(cursor)
}

/// Gather `dest.len()` elements from `src[0], src[stride], src[2*stride], ...`.
///
/// Returns the number gathered, or `0` (no-op) for a zero stride or when the
/// last strided position falls outside `src`.
pub fn dispersed_get(dest: &mut [f32], src: &[f32], stride: usize) -> usize {
    let count = dest.len();
    if !strided_span_fits(count, stride, src.len()) {
        return 0;
    }
    for (i, d) in dest.iter_mut().enumerate() {
        *d = src[i * stride];
    }
    count
}

/// Scatter `src` into `dest[0], dest[stride], dest[2*stride], ...`.
///
/// Returns the number scattered, or `0` (no-op) under the same conditions as
/// [`dispersed_get`].
pub fn dispersed_put(dest: &mut [f32], src: &[f32], stride: usize) -> usize {
    let count = src.len();
    if !strided_span_fits(count, stride, dest.len()) {
        return 0;
    }
    for (i, &s) in src.iter().enumerate() {
        dest[i * stride] = s;
    }
    count
}

fn strided_span_fits(count: usize, stride: usize, len: usize) -> bool {
    if count == 0 || stride == 0 {
        return false;
    }
    matches!((count - 1).checked_mul(stride), Some(last) if last < len)
}
