//! Windowed filters.
//!
//! Both filters average the window `[i - window, i + window]`. Near the ends
//! of the buffer the window is cut at the buffer boundary and the divisor
//! shrinks with it; there is no wraparound and no zero padding.

/// Average over the truncated window around `center`.
#[inline]
fn window_average(src: &[f32], center: usize, window: usize) -> f32 {
    let lo = center.saturating_sub(window);
    let hi = center.saturating_add(window).min(src.len() - 1);
    let mut total = 0.0;
    for &x in &src[lo..=hi] {
        total += x;
    }
    total / (hi - lo + 1) as f32
}

/// Moving-average smoothing of `src` into `dest`.
///
/// Runs over the common length. `window == 0` copies `src`.
pub fn moving_average_smooth(src: &[f32], dest: &mut [f32], window: usize) {
    let n = src.len().min(dest.len());
    if n == 0 {
        return;
    }
    let src = &src[..n];
    if window == 0 {
        dest[..n].copy_from_slice(src);
        return;
    }
    for (i, d) in dest[..n].iter_mut().enumerate() {
        *d = window_average(src, i, window);
    }
}

/// Subtract the local window mean: `dest[i] = src[i] - average(i)`.
///
/// Same window policy as [`moving_average_smooth`]. `window == 0` copies
/// `src` without subtracting anything.
pub fn local_mean_subtract(src: &[f32], dest: &mut [f32], window: usize) {
    let n = src.len().min(dest.len());
    if n == 0 {
        return;
    }
    let src = &src[..n];
    if window == 0 {
        dest[..n].copy_from_slice(src);
        return;
    }
    for (i, d) in dest[..n].iter_mut().enumerate() {
        *d = src[i] - window_average(src, i, window);
    }
}
