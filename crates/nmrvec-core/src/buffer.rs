//! Buffer primitives.
//!
//! Leaf-level operations on flat `f32` buffers: copying, swapping,
//! reordering, byte-order reversal and clean-up of invalid values.
//!
//! Empty buffers are never an error: every function simply does nothing
//! and returns a neutral value. Binary operations work on the common prefix
//! of their two arguments.

use crate::config::DENORMAL_LIMIT;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// Copy `src` into `dest` over their common length.
pub fn copy(dest: &mut [f32], src: &[f32]) {
    let n = dest.len().min(src.len());
    dest[..n].copy_from_slice(&src[..n]);
}

/// Copy `n` elements from `src[src_offset..]` to `dest[dest_offset..]`.
///
/// Returns the number of elements copied, or `0` (and copies nothing) if
/// either range falls outside its buffer.
pub fn copy_offset(
    dest: &mut [f32],
    dest_offset: usize,
    src: &[f32],
    src_offset: usize,
    n: usize,
) -> usize {
    let dest_end = match dest_offset.checked_add(n) {
        Some(end) if n > 0 && end <= dest.len() => end,
        _ => return 0,
    };
    let src_end = match src_offset.checked_add(n) {
        Some(end) if end <= src.len() => end,
        _ => return 0,
    };
    dest[dest_offset..dest_end].copy_from_slice(&src[src_offset..src_end]);
    n
}

/// Exchange the contents of two buffers over their common length.
pub fn swap(a: &mut [f32], b: &mut [f32]) {
    let n = a.len().min(b.len());
    a[..n].swap_with_slice(&mut b[..n]);
}

/// Reverse a buffer in place. An odd middle element stays where it is.
pub fn reverse(vec: &mut [f32]) {
    vec.reverse();
}

/// Sort ascending by value.
///
/// Unstable; NaN values order by IEEE total order.
pub fn sort(vec: &mut [f32]) {
    vec.sort_unstable_by(f32::total_cmp);
}

/// Sort ascending by magnitude. Unstable.
pub fn sort_abs(vec: &mut [f32]) {
    vec.sort_unstable_by(|a, b| a.abs().total_cmp(&b.abs()));
}

/// Reverse the byte order of every element's bit pattern.
pub fn byte_swap(vec: &mut [f32]) {
    for value in vec.iter_mut() {
        *value = f32::from_bits(value.to_bits().swap_bytes());
    }
}

/// Integer variant of [`byte_swap`].
pub fn byte_swap_i32(vec: &mut [i32]) {
    for value in vec.iter_mut() {
        *value = value.swap_bytes();
    }
}

/// Replace NaN, infinite and denormal-sized values with exact zero.
///
/// A value counts as denormal-sized when it is nonzero and its magnitude is
/// below [`DENORMAL_LIMIT`]. Returns the number of elements replaced.
pub fn fix_invalid(vec: &mut [f32]) -> usize {
    let mut replaced = 0;
    for value in vec.iter_mut() {
        let x = *value;
        if !x.is_finite() || (x != 0.0 && x.abs() < DENORMAL_LIMIT) {
            *value = 0.0;
            replaced += 1;
        }
    }
    replaced
}

/// Replace every element with `-1.0`, `0.0` or `1.0` by sign.
///
/// Zero and NaN map to `0.0`.
pub fn sign(vec: &mut [f32]) {
    for value in vec.iter_mut() {
        *value = if *value > 0.0 {
            1.0
        } else if *value < 0.0 {
            -1.0
        } else {
            0.0
        };
    }
}

/// Compact the buffer in place, keeping elements with `|x| > tolerance`.
///
/// Relative order is preserved. Returns the new element count; values past
/// that count are stale and must not be read.
pub fn de_zero(vec: &mut [f32], tolerance: f32) -> usize {
    let mut kept = 0;
    for i in 0..vec.len() {
        let value = vec[i];
        if value.abs() > tolerance {
            vec[kept] = value;
            kept += 1;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_common_prefix() {
        let mut dest = [0.0; 3];
        copy(&mut dest, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(dest, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_copy_offset_bounds() {
        let src = [1.0, 2.0, 3.0, 4.0];
        let mut dest = [0.0; 4];
        assert_eq!(copy_offset(&mut dest, 1, &src, 2, 2), 2);
        assert_eq!(dest, [0.0, 3.0, 4.0, 0.0]);

        // Source overrun leaves dest untouched
        assert_eq!(copy_offset(&mut dest, 0, &src, 3, 2), 0);
        assert_eq!(dest, [0.0, 3.0, 4.0, 0.0]);

        assert_eq!(copy_offset(&mut dest, usize::MAX, &src, 0, 2), 0);
    }

    #[test]
    fn test_swap_common_prefix() {
        let mut a = [1.0, 2.0, 3.0];
        let mut b = [7.0, 8.0];
        swap(&mut a, &mut b);
        assert_eq!(a, [7.0, 8.0, 3.0]);
        assert_eq!(b, [1.0, 2.0]);
    }

    #[test]
    fn test_reverse_odd_keeps_middle() {
        let mut vec = [1.0, 2.0, 3.0, 4.0, 5.0];
        reverse(&mut vec);
        assert_eq!(vec, [5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_sort_abs() {
        let mut vec = [-3.0, 1.0, -0.5, 2.0];
        sort_abs(&mut vec);
        assert_eq!(vec, [-0.5, 1.0, 2.0, -3.0]);

        sort(&mut vec);
        assert_eq!(vec, [-3.0, -0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_byte_swap_bit_pattern() {
        let mut vec = [1.0f32];
        byte_swap(&mut vec);
        assert_eq!(vec[0].to_bits(), 0x0000_803F);
        byte_swap(&mut vec);
        assert_eq!(vec[0], 1.0);

        let mut ints = [0x0102_0304];
        byte_swap_i32(&mut ints);
        assert_eq!(ints[0], 0x0403_0201);
    }

    #[test]
    fn test_fix_invalid() {
        let mut vec = [1.0, f32::NAN, f32::INFINITY, 1e-30, -1e-30, 0.0, -2.0];
        let replaced = fix_invalid(&mut vec);
        assert_eq!(replaced, 4);
        assert_eq!(vec, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.0]);
    }

    #[test]
    fn test_sign() {
        let mut vec = [-4.0, 0.0, 2.5, f32::NAN];
        sign(&mut vec);
        assert_eq!(vec, [-1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_de_zero_keeps_order() {
        let mut vec = [0.0, 3.0, 0.01, -2.0, 0.0, 5.0];
        let count = de_zero(&mut vec, 0.1);
        assert_eq!(count, 3);
        assert_eq!(&vec[..count], &[3.0, -2.0, 5.0]);
    }
}
