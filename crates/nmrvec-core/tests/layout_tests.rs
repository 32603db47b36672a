//! Tests for buffer layout operations: reordering, compaction, resampling,
//! band packing and matrix copies.
//!
//! ## Test Organization
//!
//! 1. **Reordering** - reverse, sort, byte swap
//! 2. **Compaction** - de_zero and invalid value cleanup
//! 3. **Resampling** - linear and bilinear interpolation contracts
//! 4. **Bands** - validation and error codes
//! 5. **Clipping** - soft clip threshold examples
//! 6. **Matrices** - row and flat copies

use approx::assert_relative_eq;
use nmrvec_core::matrix::{matrix_copy, matrix_copy_single};
use nmrvec_core::{
    arith, buffer, resample, Band, FlatMatrix, FlatMatrixMut, RowMatrix, RowMatrixMut, VecError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_spectrum(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| 2.0 * rng.random::<f32>() - 1.0).collect()
}

// ============================================================================
// Reordering
// ============================================================================

/// Reversing twice restores the buffer for odd and even lengths.
#[test]
fn test_reverse_twice_is_identity() {
    for len in [0, 1, 2, 7, 128] {
        let original = random_spectrum(len as u64, len);
        let mut v = original.clone();
        buffer::reverse(&mut v);
        buffer::reverse(&mut v);
        assert_eq!(v, original, "length {}", len);
    }
}

/// Byte swapping twice restores the bit patterns.
#[test]
fn test_byte_swap_twice_is_identity() {
    let original = random_spectrum(3, 16);
    let mut v = original.clone();
    buffer::byte_swap(&mut v);
    buffer::byte_swap(&mut v);
    assert_eq!(v, original);
}

/// Magnitude sort orders by |x| and keeps signs.
#[test]
fn test_sort_abs_keeps_signs() {
    let mut v = [-3.0, 1.0, -2.0, 0.5];
    buffer::sort_abs(&mut v);
    assert_eq!(v, [0.5, 1.0, -2.0, -3.0]);
}

// ============================================================================
// Compaction
// ============================================================================

/// A second de_zero pass over the kept prefix changes nothing.
#[test]
fn test_de_zero_is_idempotent() {
    let mut v = random_spectrum(11, 200);
    let kept = buffer::de_zero(&mut v, 0.5);
    let snapshot = v[..kept].to_vec();

    let again = buffer::de_zero(&mut v[..kept], 0.5);
    assert_eq!(again, kept);
    assert_eq!(&v[..kept], snapshot.as_slice());
    assert!(snapshot.iter().all(|x| x.abs() > 0.5));
}

/// Non-finite and denormal-sized values are zeroed and counted.
#[test]
fn test_fix_invalid_counts_replacements() {
    let mut v = [1.0, f32::NAN, f32::NEG_INFINITY, 1e-30, -2.0, 0.0];
    assert_eq!(buffer::fix_invalid(&mut v), 3);
    assert_eq!(v, [1.0, 0.0, 0.0, 0.0, -2.0, 0.0]);
}

// ============================================================================
// Resampling
// ============================================================================

/// Equal sizes reproduce the source exactly, including at spectrum sizes
/// where `i * (n - 1)` no longer fits an f32 mantissa.
#[test]
fn test_linear_interp_equal_sizes_is_identity() {
    for len in [33, 4096, 5000, 16384, 65536] {
        let src = random_spectrum(len as u64, len);
        let mut dest = vec![0.0; len];
        resample::linear_interp(&mut dest, &src);
        let mismatches = dest.iter().zip(&src).filter(|(d, s)| d != s).count();
        assert_eq!(mismatches, 0, "length {}", len);
    }
}

/// Doubling the grid puts every even output on a source point.
#[test]
fn test_linear_interp_upsample_hits_source_points() {
    let src = random_spectrum(40, 8193);
    let mut dest = vec![0.0; 2 * src.len() - 1];
    resample::linear_interp(&mut dest, &src);
    for (i, s) in src.iter().enumerate() {
        assert_eq!(dest[2 * i], *s, "point {}", i);
    }
    assert_relative_eq!(dest[1], 0.5 * (src[0] + src[1]), epsilon = 1e-6);
}

/// Bilinear resampling onto the same long axis is exact.
#[test]
fn test_bilinear_equal_shape_long_axis() {
    let data = random_spectrum(77, 2 * 6000);
    let mut out = vec![0.0; data.len()];
    let input = FlatMatrix::new(&data, 6000, 2).unwrap();
    {
        let mut output = FlatMatrixMut::new(&mut out, 6000, 2).unwrap();
        resample::bilinear_interp_2d(&input, &mut output);
    }
    assert_eq!(out, data);
}

/// Downsampling a 4x3 grid to 2x2 keeps the corners, clamped to the last
/// row and column.
#[test]
fn test_bilinear_non_square_downsample() {
    // value = 4 * row + col
    let data: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let input = FlatMatrix::new(&data, 4, 3).unwrap();
    let mut out = [0.0f32; 4];
    {
        let mut output = FlatMatrixMut::new(&mut out, 2, 2).unwrap();
        resample::bilinear_interp_2d(&input, &mut output);
    }
    assert_eq!(out, [0.0, 3.0, 8.0, 11.0]);

    // 4x3 onto 3x2: middle column sits halfway between cols 1 and 2
    let mut out = [0.0f32; 6];
    {
        let mut output = FlatMatrixMut::new(&mut out, 3, 2).unwrap();
        resample::bilinear_interp_2d(&input, &mut output);
    }
    assert_eq!(out, [0.0, 1.5, 3.0, 8.0, 9.5, 11.0]);
}

/// A single output point takes the first source point.
#[test]
fn test_linear_interp_single_output() {
    let src = [4.0, 8.0, 12.0];
    let mut dest = [0.0];
    resample::linear_interp(&mut dest, &src);
    assert_eq!(dest, [4.0]);
}

// ============================================================================
// Bands
// ============================================================================

/// A band reaching past the source is rejected with the legacy code.
#[test]
fn test_band_past_source_is_rejected() {
    let src = [1.0f32; 10];
    let mut dest = [0.0f32; 16];
    let err = resample::move_bands_to_dest(&mut dest, &src, &[Band::new(5, 12)]).unwrap_err();
    assert_eq!(
        err,
        VecError::BandOutOfRange {
            lower: 5,
            upper: 12,
            len: 10
        }
    );
    assert_eq!(err.code(), -1);
    assert_eq!(dest, [0.0; 16]);
}

/// A bad band late in the list blocks the earlier ones too.
#[test]
fn test_bands_validated_before_writing() {
    let src = [1.0f32; 10];
    let mut dest = [0.0f32; 16];
    let bands = [Band::new(0, 3), Band::new(8, 20)];
    assert!(resample::move_bands_to_dest(&mut dest, &src, &bands).is_err());
    assert_eq!(dest, [0.0; 16]);

    let empty: [Band; 0] = [];
    assert_eq!(resample::move_bands_to_dest(&mut dest, &src, &empty), Ok(0));
}

// ============================================================================
// Clipping
// ============================================================================

/// Positive threshold compresses the excess.
#[test]
fn test_soft_clip_compress() {
    let mut v = [3.0, 1.0, -3.0];
    arith::soft_clip_threshold(&mut v, 0.5, 2.0);
    assert_eq!(v, [2.5, 1.0, -2.5]);
}

/// Negative threshold expands the excess and zeroes the interior.
#[test]
fn test_soft_clip_expand() {
    let mut v = [3.0, 1.0];
    arith::soft_clip_threshold(&mut v, 0.5, -2.0);
    assert_eq!(v, [3.5, 0.0]);

    let mut untouched = [3.0, 1.0];
    arith::soft_clip_threshold(&mut untouched, 0.5, 0.0);
    assert_eq!(untouched, [3.0, 1.0]);
}

// ============================================================================
// Matrices
// ============================================================================

/// Row copies move every row; shape mismatches copy nothing.
#[test]
fn test_row_matrix_copy() {
    let src_rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
    let mut dest_rows = vec![vec![0.0; 3], vec![0.0; 3]];
    {
        let src = RowMatrix::new(&src_rows, 3).unwrap();
        let mut dest = RowMatrixMut::new(&mut dest_rows, 3).unwrap();
        assert_eq!(matrix_copy(&mut dest, &src), 6);
    }
    assert_eq!(dest_rows, src_rows);

    let mut short_rows = vec![vec![0.0; 3]];
    let src = RowMatrix::new(&src_rows, 3).unwrap();
    let mut dest = RowMatrixMut::new(&mut short_rows, 3).unwrap();
    assert_eq!(matrix_copy(&mut dest, &src), 0);
}

/// Flat copies move the whole block.
#[test]
fn test_flat_matrix_copy() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut out = [0.0; 6];
    let src = FlatMatrix::new(&data, 3, 2).unwrap();
    {
        let mut dest = FlatMatrixMut::new(&mut out, 3, 2).unwrap();
        assert_eq!(matrix_copy_single(&mut dest, &src), 6);
    }
    assert_eq!(out, data);

    let mut wrong = [0.0; 6];
    let mut dest = FlatMatrixMut::new(&mut wrong, 2, 3).unwrap();
    assert_eq!(matrix_copy_single(&mut dest, &src), 0);
}
