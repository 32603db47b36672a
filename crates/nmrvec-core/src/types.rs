//! Core types for spectral buffer processing.
//!
//! Split-complex buffers keep `n` real parts followed by `n` imaginary parts
//! in one flat `f32` slice. The helpers here bisect such a buffer into its
//! two halves so the rest of the crate can work on plain slices.

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// Complex scalar used to scale or rotate split-complex buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cplx {
    /// Real part
    pub re: f32,
    /// Imaginary part
    pub im: f32,
}

impl Cplx {
    /// Create a new complex value.
    #[must_use]
    #[inline]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Zero value.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Unit value (1 + 0j).
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Calculate magnitude.
    #[must_use]
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Calculate magnitude squared (avoids sqrt for comparisons).
    #[must_use]
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// Rotate by angle in radians.
    ///
    /// `re' = cos(a)*re - sin(a)*im`, `im' = cos(a)*im + sin(a)*re`.
    #[must_use]
    #[inline]
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self {
            re: cos * self.re - sin * self.im,
            im: cos * self.im + sin * self.re,
        }
    }

    /// Complex multiply.
    #[must_use]
    #[inline]
    pub fn multiply(&self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Complex conjugate.
    #[must_use]
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
}

impl core::ops::Mul for Cplx {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

/// Bisect a split-complex buffer into `(real, imag)` halves.
///
/// Returns `None` for empty or odd-length buffers.
#[must_use]
pub fn split_complex(buf: &[f32]) -> Option<(&[f32], &[f32])> {
    if buf.is_empty() || buf.len() % 2 != 0 {
        return None;
    }
    Some(buf.split_at(buf.len() / 2))
}

/// Mutable variant of [`split_complex`].
#[must_use]
pub fn split_complex_mut(buf: &mut [f32]) -> Option<(&mut [f32], &mut [f32])> {
    if buf.is_empty() || buf.len() % 2 != 0 {
        return None;
    }
    let half = buf.len() / 2;
    Some(buf.split_at_mut(half))
}

/// Inclusive point range `[lower, upper]` within a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// First point (inclusive)
    pub lower: usize,
    /// Last point (inclusive)
    pub upper: usize,
}

impl Band {
    /// Create a band, reordering the bounds if given descending.
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// Number of points covered, whichever order the bounds are in.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.upper.abs_diff(self.lower) + 1
    }

    /// Bands always cover at least one point.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Check that the band lies inside a buffer of `size` points.
    #[must_use]
    pub const fn fits(&self, size: usize) -> bool {
        self.lower <= self.upper && self.upper < size
    }
}

impl From<(usize, usize)> for Band {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}
