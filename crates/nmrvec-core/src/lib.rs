//! NMR Vector Core Library
//!
//! Numeric kernels over `f32` buffers for spectroscopy processing: 1D
//! spectra, FIDs and interleaved complex data. Every routine works in place
//! or into a caller-owned destination and never allocates. The crate builds
//! `no_std` with the `std` feature disabled.
//!
//! # Modules
//!
//! - [`types`] - Core types: Cplx, Band, complex buffer views
//! - [`buffer`] - Copy, reorder, byte swap, NaN/zero cleanup
//! - [`arith`] - Elementwise arithmetic, masking, clipping
//! - [`reduce`] - Sums, extrema, moments, correlation, best-fit scaling
//! - [`smooth`] - Moving-average smoothing and local mean removal
//! - [`resample`] - Linear/bilinear interpolation, band packing, strided access
//! - [`phase`] - Zero/first-order and per-point phase correction
//! - [`matrix`] - Flat and row-addressed 2D views
//! - [`norm`] - Range-based normalization
//! - [`noise`] - Seeded Gaussian noise
//! - [`error`] - Error type with legacy status codes
//! - [`config`] - Numeric constants

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod arith;
pub mod buffer;
pub mod config;
pub mod error;
pub mod matrix;
pub mod noise;
pub mod norm;
pub mod phase;
pub mod reduce;
pub mod resample;
pub mod smooth;
pub mod types;

// Re-export commonly used types
pub use error::{VecError, VecResult};
pub use matrix::{FlatMatrix, FlatMatrixMut, RowMatrix, RowMatrixMut};
#[cfg(feature = "std")]
pub use noise::SharedGaussianNoise;
pub use noise::{add_gaussian_noise, GaussianNoise};
pub use norm::{apply_norm, apply_norm_codes, NormConfig, ReductionKind, UpdateMode};
pub use reduce::ComplexFit;
pub use types::{split_complex, split_complex_mut, Band, Cplx};
