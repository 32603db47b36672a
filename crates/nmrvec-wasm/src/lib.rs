//! WASM bindings for nmrvec spectrum processing.
//!
//! This crate provides WebAssembly bindings for the core kernels,
//! designed to back an interactive spectrum viewer. JavaScript writes the
//! spectrum into the working buffer through its pointer, calls processing
//! methods, and reads the result back from the same memory.

use nmrvec_core::config::DEFAULT_NOISE_SEED;
use nmrvec_core::{
    add_gaussian_noise, apply_norm_codes, buffer, phase, resample, smooth, split_complex_mut,
    GaussianNoise,
};
use wasm_bindgen::prelude::*;

/// Status returned by [`SpectrumWorkspace::normalize`] on success.
pub const STATUS_OK: i32 = 0;

/// Spectrum processing workspace for the browser viewer.
///
/// Holds the working spectrum, an equally sized scratch buffer for
/// out-of-place kernels, and the noise generator used for augmentation.
#[wasm_bindgen]
pub struct SpectrumWorkspace {
    data: Vec<f32>,
    scratch: Vec<f32>,
    noise: GaussianNoise,
    seed: u64,
}

#[wasm_bindgen]
impl SpectrumWorkspace {
    /// Create a zeroed workspace of `size` points.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            data: vec![0.0; size],
            scratch: vec![0.0; size],
            noise: GaussianNoise::new(DEFAULT_NOISE_SEED),
            seed: DEFAULT_NOISE_SEED,
        }
    }

    /// Get pointer to the working buffer for WASM memory access.
    ///
    /// Invalidated by [`resample`](Self::resample).
    #[wasm_bindgen]
    pub fn get_data_ptr(&mut self) -> *mut f32 {
        self.data.as_mut_ptr()
    }

    /// Get pointer to the scratch buffer for WASM memory access.
    #[wasm_bindgen]
    pub fn get_scratch_ptr(&self) -> *const f32 {
        self.scratch.as_ptr()
    }

    /// Number of points in the working buffer.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the working buffer is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Moving-average smoothing with half-width `window`.
    #[wasm_bindgen]
    pub fn smooth(&mut self, window: usize) {
        smooth::moving_average_smooth(&self.data, &mut self.scratch, window);
        self.data.copy_from_slice(&self.scratch);
    }

    /// Remove the local mean over half-width `window`.
    #[wasm_bindgen]
    pub fn center(&mut self, window: usize) {
        smooth::local_mean_subtract(&self.data, &mut self.scratch, window);
        self.data.copy_from_slice(&self.scratch);
    }

    /// Normalize the target range by a reduction over the source range.
    ///
    /// Ranges are inclusive. Returns [`STATUS_OK`] or the legacy status code
    /// of the rejection.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn normalize(
        &mut self,
        target_start: usize,
        target_end: usize,
        source_start: usize,
        source_end: usize,
        reduction: i32,
        update: i32,
        scale: f32,
    ) -> i32 {
        match apply_norm_codes(
            &mut self.data,
            (target_start, target_end),
            (source_start, source_end),
            reduction,
            update,
            scale,
        ) {
            Ok(()) => STATUS_OK,
            Err(err) => {
                log::debug!("normalize failed: {}", err);
                err.code()
            }
        }
    }

    /// Add Gaussian noise with standard deviation `sigma`.
    #[wasm_bindgen]
    pub fn add_noise(&mut self, sigma: f32) {
        add_gaussian_noise(&mut self.data, sigma, &mut self.noise);
    }

    /// Phase-correct the buffer as split complex data (real half, then
    /// imaginary half). Odd lengths are left untouched.
    #[wasm_bindgen]
    pub fn phase(&mut self, start: usize, end: usize, p0: f32, p1: f32) {
        if let Some((real, imag)) = split_complex_mut(&mut self.data) {
            phase::phase_constant_rate(real, imag, start, end, p0, p1);
        }
    }

    /// Resample the working buffer to `size` points.
    #[wasm_bindgen]
    pub fn resample(&mut self, size: usize) {
        if size == self.data.len() {
            return;
        }
        let mut resized = vec![0.0; size];
        resample::linear_interp(&mut resized, &self.data);
        self.data = resized;
        self.scratch = vec![0.0; size];
    }

    /// Zero out NaN, infinite and denormal-sized values. Returns how many changed.
    #[wasm_bindgen]
    pub fn fix_invalid(&mut self) -> usize {
        buffer::fix_invalid(&mut self.data)
    }

    /// Reverse the point order.
    #[wasm_bindgen]
    pub fn reverse(&mut self) {
        buffer::reverse(&mut self.data);
    }

    /// Restart the noise stream from `seed`.
    #[wasm_bindgen]
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.noise.reseed(seed);
    }

    /// Zero both buffers and restart the noise stream from the current seed.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.data.fill(0.0);
        self.scratch.fill(0.0);
        self.noise.reseed(self.seed);
    }
}

impl SpectrumWorkspace {
    /// Working buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable working buffer.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Create a new spectrum workspace (factory function).
#[wasm_bindgen]
pub fn create_workspace(size: usize) -> SpectrumWorkspace {
    SpectrumWorkspace::new(size)
}
