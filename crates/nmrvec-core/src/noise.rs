//! Gaussian noise for synthetic data augmentation.
//!
//! Deviates come from the polar Box-Muller method: draw `v1, v2` uniform in
//! `(-1, 1)` until `r² = v1² + v2²` falls strictly inside the unit circle,
//! then `v1 * fac` and `v2 * fac` with `fac = sqrt(-2 ln(r²) / r²)` are two
//! independent standard normal deviates. One is returned, the other cached
//! for the next call.
//!
//! Each [`GaussianNoise`] owns its RNG and cache, so every stream or worker
//! thread should hold its own instance. [`SharedGaussianNoise`] serializes
//! access to a single instance for callers that want one shared stream.

use crate::config::DEFAULT_NOISE_SEED;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use micromath::F32Ext;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Map an accepted uniform pair to two normal deviates.
///
/// Returns `(v1 * fac, v2 * fac)`, or `None` if the pair lies outside the
/// open unit circle or at its center.
#[must_use]
pub fn polar_pair(v1: f32, v2: f32) -> Option<(f32, f32)> {
    let rsq = v1 * v1 + v2 * v2;
    if rsq >= 1.0 || rsq == 0.0 {
        return None;
    }
    let fac = (-2.0 * rsq.ln() / rsq).sqrt();
    Some((v1 * fac, v2 * fac))
}

/// Standard normal deviate generator with one cached value.
#[derive(Clone, Debug)]
pub struct GaussianNoise<R = ChaCha8Rng> {
    rng: R,
    cached: Option<f32>,
}

impl GaussianNoise<ChaCha8Rng> {
    /// Create a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Restart the stream from `seed` and drop any cached deviate.
    pub fn reseed(&mut self, seed: u64) {
        log::debug!("gaussian noise reseeded with {:#x}", seed);
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.cached = None;
    }
}

impl Default for GaussianNoise<ChaCha8Rng> {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_SEED)
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Create a generator drawing uniforms from `rng`.
    #[must_use]
    pub fn from_rng(rng: R) -> Self {
        Self { rng, cached: None }
    }

    /// Whether the next call will return the cached deviate.
    #[must_use]
    pub fn has_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Next standard normal deviate.
    pub fn next_deviate(&mut self) -> f32 {
        if let Some(value) = self.cached.take() {
            return value;
        }
        loop {
            let v1 = 2.0 * self.rng.random::<f32>() - 1.0;
            let v2 = 2.0 * self.rng.random::<f32>() - 1.0;
            if let Some((first, second)) = polar_pair(v1, v2) {
                self.cached = Some(first);
                return second;
            }
        }
    }

    /// Overwrite `buf` with standard normal deviates.
    pub fn fill(&mut self, buf: &mut [f32]) {
        for value in buf.iter_mut() {
            *value = self.next_deviate();
        }
    }
}

/// Add `sigma * N(0, 1)` to every element of `vec`.
///
/// No-op (and no deviates consumed) when `sigma == 0` or `vec` is empty.
pub fn add_gaussian_noise<R: Rng>(vec: &mut [f32], sigma: f32, noise: &mut GaussianNoise<R>) {
    if sigma == 0.0 || vec.is_empty() {
        return;
    }
    for value in vec.iter_mut() {
        *value += sigma * noise.next_deviate();
    }
}

/// A single generator shared between threads behind a mutex.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct SharedGaussianNoise {
    inner: std::sync::Mutex<GaussianNoise>,
}

#[cfg(feature = "std")]
impl SharedGaussianNoise {
    /// Create a shared generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: std::sync::Mutex::new(GaussianNoise::new(seed)),
        }
    }

    /// Run `f` with exclusive access to the generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut GaussianNoise) -> T) -> T {
        // Recover from poisoning; no update leaves the generator half-written.
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *guard)
    }

    /// Next standard normal deviate from the shared stream.
    pub fn next_deviate(&self) -> f32 {
        self.with(GaussianNoise::next_deviate)
    }

    /// Add noise to `vec` from the shared stream.
    pub fn add_to(&self, vec: &mut [f32], sigma: f32) {
        self.with(|noise| add_gaussian_noise(vec, sigma, noise));
    }

    /// Restart the shared stream from `seed`.
    pub fn reseed(&self, seed: u64) {
        self.with(|noise| noise.reseed(seed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_pair_rejects_outside_circle() {
        assert!(polar_pair(0.9, 0.9).is_none());
        assert!(polar_pair(1.0, 0.0).is_none());
        assert!(polar_pair(0.0, 0.0).is_none());
        assert!(polar_pair(0.3, -0.4).is_some());
    }

    #[test]
    fn test_consecutive_calls_share_one_pair() {
        let mut noise = GaussianNoise::new(42);
        let mut reference = ChaCha8Rng::seed_from_u64(42);

        let (first, second) = loop {
            let v1 = 2.0 * reference.random::<f32>() - 1.0;
            let v2 = 2.0 * reference.random::<f32>() - 1.0;
            if let Some(pair) = polar_pair(v1, v2) {
                break pair;
            }
        };

        assert!(!noise.has_cached());
        assert_eq!(noise.next_deviate(), second);
        assert!(noise.has_cached());
        assert_eq!(noise.next_deviate(), first);
        assert!(!noise.has_cached());
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut noise = GaussianNoise::new(7);
        let a = noise.next_deviate();
        noise.reseed(7);
        assert!(!noise.has_cached());
        assert_eq!(noise.next_deviate(), a);
    }

    #[test]
    fn test_zero_sigma_is_noop() {
        let mut noise = GaussianNoise::new(1);
        let mut vec = [1.0, 2.0];
        add_gaussian_noise(&mut vec, 0.0, &mut noise);
        assert_eq!(vec, [1.0, 2.0]);
        assert!(!noise.has_cached());
    }

    #[test]
    fn test_deviates_look_standard_normal() {
        let mut noise = GaussianNoise::new(2024);
        let mut buf = [0.0f32; 20000];
        noise.fill(&mut buf);

        let n = buf.len() as f32;
        let mean = buf.iter().sum::<f32>() / n;
        let var = buf.iter().map(|x| (x - mean) * (x - mean)).sum::<f32>() / (n - 1.0);
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_shared_matches_owned_stream() {
        let shared = SharedGaussianNoise::new(99);
        let mut owned = GaussianNoise::new(99);
        for _ in 0..5 {
            assert_eq!(shared.next_deviate(), owned.next_deviate());
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_shared_add_to_and_reseed() {
        let shared = SharedGaussianNoise::new(3);
        let mut owned = GaussianNoise::new(3);

        let mut from_shared = [1.0f32; 6];
        let mut from_owned = [1.0f32; 6];
        shared.add_to(&mut from_shared, 0.5);
        add_gaussian_noise(&mut from_owned, 0.5, &mut owned);
        assert_eq!(from_shared, from_owned);

        shared.reseed(3);
        assert!(!shared.with(|noise| noise.has_cached()));
        let mut replay = [1.0f32; 6];
        shared.add_to(&mut replay, 0.5);
        assert_eq!(replay, from_owned);
    }
}
