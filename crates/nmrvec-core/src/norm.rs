//! Normalization dispatcher.
//!
//! Computes one reduction over a source range of a buffer, scales it, and
//! applies it to a target range of the same buffer. Typical uses are
//! dividing a spectrum by the maximum of a reference peak, or subtracting
//! the mean of a baseline region.

use crate::error::{VecError, VecResult};
use crate::reduce;

/// Reduction computed over the source range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ReductionKind {
    /// Sum of values
    Sum,
    /// Arithmetic mean
    Average,
    /// Sample variance
    Variance,
    /// Sample standard deviation
    StdDev,
    /// Root mean square
    Rms,
    /// Smallest value
    Min,
    /// Largest value
    #[default]
    Max,
    /// Smallest magnitude
    MinAbs,
    /// Largest magnitude
    MaxAbs,
    /// Value with the smallest magnitude, sign kept
    SignedMin,
    /// Value with the largest magnitude, sign kept
    SignedMax,
    /// `max - min`
    Range,
    /// Median (always `0.0`, see [`reduce::median`])
    Median,
    /// Noise estimate (always `0.0`, see [`reduce::noise_estimate`])
    NoiseEstimate,
    /// No reduction; the base value is `1.0` so only the scale applies
    None,
}

impl ReductionKind {
    /// Decode an integer reduction code. Unknown codes give `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Sum,
            1 => Self::Average,
            2 => Self::Variance,
            3 => Self::StdDev,
            4 => Self::Rms,
            5 => Self::Min,
            6 => Self::Max,
            7 => Self::MinAbs,
            8 => Self::MaxAbs,
            9 => Self::SignedMin,
            10 => Self::SignedMax,
            11 => Self::Range,
            12 => Self::Median,
            13 => Self::NoiseEstimate,
            14 => Self::None,
            _ => return None,
        })
    }

    /// Evaluate the reduction over `vec`.
    #[must_use]
    pub fn evaluate(self, vec: &[f32]) -> f32 {
        match self {
            Self::Sum => reduce::sum(vec),
            Self::Average => reduce::mean(vec),
            Self::Variance => reduce::variance(vec),
            Self::StdDev => reduce::std_dev(vec),
            Self::Rms => reduce::rms(vec),
            Self::Min => reduce::min(vec),
            Self::Max => reduce::max(vec),
            Self::MinAbs => reduce::min_abs(vec),
            Self::MaxAbs => reduce::max_abs(vec),
            Self::SignedMin => reduce::signed_min_abs(vec),
            Self::SignedMax => reduce::signed_max_abs(vec),
            Self::Range => reduce::range(vec),
            Self::Median => reduce::median(vec),
            Self::NoiseEstimate => reduce::noise_estimate(vec),
            Self::None => 1.0,
        }
    }
}

/// How the scaled reduction is applied to the target range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// `x += value`
    Add,
    /// `x -= value`
    Subtract,
    /// `x *= value`
    Multiply,
    /// `x *= 1/value`, or `x *= 0` when `value == 0`
    #[default]
    Divide,
    /// `x = value`
    Replace,
    /// Leave the target alone
    None,
}

impl UpdateMode {
    /// Decode an integer update code. Unknown codes give `None`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Add,
            1 => Self::Subtract,
            2 => Self::Multiply,
            3 => Self::Divide,
            4 => Self::Replace,
            5 => Self::None,
            _ => return None,
        })
    }

    /// Apply `value` to every element of `target`.
    pub fn apply(self, target: &mut [f32], value: f32) {
        match self {
            Self::Add => target.iter_mut().for_each(|x| *x += value),
            Self::Subtract => target.iter_mut().for_each(|x| *x -= value),
            Self::Multiply => target.iter_mut().for_each(|x| *x *= value),
            Self::Divide => {
                let reciprocal = if value == 0.0 { 0.0 } else { 1.0 / value };
                target.iter_mut().for_each(|x| *x *= reciprocal);
            }
            Self::Replace => target.fill(value),
            Self::None => {}
        }
    }
}

/// Normalization parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormConfig {
    /// Reduction over the source range
    pub reduction: ReductionKind,
    /// Update applied to the target range
    pub update: UpdateMode,
    /// Multiplier for the reduction result
    pub scale: f32,
}

impl Default for NormConfig {
    fn default() -> Self {
        Self::divide_by_max_abs()
    }
}

impl NormConfig {
    /// Create a configuration.
    #[must_use]
    pub const fn new(reduction: ReductionKind, update: UpdateMode, scale: f32) -> Self {
        Self {
            reduction,
            update,
            scale,
        }
    }

    /// Peak normalization: divide by the largest magnitude.
    #[must_use]
    pub const fn divide_by_max_abs() -> Self {
        Self::new(ReductionKind::MaxAbs, UpdateMode::Divide, 1.0)
    }

    /// Baseline offset removal: subtract the mean.
    #[must_use]
    pub const fn subtract_mean() -> Self {
        Self::new(ReductionKind::Average, UpdateMode::Subtract, 1.0)
    }

    /// Multiply by the sum.
    #[must_use]
    pub const fn sum_multiply() -> Self {
        Self::new(ReductionKind::Sum, UpdateMode::Multiply, 1.0)
    }

    /// Set a different scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Check an inclusive `(start, end)` pair for inversion.
fn check_order((start, end): (usize, usize)) -> VecResult<()> {
    if start > end {
        log::debug!("normalization rejected: range start {} after end {}", start, end);
        return Err(VecError::InvertedRange { start, end });
    }
    Ok(())
}

fn check_bounds((_, end): (usize, usize), len: usize) -> VecResult<()> {
    if end >= len {
        log::debug!("normalization rejected: range end {} outside {} points", end, len);
        return Err(VecError::RangeOutOfBounds { end, len });
    }
    Ok(())
}

/// Reduce `vec[source]`, scale, and apply to `vec[target]`.
///
/// Both ranges are inclusive `(start, end)` pairs. An empty `vec` is a
/// no-op once both ranges are ordered.
///
/// # Errors
///
/// [`VecError::InvertedRange`] if either range starts after it ends,
/// [`VecError::RangeOutOfBounds`] if either range ends past `vec`.
pub fn apply_norm(
    vec: &mut [f32],
    target: (usize, usize),
    source: (usize, usize),
    config: &NormConfig,
) -> VecResult<()> {
    apply_norm_with(vec, target, source, Some(config.reduction), Some(config.update), config.scale)
}

/// Integer-coded variant of [`apply_norm`].
///
/// Codes follow the declaration order of [`ReductionKind`] and
/// [`UpdateMode`]. An unrecognized code has no effect; the call still
/// validates the ranges and returns `Ok(())`.
///
/// # Errors
///
/// Same as [`apply_norm`].
pub fn apply_norm_codes(
    vec: &mut [f32],
    target: (usize, usize),
    source: (usize, usize),
    reduction_code: i32,
    update_code: i32,
    scale: f32,
) -> VecResult<()> {
    let reduction = ReductionKind::from_code(reduction_code);
    let update = UpdateMode::from_code(update_code);
    if reduction.is_none() || update.is_none() {
        log::debug!(
            "normalization codes not recognized (reduction {}, update {}), target unchanged",
            reduction_code,
            update_code
        );
    }
    apply_norm_with(vec, target, source, reduction, update, scale)
}

fn apply_norm_with(
    vec: &mut [f32],
    target: (usize, usize),
    source: (usize, usize),
    reduction: Option<ReductionKind>,
    update: Option<UpdateMode>,
    scale: f32,
) -> VecResult<()> {
    check_order(target)?;
    check_order(source)?;
    if vec.is_empty() {
        return Ok(());
    }
    check_bounds(target, vec.len())?;
    check_bounds(source, vec.len())?;

    let (Some(reduction), Some(update)) = (reduction, update) else {
        return Ok(());
    };

    let value = reduction.evaluate(&vec[source.0..=source.1]) * scale;
    update.apply(&mut vec[target.0..=target.1], value);
    Ok(())
}
