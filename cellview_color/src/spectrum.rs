// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ln` and `powf`

/// Shape of the mapping from a normalized value onto the color ramp.
///
/// Every mode maps `0 → 0` and `1 → 1`, so range extremes always land on the
/// ramp extremes; the modes differ in how they spread the interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpectrumMode {
    /// Identity mapping.
    #[default]
    Linear,
    /// `ln(1 + 9t) / ln(10)`: stretches the low end of the range.
    Log,
    /// `(10^t - 1) / 9`: stretches the high end of the range.
    Exp,
}

impl SpectrumMode {
    /// Reshapes a normalized position `t`.
    ///
    /// The input is clamped to `[0, 1]` first; NaN maps to `0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let shaped = match self {
            Self::Linear => t,
            Self::Log => (1.0 + 9.0 * t).ln() / 10.0_f64.ln(),
            Self::Exp => (10.0_f64.powf(t) - 1.0) / 9.0,
        };
        clamp_unit(shaped)
    }
}

/// Normalizes `value` into `[0, 1]` relative to `[min, max]`.
///
/// - Swapped bounds are reordered.
/// - Values below `min` or above `max` clamp.
/// - A degenerate (`min == max`) or non-finite range yields `0`.
/// - A NaN value yields `0`.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let range = hi - lo;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    clamp_unit((value - lo) / range)
}

pub(crate) fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
