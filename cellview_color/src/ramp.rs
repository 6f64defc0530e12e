// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use peniko::Color;

use crate::spectrum::clamp_unit;

/// Shortest wavelength of the rainbow ramp, in nanometres.
pub const MIN_WAVELENGTH: f64 = 380.0;
/// Longest wavelength of the rainbow ramp, in nanometres.
pub const MAX_WAVELENGTH: f64 = 780.0;

const GAMMA: f64 = 0.8;

/// The palette a heat map samples from.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ColorRamp {
    /// Visible spectrum from violet (`t = 0`) to deep red (`t = 1`).
    #[default]
    Rainbow,
    /// Component-wise interpolation between two colors, alpha included.
    Linear {
        /// Color at `t = 0`.
        from: Color,
        /// Color at `t = 1`.
        to: Color,
    },
}

impl ColorRamp {
    /// Samples the ramp at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Color {
        let t = clamp_unit(t);
        match *self {
            Self::Rainbow => wavelength_color(t),
            Self::Linear { from, to } => lerp(from, to, t),
        }
    }
}

/// Approximates the color of visible light at position `t` along
/// [`MIN_WAVELENGTH`]..=[`MAX_WAVELENGTH`].
///
/// Uses the piecewise-linear spectrum approximation with an intensity roll-off
/// near both ends of the visible range and a display gamma of 0.8. The result
/// is always opaque.
#[must_use]
pub fn wavelength_color(t: f64) -> Color {
    let wl = MIN_WAVELENGTH + clamp_unit(t) * (MAX_WAVELENGTH - MIN_WAVELENGTH);

    let (r, g, b) = if wl < 440.0 {
        (-(wl - 440.0) / (440.0 - 380.0), 0.0, 1.0)
    } else if wl < 490.0 {
        (0.0, (wl - 440.0) / (490.0 - 440.0), 1.0)
    } else if wl < 510.0 {
        (0.0, 1.0, -(wl - 510.0) / (510.0 - 490.0))
    } else if wl < 580.0 {
        ((wl - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if wl < 645.0 {
        (1.0, -(wl - 645.0) / (645.0 - 580.0), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    // Perceived intensity falls off towards the edges of vision.
    let factor = if wl < 420.0 {
        0.3 + 0.7 * (wl - 380.0) / (420.0 - 380.0)
    } else if wl <= 700.0 {
        1.0
    } else {
        0.3 + 0.7 * (780.0 - wl) / (780.0 - 700.0)
    };

    let adjust = |c: f64| {
        if c <= 0.0 {
            0.0
        } else {
            clamp_unit((c * factor).powf(GAMMA))
        }
    };
    color_from_f64(adjust(r), adjust(g), adjust(b), 1.0)
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
    let [r0, g0, b0, a0] = from.components;
    let [r1, g1, b1, a1] = to.components;
    let mix = |a: f32, b: f32| f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    color_from_f64(mix(r0, r1), mix(g0, g1), mix(b0, b1), mix(a0, a1))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "channels are in [0, 1], well within f32 precision"
)]
pub(crate) fn color_from_f64(r: f64, g: f64, b: f64, a: f64) -> Color {
    Color::new([r as f32, g as f32, b as f32, a as f32])
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::{ColorRamp, wavelength_color};

    #[test]
    fn rainbow_runs_from_violet_to_red() {
        let [r0, g0, b0, a0] = wavelength_color(0.0).components;
        assert!(r0 > 0.0 && b0 > 0.0 && g0 == 0.0, "violet end");
        assert_eq!(a0, 1.0);

        let [r1, g1, b1, _] = wavelength_color(1.0).components;
        assert!(r1 > 0.0 && g1 == 0.0 && b1 == 0.0, "red end");
    }

    #[test]
    fn rainbow_middle_is_bright_green() {
        // 510 nm sits at t = 0.325: pure green at full intensity.
        let [r, g, b, _] = wavelength_color(0.325).components;
        assert!(r.abs() < 1e-6);
        assert!((g - 1.0).abs() < 1e-6);
        assert!(b.abs() < 1e-6);
    }

    #[test]
    fn linear_ramp_interpolates_all_channels() {
        let ramp = ColorRamp::Linear {
            from: Color::new([0.0, 0.0, 1.0, 0.0]),
            to: Color::new([1.0, 0.0, 0.0, 1.0]),
        };
        let [r, g, b, a] = ramp.sample(0.25).components;
        assert!((r - 0.25).abs() < 1e-6);
        assert_eq!(g, 0.0);
        assert!((b - 0.75).abs() < 1e-6);
        assert!((a - 0.25).abs() < 1e-6);

        assert_eq!(ramp.sample(-1.0), Color::new([0.0, 0.0, 1.0, 0.0]));
        assert_eq!(ramp.sample(2.0), Color::new([1.0, 0.0, 0.0, 1.0]));
    }
}
