// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};

use crate::ramp::{ColorRamp, color_from_f64};
use crate::spectrum::{SpectrumMode, normalize};

/// Heat-map configuration: a spectrum mode applied on top of a color ramp.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HeatMap {
    /// How normalized values are reshaped before sampling.
    pub mode: SpectrumMode,
    /// The palette sampled at the reshaped position.
    pub ramp: ColorRamp,
}

impl HeatMap {
    /// Creates a heat map from a mode and a ramp.
    #[must_use]
    pub const fn new(mode: SpectrumMode, ramp: ColorRamp) -> Self {
        Self { mode, ramp }
    }

    /// Maps `value` within `[min, max]` to a color.
    ///
    /// `min` yields `ramp.sample(0.0)` and `max` yields `ramp.sample(1.0)`
    /// regardless of the mode. Out-of-range values clamp to those extremes.
    #[must_use]
    pub fn heat_color(&self, value: f64, min: f64, max: f64) -> Color {
        let t = self.mode.apply(normalize(value, min, max));
        self.ramp.sample(t)
    }

    /// Renders the spectrum between `lower` and `upper` as a vertical strip.
    ///
    /// The top row shows `upper`, the bottom row `lower`; every pixel of a row
    /// has the same color. Pixels are straight-alpha RGBA8. A zero width or
    /// height yields an empty image.
    #[must_use]
    pub fn legend_image(&self, width: u32, height: u32, lower: f64, upper: f64) -> ImageData {
        let row_bytes = width as usize * 4;
        let mut pixels = Vec::with_capacity(row_bytes * height as usize);
        if width > 0 {
            for y in 0..height {
                // Row 0 is the hottest; a single row shows the top of the range.
                let frac = if height > 1 {
                    1.0 - f64::from(y) / f64::from(height - 1)
                } else {
                    1.0
                };
                let value = lower + (upper - lower) * frac;
                let rgba = self.heat_color(value, lower, upper).to_rgba8();
                for _ in 0..width {
                    pixels.extend_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
                }
            }
        }
        ImageData {
            data: Blob::from(pixels),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width,
            height,
        }
    }
}

/// Renders a rainbow legend strip with the linear spectrum.
///
/// Shorthand for `HeatMap::default().legend_image(..)`.
#[must_use]
pub fn heat_map_image(width: u32, height: u32, lower: f64, upper: f64) -> ImageData {
    HeatMap::default().legend_image(width, height, lower, upper)
}

/// Keeps the hue of `base` and sets its alpha from `value` within `[min, max]`.
///
/// Alpha is `(value - min) / (max - min)` clamped to `[0, 1]`; a degenerate
/// range yields a fully transparent color.
#[must_use]
pub fn dynamic_range_color(value: f64, min: f64, max: f64, base: Color) -> Color {
    let [r, g, b, _] = base.components;
    color_from_f64(
        f64::from(r),
        f64::from(g),
        f64::from(b),
        normalize(value, min, max),
    )
}
