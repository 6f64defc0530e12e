// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Color: map scalar values onto heat-map colors.
//!
//! A heat map takes a `(value, min, max)` triple and produces a [`Color`]:
//!
//! 1. The value is normalized into `t ∈ [0, 1]` with [`normalize`]. Values
//!    outside the range clamp; a degenerate or non-finite range maps to `0`.
//! 2. A [`SpectrumMode`] reshapes `t` (linear, logarithmic or exponential) so
//!    that skewed distributions spread across the ramp.
//! 3. A [`ColorRamp`] samples a color at the reshaped position: either the
//!    visible-light [`wavelength_color`] rainbow or a two-color interpolation.
//!
//! [`dynamic_range_color`] is the alternative used for single-hue overlays: the
//! hue stays fixed and only alpha follows the normalized value.
//!
//! [`HeatMap::legend_image`] renders the configured spectrum as a vertical strip
//! of RGBA8 pixels, suitable as a legend texture.
//!
//! ## Minimal example
//!
//! ```rust
//! use cellview_color::{ColorRamp, HeatMap, SpectrumMode};
//!
//! let heat = HeatMap::new(SpectrumMode::Log, ColorRamp::Rainbow);
//! let cold = heat.heat_color(0.0, 0.0, 100.0);
//! let hot = heat.heat_color(100.0, 0.0, 100.0);
//! assert_eq!(cold, ColorRamp::Rainbow.sample(0.0));
//! assert_eq!(hot, ColorRamp::Rainbow.sample(1.0));
//! ```
//!
//! All functions are total: they never panic and never produce NaN channels.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod heat;
mod ramp;
mod spectrum;

pub use heat::{HeatMap, dynamic_range_color, heat_map_image};
pub use ramp::{ColorRamp, MAX_WAVELENGTH, MIN_WAVELENGTH, wavelength_color};
pub use spectrum::{SpectrumMode, normalize};

pub use peniko::Color;
