// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by the generators.

use kurbo::Size;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`

/// How [`clamp_size`] treats the aspect ratio of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// Clamp width and height independently.
    #[default]
    Ignore,
    /// Scale uniformly so the result fits the bounds while keeping the ratio.
    ///
    /// Sizes larger than `max` shrink to fit inside it; sizes smaller than
    /// `min` grow until they cover it.
    Keep,
}

/// Floored modulo: `dividend - divisor * floor(dividend / divisor)`.
///
/// Unlike the `%` operator (truncated remainder), the result always carries the
/// sign of `divisor`:
///
/// ```rust
/// use cellview_geometry::floor_mod;
///
/// assert!((floor_mod(-4.2, 0.5) - 0.3).abs() < 1e-9);
/// assert!((floor_mod(1.23, -0.5) + 0.27).abs() < 1e-9);
/// ```
///
/// A zero or non-finite divisor yields `0.0`.
#[must_use]
pub fn floor_mod(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 || !divisor.is_finite() || !dividend.is_finite() {
        return 0.0;
    }
    let r = dividend - divisor * (dividend / divisor).floor();
    // Rounding can land exactly on the divisor; that is a whole multiple.
    if r.abs() >= divisor.abs() { 0.0 } else { r }
}

/// Returns `true` when `extent` is a whole multiple of `spacing`.
///
/// The remainder is taken with [`floor_mod`] and compared against zero and
/// against the spacing itself with a tolerance relative to `extent`, so values
/// such as `0.3 / 0.1` that miss by one ulp still count as exact.
#[must_use]
pub fn is_multiple_of(extent: f64, spacing: f64) -> bool {
    let r = floor_mod(extent, spacing);
    let tolerance = 1e-9 * extent.abs().max(1.0);
    r.abs() <= tolerance || (spacing.abs() - r.abs()).abs() <= tolerance
}

/// Clamps `size` into the box spanned by `min` and `max`.
///
/// `min` and `max` are normalized per axis so that `min <= max`.
#[must_use]
pub fn clamp_size(size: Size, min: Size, max: Size, mode: AspectRatio) -> Size {
    let lo = Size::new(min.width.min(max.width), min.height.min(max.height));
    let hi = Size::new(min.width.max(max.width), min.height.max(max.height));
    let independent = Size::new(
        size.width.max(lo.width).min(hi.width),
        size.height.max(lo.height).min(hi.height),
    );
    if mode == AspectRatio::Ignore || size.width <= 0.0 || size.height <= 0.0 {
        return independent;
    }

    if size.width > hi.width || size.height > hi.height {
        let factor = (hi.width / size.width).min(hi.height / size.height);
        size * factor
    } else if size.width < lo.width || size.height < lo.height {
        let factor = (lo.width / size.width).max(lo.height / size.height);
        size * factor
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{AspectRatio, clamp_size, floor_mod, is_multiple_of};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn close_size(a: Size, b: Size) -> bool {
        close(a.width, b.width) && close(a.height, b.height)
    }

    #[test]
    fn floor_mod_follows_divisor_sign() {
        assert!(close(floor_mod(42.70, 1.0), 0.70), "positive / positive");
        assert!(close(floor_mod(1.23, 0.5), 0.23), "positive / half");
        assert!(close(floor_mod(-4.20, 0.5), 0.30), "negative dividend");
        assert!(close(floor_mod(1.23, -0.5), -0.27), "negative divisor");
    }

    #[test]
    fn floor_mod_is_total() {
        assert_eq!(floor_mod(3.0, 0.0), 0.0);
        assert_eq!(floor_mod(f64::NAN, 1.0), 0.0);
        assert_eq!(floor_mod(3.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn multiples_are_detected_with_tolerance() {
        assert!(is_multiple_of(10.0, 1.0));
        assert!(!is_multiple_of(10.5, 1.0));
        assert!(is_multiple_of(0.3, 0.1));
        assert!(is_multiple_of(0.0, 1.0));
        assert!(!is_multiple_of(-0.25, 1.0));
    }

    #[test]
    fn clamp_ignoring_aspect_ratio() {
        let min = Size::new(1.0, 1.0);
        let max = Size::new(4.0, 4.0);
        let shrunk = clamp_size(Size::new(4.0, 6.0), min, max, AspectRatio::Ignore);
        assert!(close_size(shrunk, Size::new(4.0, 4.0)));
        let grown = clamp_size(Size::new(0.4, 0.6), min, max, AspectRatio::Ignore);
        assert!(close_size(grown, Size::new(1.0, 1.0)));
    }

    #[test]
    fn clamp_keeping_aspect_ratio() {
        let min = Size::new(1.0, 1.0);
        let max = Size::new(4.0, 4.0);
        let shrunk = clamp_size(Size::new(4.0, 6.0), min, max, AspectRatio::Keep);
        assert!(close_size(shrunk, Size::new(8.0 / 3.0, 4.0)));
        let grown = clamp_size(Size::new(0.4, 0.6), min, max, AspectRatio::Keep);
        assert!(close_size(grown, Size::new(1.0, 1.5)));
        let inside = clamp_size(Size::new(2.0, 3.0), min, max, AspectRatio::Keep);
        assert!(close_size(inside, Size::new(2.0, 3.0)));
    }

    #[test]
    fn clamp_with_swapped_bounds_and_empty_size() {
        let min = Size::new(4.0, 4.0);
        let max = Size::new(1.0, 1.0);
        let clamped = clamp_size(Size::new(0.0, 9.0), min, max, AspectRatio::Keep);
        assert!(close_size(clamped, Size::new(1.0, 4.0)));
    }
}
