// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface nodes render onto.

use alloc::string::String;
use core::fmt;

use kurbo::{Affine, Line, Point, Rect};
use peniko::{Color, ImageData};

/// Errors reported by node drawing and frame capture.
///
/// The canvas never propagates these out of a render pass: a failing node is
/// logged and skipped, and its siblings still draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// An image's pixel buffer does not match its declared dimensions.
    InvalidImage {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Actual buffer length in bytes.
        len: usize,
    },
    /// The node has no data to draw yet.
    NotReady,
    /// The surface cannot read pixels back.
    ReadbackUnsupported,
    /// Backend-specific failure.
    Backend(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImage { width, height, len } => write!(
                f,
                "image buffer of {len} bytes does not match {width}x{height} RGBA8"
            ),
            Self::NotReady => f.write_str("node has no data to draw"),
            Self::ReadbackUnsupported => f.write_str("surface cannot read back pixels"),
            Self::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl core::error::Error for DrawError {}

/// Immediate-mode drawing target.
///
/// All geometry is given in the coordinates of the current transform, which
/// the canvas sets to the node's model-view (node-local → viewport pixels)
/// before each draw call.
pub trait Surface {
    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Returns the current transform.
    fn transform(&self) -> Affine;

    /// Clears the whole surface to `color`.
    fn clear(&mut self, color: Color);

    /// Strokes a batch of line segments.
    fn draw_lines(&mut self, lines: &[Line], color: Color, width: f64);

    /// Strokes a polyline, closing it when `closed` is set.
    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Color, width: f64);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Draws filled point sprites of the given diameter, one color per point.
    fn draw_points(&mut self, points: &[(Point, Color)], size: f64);

    /// Draws `image` stretched over `dest`.
    fn draw_image(&mut self, image: &ImageData, dest: Rect);
}

/// A [`Surface`] whose pixels can be read back, used for frame capture.
pub trait CaptureSurface: Surface {
    /// Reads back the surface at full resolution as straight-alpha RGBA8.
    fn read_pixels(&mut self) -> Result<ImageData, DrawError>;
}

/// Checks that `image` holds exactly `width * height` RGBA8 pixels.
pub fn validate_image(image: &ImageData) -> Result<(), DrawError> {
    let expected = (image.width as usize)
        .checked_mul(image.height as usize)
        .and_then(|pixels| pixels.checked_mul(4));
    let len = image.data.data().len();
    if expected == Some(len) {
        Ok(())
    } else {
        Err(DrawError::InvalidImage {
            width: image.width,
            height: image.height,
            len,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

    use super::{DrawError, validate_image};

    fn image(width: u32, height: u32, len: usize) -> ImageData {
        ImageData {
            data: Blob::from(vec![0_u8; len]),
            format: ImageFormat::Rgba8,
            alpha_type: ImageAlphaType::Alpha,
            width,
            height,
        }
    }

    #[test]
    fn image_size_is_checked() {
        assert_eq!(validate_image(&image(2, 3, 24)), Ok(()));
        assert_eq!(
            validate_image(&image(2, 3, 20)),
            Err(DrawError::InvalidImage {
                width: 2,
                height: 3,
                len: 20
            })
        );
    }

    #[test]
    fn overflowing_dimensions_are_invalid() {
        assert!(matches!(
            validate_image(&image(u32::MAX, u32::MAX, 0)),
            Err(DrawError::InvalidImage { len: 0, .. })
        ));
    }

    #[test]
    fn errors_render_readably() {
        let msg = DrawError::InvalidImage {
            width: 2,
            height: 3,
            len: 20,
        }
        .to_string();
        assert_eq!(msg, "image buffer of 20 bytes does not match 2x3 RGBA8");
        assert_eq!(DrawError::NotReady.to_string(), "node has no data to draw");
    }
}
