// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::math::is_multiple_of;

/// Default distance between interior grid lines, in scene units.
pub const DEFAULT_GRID_SPACING: f64 = 1.0;

/// Most rows (or columns) generated per axis; lines past it are dropped.
pub const MAX_GRID_STEPS: u32 = 100_000;

/// Line geometry for a rectangular array and the border frame around it.
///
/// The generator works on two rectangles:
/// - the **content rectangle**, the active data area covered by interior grid
///   lines;
/// - the **border rectangle**, a padding frame around it.
///
/// [`GridGeometry::generate_data`] produces two line lists:
/// - Border lines: one line per row/column of the border rectangle. Rows and
///   columns that cross the content rectangle are split in two segments that
///   flank the content area, so its edge stays visually distinct.
/// - Grid lines: rows and columns at [`GridGeometry::spacing`] covering the
///   content rectangle, plus a boundary line on the far edge whenever the
///   extent is not a whole multiple of the spacing.
///
/// Generation is a pure function of the stored rectangles and spacing.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    border: Rect,
    rect: Rect,
    spacing: f64,
    border_lines: Vec<Line>,
    grid_lines: Vec<Line>,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl GridGeometry {
    /// Creates an empty grid with [`DEFAULT_GRID_SPACING`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            border: Rect::ZERO,
            rect: Rect::ZERO,
            spacing: DEFAULT_GRID_SPACING,
            border_lines: Vec::new(),
            grid_lines: Vec::new(),
        }
    }

    /// Sets the border and content rectangles.
    ///
    /// Inverted rectangles (min > max) are normalized and rectangles with a
    /// non-finite coordinate are treated as empty. Previously generated
    /// lines are kept until [`GridGeometry::generate_data`] runs again.
    pub fn set_dimensions(&mut self, border: Rect, rect: Rect) {
        self.border = sanitize(border);
        self.rect = sanitize(rect);
    }

    /// Returns the (normalized) border rectangle.
    #[must_use]
    pub fn border(&self) -> Rect {
        self.border
    }

    /// Returns the (normalized) content rectangle.
    #[must_use]
    pub fn rectangle(&self) -> Rect {
        self.rect
    }

    /// Returns the distance between interior lines.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Sets the distance between interior lines.
    ///
    /// Non-finite or non-positive values fall back to [`DEFAULT_GRID_SPACING`].
    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            DEFAULT_GRID_SPACING
        };
    }

    /// Border frame segments produced by the last generation.
    #[must_use]
    pub fn border_lines(&self) -> &[Line] {
        &self.border_lines
    }

    /// Interior grid segments produced by the last generation.
    #[must_use]
    pub fn grid_lines(&self) -> &[Line] {
        &self.grid_lines
    }

    /// Returns `true` when no lines have been generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.border_lines.is_empty() && self.grid_lines.is_empty()
    }

    /// Resets dimensions and spacing and drops all generated lines.
    pub fn clear_data(&mut self) {
        *self = Self::new();
    }

    /// Regenerates border and grid lines from the stored dimensions.
    pub fn generate_data(&mut self) {
        self.border_lines.clear();
        self.grid_lines.clear();

        let border = self.border;
        let rect = self.rect;
        let spacing = self.spacing;

        if has_extent(border) {
            for_each_step(border.y0, border.y1, spacing, |y| {
                if rect.y0 <= y && y <= rect.y1 {
                    self.border_lines
                        .push(Line::new((border.x0, y), (rect.x0, y)));
                    self.border_lines
                        .push(Line::new((rect.x1, y), (border.x1, y)));
                } else {
                    self.border_lines
                        .push(Line::new((border.x0, y), (border.x1, y)));
                }
            });
            for_each_step(border.x0, border.x1, spacing, |x| {
                if rect.x0 <= x && x <= rect.x1 {
                    self.border_lines
                        .push(Line::new((x, border.y0), (x, rect.y0)));
                    self.border_lines
                        .push(Line::new((x, rect.y1), (x, border.y1)));
                } else {
                    self.border_lines
                        .push(Line::new((x, border.y0), (x, border.y1)));
                }
            });
        }

        if has_extent(rect) {
            for_each_step(rect.y0, rect.y1, spacing, |y| {
                self.grid_lines.push(Line::new((rect.x0, y), (rect.x1, y)));
            });
            for_each_step(rect.x0, rect.x1, spacing, |x| {
                self.grid_lines.push(Line::new((x, rect.y0), (x, rect.y1)));
            });

            if !is_multiple_of(rect.height(), spacing) {
                self.grid_lines.push(Line::new(
                    Point::new(rect.x0, rect.y1),
                    Point::new(rect.x1, rect.y1),
                ));
            }
            if !is_multiple_of(rect.width(), spacing) {
                self.grid_lines.push(Line::new(
                    Point::new(rect.x1, rect.y0),
                    Point::new(rect.x1, rect.y1),
                ));
            }
        }
    }
}

fn sanitize(rect: Rect) -> Rect {
    if rect.is_finite() { rect.abs() } else { Rect::ZERO }
}

/// A single row or column still gets lines; only a point does not.
fn has_extent(rect: Rect) -> bool {
    rect.width() > 0.0 || rect.height() > 0.0
}

/// Calls `f` for `start, start + step, ...` up to and including `end`, at
/// most [`MAX_GRID_STEPS`] times.
///
/// Positions are computed from the step index rather than accumulated, so
/// long runs do not drift.
fn for_each_step(start: f64, end: f64, step: f64, mut f: impl FnMut(f64)) {
    let tolerance = step * 1e-9;
    for i in 0..MAX_GRID_STEPS {
        let v = start + f64::from(i) * step;
        if v > end + tolerance {
            break;
        }
        f(v.min(end));
    }
}
