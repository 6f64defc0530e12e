// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lasso state: a free-form polygon traced by the pointer.
//!
//! Points closer than [`LassoState::min_spacing`] to the previously recorded
//! point are skipped, so slow drags do not produce dense runs of vertices.
//!
//! ```
//! use kurbo::Point;
//! use cellview_event_state::lasso::LassoState;
//!
//! let mut lasso = LassoState::new(2.0);
//! lasso.start(Point::new(0.0, 0.0));
//! lasso.push(Point::new(1.0, 0.0)); // too close, skipped
//! lasso.push(Point::new(10.0, 0.0));
//! let polygon = lasso.finish(Point::new(10.0, 10.0));
//! assert_eq!(polygon.len(), 3);
//! ```

use alloc::vec::Vec;

use kurbo::Point;

/// Tracks one lasso gesture, in viewport coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LassoState {
    points: Vec<Point>,
    active: bool,
    min_spacing: f64,
}

impl LassoState {
    /// Creates an idle lasso that records points at least `min_spacing` apart.
    ///
    /// Negative or non-finite spacings record every point.
    #[must_use]
    pub fn new(min_spacing: f64) -> Self {
        Self {
            points: Vec::new(),
            active: false,
            min_spacing: if min_spacing.is_finite() && min_spacing > 0.0 {
                min_spacing
            } else {
                0.0
            },
        }
    }

    /// Minimum distance between recorded points.
    #[must_use]
    pub fn min_spacing(&self) -> f64 {
        self.min_spacing
    }

    /// Starts a new polygon at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.points.clear();
        self.points.push(pos);
        self.active = true;
    }

    /// Appends `pos` if a gesture is active and it is far enough from the last
    /// point. Returns `true` if the point was recorded.
    pub fn push(&mut self, pos: Point) -> bool {
        if !self.active {
            return false;
        }
        if let Some(last) = self.points.last() {
            if last.distance(pos) < self.min_spacing {
                return false;
            }
        }
        self.points.push(pos);
        true
    }

    /// Points recorded so far.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ends the gesture at `pos` and returns the polygon.
    ///
    /// `pos` is always recorded as the closing vertex. Without an active
    /// gesture the polygon is the single point `pos`.
    pub fn finish(&mut self, pos: Point) -> Vec<Point> {
        if !self.active {
            self.points.clear();
        }
        if self.points.last() != Some(&pos) {
            self.points.push(pos);
        }
        self.active = false;
        core::mem::take(&mut self.points)
    }

    /// Drops the gesture.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.active = false;
    }
}
