// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state for panning: per-move deltas and the total offset of a drag.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer press.
//! 2) On each move, [`DragState::update`] returns the delta since the previous
//!    position; feed it to the view's pan operation.
//! 3) [`DragState::end`] on release returns the total offset and resets.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use cellview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(15.0, 30.0)), Some(Vec2::new(0.0, 5.0)));
//! assert_eq!(drag.end(), Some(Vec2::new(5.0, 10.0)));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    start: Option<Point>,
    last: Point,
}

impl DragState {
    /// Starts a drag at `pos`, discarding any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = pos;
    }

    /// Moves the drag to `pos` and returns the delta since the last position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start?;
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    /// Offset from the drag start to `pos`, if dragging.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    /// Position the drag started at, if dragging.
    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        self.start
    }

    /// Ends the drag, returning the offset from start to the last position.
    pub fn end(&mut self) -> Option<Vec2> {
        let total = self.total_offset(self.last);
        *self = Self::default();
        total
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}
