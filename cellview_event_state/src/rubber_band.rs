// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band state: a rectangle spanned between the press point and the
//! current pointer position.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use cellview_event_state::rubber_band::RubberBandState;
//!
//! let mut band = RubberBandState::default();
//! band.start(Point::new(30.0, 30.0));
//! band.update(Point::new(10.0, 50.0));
//! assert_eq!(band.rect(), Some(Rect::new(10.0, 30.0, 30.0, 50.0)));
//! assert_eq!(band.finish(Point::new(10.0, 50.0)), Rect::new(10.0, 30.0, 30.0, 50.0));
//! ```

use kurbo::{Point, Rect};

/// Tracks one rubber-band gesture, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RubberBandState {
    origin: Option<Point>,
    current: Point,
}

impl RubberBandState {
    /// Anchors a new band at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.current = pos;
    }

    /// Moves the free corner to `pos`; returns the updated rectangle.
    pub fn update(&mut self, pos: Point) -> Option<Rect> {
        self.origin?;
        self.current = pos;
        self.rect()
    }

    /// Current normalized rectangle, if a band is active.
    #[must_use]
    pub fn rect(&self) -> Option<Rect> {
        self.origin.map(|o| Rect::from_points(o, self.current))
    }

    /// Returns `true` while a band is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Ends the gesture at `pos` and returns the final rectangle.
    ///
    /// Without an active band the result is the zero-area rectangle at `pos`.
    pub fn finish(&mut self, pos: Point) -> Rect {
        let origin = self.origin.unwrap_or(pos);
        self.cancel();
        Rect::from_points(origin, pos)
    }

    /// Drops the gesture without producing a rectangle.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::RubberBandState;

    #[test]
    fn idle_band_has_no_rect() {
        let mut band = RubberBandState::default();
        assert!(!band.is_active());
        assert_eq!(band.update(Point::new(5.0, 5.0)), None);
        assert_eq!(band.rect(), None);
    }

    #[test]
    fn band_normalizes_any_drag_direction() {
        let mut band = RubberBandState::default();
        band.start(Point::new(20.0, 20.0));
        assert_eq!(
            band.update(Point::new(0.0, 40.0)),
            Some(Rect::new(0.0, 20.0, 20.0, 40.0))
        );
        assert_eq!(
            band.update(Point::new(25.0, 5.0)),
            Some(Rect::new(20.0, 5.0, 25.0, 20.0))
        );
    }

    #[test]
    fn finish_without_start_is_zero_area() {
        let mut band = RubberBandState::default();
        let rect = band.finish(Point::new(7.0, 8.0));
        assert_eq!(rect, Rect::new(7.0, 8.0, 7.0, 8.0));
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn cancel_discards_the_band() {
        let mut band = RubberBandState::default();
        band.start(Point::new(1.0, 1.0));
        band.cancel();
        assert!(!band.is_active());
    }
}
