// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and selection events delivered to nodes.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Point, Rect, Shape};

bitflags::bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT   = 0b0001;
        /// Control key.
        const CONTROL = 0b0010;
        /// Alt / Option key.
        const ALT     = 0b0100;
        /// Meta / Command / Super key.
        const META    = 0b1000;
    }
}

/// Pointer button involved in an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// No button (plain motion).
    #[default]
    None,
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button.
    Middle,
}

/// A pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerEvent {
    /// Pointer position in viewport pixels.
    pub position: Point,
    /// Button pressed or released; [`PointerButton::None`] for motion.
    pub button: PointerButton,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates an event at `position` with no modifiers.
    #[must_use]
    pub fn new(position: Point, button: PointerButton) -> Self {
        Self {
            position,
            button,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the event with `modifiers` set.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Result of delivering an event to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// The node did not handle the event; keep dispatching.
    #[default]
    Continue,
    /// The node handled the event; stop dispatching.
    Consumed,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Consumed`].
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Per-delivery context handed to a node's pointer handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventContext {
    local_position: Point,
    scene_position: Point,
    center_on: Option<Point>,
}

impl EventContext {
    /// Creates a context for one delivery.
    #[must_use]
    pub fn new(local_position: Point, scene_position: Point) -> Self {
        Self {
            local_position,
            scene_position,
            center_on: None,
        }
    }

    /// Pointer position in the node's local coordinates.
    #[must_use]
    pub fn local_position(&self) -> Point {
        self.local_position
    }

    /// Pointer position in scene coordinates.
    #[must_use]
    pub fn scene_position(&self) -> Point {
        self.scene_position
    }

    /// Asks the canvas to center the view on `scene_point` once delivery ends.
    pub fn request_center_on(&mut self, scene_point: Point) {
        self.center_on = Some(scene_point);
    }

    /// Takes the pending center-on request, if any.
    pub fn take_center_on(&mut self) -> Option<Point> {
        self.center_on.take()
    }
}

/// How a selection combines with the existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SelectionMode {
    /// Replace the current selection.
    #[default]
    New,
    /// Add to the current selection.
    Include,
    /// Remove from the current selection.
    Exclude,
}

impl SelectionMode {
    /// Derives the mode from held modifiers.
    ///
    /// Shift includes, Control (or Meta) excludes; Shift wins when both are held.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.contains(Modifiers::SHIFT) {
            Self::Include
        } else if modifiers.intersects(Modifiers::CONTROL | Modifiers::META) {
            Self::Exclude
        } else {
            Self::New
        }
    }
}

/// Region covered by a selection gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectionArea {
    /// Axis-aligned rectangle (rubber band).
    Rect(Rect),
    /// Closed free-form polygon (lasso).
    Lasso(Vec<Point>),
}

impl SelectionArea {
    /// Returns `true` if `p` lies inside the area.
    ///
    /// Rectangles include their edges. Lassos use the non-zero winding rule
    /// and need at least three points to contain anything.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Rect(r) => {
                let r = r.abs();
                p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
            }
            Self::Lasso(points) => points.len() >= 3 && lasso_path(points).contains(p),
        }
    }

    /// Smallest rectangle enclosing the area.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => r.abs(),
            Self::Lasso(points) => {
                let mut iter = points.iter();
                let Some(first) = iter.next() else {
                    return Rect::ZERO;
                };
                iter.fold(Rect::from_points(*first, *first), |acc, p| {
                    acc.union_pt(*p)
                })
            }
        }
    }

    /// Returns `true` if the area covers no surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Rect(r) => r.abs().area() <= 0.0,
            Self::Lasso(points) => points.len() < 3 || lasso_path(points).area() == 0.0,
        }
    }

    /// Maps the area through `transform`.
    ///
    /// Rectangles stay rectangles under axis-aligned transforms and become
    /// four-point lassos otherwise.
    #[must_use]
    pub fn transformed(&self, transform: Affine) -> Self {
        match self {
            Self::Rect(r) => {
                let [_, b, c, _, _, _] = transform.as_coeffs();
                if b == 0.0 && c == 0.0 {
                    Self::Rect(transform.transform_rect_bbox(r.abs()))
                } else {
                    let r = r.abs();
                    Self::Lasso(
                        [
                            Point::new(r.x0, r.y0),
                            Point::new(r.x1, r.y0),
                            Point::new(r.x1, r.y1),
                            Point::new(r.x0, r.y1),
                        ]
                        .iter()
                        .map(|p| transform * *p)
                        .collect(),
                    )
                }
            }
            Self::Lasso(points) => Self::Lasso(points.iter().map(|p| transform * *p).collect()),
        }
    }
}

fn lasso_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

/// A completed selection gesture, in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEvent {
    /// Selected region in scene coordinates.
    pub area: SelectionArea,
    /// Pointer event that completed the gesture.
    pub pointer: PointerEvent,
    /// How the selection combines with the existing one.
    pub mode: SelectionMode,
}

impl SelectionEvent {
    /// Creates a selection event; the mode is derived from the pointer's
    /// modifiers.
    #[must_use]
    pub fn new(area: SelectionArea, pointer: PointerEvent) -> Self {
        Self {
            area,
            pointer,
            mode: SelectionMode::from_modifiers(pointer.modifiers),
        }
    }

    /// Returns the event with its area mapped into a node's local space.
    ///
    /// `local_to_scene` is the node's scene placement (for scene-anchored
    /// nodes, its local transform). Non-invertible transforms leave the area
    /// unchanged.
    #[must_use]
    pub fn to_local(&self, local_to_scene: Affine) -> Self {
        let area = if local_to_scene.determinant() == 0.0 {
            self.area.clone()
        } else {
            self.area.transformed(local_to_scene.inverse())
        };
        Self {
            area,
            pointer: self.pointer,
            mode: self.mode,
        }
    }
}
