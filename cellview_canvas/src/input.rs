// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use cellview_node::PointerEvent;

/// Keys the canvas reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the view left.
    ArrowLeft,
    /// Move the view right.
    ArrowRight,
    /// Move the view up.
    ArrowUp,
    /// Move the view down.
    ArrowDown,
    /// Zoom in one step (usually `+`).
    ZoomIn,
    /// Zoom out one step (usually `-`).
    ZoomOut,
    /// Cancel the gesture in progress.
    Escape,
}

/// Input delivered to [`CanvasView::handle_input`](crate::CanvasView::handle_input).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down.
    PointerDown(PointerEvent),
    /// The pointer moved.
    PointerMove(PointerEvent),
    /// A pointer button went up.
    PointerUp(PointerEvent),
    /// Wheel rotation. A positive `delta.y` (wheel pushed away from the user)
    /// zooms in, a negative one zooms out.
    Wheel {
        /// Pointer position in viewport pixels.
        position: Point,
        /// Scroll delta; only the sign of `y` is used.
        delta: Vec2,
    },
    /// A key was pressed.
    Key(Key),
}

/// Which gesture the canvas is tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No gesture.
    #[default]
    Idle,
    /// Dragging the view.
    Panning,
    /// Spanning a rectangular selection.
    RubberBanding,
    /// Tracing a lasso selection.
    Lassoing,
}

/// Which node handler a pointer dispatch targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// [`RenderNode::pointer_moved`](cellview_node::RenderNode::pointer_moved).
    Moved,
    /// [`RenderNode::pointer_pressed`](cellview_node::RenderNode::pointer_pressed).
    Pressed,
    /// [`RenderNode::pointer_released`](cellview_node::RenderNode::pointer_released).
    Released,
}
