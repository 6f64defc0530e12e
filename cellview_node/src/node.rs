// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use cellview_view2d::ViewSnapshot;

use crate::event::{EventContext, Outcome, PointerEvent, SelectionEvent};
use crate::state::NodeState;
use crate::surface::{DrawError, Surface};
use crate::transform::compose_node_transform;

/// A drawable unit on the canvas.
///
/// Implementors own a [`NodeState`] and describe their geometry in node-local
/// coordinates; the canvas places them with [`compose_node_transform`] and
/// gates every call on the node's [`NodeFlags`](crate::NodeFlags).
///
/// Only [`RenderNode::state`], [`RenderNode::state_mut`],
/// [`RenderNode::bounding_rect`] and [`RenderNode::draw`] are required. The
/// event hooks default to doing nothing and returning [`Outcome::Continue`].
pub trait RenderNode {
    /// Shared node bookkeeping.
    fn state(&self) -> &NodeState;

    /// Mutable access to the shared node bookkeeping.
    fn state_mut(&mut self) -> &mut NodeState;

    /// Bounds in node-local coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Draws the node using the surface's current transform.
    ///
    /// An error means nothing (or only part) of the node was drawn; the canvas
    /// logs it and moves on to the next node.
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError>;

    /// Local hit test used for pointer routing.
    ///
    /// Defaults to the bounding rectangle, edges included.
    fn contains(&self, local: Point) -> bool {
        let r = self.bounding_rect().abs();
        local.x >= r.x0 && local.x <= r.x1 && local.y >= r.y0 && local.y <= r.y1
    }

    /// Receives a completed rubber-band or lasso selection, in scene space.
    ///
    /// Only called for nodes flagged
    /// [`NodeFlags::RUBBER_BANDABLE`](crate::NodeFlags::RUBBER_BANDABLE).
    /// Applying the same event twice must leave the node unchanged.
    fn set_selection_area(&mut self, event: &SelectionEvent) {
        let _ = event;
    }

    /// Pointer moved over the node.
    fn pointer_moved(&mut self, event: &PointerEvent, ctx: &mut EventContext) -> Outcome {
        let _ = (event, ctx);
        Outcome::Continue
    }

    /// Pointer button pressed over the node.
    fn pointer_pressed(&mut self, event: &PointerEvent, ctx: &mut EventContext) -> Outcome {
        let _ = (event, ctx);
        Outcome::Continue
    }

    /// Pointer button released over the node.
    fn pointer_released(&mut self, event: &PointerEvent, ctx: &mut EventContext) -> Outcome {
        let _ = (event, ctx);
        Outcome::Continue
    }

    /// The scene, viewport, zoom or focus center changed.
    fn view_changed(&mut self, view: &ViewSnapshot) {
        let _ = view;
    }
}

/// Node-local → viewport transform of `node` under `view`.
#[must_use]
pub fn node_transform(node: &dyn RenderNode, view: &ViewSnapshot) -> Affine {
    compose_node_transform(
        node.state(),
        node.bounding_rect(),
        view.viewport,
        view.scene_transform,
    )
}

/// Maps a viewport point into `node`'s local space and hit-tests it.
///
/// Returns the local point on a hit. Nodes whose placement is not invertible
/// never hit.
#[must_use]
pub fn hit_test(node: &dyn RenderNode, view: &ViewSnapshot, view_point: Point) -> Option<Point> {
    let placement = node_transform(node, view);
    if placement.determinant() == 0.0 {
        return None;
    }
    let local = placement.inverse() * view_point;
    node.contains(local).then_some(local)
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect};

    use cellview_view2d::{SceneView, ViewConfig};

    use super::{RenderNode, hit_test, node_transform};
    use crate::{Anchor, DrawError, NodeState, Surface};

    struct Square {
        state: NodeState,
    }

    impl RenderNode for Square {
        fn state(&self) -> &NodeState {
            &self.state
        }
        fn state_mut(&mut self) -> &mut NodeState {
            &mut self.state
        }
        fn bounding_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 10.0, 10.0)
        }
        fn draw(&self, _surface: &mut dyn Surface) -> Result<(), DrawError> {
            Ok(())
        }
    }

    fn view() -> SceneView {
        // Scene and viewport coincide at zoom 1.
        SceneView::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
        )
    }

    #[test]
    fn scene_node_hit_test_uses_scene_transform() {
        let mut node = Square {
            state: NodeState::new(),
        };
        node.state_mut().set_transform(Affine::translate((20.0, 20.0)));
        let snap = view().snapshot();
        assert_eq!(hit_test(&node, &snap, Point::new(25.0, 25.0)), Some(Point::new(5.0, 5.0)));
        assert_eq!(hit_test(&node, &snap, Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn anchored_node_ignores_zoom() {
        let mut node = Square {
            state: NodeState::new(),
        };
        node.state_mut().set_anchor(Anchor::SouthEast);
        let mut v = view();
        v.set_config(ViewConfig {
            min_visible_scene_units: 1.0,
            ..ViewConfig::default()
        });
        v.set_zoom(4.0);
        let snap = v.snapshot();
        let t = node_transform(&node, &snap);
        assert_eq!(t * Point::new(10.0, 10.0), Point::new(100.0, 100.0));
        assert!(hit_test(&node, &snap, Point::new(95.0, 95.0)).is_some());
        assert!(hit_test(&node, &snap, Point::new(50.0, 50.0)).is_none());
    }
}
