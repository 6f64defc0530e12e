// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;

use cellview_geometry::{AspectRatio, clamp_size};
use cellview_node::{
    Anchor, DrawError, EventContext, NodeFlags, NodeState, Outcome, PointerButton, PointerEvent,
    RenderNode, Surface, ViewSnapshot,
};

/// Largest minimap extent, in viewport pixels.
pub const MINIMAP_MAX_SIZE: Size = Size::new(100.0, 100.0);

/// Smallest minimap extent, in viewport pixels.
pub const MINIMAP_MIN_SIZE: Size = Size::new(10.0, 10.0);

const MINIMAP_MARGIN: f64 = 10.0;

/// Overview of the whole scene with the visible region outlined.
///
/// The minimap tracks the canvas through [`RenderNode::view_changed`].
/// Pressing or dragging on it asks the canvas to center on the matching
/// scene point.
#[derive(Clone, Debug)]
pub struct MiniMapNode {
    state: NodeState,
    scene: Rect,
    visible: Rect,
    size: Size,
    scene_color: Color,
    view_color: Color,
    dragging: bool,
}

impl Default for MiniMapNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MiniMapNode {
    /// Creates a minimap in the bottom-right corner.
    #[must_use]
    pub fn new() -> Self {
        let mut state = NodeState::with_flags(NodeFlags::default() | NodeFlags::SELECTABLE);
        state.set_anchor(Anchor::SouthEast);
        state.set_transform(Affine::translate((-MINIMAP_MARGIN, -MINIMAP_MARGIN)));
        Self {
            state,
            scene: Rect::ZERO,
            visible: Rect::ZERO,
            size: MINIMAP_MIN_SIZE,
            scene_color: css::DARK_MAGENTA,
            view_color: css::WHITE,
            dragging: false,
        }
    }

    /// Scene rectangle shown.
    #[must_use]
    pub fn scene(&self) -> Rect {
        self.scene
    }

    /// Visible scene region outlined on the map.
    #[must_use]
    pub fn visible_region(&self) -> Rect {
        self.visible
    }

    /// Minimap size in viewport pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the fill color of the scene area.
    pub fn set_scene_color(&mut self, color: Color) {
        if self.scene_color != color {
            self.scene_color = color;
            self.state.request_update();
        }
    }

    /// Sets the outline color of the visible region.
    pub fn set_view_color(&mut self, color: Color) {
        if self.view_color != color {
            self.view_color = color;
            self.state.request_update();
        }
    }

    /// Scene → minimap-local transform.
    #[must_use]
    pub fn scene_to_local(&self) -> Affine {
        let (w, h) = (self.scene.width(), self.scene.height());
        if w <= 0.0 || h <= 0.0 {
            return Affine::IDENTITY;
        }
        Affine::scale_non_uniform(self.size.width / w, self.size.height / h)
            * Affine::translate(-self.scene.origin().to_vec2())
    }

    /// Minimap-local point → scene point, clamped to the scene.
    #[must_use]
    pub fn local_to_scene(&self, local: Point) -> Point {
        let forward = self.scene_to_local();
        if forward.determinant() == 0.0 {
            return self.scene.center();
        }
        let p = forward.inverse() * local;
        Point::new(
            p.x.clamp(self.scene.x0, self.scene.x1),
            p.y.clamp(self.scene.y0, self.scene.y1),
        )
    }

    fn navigate(&self, ctx: &mut EventContext) {
        let target = self.local_to_scene(ctx.local_position());
        log::trace!("minimap center on ({}, {})", target.x, target.y);
        ctx.request_center_on(target);
    }
}

impl RenderNode for MiniMapNode {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn bounding_rect(&self) -> Rect {
        self.size.to_rect()
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if self.scene.area() <= 0.0 {
            return Err(DrawError::NotReady);
        }
        let bounds = self.bounding_rect();
        surface.fill_rect(bounds, self.scene_color.with_alpha(0.5));
        surface.stroke_rect(bounds, self.scene_color, 1.0);
        let view = self
            .scene_to_local()
            .transform_rect_bbox(self.visible)
            .intersect(bounds);
        surface.stroke_rect(view, self.view_color, 1.0);
        Ok(())
    }

    fn pointer_pressed(&mut self, event: &PointerEvent, ctx: &mut EventContext) -> Outcome {
        if event.button != PointerButton::Primary {
            return Outcome::Continue;
        }
        self.dragging = true;
        self.navigate(ctx);
        Outcome::Consumed
    }

    fn pointer_moved(&mut self, _: &PointerEvent, ctx: &mut EventContext) -> Outcome {
        if !self.dragging {
            return Outcome::Continue;
        }
        self.navigate(ctx);
        Outcome::Consumed
    }

    fn pointer_released(&mut self, _: &PointerEvent, _: &mut EventContext) -> Outcome {
        if core::mem::take(&mut self.dragging) {
            Outcome::Consumed
        } else {
            Outcome::Continue
        }
    }

    fn view_changed(&mut self, view: &ViewSnapshot) {
        let size = clamp_size(
            view.scene.size(),
            MINIMAP_MIN_SIZE,
            MINIMAP_MAX_SIZE,
            AspectRatio::Keep,
        );
        if self.scene != view.scene || self.visible != view.visible_scene_rect || self.size != size
        {
            self.scene = view.scene;
            self.visible = view.visible_scene_rect;
            self.size = size;
            self.state.request_update();
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use cellview_node::{
        EventContext, NodeFlags, Outcome, PointerButton, PointerEvent, RenderNode, hit_test,
    };
    use cellview_view2d::SceneView;

    use super::MiniMapNode;
    use crate::testing::{Op, Recorder};

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    fn close_rect(a: Rect, b: Rect) -> bool {
        close(a.origin(), b.origin()) && close(Point::new(a.x1, a.y1), Point::new(b.x1, b.y1))
    }

    fn tracked(zoom: f64) -> (MiniMapNode, SceneView) {
        let mut view = SceneView::new(
            Rect::new(0.0, 0.0, 1000.0, 500.0),
            Rect::new(0.0, 0.0, 400.0, 400.0),
        );
        view.set_zoom(zoom);
        let mut map = MiniMapNode::new();
        map.view_changed(&view.snapshot());
        (map, view)
    }

    #[test]
    fn size_keeps_scene_aspect() {
        let (map, _) = tracked(1.0);
        assert_eq!(map.size(), Size::new(100.0, 50.0));
        assert!(map.state().has(NodeFlags::SELECTABLE));
    }

    #[test]
    fn outlines_visible_region() {
        let (map, _) = tracked(2.0);
        assert!(close_rect(
            map.visible_region(),
            Rect::new(400.0, 150.0, 600.0, 350.0)
        ));
        let mut surface = Recorder::default();
        map.draw(&mut surface).expect("scene known");
        let outline = Rect::new(40.0, 15.0, 60.0, 35.0);
        assert!(
            surface
                .ops
                .iter()
                .any(|op| matches!(op, Op::StrokeRect(r, _) if close_rect(*r, outline)))
        );
    }

    #[test]
    fn press_requests_center_on() {
        let (mut map, view) = tracked(2.0);
        let snapshot = view.snapshot();
        // Bottom-right corner, inset by the margin.
        let local = hit_test(&map, &snapshot, Point::new(365.0, 365.0)).expect("inside the map");
        assert_eq!(local, Point::new(75.0, 25.0));

        let event = PointerEvent::new(Point::new(365.0, 365.0), PointerButton::Primary);
        let mut ctx = EventContext::new(local, view.view_to_scene_point(event.position));
        assert_eq!(map.pointer_pressed(&event, &mut ctx), Outcome::Consumed);
        let target = ctx.take_center_on().expect("press navigates");
        assert!(close(target, Point::new(750.0, 250.0)));

        let mut ctx = EventContext::new(Point::new(100.0, 50.0), Point::ZERO);
        assert_eq!(map.pointer_moved(&event, &mut ctx), Outcome::Consumed);
        let target = ctx.take_center_on().expect("drag navigates");
        assert!(close(target, Point::new(1000.0, 500.0)));

        assert_eq!(map.pointer_released(&event, &mut ctx), Outcome::Consumed);
        assert_eq!(map.pointer_moved(&event, &mut ctx), Outcome::Continue);
    }

    #[test]
    fn unknown_scene_is_not_ready() {
        let map = MiniMapNode::new();
        let mut surface = Recorder::default();
        assert!(map.draw(&mut surface).is_err());
    }
}
