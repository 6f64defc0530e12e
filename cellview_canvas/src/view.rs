// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Rect, Vec2};
use log::{debug, trace, warn};
use peniko::ImageData;

use cellview_event_state::drag::DragState;
use cellview_event_state::lasso::LassoState;
use cellview_event_state::rubber_band::RubberBandState;
use cellview_node::{
    CaptureSurface, DrawError, EventContext, NodeFlags, Outcome, PointerButton, PointerEvent,
    RepaintSignal, SelectionArea, SelectionEvent, Surface, node_transform, viewport_projection,
};
use cellview_view2d::{SceneView, ViewSnapshot};

use crate::config::{CanvasConfig, SelectionTool};
use crate::dispatch::{self, NodeFilter, NodeHandle};
use crate::input::{InputEvent, InteractionState, Key, PointerPhase};

type SelectionCallback = Box<dyn FnMut(&SelectionEvent)>;

/// The canvas: an ordered stack of nodes over a pannable, zoomable scene.
///
/// `CanvasView` owns the node registry (paint order = insertion order, last
/// added on top), the [`SceneView`] and the gesture state machine. Hosts
/// feed it input through [`CanvasView::handle_input`], poll
/// [`CanvasView::take_repaint_request`] once per frame and call
/// [`CanvasView::render`] when it returns `true`.
///
/// Nodes are shared through [`NodeHandle`]s, so the canvas is not `Send`.
pub struct CanvasView {
    view: SceneView,
    nodes: Vec<NodeHandle>,
    config: CanvasConfig,
    tool: Option<SelectionTool>,
    interaction: InteractionState,
    drag: DragState,
    band: RubberBandState,
    lasso: LassoState,
    pointer: Point,
    captured: Option<NodeHandle>,
    repaint: RepaintSignal,
    on_selection: Option<SelectionCallback>,
}

impl fmt::Debug for CanvasView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasView")
            .field("view", &self.view)
            .field("nodes", &self.nodes.len())
            .field("config", &self.config)
            .field("tool", &self.tool)
            .field("interaction", &self.interaction)
            .field("repaint_pending", &self.repaint.is_pending())
            .finish_non_exhaustive()
    }
}

impl CanvasView {
    /// Creates a canvas showing `scene` in `viewport` with default settings.
    #[must_use]
    pub fn new(scene: Rect, viewport: Rect) -> Self {
        Self::build(scene, viewport, CanvasConfig::default())
    }

    /// Creates a canvas with host-supplied settings.
    ///
    /// An invalid configuration is logged and replaced by the defaults.
    #[must_use]
    pub fn with_config(scene: Rect, viewport: Rect, config: CanvasConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("invalid canvas configuration ({err}); using defaults");
                CanvasConfig::default()
            }
        };
        Self::build(scene, viewport, config)
    }

    fn build(scene: Rect, viewport: Rect, config: CanvasConfig) -> Self {
        let mut view = SceneView::new(scene, viewport);
        view.set_config(config.view);
        view.set_default_panning_and_zooming();
        let repaint = RepaintSignal::new();
        repaint.request();
        Self {
            view,
            nodes: Vec::new(),
            config,
            tool: None,
            interaction: InteractionState::Idle,
            drag: DragState::default(),
            band: RubberBandState::default(),
            lasso: LassoState::new(config.lasso_min_spacing),
            pointer: Point::ZERO,
            captured: None,
            repaint,
            on_selection: None,
        }
    }

    /// Active settings.
    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// The scene/viewport model.
    #[must_use]
    pub fn view(&self) -> &SceneView {
        &self.view
    }

    /// Snapshot of the scene/viewport state, as pushed to nodes.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.view.snapshot()
    }

    // --- nodes -------------------------------------------------------------

    /// Appends `node` on top of the stack.
    ///
    /// The node starts reporting updates to this canvas and immediately
    /// receives the current view. Adding a node that is already registered
    /// is a no-op; returns `true` if the node was added.
    pub fn add_rendering_node(&mut self, node: NodeHandle) -> bool {
        if self.position_of(&node).is_some() {
            trace!("node already registered");
            return false;
        }
        match node.try_borrow_mut() {
            Ok(mut n) => {
                n.state_mut().attach_repaint(self.repaint.clone());
                n.view_changed(&self.view.snapshot());
            }
            Err(_) => {
                warn!("cannot register a node that is currently borrowed");
                return false;
            }
        }
        self.nodes.push(node);
        debug!("added rendering node, {} total", self.nodes.len());
        self.repaint.request();
        true
    }

    /// Removes `node`; removing an unknown node is a no-op.
    ///
    /// Returns `true` if the node was removed.
    pub fn remove_rendering_node(&mut self, node: &NodeHandle) -> bool {
        let Some(index) = self.position_of(node) else {
            return false;
        };
        let removed = self.nodes.remove(index);
        if self
            .captured
            .as_ref()
            .is_some_and(|captured| Rc::ptr_eq(captured, &removed))
        {
            self.captured = None;
        }
        if let Ok(mut n) = removed.try_borrow_mut() {
            n.state_mut().detach_repaint();
        }
        debug!("removed rendering node, {} left", self.nodes.len());
        self.repaint.request();
        true
    }

    /// Registered nodes in paint order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeHandle] {
        &self.nodes
    }

    fn position_of(&self, node: &NodeHandle) -> Option<usize> {
        self.nodes.iter().position(|n| Rc::ptr_eq(n, node))
    }

    // --- scene and viewport ------------------------------------------------

    /// Scene rectangle.
    #[must_use]
    pub fn scene(&self) -> Rect {
        self.view.scene()
    }

    /// Sets the scene; zoom limits and the focus center are re-clamped.
    pub fn set_scene(&mut self, scene: Rect) {
        self.view.set_scene(scene);
        self.view_changed();
    }

    /// Viewport rectangle in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.view.viewport()
    }

    /// Sets the viewport (on resize); zoom limits and focus are re-clamped.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.view.set_viewport(viewport);
        self.view_changed();
    }

    /// Scene → viewport transformation.
    #[must_use]
    pub fn scene_transformations(&self) -> Affine {
        self.view.scene_transform()
    }

    /// Region the focus center may occupy.
    #[must_use]
    pub fn allowed_center_points(&self) -> Rect {
        self.view.allowed_center_points()
    }

    // --- zoom and pan ------------------------------------------------------

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.view.zoom()
    }

    /// Zoom at which the scene fits the viewport.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.view.min_zoom()
    }

    /// Largest allowed zoom.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.view.max_zoom()
    }

    /// Clamps a zoom factor into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp_zoom_factor_to_allowed_range(&self, zoom: f64) -> f64 {
        self.view.clamp_zoom(zoom)
    }

    /// Sets the zoom factor (clamped). Returns `true` if it changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = self.view.set_zoom(zoom);
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Zooms in one step. Returns `true` if the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        let changed = self.view.zoom_in();
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Zooms out one step. Returns `true` if the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.view.zoom_out();
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Scene point at the viewport center.
    #[must_use]
    pub fn focus_center(&self) -> Point {
        self.view.focus_center()
    }

    /// Centers the view on `scene_point` (clamped). Returns `true` if the
    /// focus center moved.
    pub fn center_on(&mut self, scene_point: Point) -> bool {
        let changed = self.view.center_on(scene_point);
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Pans by `delta` viewport pixels. Returns `true` if the view moved.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        let changed = self.view.pan_by_view(delta);
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Sets the view rotation in radians. Returns `true` if it changed.
    pub fn set_rotation(&mut self, radians: f64) -> bool {
        let changed = self.view.set_rotation(radians);
        if changed {
            self.view_changed();
        }
        changed
    }

    /// Fits the scene into the viewport and centers on it.
    pub fn set_default_panning_and_zooming(&mut self) {
        self.view.set_default_panning_and_zooming();
        self.view_changed();
    }

    fn view_changed(&mut self) {
        let snapshot = self.view.snapshot();
        trace!(
            "view changed: zoom {} focus ({}, {})",
            snapshot.zoom, snapshot.focus_center.x, snapshot.focus_center.y
        );
        for handle in &self.nodes {
            if let Ok(mut node) = handle.try_borrow_mut() {
                node.view_changed(&snapshot);
            }
        }
        self.repaint.request();
    }

    // --- selection ---------------------------------------------------------

    /// Active selection tool; `None` means pointer drags pan the view.
    #[must_use]
    pub fn selection_mode(&self) -> Option<SelectionTool> {
        self.tool
    }

    /// Enables a selection tool, or panning with `None`.
    ///
    /// A gesture in progress is cancelled.
    pub fn set_selection_mode(&mut self, tool: Option<SelectionTool>) {
        if self.tool != tool {
            debug!("selection mode {:?} -> {:?}", self.tool, tool);
            self.cancel_gesture();
            self.tool = tool;
        }
    }

    /// Installs the host's "selection updated" callback, invoked once per
    /// completed selection after every node has received it.
    pub fn set_selection_callback(&mut self, callback: impl FnMut(&SelectionEvent) + 'static) {
        self.on_selection = Some(Box::new(callback));
    }

    /// Delivers `event` to every [`NodeFlags::RUBBER_BANDABLE`] node in paint
    /// order, then notifies the host.
    pub fn send_selection_to_nodes(&mut self, event: &SelectionEvent) {
        let mut delivered = 0_usize;
        for handle in &self.nodes {
            match handle.try_borrow_mut() {
                Ok(mut node) => {
                    if node.state().has(NodeFlags::RUBBER_BANDABLE) {
                        node.set_selection_area(event);
                        delivered += 1;
                    }
                }
                Err(_) => warn!("skipping borrowed node during selection"),
            }
        }
        debug!("selection {:?} delivered to {delivered} node(s)", event.mode);
        if let Some(callback) = self.on_selection.as_mut() {
            callback(event);
        }
        self.repaint.request();
    }

    /// Gesture currently being tracked.
    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Outline of the selection gesture in progress, in viewport pixels.
    #[must_use]
    pub fn gesture_outline(&self) -> Option<SelectionArea> {
        match self.interaction {
            InteractionState::RubberBanding => self.band.rect().map(SelectionArea::Rect),
            InteractionState::Lassoing => {
                let mut points = self.lasso.points().to_vec();
                if points.last() != Some(&self.pointer) {
                    points.push(self.pointer);
                }
                Some(SelectionArea::Lasso(points))
            }
            InteractionState::Idle | InteractionState::Panning => None,
        }
    }

    // --- input -------------------------------------------------------------

    /// Feeds one input event through the interaction state machine.
    ///
    /// Returns `true` if the event was handled.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(e) => self.pointer_down(e),
            InputEvent::PointerMove(e) => self.pointer_move(e),
            InputEvent::PointerUp(e) => self.pointer_up(e),
            InputEvent::Wheel { delta, .. } => {
                if delta.y > 0.0 {
                    self.zoom_in()
                } else if delta.y < 0.0 {
                    self.zoom_out()
                } else {
                    false
                }
            }
            InputEvent::Key(key) => self.key(key),
        }
    }

    fn pointer_down(&mut self, e: PointerEvent) -> bool {
        self.pointer = e.position;
        if self.interaction != InteractionState::Idle {
            return false;
        }
        match (self.tool, e.button) {
            (Some(SelectionTool::Rectangle), PointerButton::Primary) => {
                self.band.start(e.position);
                self.transition(InteractionState::RubberBanding);
                true
            }
            (Some(SelectionTool::Lasso), PointerButton::Primary) => {
                self.lasso.start(e.position);
                self.transition(InteractionState::Lassoing);
                true
            }
            (Some(_), _) => false,
            (None, button) => {
                let candidates = self.candidates(&e, &dispatch::default_filter);
                if let Some(consumer) = self.deliver(&e, PointerPhase::Pressed, &candidates) {
                    // The consumer keeps receiving moves until the release.
                    self.captured = Some(consumer);
                    return true;
                }
                if button == PointerButton::Primary {
                    self.drag.start(e.position);
                    self.transition(InteractionState::Panning);
                    return true;
                }
                false
            }
        }
    }

    fn pointer_move(&mut self, e: PointerEvent) -> bool {
        self.pointer = e.position;
        match self.interaction {
            InteractionState::Panning => match self.drag.update(e.position) {
                Some(delta) => self.pan_by(delta),
                None => false,
            },
            InteractionState::RubberBanding => {
                self.band.update(e.position);
                self.repaint.request();
                true
            }
            InteractionState::Lassoing => {
                self.lasso.push(e.position);
                self.repaint.request();
                true
            }
            InteractionState::Idle => match self.captured.clone() {
                Some(captured) => self.deliver(&e, PointerPhase::Moved, &[captured]).is_some(),
                None => self.send_pointer_event_to_nodes(
                    &e,
                    PointerPhase::Moved,
                    &dispatch::default_filter,
                ),
            },
        }
    }

    fn pointer_up(&mut self, e: PointerEvent) -> bool {
        self.pointer = e.position;
        match self.interaction {
            InteractionState::Panning => {
                if let Some(total) = self.drag.end() {
                    trace!("pan finished after ({}, {})", total.x, total.y);
                }
                self.transition(InteractionState::Idle);
                true
            }
            InteractionState::RubberBanding => {
                let rect = self.band.finish(e.position);
                self.transition(InteractionState::Idle);
                self.finish_selection(SelectionArea::Rect(rect), e);
                true
            }
            InteractionState::Lassoing => {
                let points = self.lasso.finish(e.position);
                self.transition(InteractionState::Idle);
                self.finish_selection(SelectionArea::Lasso(points), e);
                true
            }
            InteractionState::Idle => {
                if let Some(captured) = self.captured.take() {
                    self.deliver(&e, PointerPhase::Released, &[captured]);
                    return true;
                }
                if self.tool.is_some() && e.button == PointerButton::Primary {
                    // Release without a press: report an empty selection at the pointer.
                    let rect = self.band.finish(e.position);
                    self.finish_selection(SelectionArea::Rect(rect), e);
                    return true;
                }
                self.send_pointer_event_to_nodes(
                    &e,
                    PointerPhase::Released,
                    &dispatch::default_filter,
                )
            }
        }
    }

    fn finish_selection(&mut self, viewport_area: SelectionArea, pointer: PointerEvent) {
        let area = viewport_area.transformed(self.view.inverse_scene_transform());
        let event = SelectionEvent::new(area, pointer);
        self.send_selection_to_nodes(&event);
    }

    fn key(&mut self, key: Key) -> bool {
        let step = self.config.key_pan_step;
        match key {
            // Arrow keys move the view; the content moves the other way.
            Key::ArrowLeft => self.pan_by(Vec2::new(step, 0.0)),
            Key::ArrowRight => self.pan_by(Vec2::new(-step, 0.0)),
            Key::ArrowUp => self.pan_by(Vec2::new(0.0, step)),
            Key::ArrowDown => self.pan_by(Vec2::new(0.0, -step)),
            Key::ZoomIn => self.zoom_in(),
            Key::ZoomOut => self.zoom_out(),
            Key::Escape => {
                let active = self.interaction != InteractionState::Idle;
                self.cancel_gesture();
                active
            }
        }
    }

    fn cancel_gesture(&mut self) {
        let was_selecting = matches!(
            self.interaction,
            InteractionState::RubberBanding | InteractionState::Lassoing
        );
        self.drag.end();
        self.band.cancel();
        self.lasso.cancel();
        self.transition(InteractionState::Idle);
        if was_selecting {
            self.repaint.request();
        }
    }

    fn transition(&mut self, next: InteractionState) {
        if self.interaction != next {
            debug!("interaction {:?} -> {:?}", self.interaction, next);
            self.interaction = next;
        }
    }

    /// Delivers a pointer event to the nodes accepted by `filter`, topmost
    /// first, until one consumes it.
    ///
    /// Center-on requests made by handlers are applied after delivery.
    /// Returns `true` if a node consumed the event.
    pub fn send_pointer_event_to_nodes(
        &mut self,
        event: &PointerEvent,
        phase: PointerPhase,
        filter: &NodeFilter,
    ) -> bool {
        let candidates = self.candidates(event, filter);
        self.deliver(event, phase, &candidates).is_some()
    }

    fn candidates(&self, event: &PointerEvent, filter: &NodeFilter) -> dispatch::Candidates {
        let snapshot = self.view.snapshot();
        dispatch::candidates(&self.nodes, &snapshot, event.position, filter)
    }

    /// Runs `event` through `candidates` and returns the consuming node.
    fn deliver(
        &mut self,
        event: &PointerEvent,
        phase: PointerPhase,
        candidates: &[NodeHandle],
    ) -> Option<NodeHandle> {
        let snapshot = self.view.snapshot();
        let scene_position = self.view.view_to_scene_point(event.position);
        trace!(
            "{phase:?} at ({}, {}): {} candidate(s)",
            event.position.x,
            event.position.y,
            candidates.len()
        );

        let mut center_on = None;
        let consumer = dispatch::run(candidates, &mut center_on, |handle, center_on| {
            let Ok(mut node) = handle.try_borrow_mut() else {
                return Outcome::Continue;
            };
            let placement = node_transform(&*node, &snapshot);
            let local = if placement.determinant() == 0.0 {
                event.position
            } else {
                placement.inverse() * event.position
            };
            let mut ctx = EventContext::new(local, scene_position);
            let outcome = match phase {
                PointerPhase::Moved => node.pointer_moved(event, &mut ctx),
                PointerPhase::Pressed => node.pointer_pressed(event, &mut ctx),
                PointerPhase::Released => node.pointer_released(event, &mut ctx),
            };
            if let Some(p) = ctx.take_center_on() {
                *center_on = Some(p);
            }
            outcome
        });
        if let Some(index) = consumer {
            trace!("{phase:?} consumed by candidate {index}");
        }
        if let Some(p) = center_on {
            self.center_on(p);
        }
        consumer.and_then(|index| candidates.get(index).cloned())
    }

    // --- rendering ---------------------------------------------------------

    /// Draws every visible node back to front, then the selection overlay.
    ///
    /// Each node's projection and model-view are recorded before its draw
    /// call. Draw errors are logged and the node is skipped.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        let snapshot = self.view.snapshot();
        let projection = viewport_projection(snapshot.viewport);
        surface.set_transform(Affine::IDENTITY);
        surface.clear(self.config.background);

        for (index, handle) in self.nodes.iter().enumerate() {
            let Ok(mut node) = handle.try_borrow_mut() else {
                warn!("node {index} is borrowed; skipped this frame");
                continue;
            };
            if !node.state().visible() {
                continue;
            }
            let model_view = node_transform(&*node, &snapshot);
            node.state_mut().record_matrices(projection, model_view);
            surface.set_transform(model_view);
            if let Err(err) = node.draw(surface) {
                warn!("node {index} failed to draw: {err}");
            }
        }

        self.draw_gesture_overlay(surface);
    }

    fn draw_gesture_overlay(&self, surface: &mut dyn Surface) {
        let Some(outline) = self.gesture_outline() else {
            return;
        };
        let color = self.config.selection_color;
        surface.set_transform(Affine::IDENTITY);
        match outline {
            SelectionArea::Rect(rect) => {
                surface.fill_rect(rect, color.with_alpha(0.15));
                surface.stroke_rect(rect, color, 1.0);
            }
            SelectionArea::Lasso(points) => {
                surface.draw_polyline(&points, true, color, 1.0);
            }
        }
    }

    /// Renders the current frame and reads it back at full resolution.
    pub fn grab_frame(&mut self, surface: &mut dyn CaptureSurface) -> Result<ImageData, DrawError> {
        self.render(surface);
        surface.read_pixels()
    }

    // --- repaint and reset ---------------------------------------------------

    /// Returns whether a repaint was requested since the last call and clears
    /// the request.
    pub fn take_repaint_request(&mut self) -> bool {
        self.repaint.take()
    }

    /// Handle to the canvas' repaint flag.
    #[must_use]
    pub fn repaint_signal(&self) -> RepaintSignal {
        self.repaint.clone()
    }

    /// Requests a repaint.
    pub fn update(&self) {
        self.repaint.request();
    }

    /// Resets interaction and view state; registered nodes are kept.
    ///
    /// Cancels any gesture, clears the rotation and fits the scene.
    pub fn clear_data(&mut self) {
        self.cancel_gesture();
        self.view.set_rotation(0.0);
        self.view.set_default_panning_and_zooming();
        self.view_changed();
    }
}
