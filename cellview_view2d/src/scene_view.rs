// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sin_cos`
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{ClampMode, ViewConfig};

/// Smallest extent used for a scene or viewport axis.
///
/// Empty or inverted rectangles are widened to this size so that zoom limits
/// and transforms stay finite.
pub const MIN_EXTENT: f64 = 1e-6;

/// Scene/viewport model with a bounded zoom and a clamped focus center.
///
/// `SceneView` maps a fixed **scene** (for example the pixel bounds of a
/// loaded image) into a **viewport** (the on-screen surface, in device
/// pixels). The mapping is
///
/// `T(viewport center) · R(rotation) · S(zoom) · T(-focus center)`
///
/// so the focus center always lands at the middle of the viewport.
///
/// It maintains these invariants after every mutation:
/// - `min_zoom <= zoom <= max_zoom`, where `min_zoom` fits the whole scene
///   into the viewport and `max_zoom` keeps at least
///   [`ViewConfig::min_visible_scene_units`] visible;
/// - the focus center lies in [`SceneView::allowed_center_points`] (unless
///   [`ClampMode::None`] is selected).
#[derive(Clone, Debug)]
pub struct SceneView {
    scene: Rect,
    viewport: Rect,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    focus: Point,
    rotation: f64,
    config: ViewConfig,
    clamp_mode: ClampMode,
    scene_to_view: Affine,
    view_to_scene: Affine,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new(Rect::ZERO, Rect::ZERO)
    }
}

impl SceneView {
    /// Creates a view over `scene` shown in `viewport`, fitted and centered.
    #[must_use]
    pub fn new(scene: Rect, viewport: Rect) -> Self {
        let mut view = Self {
            scene: sanitize(scene),
            viewport: sanitize(viewport),
            zoom: 1.0,
            min_zoom: 1.0,
            max_zoom: 1.0,
            focus: Point::ZERO,
            rotation: 0.0,
            config: ViewConfig::default(),
            clamp_mode: ClampMode::default(),
            scene_to_view: Affine::IDENTITY,
            view_to_scene: Affine::IDENTITY,
        };
        view.update_zoom_limits();
        view.set_default_panning_and_zooming();
        view
    }

    /// Returns the scene rectangle.
    #[must_use]
    pub fn scene(&self) -> Rect {
        self.scene
    }

    /// Sets the scene rectangle.
    ///
    /// Zoom limits are recomputed and the zoom and focus center re-clamped.
    /// Inverted rectangles are normalized; empty ones get [`MIN_EXTENT`].
    pub fn set_scene(&mut self, scene: Rect) {
        let scene = sanitize(scene);
        if self.scene == scene {
            return;
        }
        self.scene = scene;
        self.update_zoom_limits();
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self.clamp_focus();
        self.rebuild_transforms();
    }

    /// Returns the viewport rectangle, in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Sets the viewport rectangle, in device pixels.
    ///
    /// Same normalization and re-clamping as [`SceneView::set_scene`].
    pub fn set_viewport(&mut self, viewport: Rect) {
        let viewport = sanitize(viewport);
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.update_zoom_limits();
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self.clamp_focus();
        self.rebuild_transforms();
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Replaces the configuration; invalid fields fall back to defaults.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config.sanitized();
        self.update_zoom_limits();
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        self.clamp_focus();
        self.rebuild_transforms();
    }

    /// Returns the clamp mode for the focus center.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the clamp mode for the focus center.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_focus();
            self.rebuild_transforms();
        }
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom at which the whole scene fits inside the viewport.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Largest allowed zoom; never below [`SceneView::min_zoom`].
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Clamps `zoom` into `[min_zoom, max_zoom]`.
    ///
    /// Non-finite or non-positive values map to `min_zoom`.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if zoom.is_finite() && zoom > 0.0 {
            zoom.clamp(self.min_zoom, self.max_zoom)
        } else {
            self.min_zoom
        }
    }

    /// Sets the zoom factor, clamped into range, keeping the focus center.
    ///
    /// Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let clamped = self.clamp_zoom(zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.zoom = clamped;
        self.clamp_focus();
        self.rebuild_transforms();
        true
    }

    /// Multiplies the zoom by [`ViewConfig::zoom_step`].
    ///
    /// Returns `true` if the zoom changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom * self.config.zoom_step)
    }

    /// Divides the zoom by [`ViewConfig::zoom_step`].
    ///
    /// Returns `true` if the zoom changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom / self.config.zoom_step)
    }

    /// Zooms by `factor` while keeping `anchor_view` fixed on screen as far as
    /// clamping allows.
    ///
    /// Returns `true` if the zoom or focus changed.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let anchor_scene = self.view_to_scene_point(anchor_view);
        if !self.set_zoom(self.zoom * factor) {
            return false;
        }
        let moved = self.scene_to_view_point(anchor_scene);
        self.pan_by_view(anchor_view - moved);
        true
    }

    /// Returns the scene point shown at the viewport center.
    #[must_use]
    pub fn focus_center(&self) -> Point {
        self.focus
    }

    /// Centers the view on `point` (clamped), keeping the zoom.
    ///
    /// Returns `true` if the focus center changed.
    pub fn center_on(&mut self, point: Point) -> bool {
        if !point.is_finite() {
            return false;
        }
        let old = self.focus;
        self.focus = point;
        self.clamp_focus();
        self.rebuild_transforms();
        self.focus != old
    }

    /// Moves the content by `delta` viewport pixels.
    ///
    /// Dragging right by `delta` makes the scene follow the pointer, so the
    /// focus center moves the opposite way in scene space. Returns `true` if
    /// the focus center changed.
    pub fn pan_by_view(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        let scene_delta = self.view_to_scene_vec(delta);
        self.center_on(self.focus - scene_delta)
    }

    /// Returns the view rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the view rotation in radians (clockwise in a y-down viewport).
    ///
    /// Returns `true` if the rotation changed.
    pub fn set_rotation(&mut self, radians: f64) -> bool {
        if !radians.is_finite() || self.rotation == radians {
            return false;
        }
        self.rotation = radians;
        self.clamp_focus();
        self.rebuild_transforms();
        true
    }

    /// Fits the whole scene into the viewport and centers on it.
    pub fn set_default_panning_and_zooming(&mut self) {
        self.zoom = self.min_zoom;
        self.focus = self.scene.center();
        self.clamp_focus();
        self.rebuild_transforms();
    }

    /// Region the focus center may occupy.
    ///
    /// This is the scene, grown by the overscroll margin and shrunk by half
    /// the visible extent on each side. An axis on which the visible extent
    /// exceeds the grown scene collapses to the scene center.
    #[must_use]
    pub fn allowed_center_points(&self) -> Rect {
        let margin = self.config.overscroll / self.zoom;
        let padded = self.scene.inflate(margin, margin);
        let half = self.visible_scene_size() / 2.0;

        let (x0, x1) = if padded.width() > 2.0 * half.width {
            (padded.x0 + half.width, padded.x1 - half.width)
        } else {
            let c = padded.center().x;
            (c, c)
        };
        let (y0, y1) = if padded.height() > 2.0 * half.height {
            (padded.y0 + half.height, padded.y1 - half.height)
        } else {
            let c = padded.center().y;
            (c, c)
        };
        Rect::new(x0, y0, x1, y1)
    }

    /// Scene → viewport transformation.
    #[must_use]
    pub fn scene_transform(&self) -> Affine {
        self.scene_to_view
    }

    /// Viewport → scene transformation.
    #[must_use]
    pub fn inverse_scene_transform(&self) -> Affine {
        self.view_to_scene
    }

    /// Converts a scene point into viewport coordinates.
    #[must_use]
    pub fn scene_to_view_point(&self, pt: Point) -> Point {
        self.scene_to_view * pt
    }

    /// Converts a viewport point into scene coordinates.
    #[must_use]
    pub fn view_to_scene_point(&self, pt: Point) -> Point {
        self.view_to_scene * pt
    }

    /// Converts a viewport displacement into a scene displacement.
    #[must_use]
    pub fn view_to_scene_vec(&self, v: Vec2) -> Vec2 {
        self.view_to_scene * v.to_point() - self.view_to_scene * Point::ZERO
    }

    /// Bounding box of a scene rectangle in viewport coordinates.
    #[must_use]
    pub fn scene_to_view_rect(&self, rect: Rect) -> Rect {
        self.scene_to_view.transform_rect_bbox(rect)
    }

    /// Bounding box of a viewport rectangle in scene coordinates.
    #[must_use]
    pub fn view_to_scene_rect(&self, rect: Rect) -> Rect {
        self.view_to_scene.transform_rect_bbox(rect)
    }

    /// Scene region currently visible (its bounding box when rotated).
    #[must_use]
    pub fn visible_scene_rect(&self) -> Rect {
        self.view_to_scene_rect(self.viewport)
    }

    /// Snapshot of the current state for nodes and debugging.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            scene: self.scene,
            viewport: self.viewport,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            focus_center: self.focus,
            rotation: self.rotation,
            scene_transform: self.scene_to_view,
            visible_scene_rect: self.visible_scene_rect(),
        }
    }

    fn visible_scene_size(&self) -> Size {
        let w = self.viewport.width() / self.zoom;
        let h = self.viewport.height() / self.zoom;
        if self.rotation == 0.0 {
            return Size::new(w, h);
        }
        let (sin, cos) = self.rotation.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        Size::new(w * cos + h * sin, w * sin + h * cos)
    }

    fn update_zoom_limits(&mut self) {
        let vw = self.viewport.width();
        let vh = self.viewport.height();
        let min_zoom = (vw / self.scene.width()).min(vh / self.scene.height());
        let max_zoom = vw.min(vh) / self.config.min_visible_scene_units;
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom.max(min_zoom);
    }

    fn clamp_focus(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let allowed = self.allowed_center_points();
        self.focus = Point::new(
            self.focus.x.clamp(allowed.x0, allowed.x1),
            self.focus.y.clamp(allowed.y0, allowed.y1),
        );
    }

    fn rebuild_transforms(&mut self) {
        self.scene_to_view = Affine::translate(self.viewport.center().to_vec2())
            * Affine::rotate(self.rotation)
            * Affine::scale(self.zoom)
            * Affine::translate(-self.focus.to_vec2());
        self.view_to_scene = self.scene_to_view.inverse();
    }
}

/// Read-only copy of a [`SceneView`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewSnapshot {
    /// Scene rectangle.
    pub scene: Rect,
    /// Viewport rectangle in device pixels.
    pub viewport: Rect,
    /// Current zoom factor.
    pub zoom: f64,
    /// Zoom at which the scene fits the viewport.
    pub min_zoom: f64,
    /// Largest allowed zoom.
    pub max_zoom: f64,
    /// Scene point at the viewport center.
    pub focus_center: Point,
    /// View rotation in radians.
    pub rotation: f64,
    /// Scene → viewport transformation.
    pub scene_transform: Affine,
    /// Scene region currently visible.
    pub visible_scene_rect: Rect,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        SceneView::default().snapshot()
    }
}

fn sanitize(rect: Rect) -> Rect {
    let rect = if rect.is_finite() { rect.abs() } else { Rect::ZERO };
    Rect::new(
        rect.x0,
        rect.y0,
        rect.x0 + rect.width().max(MIN_EXTENT),
        rect.y0 + rect.height().max(MIN_EXTENT),
    )
}
