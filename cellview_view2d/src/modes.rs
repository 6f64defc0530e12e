// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the focus center relative to the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not clamp; the focus center may move anywhere.
    None,
    /// Keep the focus center inside [`crate::SceneView::allowed_center_points`],
    /// so the visible region never leaves the scene plus its overscroll margin.
    #[default]
    KeepSceneInView,
}

/// Tunables for a [`crate::SceneView`].
///
/// Invalid values passed to [`crate::SceneView::set_config`] fall back to the
/// corresponding default field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Factor applied by one zoom-in step (divided by for zoom-out). Must be
    /// greater than `1.0`. Default `1.1`.
    pub zoom_step: f64,
    /// Margin around the scene the view may scroll into, in viewport pixels.
    /// Must be finite and non-negative. Default `0.0`.
    pub overscroll: f64,
    /// Smallest number of scene units that must stay visible along the shorter
    /// viewport axis; this bounds the maximum zoom. Must be positive.
    /// Default `10.0`.
    pub min_visible_scene_units: f64,
}

impl ViewConfig {
    /// Default zoom step.
    pub const DEFAULT_ZOOM_STEP: f64 = 1.1;
    /// Default overscroll margin.
    pub const DEFAULT_OVERSCROLL: f64 = 0.0;
    /// Default minimum visible extent, in scene units.
    pub const DEFAULT_MIN_VISIBLE_SCENE_UNITS: f64 = 10.0;

    /// Returns `true` if the zoom step is usable.
    #[must_use]
    pub fn zoom_step_is_valid(&self) -> bool {
        self.zoom_step.is_finite() && self.zoom_step > 1.0
    }

    /// Returns `true` if the overscroll margin is usable.
    #[must_use]
    pub fn overscroll_is_valid(&self) -> bool {
        self.overscroll.is_finite() && self.overscroll >= 0.0
    }

    /// Returns `true` if the minimum visible extent is usable.
    #[must_use]
    pub fn min_visible_is_valid(&self) -> bool {
        self.min_visible_scene_units.is_finite() && self.min_visible_scene_units > 0.0
    }

    /// Replaces every invalid field with its default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            zoom_step: if self.zoom_step_is_valid() {
                self.zoom_step
            } else {
                Self::DEFAULT_ZOOM_STEP
            },
            overscroll: if self.overscroll_is_valid() {
                self.overscroll
            } else {
                Self::DEFAULT_OVERSCROLL
            },
            min_visible_scene_units: if self.min_visible_is_valid() {
                self.min_visible_scene_units
            } else {
                Self::DEFAULT_MIN_VISIBLE_SCENE_UNITS
            },
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            overscroll: Self::DEFAULT_OVERSCROLL,
            min_visible_scene_units: Self::DEFAULT_MIN_VISIBLE_SCENE_UNITS,
        }
    }
}
