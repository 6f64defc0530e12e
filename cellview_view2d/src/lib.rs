// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview View 2D: the scene/viewport coordinate model.
//!
//! This crate provides a small, headless model of a fixed **scene** shown
//! through an on-screen **viewport**. It focuses on:
//! - Zoom limits derived from the two extents ("fit the scene" at the low
//!   end, "keep a minimum number of scene units visible" at the high end).
//! - A focus center (the scene point at the viewport middle) that is clamped
//!   after every pan and zoom so the view never drifts off the scene.
//! - The scene transformation and its inverse, for drawing and hit testing.
//!
//! It does **not** own nodes, input handling or a rendering backend; the
//! canvas crate wires pointer and keyboard events into [`SceneView`]
//! operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cellview_view2d::SceneView;
//!
//! // A 2000x1000 image in an 800x600 window.
//! let mut view = SceneView::new(
//!     Rect::new(0.0, 0.0, 2000.0, 1000.0),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//! assert_eq!(view.zoom(), view.min_zoom());
//!
//! view.zoom_in();
//! assert!(view.zoom() > view.min_zoom());
//!
//! // Map the window center back into the image.
//! let center = view.view_to_scene_point(Point::new(400.0, 300.0));
//! assert!((center - view.focus_center()).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a uniform scalar; rotation is applied about the viewport center.
//! - Degenerate extents are widened to [`MIN_EXTENT`] instead of failing.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod scene_view;

pub use modes::{ClampMode, ViewConfig};
pub use scene_view::{MIN_EXTENT, SceneView, ViewSnapshot};
