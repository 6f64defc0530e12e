// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Nodes: the concrete nodes of the cell viewer.
//!
//! - [`ImageNode`]: the tissue image in scene coordinates.
//! - [`GridNode`]: the array grid and its border frame, built with
//!   [`GridGeometry`](cellview_geometry::GridGeometry).
//! - [`SpotsNode`]: heat-mapped spots that take part in rubber-band and
//!   lasso selection.
//! - [`HeatMapLegendNode`]: a spectrum strip pinned to a viewport corner.
//! - [`MiniMapNode`]: a scene overview that recenters the canvas on click.
//!
//! Every node implements [`RenderNode`](cellview_node::RenderNode) and reports
//! its updates through its [`NodeState`](cellview_node::NodeState).
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use cellview_node::{
//!     PointerButton, PointerEvent, RenderNode, SelectionArea, SelectionEvent,
//! };
//! use cellview_nodes::{Spot, SpotsNode};
//!
//! let mut spots = SpotsNode::new();
//! spots.set_spots(vec![
//!     Spot::new(Point::new(1.0, 1.0), 3.0),
//!     Spot::new(Point::new(5.0, 5.0), 9.0),
//! ]);
//!
//! let pointer = PointerEvent::new(Point::new(2.0, 2.0), PointerButton::Primary);
//! let area = SelectionArea::Rect(Rect::new(0.0, 0.0, 2.0, 2.0));
//! spots.set_selection_area(&SelectionEvent::new(area, pointer));
//! assert_eq!(spots.selected_indices().collect::<Vec<_>>(), [0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod image;
mod legend;
mod minimap;
mod spots;

#[cfg(test)]
mod testing;

pub use grid::{DEFAULT_GRID_BORDER_COLOR, DEFAULT_GRID_COLOR, GRID_LINE_WIDTH, GridNode};
pub use image::ImageNode;
pub use legend::{DEFAULT_LEGEND_SIZE, HeatMapLegendNode};
pub use minimap::{MINIMAP_MAX_SIZE, MINIMAP_MIN_SIZE, MiniMapNode};
pub use spots::{DEFAULT_SPOT_SIZE, Spot, SpotColoring, SpotsNode};
