// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Geometry: deterministic geometry generators for the canvas.
//!
//! This crate turns small pieces of domain data into renderable primitives.
//! It never draws anything itself; concrete nodes feed the produced
//! [`kurbo::Line`] lists to whatever surface they render on.
//!
//! - [`GridGeometry`]: border frame and interior grid lines for a rectangular
//!   array, with a boundary line appended when the array extent is not an exact
//!   multiple of the grid spacing.
//! - [`floor_mod`]: floored floating-point modulo whose result shares the
//!   divisor's sign.
//! - [`clamp_size`]: clamp a size into a `[min, max]` box, optionally keeping the
//!   aspect ratio.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use cellview_geometry::GridGeometry;
//!
//! let mut grid = GridGeometry::new();
//! grid.set_dimensions(
//!     Rect::new(-2.0, -2.0, 12.0, 12.0),
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//! );
//! grid.generate_data();
//!
//! // 11 rows and 11 columns of interior lines, no extra boundary line.
//! assert_eq!(grid.grid_lines().len(), 22);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod grid;
mod math;

pub use grid::{DEFAULT_GRID_SPACING, GridGeometry, MAX_GRID_STEPS};
pub use math::{AspectRatio, clamp_size, floor_mod, is_multiple_of};
