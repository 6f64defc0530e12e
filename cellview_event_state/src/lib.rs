// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Event State: gesture state machines for canvas interaction.
//!
//! This crate provides small, focused state machines for the pointer
//! gestures a canvas tracks across several events:
//!
//! - [`drag`]: pan drags, reporting per-move deltas and the total offset.
//! - [`rubber_band`]: rectangular selection spanned from the press point.
//! - [`lasso`]: free-form polygon selection.
//!
//! Each manager works on raw viewport positions and knows nothing about
//! nodes, scenes or transforms; the canvas decides which gesture is active
//! and maps the result into scene space.
//!
//! ### Rubber band
//!
//! ```rust
//! # #[cfg(feature = "selection")]
//! # fn example() {
//! use kurbo::{Point, Rect};
//! use cellview_event_state::rubber_band::RubberBandState;
//!
//! let mut band = RubberBandState::default();
//! band.start(Point::new(0.0, 0.0));
//! band.update(Point::new(40.0, 30.0));
//! assert_eq!(band.finish(Point::new(40.0, 30.0)), Rect::new(0.0, 0.0, 40.0, 30.0));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `selection`: Enable rubber-band and lasso tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "selection")]
pub mod lasso;
#[cfg(feature = "selection")]
pub mod rubber_band;
