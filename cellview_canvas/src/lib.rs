// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Canvas: the interactive canvas that ties nodes, view and input
//! together.
//!
//! [`CanvasView`] owns:
//!
//! - an ordered registry of [`NodeHandle`]s, painted first to last,
//! - the [`SceneView`](cellview_view2d::SceneView) with its zoom limits and
//!   focus clamping,
//! - the interaction state machine (pan drag, rubber band, lasso) and its
//!   keyboard and wheel shortcuts,
//! - a coalescing repaint flag shared with every registered node.
//!
//! Pointer events that are not part of a gesture are routed to nodes through
//! [`dispatch`], topmost first, until one consumes them. Completed
//! selections are mapped to scene space and delivered to every
//! [`NodeFlags::RUBBER_BANDABLE`](cellview_node::NodeFlags::RUBBER_BANDABLE)
//! node, then reported to the host callback.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use cellview_canvas::{CanvasView, InputEvent, Key};
//!
//! let mut canvas = CanvasView::new(
//!     Rect::new(0.0, 0.0, 1000.0, 500.0),
//!     Rect::new(0.0, 0.0, 400.0, 400.0),
//! );
//! assert!(canvas.take_repaint_request());
//! assert!((canvas.zoom() - 0.4).abs() < 1e-12);
//!
//! assert!(canvas.handle_input(InputEvent::Key(Key::ZoomIn)));
//! assert!(canvas.zoom() > 0.4);
//! assert!(canvas.take_repaint_request());
//! assert!(!canvas.take_repaint_request());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod dispatch;
mod input;
mod view;

pub use config::{CanvasConfig, ConfigError, SelectionTool};
pub use dispatch::NodeHandle;
pub use input::{InputEvent, InteractionState, Key, PointerPhase};
pub use view::CanvasView;
