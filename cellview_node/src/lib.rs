// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cellview Node: the drawable-node abstraction.
//!
//! Everything shown on a Cellview canvas is a node: the tissue image, the
//! array grid, the spot overlay, the legend, the minimap. This crate defines
//! what the canvas needs from them and nothing about how they draw:
//!
//! - [`RenderNode`]: the trait every node implements. It reports node-local
//!   bounds, draws onto a [`Surface`], and optionally reacts to pointer
//!   events, selections and view changes.
//! - [`NodeState`]: bookkeeping shared by all nodes (local transform,
//!   [`Anchor`], [`NodeFlags`], recorded matrices and a [`RepaintSignal`]).
//! - [`compose_node_transform`]: places a node either in the scene or pinned
//!   to a viewport anchor.
//! - Events: [`PointerEvent`], [`SelectionEvent`] (rectangle or lasso, in
//!   scene space), [`EventContext`] and the dispatch [`Outcome`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use cellview_node::{DrawError, NodeFlags, NodeState, RenderNode, Surface};
//! use peniko::color::palette::css;
//!
//! struct Frame {
//!     state: NodeState,
//! }
//!
//! impl RenderNode for Frame {
//!     fn state(&self) -> &NodeState { &self.state }
//!     fn state_mut(&mut self) -> &mut NodeState { &mut self.state }
//!     fn bounding_rect(&self) -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
//!     fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
//!         surface.stroke_rect(self.bounding_rect(), css::DARK_RED, 1.0);
//!         Ok(())
//!     }
//! }
//!
//! let frame = Frame { state: NodeState::with_flags(NodeFlags::VISIBLE) };
//! assert!(frame.state().visible());
//! ```
//!
//! Nodes are single-threaded: the [`RepaintSignal`] is reference counted.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod flags;
mod node;
mod repaint;
mod state;
mod surface;
mod transform;

pub use event::{
    EventContext, Modifiers, Outcome, PointerButton, PointerEvent, SelectionArea, SelectionEvent,
    SelectionMode,
};
pub use flags::{Anchor, NodeFlags};
pub use node::{RenderNode, hit_test, node_transform};
pub use repaint::RepaintSignal;
pub use state::NodeState;
pub use surface::{CaptureSurface, DrawError, Surface, validate_image};
pub use transform::{compose_node_transform, node_to_scene, viewport_projection};

pub use cellview_view2d::ViewSnapshot;
