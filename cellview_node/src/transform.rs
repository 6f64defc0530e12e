// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node placement: anchors, local transforms and axis inversion.

use kurbo::{Affine, Rect, Vec2};

use crate::flags::NodeFlags;
use crate::state::NodeState;

/// Computes the node-local → viewport transform for a node.
///
/// - With [`Anchor::None`](crate::Anchor::None) the node lives in the scene:
///   `scene_transform · local`.
/// - Otherwise the anchor point of `bounds` is aligned with the same anchor
///   point of `viewport` and the local transform is applied on top as an
///   offset in viewport pixels: `T(viewport_anchor) · local · T(-bounds_anchor)`.
///
/// The local transform only participates when the node is
/// [`NodeFlags::TRANSFORMABLE`]. [`NodeFlags::INVERTED_X`] and
/// [`NodeFlags::INVERTED_Y`] mirror the node about the center of `bounds`
/// before placement.
#[must_use]
pub fn compose_node_transform(
    state: &NodeState,
    bounds: Rect,
    viewport: Rect,
    scene_transform: Affine,
) -> Affine {
    let bounds = bounds.abs();
    match (
        state.anchor().point_in(viewport),
        state.anchor().point_in(bounds),
    ) {
        (Some(view_anchor), Some(bounds_anchor)) => {
            Affine::translate(view_anchor.to_vec2())
                * effective_local(state)
                * Affine::translate(-bounds_anchor.to_vec2())
                * inversion(state.flags(), bounds)
        }
        _ => scene_transform * node_to_scene(state, bounds),
    }
}

/// Node-local → scene transform of an unanchored node.
///
/// This is the part of [`compose_node_transform`] that follows the scene
/// transform: the local transform (when [`NodeFlags::TRANSFORMABLE`]) applied
/// after the axis inversion. Nodes use its inverse to bring scene-space
/// selections into their own coordinates.
#[must_use]
pub fn node_to_scene(state: &NodeState, bounds: Rect) -> Affine {
    effective_local(state) * inversion(state.flags(), bounds.abs())
}

fn effective_local(state: &NodeState) -> Affine {
    if state.has(NodeFlags::TRANSFORMABLE) {
        state.transform()
    } else {
        Affine::IDENTITY
    }
}

/// Orthographic projection from viewport pixels (y-down) to normalized device
/// coordinates (`[-1, 1]`, y-up).
///
/// Degenerate viewports yield the identity.
#[must_use]
pub fn viewport_projection(viewport: Rect) -> Affine {
    let viewport = viewport.abs();
    let (w, h) = (viewport.width(), viewport.height());
    if w <= 0.0 || h <= 0.0 || !w.is_finite() || !h.is_finite() {
        return Affine::IDENTITY;
    }
    Affine::new([
        2.0 / w,
        0.0,
        0.0,
        -2.0 / h,
        -1.0 - 2.0 * viewport.x0 / w,
        1.0 + 2.0 * viewport.y0 / h,
    ])
}

fn inversion(flags: NodeFlags, bounds: Rect) -> Affine {
    let sx = if flags.contains(NodeFlags::INVERTED_X) { -1.0 } else { 1.0 };
    let sy = if flags.contains(NodeFlags::INVERTED_Y) { -1.0 } else { 1.0 };
    if sx > 0.0 && sy > 0.0 {
        return Affine::IDENTITY;
    }
    let c: Vec2 = bounds.center().to_vec2();
    Affine::translate(c) * Affine::scale_non_uniform(sx, sy) * Affine::translate(-c)
}
