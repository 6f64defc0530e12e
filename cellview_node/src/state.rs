// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

use crate::flags::{Anchor, NodeFlags};
use crate::repaint::RepaintSignal;

/// Bookkeeping shared by every node.
///
/// Setters that change how the node looks request a repaint on the attached
/// [`RepaintSignal`]; setting a value equal to the current one does not.
#[derive(Clone, Debug, Default)]
pub struct NodeState {
    transform: Affine,
    anchor: Anchor,
    flags: NodeFlags,
    projection: Affine,
    model_view: Affine,
    repaint: RepaintSignal,
}

impl NodeState {
    /// Creates state with identity transform, no anchor and default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state with the given flags.
    #[must_use]
    pub fn with_flags(flags: NodeFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Local transform.
    ///
    /// For scene-placed nodes this maps node-local coordinates into the
    /// scene. For anchored nodes it is an offset in viewport pixels applied
    /// after anchoring.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Sets the local transform.
    pub fn set_transform(&mut self, transform: Affine) {
        if self.transform != transform {
            self.transform = transform;
            self.repaint.request();
        }
    }

    /// Placement anchor.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Sets the placement anchor.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.anchor != anchor {
            self.anchor = anchor;
            self.repaint.request();
        }
    }

    /// Capability flags.
    #[must_use]
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Replaces all capability flags.
    pub fn set_flags(&mut self, flags: NodeFlags) {
        if self.flags != flags {
            self.flags = flags;
            self.repaint.request();
        }
    }

    /// Turns a single flag on or off.
    pub fn set_flag(&mut self, flag: NodeFlags, on: bool) {
        let mut flags = self.flags;
        flags.set(flag, on);
        self.set_flags(flags);
    }

    /// Shorthand for `flags().contains(flag)`.
    #[must_use]
    pub fn has(&self, flag: NodeFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Shorthand for [`NodeFlags::VISIBLE`].
    #[must_use]
    pub fn visible(&self) -> bool {
        self.has(NodeFlags::VISIBLE)
    }

    /// Shows or hides the node.
    pub fn set_visible(&mut self, visible: bool) {
        self.set_flag(NodeFlags::VISIBLE, visible);
    }

    /// Projection recorded at the last draw: viewport pixels → normalized
    /// device coordinates.
    #[must_use]
    pub fn projection(&self) -> Affine {
        self.projection
    }

    /// Model-view recorded at the last draw: node-local → viewport pixels.
    #[must_use]
    pub fn model_view(&self) -> Affine {
        self.model_view
    }

    /// Records the matrices used for the current draw.
    ///
    /// This is bookkeeping only and does not request a repaint.
    pub fn record_matrices(&mut self, projection: Affine, model_view: Affine) {
        self.projection = projection;
        self.model_view = model_view;
    }

    /// Signal this node reports updates on.
    #[must_use]
    pub fn repaint_signal(&self) -> &RepaintSignal {
        &self.repaint
    }

    /// Reports updates on `signal` from now on.
    ///
    /// A repaint pending on the previous signal carries over.
    pub fn attach_repaint(&mut self, signal: RepaintSignal) {
        if self.repaint.take() {
            signal.request();
        }
        self.repaint = signal;
    }

    /// Detaches from a shared signal, reporting on a private one.
    pub fn detach_repaint(&mut self) {
        self.repaint = RepaintSignal::new();
    }

    /// Requests a repaint (the node's "updated" notification).
    pub fn request_update(&self) {
        self.repaint.request();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Affine;

    use super::NodeState;
    use crate::{Anchor, NodeFlags, RepaintSignal};

    #[test]
    fn setters_notify_only_on_change() {
        let signal = RepaintSignal::new();
        let mut state = NodeState::new();
        state.attach_repaint(signal.clone());

        state.set_anchor(Anchor::None);
        state.set_transform(Affine::IDENTITY);
        state.set_flags(NodeFlags::default());
        assert!(!signal.take(), "no-op setters stay quiet");

        state.set_anchor(Anchor::NorthEast);
        assert!(signal.take());
        state.set_transform(Affine::translate((3.0, 4.0)));
        assert!(signal.take());
        state.set_flag(NodeFlags::SELECTABLE, true);
        assert!(signal.take());
        assert!(state.has(NodeFlags::SELECTABLE));
        state.set_visible(false);
        assert!(signal.take());
        assert!(!state.visible());
    }

    #[test]
    fn attach_carries_pending_update() {
        let mut state = NodeState::new();
        state.request_update();
        let signal = RepaintSignal::new();
        state.attach_repaint(signal.clone());
        assert!(signal.take());
    }

    #[test]
    fn recording_matrices_is_silent() {
        let signal = RepaintSignal::new();
        let mut state = NodeState::new();
        state.attach_repaint(signal.clone());
        state.record_matrices(Affine::scale(2.0), Affine::translate((1.0, 1.0)));
        assert!(!signal.is_pending());
        assert_eq!(state.projection(), Affine::scale(2.0));
        assert_eq!(state.model_view(), Affine::translate((1.0, 1.0)));
    }
}
