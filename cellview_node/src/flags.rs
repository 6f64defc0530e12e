// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node capability flags and anchors.

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Capabilities of a node.
    ///
    /// Flags gate every interaction the canvas has with a node: drawing,
    /// pointer routing, placement and selection.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is drawn.
        const VISIBLE         = 0b0000_0001;
        /// Node receives pointer events.
        const SELECTABLE      = 0b0000_0010;
        /// Node's local transform is applied during placement.
        const TRANSFORMABLE   = 0b0000_0100;
        /// Node is mirrored vertically about its bounding-rect center.
        const INVERTED_Y      = 0b0000_1000;
        /// Node is mirrored horizontally about its bounding-rect center.
        const INVERTED_X      = 0b0001_0000;
        /// Node receives rubber-band and lasso selection events.
        const RUBBER_BANDABLE = 0b0010_0000;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::TRANSFORMABLE
    }
}

/// Where a node is pinned.
///
/// [`Anchor::None`] places the node in scene space, so it pans and zooms with
/// the content. Every other anchor pins the matching point of the node's
/// bounding rectangle to the same point of the viewport, so the node stays put
/// on screen (legends, minimaps).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Scene-relative placement.
    #[default]
    None,
    /// Center of the viewport.
    Center,
    /// Middle of the top edge.
    North,
    /// Top-right corner.
    NorthEast,
    /// Middle of the right edge.
    East,
    /// Bottom-right corner.
    SouthEast,
    /// Middle of the bottom edge.
    South,
    /// Bottom-left corner.
    SouthWest,
    /// Middle of the left edge.
    West,
    /// Top-left corner.
    NorthWest,
}

impl Anchor {
    /// Returns the anchor's point on `rect`, or `None` for scene placement.
    ///
    /// `rect` is treated as y-down: "north" is the minimum y edge.
    #[must_use]
    pub fn point_in(self, rect: Rect) -> Option<Point> {
        let rect = rect.abs();
        let c = rect.center();
        let p = match self {
            Self::None => return None,
            Self::Center => c,
            Self::North => Point::new(c.x, rect.y0),
            Self::NorthEast => Point::new(rect.x1, rect.y0),
            Self::East => Point::new(rect.x1, c.y),
            Self::SouthEast => Point::new(rect.x1, rect.y1),
            Self::South => Point::new(c.x, rect.y1),
            Self::SouthWest => Point::new(rect.x0, rect.y1),
            Self::West => Point::new(rect.x0, c.y),
            Self::NorthWest => Point::new(rect.x0, rect.y0),
        };
        Some(p)
    }
}
