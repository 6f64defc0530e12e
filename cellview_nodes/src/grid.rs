// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

use cellview_geometry::GridGeometry;
use cellview_node::{DrawError, NodeFlags, NodeState, RenderNode, Surface};

/// Default color of the interior grid lines.
pub const DEFAULT_GRID_COLOR: Color = css::DARK_GREEN;

/// Default color of the border frame.
pub const DEFAULT_GRID_BORDER_COLOR: Color = css::DARK_RED;

/// Stroke width of grid and border lines, in viewport pixels.
pub const GRID_LINE_WIDTH: f64 = 1.0;

/// The array grid: a border frame and interior lines over the content area.
///
/// The node starts hidden; hosts show it once dimensions are known.
#[derive(Clone, Debug)]
pub struct GridNode {
    state: NodeState,
    geometry: GridGeometry,
    color: Color,
    border_color: Color,
}

impl Default for GridNode {
    fn default() -> Self {
        Self::new()
    }
}

impl GridNode {
    /// Creates a hidden grid with no dimensions and the default colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NodeState::with_flags(NodeFlags::TRANSFORMABLE),
            geometry: GridGeometry::new(),
            color: DEFAULT_GRID_COLOR,
            border_color: DEFAULT_GRID_BORDER_COLOR,
        }
    }

    /// Sets the border and content rectangles and regenerates the lines.
    pub fn set_dimensions(&mut self, border: Rect, rect: Rect) {
        self.geometry.set_dimensions(border, rect);
        self.generate_data();
    }

    /// Sets the interior line spacing and regenerates the lines.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.geometry.set_spacing(spacing);
        self.generate_data();
    }

    /// Regenerates the lines from the stored dimensions.
    pub fn generate_data(&mut self) {
        self.geometry.generate_data();
        log::trace!(
            "grid generated: {} border, {} interior lines",
            self.geometry.border_lines().len(),
            self.geometry.grid_lines().len()
        );
        self.state.request_update();
    }

    /// Resets dimensions, colors and lines.
    pub fn clear_data(&mut self) {
        self.geometry.clear_data();
        self.color = DEFAULT_GRID_COLOR;
        self.border_color = DEFAULT_GRID_BORDER_COLOR;
        self.state.request_update();
    }

    /// Generated geometry.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Interior line color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the interior line color.
    pub fn set_color(&mut self, color: Color) {
        if self.color.components != color.components {
            self.color = color;
            self.state.request_update();
        }
    }

    /// Border frame color.
    #[must_use]
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Sets the border frame color.
    pub fn set_border_color(&mut self, color: Color) {
        if self.border_color.components != color.components {
            self.border_color = color;
            self.state.request_update();
        }
    }
}

impl RenderNode for GridNode {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn bounding_rect(&self) -> Rect {
        self.geometry.border().union(self.geometry.rectangle())
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if self.geometry.is_empty() {
            return Err(DrawError::NotReady);
        }
        surface.draw_lines(self.geometry.border_lines(), self.border_color, GRID_LINE_WIDTH);
        surface.draw_lines(self.geometry.grid_lines(), self.color, GRID_LINE_WIDTH);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use peniko::color::palette::css;

    use cellview_node::{DrawError, RenderNode, RepaintSignal};

    use super::{DEFAULT_GRID_BORDER_COLOR, DEFAULT_GRID_COLOR, GridNode};
    use crate::testing::{Op, Recorder};

    #[test]
    fn grid_starts_hidden_and_empty() {
        let grid = GridNode::new();
        assert!(!grid.state().visible());
        let mut surface = Recorder::default();
        assert_eq!(grid.draw(&mut surface), Err(DrawError::NotReady));
    }

    #[test]
    fn draws_border_then_grid() {
        let mut grid = GridNode::new();
        grid.set_dimensions(Rect::new(-1.0, -1.0, 11.0, 11.0), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(grid.bounding_rect(), Rect::new(-1.0, -1.0, 11.0, 11.0));
        assert_eq!(grid.geometry().grid_lines().len(), 22);

        let mut surface = Recorder::default();
        grid.draw(&mut surface).expect("grid generated");
        let [Op::Lines(border, border_color), Op::Lines(lines, color)] = surface.ops.as_slice()
        else {
            panic!("expected two line batches, got {:?}", surface.ops);
        };
        assert_eq!(border.as_slice(), grid.geometry().border_lines());
        assert_eq!(lines.as_slice(), grid.geometry().grid_lines());
        assert_eq!(*border_color, DEFAULT_GRID_BORDER_COLOR.components);
        assert_eq!(*color, DEFAULT_GRID_COLOR.components);
    }

    #[test]
    fn color_changes_notify_once() {
        let mut grid = GridNode::new();
        let signal = RepaintSignal::new();
        grid.state_mut().attach_repaint(signal.clone());

        grid.set_color(css::YELLOW);
        assert!(signal.take());
        grid.set_color(css::YELLOW);
        assert!(!signal.take());

        grid.set_border_color(css::BLUE);
        assert!(signal.take());
        grid.clear_data();
        assert_eq!(grid.color().components, DEFAULT_GRID_COLOR.components);
        assert_eq!(grid.border_color().components, DEFAULT_GRID_BORDER_COLOR.components);
        assert!(grid.geometry().is_empty());
    }
}
