// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use cellview_color::{HeatMap, dynamic_range_color};
use cellview_node::{
    DrawError, NodeFlags, NodeState, RenderNode, SelectionEvent, SelectionMode, Surface,
    node_to_scene,
};

/// Default spot diameter, in scene units.
pub const DEFAULT_SPOT_SIZE: f64 = 0.5;

/// One measured spot: a position in node-local coordinates and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spot {
    /// Center of the spot.
    pub position: Point,
    /// Expression value driving the spot color.
    pub value: f64,
}

impl Spot {
    /// Creates a spot.
    #[must_use]
    pub const fn new(position: Point, value: f64) -> Self {
        Self { position, value }
    }
}

/// How spot values become colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpotColoring {
    /// Heat-map color over the value range.
    HeatMap(HeatMap),
    /// Fixed hue; alpha follows the value over the range.
    DynamicRange(Color),
    /// Every spot in one color.
    Uniform(Color),
}

impl Default for SpotColoring {
    fn default() -> Self {
        Self::HeatMap(HeatMap::default())
    }
}

/// The spot overlay: colored points with a selection state.
///
/// Spots take part in rubber-band and lasso selection. Selected spots are
/// drawn in the selection color.
#[derive(Clone, Debug)]
pub struct SpotsNode {
    state: NodeState,
    spots: Vec<Spot>,
    selected: Vec<bool>,
    coloring: SpotColoring,
    range: (f64, f64),
    size: f64,
    selection_color: Color,
}

impl Default for SpotsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotsNode {
    /// Creates an empty, visible, selectable overlay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: NodeState::with_flags(NodeFlags::default() | NodeFlags::RUBBER_BANDABLE),
            spots: Vec::new(),
            selected: Vec::new(),
            coloring: SpotColoring::default(),
            range: (0.0, 0.0),
            size: DEFAULT_SPOT_SIZE,
            selection_color: css::WHITE,
        }
    }

    /// Replaces the spots, clears the selection and fits the value range.
    pub fn set_spots(&mut self, spots: Vec<Spot>) {
        let (min, max) = spots
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        self.range = if min <= max { (min, max) } else { (0.0, 0.0) };
        self.selected = alloc::vec![false; spots.len()];
        self.spots = spots;
        self.state.request_update();
    }

    /// Current spots.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Drops all spots and the selection.
    pub fn clear_data(&mut self) {
        self.spots.clear();
        self.selected.clear();
        self.range = (0.0, 0.0);
        self.state.request_update();
    }

    /// Value range mapped onto the color scale.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Overrides the value range, e.g. to share thresholds with the legend.
    pub fn set_range(&mut self, min: f64, max: f64) {
        if self.range != (min, max) {
            self.range = (min, max);
            self.state.request_update();
        }
    }

    /// Coloring scheme.
    #[must_use]
    pub fn coloring(&self) -> SpotColoring {
        self.coloring
    }

    /// Sets the coloring scheme.
    pub fn set_coloring(&mut self, coloring: SpotColoring) {
        if self.coloring != coloring {
            self.coloring = coloring;
            self.state.request_update();
        }
    }

    /// Spot diameter in scene units.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sets the spot diameter; non-finite or negative sizes are ignored.
    pub fn set_size(&mut self, size: f64) {
        if size.is_finite() && size >= 0.0 && size != self.size {
            self.size = size;
            self.state.request_update();
        }
    }

    /// Sets the color of selected spots.
    pub fn set_selection_color(&mut self, color: Color) {
        if self.selection_color.components != color.components {
            self.selection_color = color;
            self.state.request_update();
        }
    }

    /// Returns `true` if spot `index` is selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Indices of the selected spots, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(i))
    }

    /// Number of selected spots.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// Deselects every spot.
    pub fn clear_selection(&mut self) {
        if self.selected.iter().any(|s| *s) {
            self.selected.fill(false);
            self.state.request_update();
        }
    }

    /// Color a spot is drawn with when not selected.
    #[must_use]
    pub fn spot_color(&self, spot: &Spot) -> Color {
        let (min, max) = self.range;
        match self.coloring {
            SpotColoring::HeatMap(heat) => heat.heat_color(spot.value, min, max),
            SpotColoring::DynamicRange(base) => dynamic_range_color(spot.value, min, max, base),
            SpotColoring::Uniform(color) => color,
        }
    }
}

impl RenderNode for SpotsNode {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn bounding_rect(&self) -> Rect {
        let mut iter = self.spots.iter();
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        let half = self.size / 2.0;
        iter.fold(Rect::from_points(first.position, first.position), |acc, s| {
            acc.union_pt(s.position)
        })
        .inflate(half, half)
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if self.spots.is_empty() {
            return Ok(());
        }
        let points: Vec<(Point, Color)> = self
            .spots
            .iter()
            .zip(&self.selected)
            .map(|(spot, selected)| {
                let color = if *selected {
                    self.selection_color
                } else {
                    self.spot_color(spot)
                };
                (spot.position, color)
            })
            .collect();
        surface.draw_points(&points, self.size);
        Ok(())
    }

    fn set_selection_area(&mut self, event: &SelectionEvent) {
        let local = event.to_local(node_to_scene(&self.state, self.bounding_rect()));
        let mut changed = false;
        for (spot, selected) in self.spots.iter().zip(self.selected.iter_mut()) {
            let inside = local.area.contains(spot.position);
            let next = match local.mode {
                SelectionMode::New => inside,
                SelectionMode::Include => *selected || inside,
                SelectionMode::Exclude => *selected && !inside,
            };
            changed |= next != *selected;
            *selected = next;
        }
        log::debug!(
            "spot selection {:?}: {} of {} selected",
            local.mode,
            self.selected_count(),
            self.spots.len()
        );
        if changed {
            self.state.request_update();
        }
    }
}
