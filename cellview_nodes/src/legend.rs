// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Rect, Size};
use peniko::color::palette::css;
use peniko::{Color, ImageData};

use cellview_color::HeatMap;
use cellview_geometry::{AspectRatio, clamp_size};
use cellview_node::{Anchor, DrawError, NodeState, RenderNode, Surface};

/// Default legend size, in viewport pixels.
pub const DEFAULT_LEGEND_SIZE: Size = Size::new(20.0, 150.0);

const MIN_LEGEND_SIZE: Size = Size::new(4.0, 16.0);
const MAX_LEGEND_SIZE: Size = Size::new(200.0, 1000.0);
const LEGEND_MARGIN: f64 = 10.0;

/// Heat-map legend pinned to a viewport corner.
///
/// The spectrum strip is regenerated whenever the value boundaries, the heat
/// map or the size change.
#[derive(Clone, Debug)]
pub struct HeatMapLegendNode {
    state: NodeState,
    heat_map: HeatMap,
    lower: f64,
    upper: f64,
    size: Size,
    frame_color: Color,
    image: ImageData,
}

impl Default for HeatMapLegendNode {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatMapLegendNode {
    /// Creates a legend in the top-right corner for the range `[0, 1]`.
    #[must_use]
    pub fn new() -> Self {
        let mut state = NodeState::new();
        state.set_anchor(Anchor::NorthEast);
        state.set_transform(Affine::translate((-LEGEND_MARGIN, LEGEND_MARGIN)));
        let heat_map = HeatMap::default();
        Self {
            state,
            heat_map,
            lower: 0.0,
            upper: 1.0,
            size: DEFAULT_LEGEND_SIZE,
            frame_color: css::WHITE,
            image: render(&heat_map, DEFAULT_LEGEND_SIZE, 0.0, 1.0),
        }
    }

    /// Sets the value range the legend spans.
    pub fn set_boundaries(&mut self, lower: f64, upper: f64) {
        if (self.lower, self.upper) != (lower, upper) {
            self.lower = lower;
            self.upper = upper;
            self.regenerate();
        }
    }

    /// Value range as `(lower, upper)`.
    #[must_use]
    pub fn boundaries(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Sets the heat map the strip is rendered with.
    pub fn set_heat_map(&mut self, heat_map: HeatMap) {
        if self.heat_map != heat_map {
            self.heat_map = heat_map;
            self.regenerate();
        }
    }

    /// Heat map in use.
    #[must_use]
    pub fn heat_map(&self) -> HeatMap {
        self.heat_map
    }

    /// Sets the legend size, clamped to a sensible range.
    pub fn set_size(&mut self, size: Size) {
        let size = clamp_size(size, MIN_LEGEND_SIZE, MAX_LEGEND_SIZE, AspectRatio::Ignore);
        if self.size != size {
            self.size = size;
            self.regenerate();
        }
    }

    /// Legend size in viewport pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The spectrum strip.
    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    fn regenerate(&mut self) {
        self.image = render(&self.heat_map, self.size, self.lower, self.upper);
        self.state.request_update();
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "legend sizes are clamped to a few hundred pixels"
)]
fn render(heat_map: &HeatMap, size: Size, lower: f64, upper: f64) -> ImageData {
    let width = size.width.round().max(0.0) as u32;
    let height = size.height.round().max(0.0) as u32;
    heat_map.legend_image(width, height, lower, upper)
}

impl RenderNode for HeatMapLegendNode {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn bounding_rect(&self) -> Rect {
        self.size.to_rect()
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let bounds = self.bounding_rect();
        surface.draw_image(&self.image, bounds);
        surface.stroke_rect(bounds, self.frame_color, 1.0);
        Ok(())
    }
}
