// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use peniko::ImageData;

use cellview_node::{DrawError, NodeState, RenderNode, Surface, validate_image};

/// The tissue image, drawn at its pixel size in scene coordinates.
///
/// The image's pixel bounds are usually also the canvas scene.
#[derive(Clone, Debug, Default)]
pub struct ImageNode {
    state: NodeState,
    image: Option<ImageData>,
}

impl ImageNode {
    /// Creates an empty, visible image node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the image.
    ///
    /// Images whose buffer does not match their dimensions are rejected and
    /// the previous image is kept.
    pub fn set_image(&mut self, image: ImageData) -> Result<(), DrawError> {
        validate_image(&image)?;
        log::debug!("image node loaded {}x{}", image.width, image.height);
        self.image = Some(image);
        self.state.request_update();
        Ok(())
    }

    /// The current image.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Drops the image.
    pub fn clear_data(&mut self) {
        if self.image.take().is_some() {
            self.state.request_update();
        }
    }
}

impl RenderNode for ImageNode {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn bounding_rect(&self) -> Rect {
        self.image.as_ref().map_or(Rect::ZERO, |image| {
            Rect::new(0.0, 0.0, f64::from(image.width), f64::from(image.height))
        })
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let image = self.image.as_ref().ok_or(DrawError::NotReady)?;
        surface.draw_image(image, self.bounding_rect());
        Ok(())
    }
}
