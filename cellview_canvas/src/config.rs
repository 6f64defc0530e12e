// Copyright 2026 the Cellview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use cellview_view2d::ViewConfig;
use peniko::Color;
use peniko::color::palette::css;

/// Shape of the selection gesture while a selection mode is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionTool {
    /// Axis-aligned rubber band.
    Rectangle,
    /// Free-form lasso polygon.
    Lasso,
}

/// Host-supplied canvas settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Zoom step, overscroll margin and zoom cap.
    pub view: ViewConfig,
    /// Distance an arrow key pans, in viewport pixels. Must be positive.
    pub key_pan_step: f64,
    /// Minimum spacing between recorded lasso points, in viewport pixels.
    /// Must be finite and non-negative.
    pub lasso_min_spacing: f64,
    /// Color the surface is cleared to before drawing nodes.
    pub background: Color,
    /// Outline color of the rubber band and lasso overlay.
    pub selection_color: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            key_pan_step: 20.0,
            lasso_min_spacing: 2.0,
            background: Color::BLACK,
            selection_color: css::WHITE,
        }
    }
}

impl CanvasConfig {
    /// Checks every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.view.zoom_step_is_valid() {
            return Err(ConfigError::ZoomStep(self.view.zoom_step));
        }
        if !self.view.overscroll_is_valid() {
            return Err(ConfigError::Overscroll(self.view.overscroll));
        }
        if !self.view.min_visible_is_valid() {
            return Err(ConfigError::MinVisibleSceneUnits(
                self.view.min_visible_scene_units,
            ));
        }
        if !(self.key_pan_step.is_finite() && self.key_pan_step > 0.0) {
            return Err(ConfigError::KeyPanStep(self.key_pan_step));
        }
        if !(self.lasso_min_spacing.is_finite() && self.lasso_min_spacing >= 0.0) {
            return Err(ConfigError::LassoSpacing(self.lasso_min_spacing));
        }
        Ok(())
    }
}

/// An invalid [`CanvasConfig`] field, with the offending value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Zoom step is not a finite value greater than one.
    ZoomStep(f64),
    /// Overscroll margin is negative or not finite.
    Overscroll(f64),
    /// Minimum visible extent is not a finite positive value.
    MinVisibleSceneUnits(f64),
    /// Keyboard pan step is not a finite positive value.
    KeyPanStep(f64),
    /// Lasso spacing is negative or not finite.
    LassoSpacing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomStep(v) => write!(f, "zoom step must be greater than 1, got {v}"),
            Self::Overscroll(v) => write!(f, "overscroll must be non-negative, got {v}"),
            Self::MinVisibleSceneUnits(v) => {
                write!(f, "minimum visible scene units must be positive, got {v}")
            }
            Self::KeyPanStep(v) => write!(f, "key pan step must be positive, got {v}"),
            Self::LassoSpacing(v) => write!(f, "lasso spacing must be non-negative, got {v}"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use cellview_view2d::ViewConfig;

    use super::{CanvasConfig, ConfigError};

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CanvasConfig::default().validate(), Ok(()));
    }

    #[test]
    fn first_invalid_field_is_reported() {
        let config = CanvasConfig {
            view: ViewConfig {
                zoom_step: 1.0,
                ..ViewConfig::default()
            },
            key_pan_step: -1.0,
            ..CanvasConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZoomStep(1.0)));

        let config = CanvasConfig {
            key_pan_step: f64::NAN,
            ..CanvasConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::KeyPanStep(v)) if v.is_nan()));

        let config = CanvasConfig {
            lasso_min_spacing: -0.5,
            ..CanvasConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LassoSpacing(-0.5)));
    }

    #[test]
    fn errors_name_the_field() {
        assert_eq!(
            ConfigError::Overscroll(-2.0).to_string(),
            "overscroll must be non-negative, got -2"
        );
    }
}
