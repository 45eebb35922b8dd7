//! Renderer configuration module.
//!
//! Geometry used when laying the tree out on a canvas: node size, spacing
//! between levels and the bounds the canvas is clamped to.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Tree layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Radius of each node circle
    pub node_radius: f64,

    /// Vertical distance between levels
    pub level_spacing: f64,

    /// Distance from the top edge to the root's centre
    pub top_margin: f64,

    /// Canvas width allotted per leaf slot before clamping
    pub width_per_leaf: u32,

    /// Canvas height added per level before clamping
    pub height_per_level: u32,

    /// Canvas height before any level is added
    pub base_height: u32,

    /// Lower bound for the canvas width
    pub min_width: u32,

    /// Upper bound for the canvas width
    pub max_width: u32,

    /// Lower bound for the canvas height
    pub min_height: u32,

    /// Upper bound for the canvas height
    pub max_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_radius: 10.0,
            level_spacing: 40.0,
            top_margin: 40.0,
            width_per_leaf: 20,
            height_per_level: 45,
            base_height: 30,
            min_width: 400,
            max_width: 800,
            min_height: 250,
            max_height: 600,
        }
    }
}

impl Validate for RenderConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, value) in [
            ("node_radius", self.node_radius),
            ("level_spacing", self.level_spacing),
            ("top_margin", self.top_margin),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("render.{key}"),
                    message: "must be a positive number".to_string(),
                });
            }
        }

        if self.width_per_leaf == 0 || self.height_per_level == 0 {
            return Err(ConfigError::ValidationError(
                "width_per_leaf and height_per_level must be greater than 0".to_string(),
            ));
        }

        if self.min_width == 0 || self.min_width > self.max_width {
            return Err(ConfigError::ValueOutOfRange {
                key: "render.min_width".to_string(),
                message: format!("must be between 1 and max_width ({})", self.max_width),
            });
        }

        if self.min_height == 0 || self.min_height > self.max_height {
            return Err(ConfigError::ValueOutOfRange {
                key: "render.min_height".to_string(),
                message: format!("must be between 1 and max_height ({})", self.max_height),
            });
        }

        Ok(())
    }
}
