//! Configuration for flow placement and demo layouts

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Primary axis of a flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Left to right, wrapping downwards.
    #[default]
    Rows,
    /// Top to bottom, wrapping rightwards.
    Columns,
}

/// Flow preset consumed by [`Wrapper::from_config`](super::Wrapper::from_config).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub direction: FlowDirection,

    /// Normalized position of the first box inside the bounds
    pub anchor_x: f64,
    pub anchor_y: f64,

    /// Spacing between neighbouring boxes on a line
    pub gap: f64,

    /// Spacing between lines
    pub line_gap: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            direction: FlowDirection::Rows,
            anchor_x: 0.0,
            anchor_y: 0.0,
            gap: 5.0,
            line_gap: 5.0,
        }
    }
}

impl FlowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_anchor("anchor_x", self.anchor_x)?;
        check_anchor("anchor_y", self.anchor_y)?;
        check_gap("gap", self.gap)?;
        check_gap("line_gap", self.line_gap)
    }
}

/// Configuration options for the demo scenes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas size (width, height)
    pub canvas: (i32, i32),

    /// Inset applied to the canvas before placing content
    pub margin: i32,

    /// Spacing between stacked elements outside of flows
    pub spacing: i32,

    pub flow: FlowConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: (100, 100),
            margin: 10,
            spacing: 4,
            flow: FlowConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = self.canvas;
        if w <= 0 || h <= 0 {
            return Err(ConfigError::InvalidCanvas {
                width: w,
                height: h,
            });
        }
        check_gap("margin", self.margin as f64)?;
        check_gap("spacing", self.spacing as f64)?;
        self.flow.validate()
    }

    /// Set the canvas size
    pub fn with_canvas(mut self, width: i32, height: i32) -> Self {
        self.canvas = (width, height);
        self
    }

    /// Set the canvas margin
    pub fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the spacing between stacked elements
    pub fn with_spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the flow preset
    pub fn with_flow(mut self, flow: FlowConfig) -> Self {
        self.flow = flow;
        self
    }
}

fn check_anchor(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidAnchor { field, value })
    }
}

fn check_gap(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeSpacing { field, value })
    }
}
