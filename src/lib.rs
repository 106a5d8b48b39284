//! Align Layout - relative rectangle alignment for screen layouts
//!
//! This library provides rectangle geometry, linked node groups that move as
//! one, composite groups and a wrapping flow layout, plus a small set of demo
//! scenes rendered to SVG.
//!
//! # Example
//!
//! ```rust
//! use align_layout::layout::Rect;
//!
//! let screen = Rect::wh(100, 100);
//! let (bar, _content) = screen.cut_top(10);
//! let title = Rect::wh(30, 10).center_of(&bar);
//! assert_eq!(title, Rect::xywh(35, 0, 30, 10));
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod scenes;
pub mod stylesheet;

pub use error::ConfigError;
pub use layout::LayoutConfig;
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use scenes::{build_scene, scene_names, Fill, Scene};

use log::debug;
use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// No scene with the requested name
    #[error("unknown scene '{name}' (available: {available})")]
    UnknownScene { name: String, available: String },

    /// Invalid layout configuration
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Stylesheet could not be loaded
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: log every placed fill
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a named scene to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use align_layout::render;
///
/// let svg = render("status").unwrap();
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains(r#"id="title""#));
/// ```
pub fn render(name: &str) -> Result<String, RenderError> {
    render_scene(name, &RenderConfig::default())
}

/// Render a named scene to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use align_layout::{render_scene, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_canvas(200, 200))
///     .with_svg(SvgConfig::default().with_xml_header(false));
///
/// let svg = render_scene("wrap", &config).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_scene(name: &str, config: &RenderConfig) -> Result<String, RenderError> {
    config.layout.validate()?;

    let scene = build_scene(name, &config.layout).ok_or_else(|| RenderError::UnknownScene {
        name: name.to_string(),
        available: scene_names().join(", "),
    })?;

    if config.debug {
        debug!("=== {} {} ===", scene.name, scene.bounds);
        for fill in &scene.fills {
            let label = fill.label.as_deref().unwrap_or("<anon>");
            debug!("[{}] {} {}", label, fill.role, fill.rect);
        }
    }

    Ok(render_svg_with_stylesheet(
        &scene,
        &config.svg,
        &config.stylesheet,
    ))
}
