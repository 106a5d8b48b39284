//! SVG renderer for demo scenes
//!
//! This module takes a [`Scene`](crate::scenes::Scene) and produces an SVG
//! string with one CSS class per fill role.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet, SvgBuilder};
