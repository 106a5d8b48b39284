//! SVG generation from scenes

use std::collections::BTreeSet;

use crate::layout::Rect;
use crate::scenes::Scene;
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
        }
    }

    /// Add one CSS rule per role, resolving colors through the stylesheet
    pub fn add_role_styles<'r>(
        &mut self,
        stylesheet: &Stylesheet,
        roles: impl IntoIterator<Item = &'r str>,
    ) {
        for role in roles {
            self.styles.push(format!(
                ".{} {{ fill: {}; }}",
                self.config.class(role),
                stylesheet.resolve_or_default(role)
            ));
        }
    }

    /// Add a filled rectangle
    pub fn add_rect(&mut self, id: Option<&str>, rect: Rect<i32>, role: &str) {
        let id_attr = id
            .filter(|_| self.config.label_ids)
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let (x, y, w, h) = rect.to_image_xywh();

        self.elements.push(format!(
            r#"{}<rect{} class="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            self.config.indentation(1),
            id_attr,
            escape_xml(&self.config.fill_classes(role)),
            x,
            y,
            w,
            h
        ));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: Rect<i32>) -> String {
        let margin = self.config.margin;
        let vb_x = viewbox.min.x as f64 - margin;
        let vb_y = viewbox.min.y as f64 - margin;
        let vb_w = viewbox.dx() as f64 + 2.0 * margin;
        let vb_h = viewbox.dy() as f64 + 2.0 * margin;

        let nl = self.config.line_end();

        let mut svg = String::new();

        if self.config.xml_header {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            vb_w, vb_h, vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(&self.config.indentation(1));
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(&self.config.indentation(2));
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(&self.config.indentation(1));
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a scene to an SVG string (with default stylesheet)
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(scene, config, &Stylesheet::default())
}

/// Render a scene to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    scene: &Scene,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    // Sorted so the style block is stable across runs
    let roles: BTreeSet<&str> = scene.fills.iter().map(|f| f.role.as_str()).collect();
    builder.add_role_styles(stylesheet, roles);

    for fill in &scene.fills {
        builder.add_rect(fill.label.as_deref(), fill.rect, &fill.role);
    }

    builder.build(scene.bounds)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
