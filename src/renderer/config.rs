//! Output options for the SVG renderer

use serde::Deserialize;

/// Controls how a scene is written out as SVG.
///
/// Loadable from TOML; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` declaration before the root element
    pub xml_header: bool,

    /// Spaces per nesting level; `0` writes the document on one line
    pub indent: usize,

    /// Extra canvas shown around the scene bounds, in scene units
    pub margin: f64,

    /// Prepended to every generated CSS class
    pub class_prefix: String,

    /// Class shared by every filled rect, written before the role class
    pub fill_class: String,

    /// Write fill labels as `id` attributes
    pub label_ids: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            xml_header: true,
            indent: 2,
            margin: 0.0,
            class_prefix: "al-".to_string(),
            fill_class: "fill".to_string(),
            label_ids: true,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_xml_header(mut self, xml_header: bool) -> Self {
        self.xml_header = xml_header;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Single-line output
    pub fn compact(self) -> Self {
        self.with_indent(0)
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the class prefix; an empty prefix leaves class names bare
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the shared fill class; an empty name omits it
    pub fn with_fill_class(mut self, class: impl Into<String>) -> Self {
        self.fill_class = class.into();
        self
    }

    pub fn with_label_ids(mut self, label_ids: bool) -> Self {
        self.label_ids = label_ids;
        self
    }

    /// `name` with the class prefix applied
    pub fn class(&self, name: &str) -> String {
        format!("{}{}", self.class_prefix, name)
    }

    /// Space-separated `class` attribute value for a fill of `role`
    pub fn fill_classes(&self, role: &str) -> String {
        if self.fill_class.is_empty() {
            self.class(role)
        } else {
            format!("{} {}", self.class(&self.fill_class), self.class(role))
        }
    }

    /// Leading whitespace for an element nested `depth` levels deep
    pub fn indentation(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }

    pub fn line_end(&self) -> &'static str {
        if self.indent == 0 {
            ""
        } else {
            "\n"
        }
    }
}
