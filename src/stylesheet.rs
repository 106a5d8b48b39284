//! Fill palettes for rendered scenes
//!
//! Scenes tag every box with a symbolic role (`screen`, `panel`, `item`, ...)
//! rather than a concrete color. A stylesheet resolves those roles, so the
//! same layout can be rendered with different palettes.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A stylesheet mapping fill roles to concrete colors
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: role name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in palette, one entry per role used by the demo scenes
const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("screen", "#0000ff"),
    ("panel", "#00ffff"),
    ("item", "#ff00ff"),
    ("accent", "#ff0000"),
    ("highlight", "#ffff00"),
    ("muted", "#00ff00"),
];

/// Color used for roles no palette defines
const FALLBACK_COLOR: &str = "#333333";

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a role to a concrete color
    ///
    /// Returns None if the role is not defined in this stylesheet.
    pub fn resolve(&self, role: &str) -> Option<&str> {
        self.colors.get(role).map(|s| s.as_str())
    }

    /// Resolve a role, falling back to the built-in palette and then to a
    /// neutral gray
    pub fn resolve_or_default(&self, role: &str) -> String {
        if let Some(color) = self.resolve(role) {
            return color.to_string();
        }
        DEFAULT_PALETTE
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, color)| *color)
            .unwrap_or(FALLBACK_COLOR)
            .to_string()
    }

    /// Roles defined by this stylesheet, sorted by name
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = self.colors.keys().map(String::as_str).collect();
        roles.sort_unstable();
        roles
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            name: Some("default".to_string()),
            description: None,
            colors: DEFAULT_PALETTE
                .iter()
                .map(|(role, color)| (role.to_string(), color.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(
            stylesheet.roles(),
            vec!["accent", "highlight", "item", "muted", "panel", "screen"]
        );
    }

    #[test]
    fn test_resolve_existing_role() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("screen"), Some("#0000ff"));
        assert_eq!(stylesheet.resolve("accent"), Some("#ff0000"));
    }

    #[test]
    fn test_resolve_missing_role() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        assert_eq!(empty().resolve_or_default("panel"), "#00ffff");
        assert_eq!(empty().resolve_or_default("unknown"), FALLBACK_COLOR);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Night"
description = "Dark palette"

[colors]
screen = "#101020"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Night".to_string()));
        assert_eq!(stylesheet.description, Some("Dark palette".to_string()));
        assert_eq!(stylesheet.resolve("screen"), Some("#101020"));
        assert_eq!(stylesheet.resolve_or_default("item"), "#ff00ff");
    }

    #[test]
    fn test_parse_toml_without_colors() {
        let stylesheet = Stylesheet::from_str("[metadata]\nname = \"bare\"\n").expect("Should parse");
        assert!(stylesheet.colors.is_empty());
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(matches!(result, Err(StylesheetError::Parse(_))));
    }
}
