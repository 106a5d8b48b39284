//! Error types for configuration loading and validation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse layout config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("canvas must be positive, got {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("{field} must lie within [0, 1], got {value}")]
    InvalidAnchor { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    NegativeSpacing { field: &'static str, value: f64 },
}
