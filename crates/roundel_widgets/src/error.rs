//! Widget error types

use std::io;

use roundel_svg::SvgError;
use thiserror::Error;

/// Errors raised while painting one phase of a control
///
/// The renderer logs these and moves on to the next phase.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The host text measurer could not measure a string
    #[error("text measurement failed: {0}")]
    Measure(String),

    /// Bounds or scale unusable for layout
    #[error("invalid geometry: {0}")]
    Geometry(String),

    /// Icon could not be loaded or rasterized
    #[error("icon error: {0}")]
    Icon(#[from] SvgError),
}

/// Errors raised while loading a theme file
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme: {0}")]
    Io(#[from] io::Error),

    #[error("invalid theme file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color string that is not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid color for `{field}`: {value:?}")]
    Color { field: String, value: String },
}
