//! SVG document type and loading

use std::fs;
use std::path::Path as FilePath;

use roundel_core::{Brush, Gradient, Path, Point, Rect, Stroke};
use usvg::{Options, Tree};

use crate::error::SvgError;
use crate::path::usvg_path_to_core;
use crate::style::{fill_to_brush, stroke_to_core};

/// Fill rule for SVG fills
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// A drawing command extracted from the SVG
///
/// Paths are already in document coordinates. `opacity` is the fill or stroke
/// opacity and is also folded into the brush alpha.
#[derive(Clone, Debug, PartialEq)]
pub enum SvgDrawCommand {
    /// Fill a path with a brush
    FillPath {
        path: Path,
        brush: Brush,
        rule: FillRule,
        opacity: f32,
    },
    /// Stroke a path with a stroke style and brush
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
        opacity: f32,
    },
}

/// A loaded and parsed SVG document
///
/// Immutable after loading. Recoloring works on a copy of `commands()`.
#[derive(Clone)]
pub struct SvgDocument {
    /// The underlying usvg tree
    tree: Tree,
    /// Draw commands extracted once at load time
    commands: Vec<SvgDrawCommand>,
    /// Original viewBox/size of the SVG
    pub width: f32,
    pub height: f32,
}

impl SvgDocument {
    /// Load an SVG document from a file
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, SvgError> {
        let data = fs::read(path)?;
        Self::from_data(&data)
    }

    /// Load an SVG document from raw bytes
    pub fn from_data(data: &[u8]) -> Result<Self, SvgError> {
        let options = Options::default();
        let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();
        let mut commands = Vec::new();
        extract_commands(tree.root(), &mut commands);

        Ok(Self {
            tree,
            commands,
            width: size.width(),
            height: size.height(),
        })
    }

    /// Load an SVG document from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(svg_str: &str) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes())
    }

    /// Get the original size of the SVG
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Get the bounding box of the SVG content
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The parsed tree, used for direct resvg rendering
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Pristine drawing commands of the document
    pub fn commands(&self) -> &[SvgDrawCommand] {
        &self.commands
    }
}

impl std::fmt::Debug for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgDocument")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("commands", &self.commands.len())
            .finish()
    }
}

/// Recursively extract commands from the node tree
fn extract_commands(group: &usvg::Group, commands: &mut Vec<SvgDrawCommand>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => {
                // Transforms are handled per path via abs_transform
                extract_commands(g, commands);
            }
            usvg::Node::Path(p) => {
                let transform = p.abs_transform();
                let path = apply_transform(&usvg_path_to_core(p.data()), &transform);

                if let Some(fill) = p.fill() {
                    if let Some((brush, opacity)) = fill_to_brush(fill) {
                        let rule = match fill.rule() {
                            usvg::FillRule::NonZero => FillRule::NonZero,
                            usvg::FillRule::EvenOdd => FillRule::EvenOdd,
                        };
                        commands.push(SvgDrawCommand::FillPath {
                            path: path.clone(),
                            brush: transform_brush(brush, &transform),
                            rule,
                            opacity,
                        });
                    }
                }

                if let Some(stroke) = p.stroke() {
                    if let Some((mut core_stroke, brush, opacity)) = stroke_to_core(stroke) {
                        core_stroke.width *= transform_scale(&transform);
                        commands.push(SvgDrawCommand::StrokePath {
                            path,
                            stroke: core_stroke,
                            brush: transform_brush(brush, &transform),
                            opacity,
                        });
                    }
                }
            }
            usvg::Node::Image(_) => {
                tracing::debug!("embedded svg image skipped");
            }
            usvg::Node::Text(_) => {
                // Text is converted to paths by usvg
            }
        }
    }
}

fn map_point(transform: &usvg::Transform, p: Point) -> Point {
    let (sx, ky, kx, sy, tx, ty) = (
        transform.sx as f32,
        transform.ky as f32,
        transform.kx as f32,
        transform.sy as f32,
        transform.tx as f32,
        transform.ty as f32,
    );
    Point::new(sx * p.x + kx * p.y + tx, ky * p.x + sy * p.y + ty)
}

/// Uniform scale factor of a transform
fn transform_scale(transform: &usvg::Transform) -> f32 {
    let det = transform.sx * transform.sy - transform.kx * transform.ky;
    (det.abs() as f32).sqrt()
}

/// Apply a usvg Transform to a Roundel Path
fn apply_transform(path: &Path, transform: &usvg::Transform) -> Path {
    if transform.is_identity() {
        return path.clone();
    }
    path.map_points(|p| map_point(transform, p))
}

/// Move gradient geometry into document coordinates
fn transform_brush(brush: Brush, transform: &usvg::Transform) -> Brush {
    if transform.is_identity() {
        return brush;
    }
    match brush {
        Brush::Solid(_) => brush,
        Brush::Gradient(Gradient::Linear { start, end, stops }) => Brush::Gradient(Gradient::Linear {
            start: map_point(transform, start),
            end: map_point(transform, end),
            stops,
        }),
        Brush::Gradient(Gradient::Radial {
            center,
            radius,
            stops,
        }) => Brush::Gradient(Gradient::Radial {
            center: map_point(transform, center),
            radius: radius * transform_scale(transform),
            stops,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundel_core::Color;

    #[test]
    fn test_parse_simple_svg() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <rect x="10" y="10" width="80" height="80" fill="red"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        assert_eq!(doc.width, 100.0);
        assert_eq!(doc.height, 100.0);
        assert!(!doc.commands().is_empty());
    }

    #[test]
    fn test_parse_path_svg() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <path d="M10,10 L90,10 L90,90 L10,90 Z" fill="blue" stroke="black" stroke-width="2"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        // Should have both fill and stroke commands
        assert!(doc.commands().len() >= 2);
    }

    #[test]
    fn test_fill_only_no_stroke() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
                <path d="M10 8 L18 12 L10 16 Z" fill="white"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        let fill_count = doc
            .commands()
            .iter()
            .filter(|c| matches!(c, SvgDrawCommand::FillPath { .. }))
            .count();
        let stroke_count = doc
            .commands()
            .iter()
            .filter(|c| matches!(c, SvgDrawCommand::StrokePath { .. }))
            .count();

        assert_eq!(fill_count, 1);
        assert_eq!(stroke_count, 0);
    }

    #[test]
    fn test_fill_opacity_is_carried() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
                <rect width="24" height="24" fill="black" fill-opacity="0.5" fill-rule="evenodd"/>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        match &doc.commands()[0] {
            SvgDrawCommand::FillPath {
                brush,
                rule,
                opacity,
                ..
            } => {
                assert_eq!(*opacity, 0.5);
                assert_eq!(*rule, FillRule::EvenOdd);
                assert_eq!(brush.primary_color(), Color::rgba(0.0, 0.0, 0.0, 0.5));
            }
            other => panic!("expected a fill, got {other:?}"),
        }
    }

    #[test]
    fn test_group_transform_applied() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="40" height="40">
                <g transform="translate(10 5)">
                    <rect width="10" height="10" fill="red"/>
                </g>
            </svg>
        "#;

        let doc = SvgDocument::from_str(svg).unwrap();
        match &doc.commands()[0] {
            SvgDrawCommand::FillPath { path, .. } => {
                assert_eq!(path.bounds(), Rect::new(10.0, 5.0, 10.0, 10.0));
            }
            other => panic!("expected a fill, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_svg_is_parse_error() {
        assert!(matches!(
            SvgDocument::from_str("not an svg"),
            Err(SvgError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            SvgDocument::from_file("/definitely/missing/icon.svg"),
            Err(SvgError::Io(_))
        ));
    }
}
