//! SVG rasterization using resvg and tiny-skia
//!
//! Untouched documents are rendered straight from the usvg tree with resvg.
//! Recolored command lists are drawn with tiny-skia. Both fit the document
//! into the target size keeping aspect ratio, centered, and return straight
//! (non-premultiplied) RGBA.

use tiny_skia::{Pixmap, Transform};
use usvg::Tree;

use roundel_core::{Bitmap, Brush, Gradient, LineCap, LineJoin, Stroke};

use crate::document::{FillRule, SvgDocument, SvgDrawCommand};
use crate::error::SvgError;
use crate::path::core_path_to_skia;

/// Rasterize a parsed usvg Tree to the specified size
pub fn rasterize_tree(tree: &Tree, width: u32, height: u32) -> Result<Bitmap, SvgError> {
    let mut pixmap = new_pixmap(width, height)?;
    let size = tree.size();
    let transform = fit_transform(size.width(), size.height(), width, height);

    resvg::render(tree, transform, &mut pixmap.as_mut());

    pixmap_to_bitmap(&pixmap)
}

/// Rasterize a document's own commands or a recolored copy of them
pub fn rasterize_commands(
    document: &SvgDocument,
    commands: &[SvgDrawCommand],
    width: u32,
    height: u32,
) -> Result<Bitmap, SvgError> {
    let mut pixmap = new_pixmap(width, height)?;
    let transform = fit_transform(document.width, document.height, width, height);

    for command in commands {
        match command {
            SvgDrawCommand::FillPath {
                path, brush, rule, ..
            } => {
                let Some(path) = core_path_to_skia(path) else {
                    continue;
                };
                let paint = brush_to_paint(brush, 1.0);
                let rule = match rule {
                    FillRule::NonZero => tiny_skia::FillRule::Winding,
                    FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
                };
                pixmap.fill_path(&path, &paint, rule, transform, None);
            }
            SvgDrawCommand::StrokePath {
                path,
                stroke,
                brush,
                ..
            } => {
                let Some(path) = core_path_to_skia(path) else {
                    continue;
                };
                let paint = brush_to_paint(brush, 1.0);
                pixmap.stroke_path(&path, &paint, &stroke_to_skia(stroke), transform, None);
            }
        }
    }

    pixmap_to_bitmap(&pixmap)
}

fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, SvgError> {
    if width == 0 || height == 0 {
        return Err(SvgError::Raster(format!(
            "invalid dimensions {width}x{height}: width and height must be > 0"
        )));
    }
    Pixmap::new(width, height)
        .ok_or_else(|| SvgError::Raster(format!("failed to allocate a {width}x{height} pixmap")))
}

/// Scale-to-fit transform centering `src` inside the target
pub fn fit_transform(src_width: f32, src_height: f32, width: u32, height: u32) -> Transform {
    if src_width <= 0.0 || src_height <= 0.0 {
        return Transform::identity();
    }
    let scale = (width as f32 / src_width).min(height as f32 / src_height);
    let offset_x = (width as f32 - src_width * scale) / 2.0;
    let offset_y = (height as f32 - src_height * scale) / 2.0;
    Transform::from_scale(scale, scale).post_translate(offset_x, offset_y)
}

// ─────────────────────────────────────────────────────────────────────────────
// tiny-skia conversions
// ─────────────────────────────────────────────────────────────────────────────

fn skia_color(color: roundel_core::Color, opacity: f32) -> tiny_skia::Color {
    let c = |v: f32| v.clamp(0.0, 1.0);
    tiny_skia::Color::from_rgba(c(color.r), c(color.g), c(color.b), c(color.a * opacity))
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

/// Build an anti-aliased paint for a brush with an extra opacity factor
pub fn brush_to_paint(brush: &Brush, opacity: f32) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint {
        anti_alias: true,
        ..Default::default()
    };

    match brush {
        Brush::Solid(color) => paint.set_color(skia_color(*color, opacity)),
        Brush::Gradient(gradient) => {
            let stops: Vec<tiny_skia::GradientStop> = gradient
                .stops()
                .iter()
                .map(|s| tiny_skia::GradientStop::new(s.offset, skia_color(s.color, opacity)))
                .collect();
            let shader = match gradient {
                Gradient::Linear { start, end, .. } => tiny_skia::LinearGradient::new(
                    tiny_skia::Point::from_xy(start.x, start.y),
                    tiny_skia::Point::from_xy(end.x, end.y),
                    stops,
                    tiny_skia::SpreadMode::Pad,
                    Transform::identity(),
                ),
                Gradient::Radial { center, radius, .. } => {
                    let center = tiny_skia::Point::from_xy(center.x, center.y);
                    tiny_skia::RadialGradient::new(
                        center,
                        center,
                        *radius,
                        stops,
                        tiny_skia::SpreadMode::Pad,
                        Transform::identity(),
                    )
                }
            };
            // Degenerate gradients collapse to their first color
            paint.shader = shader.unwrap_or_else(|| {
                tiny_skia::Shader::SolidColor(skia_color(gradient.first_color(), opacity))
            });
        }
    }

    paint
}

/// Convert a Roundel stroke to a tiny-skia stroke
pub fn stroke_to_skia(stroke: &Stroke) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width: stroke.width,
        miter_limit: stroke.miter_limit,
        line_cap: match stroke.cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        },
        line_join: match stroke.join {
            LineJoin::Miter => tiny_skia::LineJoin::Miter,
            LineJoin::Round => tiny_skia::LineJoin::Round,
            LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
        },
        dash: if stroke.is_dashed() {
            tiny_skia::StrokeDash::new(stroke.dash.clone(), stroke.dash_offset)
        } else {
            None
        },
    }
}

/// Copy a pixmap into a straight-alpha Bitmap
pub fn pixmap_to_bitmap(pixmap: &Pixmap) -> Result<Bitmap, SvgError> {
    Bitmap::new(
        pixmap.width(),
        pixmap.height(),
        unpremultiply_alpha(pixmap.data()),
    )
    .ok_or_else(|| SvgError::Raster("pixel buffer size mismatch".into()))
}

/// Convert premultiplied alpha to straight alpha
///
/// tiny-skia outputs premultiplied alpha; bitmaps handed to hosts are straight.
pub fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).round().min(255.0) as u8;
            let g = (chunk[1] as f32 / a).round().min(255.0) as u8;
            let b = (chunk[2] as f32 / a).round().min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
