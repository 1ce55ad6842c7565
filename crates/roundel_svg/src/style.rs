//! SVG style conversion to Roundel types

use roundel_core::{Brush, Color, Gradient, GradientStop, LineCap, LineJoin, Point, Stroke};

fn usvg_color(color: usvg::Color, alpha: f32) -> Color {
    Color::rgba(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        alpha,
    )
}

fn gradient_stops(stops: &[usvg::Stop], opacity: f32) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|s| {
            GradientStop::new(
                s.offset().get(),
                usvg_color(s.color(), s.opacity().get() * opacity),
            )
        })
        .collect()
}

/// Convert usvg Paint to a Roundel Brush
pub fn paint_to_brush(paint: &usvg::Paint, opacity: f32) -> Option<Brush> {
    match paint {
        usvg::Paint::Color(color) => Some(Brush::Solid(usvg_color(*color, opacity))),
        usvg::Paint::LinearGradient(lg) => {
            let gradient = Gradient::linear_with_stops(
                Point::new(lg.x1() as f32, lg.y1() as f32),
                Point::new(lg.x2() as f32, lg.y2() as f32),
                gradient_stops(lg.stops(), opacity),
            );
            Some(Brush::Gradient(gradient))
        }
        usvg::Paint::RadialGradient(rg) => {
            let gradient = Gradient::radial_with_stops(
                Point::new(rg.cx() as f32, rg.cy() as f32),
                rg.r().get() as f32,
                gradient_stops(rg.stops(), opacity),
            );
            Some(Brush::Gradient(gradient))
        }
        usvg::Paint::Pattern(_) => {
            tracing::debug!("svg pattern paint replaced with gray");
            Some(Brush::Solid(Color::rgba(0.5, 0.5, 0.5, opacity)))
        }
    }
}

/// Convert usvg Fill to a Brush plus its fill opacity
pub fn fill_to_brush(fill: &usvg::Fill) -> Option<(Brush, f32)> {
    let opacity = fill.opacity().get();
    paint_to_brush(fill.paint(), opacity).map(|brush| (brush, opacity))
}

/// Convert usvg Stroke to a Roundel Stroke, Brush and stroke opacity
pub fn stroke_to_core(stroke: &usvg::Stroke) -> Option<(Stroke, Brush, f32)> {
    let opacity = stroke.opacity().get();
    let brush = paint_to_brush(stroke.paint(), opacity)?;

    let cap = match stroke.linecap() {
        usvg::LineCap::Butt => LineCap::Butt,
        usvg::LineCap::Round => LineCap::Round,
        usvg::LineCap::Square => LineCap::Square,
    };

    let join = match stroke.linejoin() {
        usvg::LineJoin::Miter | usvg::LineJoin::MiterClip => LineJoin::Miter,
        usvg::LineJoin::Round => LineJoin::Round,
        usvg::LineJoin::Bevel => LineJoin::Bevel,
    };

    let mut core_stroke = Stroke::new(stroke.width().get() as f32)
        .with_cap(cap)
        .with_join(join);
    core_stroke.miter_limit = stroke.miterlimit().get() as f32;

    if let Some(dasharray) = stroke.dasharray() {
        let dashes: Vec<f32> = dasharray.iter().map(|&d| d as f32).collect();
        core_stroke = core_stroke.with_dash(dashes, stroke.dashoffset() as f32);
    }

    Some((core_stroke, brush, opacity))
}
