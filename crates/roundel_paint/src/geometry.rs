//! Rounded contour geometry
//!
//! Builds closed outlines from a bounding box and a corner radius. Borders,
//! shadows, glows and focus outlines are all derived from a base contour by
//! insetting or expanding it, so every layer of a control shares one shape.
//!
//! # Example
//!
//! ```ignore
//! use roundel_paint::geometry::{rounded_rect_path, inset_contour};
//!
//! let body = rounded_rect_path(Rect::new(0.0, 0.0, 120.0, 36.0), 12.0);
//! let focus = inset_contour(&body, 2.0, body.radius() - 2.0);
//! ctx.fill_path(&body.to_path(), Color::WHITE.into());
//! ```

use smallvec::SmallVec;

use roundel_core::{Path, PathCommand, Point, Rect};

/// Cubic control distance for a quarter circle
pub const QUARTER_ARC_KAPPA: f32 = 0.552_284_8;

// ─────────────────────────────────────────────────────────────────────────────
// Segments
// ─────────────────────────────────────────────────────────────────────────────

/// One piece of a contour outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Straight edge
    Line { from: Point, to: Point },
    /// Elliptical arc, angles in degrees measured clockwise from +x (y-down)
    Arc {
        center: Point,
        radius_x: f32,
        radius_y: f32,
        start: f32,
        sweep: f32,
    },
}

impl Segment {
    fn start_point(&self) -> Point {
        match *self {
            Segment::Line { from, .. } => from,
            Segment::Arc {
                center,
                radius_x,
                radius_y,
                start,
                ..
            } => point_on_ellipse(center, radius_x, radius_y, start),
        }
    }
}

/// Shape family a contour was built from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContourShape {
    RoundedRect,
    Ellipse,
}

// ─────────────────────────────────────────────────────────────────────────────
// Contour
// ─────────────────────────────────────────────────────────────────────────────

/// A closed outline of line and arc segments
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    segments: SmallVec<[Segment; 8]>,
    bounds: Rect,
    radius: f32,
    shape: ContourShape,
    degenerate: bool,
}

impl Contour {
    fn degenerate(rect: Rect, shape: ContourShape) -> Self {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            segments: SmallVec::new(),
            bounds: Rect::new(finite(rect.x()), finite(rect.y()), 0.0, 0.0),
            radius: 0.0,
            shape,
            degenerate: true,
        }
    }

    /// Segments in drawing order, empty when degenerate
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Exact bounding box of the outline
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Effective corner radius after clamping
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn shape(&self) -> ContourShape {
        self.shape
    }

    /// True when the source bounds had no area; callers skip drawing
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Convert to a closed path, approximating arcs with cubic Béziers
    pub fn to_path(&self) -> Path {
        let Some(first) = self.segments.first() else {
            return Path::new();
        };

        let mut commands = Vec::with_capacity(self.segments.len() * 2 + 2);
        commands.push(PathCommand::MoveTo(first.start_point()));
        for segment in &self.segments {
            match *segment {
                Segment::Line { to, .. } => commands.push(PathCommand::LineTo(to)),
                Segment::Arc {
                    center,
                    radius_x,
                    radius_y,
                    start,
                    sweep,
                } => push_arc(&mut commands, center, radius_x, radius_y, start, sweep),
            }
        }
        commands.push(PathCommand::Close);
        Path::from_commands(commands)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builders
// ─────────────────────────────────────────────────────────────────────────────

/// Clamp a requested radius to what fits the rect
fn clamp_radius(rect: Rect, radius: f32) -> f32 {
    let limit = rect.width().min(rect.height()) / 2.0;
    if radius.is_finite() {
        radius.clamp(0.0, limit)
    } else {
        0.0
    }
}

/// Closed rounded rectangle; the radius is clamped to `min(w, h) / 2`
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Contour {
    if rect.is_degenerate() {
        return Contour::degenerate(rect, ContourShape::RoundedRect);
    }

    let r = clamp_radius(rect, radius);
    let (x, y, right, bottom) = (rect.x(), rect.y(), rect.right(), rect.bottom());
    let mut segments: SmallVec<[Segment; 8]> = SmallVec::new();

    let line = |from: Point, to: Point, segments: &mut SmallVec<[Segment; 8]>| {
        if from != to {
            segments.push(Segment::Line { from, to });
        }
    };
    let corner = |cx: f32, cy: f32, start: f32| Segment::Arc {
        center: Point::new(cx, cy),
        radius_x: r,
        radius_y: r,
        start,
        sweep: 90.0,
    };

    // Clockwise from the top-left tangent point
    line(Point::new(x + r, y), Point::new(right - r, y), &mut segments);
    if r > 0.0 {
        segments.push(corner(right - r, y + r, 270.0));
    }
    line(Point::new(right, y + r), Point::new(right, bottom - r), &mut segments);
    if r > 0.0 {
        segments.push(corner(right - r, bottom - r, 0.0));
    }
    line(Point::new(right - r, bottom), Point::new(x + r, bottom), &mut segments);
    if r > 0.0 {
        segments.push(corner(x + r, bottom - r, 90.0));
    }
    line(Point::new(x, bottom - r), Point::new(x, y + r), &mut segments);
    if r > 0.0 {
        segments.push(corner(x + r, y + r, 180.0));
    }

    Contour {
        segments,
        bounds: rect,
        radius: r,
        shape: ContourShape::RoundedRect,
        degenerate: false,
    }
}

/// Closed ellipse inscribed in `rect`
pub fn ellipse_path(rect: Rect) -> Contour {
    if rect.is_degenerate() {
        return Contour::degenerate(rect, ContourShape::Ellipse);
    }

    let center = rect.center();
    let (rx, ry) = (rect.width() / 2.0, rect.height() / 2.0);
    let segments = [0.0_f32, 90.0, 180.0, 270.0]
        .iter()
        .map(|&start| Segment::Arc {
            center,
            radius_x: rx,
            radius_y: ry,
            start,
            sweep: 90.0,
        })
        .collect();

    Contour {
        segments,
        bounds: rect,
        radius: rx.min(ry),
        shape: ContourShape::Ellipse,
        degenerate: false,
    }
}

/// Shrink a contour by `inset` on every side with a new corner radius
///
/// Ellipses stay ellipses and ignore `new_radius`.
pub fn inset_contour(contour: &Contour, inset: f32, new_radius: f32) -> Contour {
    let rect = contour.bounds();
    let shrunk = Rect::new(
        rect.x() + inset,
        rect.y() + inset,
        rect.width() - 2.0 * inset,
        rect.height() - 2.0 * inset,
    );
    if contour.is_degenerate() {
        return Contour::degenerate(shrunk, contour.shape());
    }
    match contour.shape() {
        ContourShape::RoundedRect => rounded_rect_path(shrunk, new_radius),
        ContourShape::Ellipse => ellipse_path(shrunk),
    }
}

/// Grow a contour by `amount` on every side with a new corner radius
pub fn expand_contour(contour: &Contour, amount: f32, new_radius: f32) -> Contour {
    inset_contour(contour, -amount, new_radius)
}

/// Open circular arc; angles in degrees, clockwise in y-down space from +x
pub fn arc_path(center: Point, radius: f32, start_deg: f32, sweep_deg: f32) -> Path {
    if !(radius.is_finite() && radius > 0.0 && start_deg.is_finite() && sweep_deg.is_finite()) {
        return Path::new();
    }
    let sweep = sweep_deg.clamp(-360.0, 360.0);

    let mut commands = Vec::with_capacity(6);
    commands.push(PathCommand::MoveTo(point_on_ellipse(
        center, radius, radius, start_deg,
    )));
    push_arc(&mut commands, center, radius, radius, start_deg, sweep);
    Path::from_commands(commands)
}

// ─────────────────────────────────────────────────────────────────────────────
// Arc approximation
// ─────────────────────────────────────────────────────────────────────────────

fn point_on_ellipse(center: Point, rx: f32, ry: f32, angle_deg: f32) -> Point {
    let (sin, cos) = exact_sin_cos(angle_deg);
    Point::new(center.x + rx * cos, center.y + ry * sin)
}

/// sin/cos with exact results on multiples of 90°
fn exact_sin_cos(angle_deg: f32) -> (f32, f32) {
    let normalized = angle_deg.rem_euclid(360.0);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}

/// Append cubic pieces of at most 90° each
fn push_arc(
    commands: &mut Vec<PathCommand>,
    center: Point,
    rx: f32,
    ry: f32,
    start: f32,
    sweep: f32,
) {
    let pieces = (sweep.abs() / 90.0).ceil().max(1.0) as usize;
    let step = sweep / pieces as f32;
    let k = 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

    for i in 0..pieces {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        let (s0, c0) = exact_sin_cos(a0);
        let (s1, c1) = exact_sin_cos(a1);

        let p0 = Point::new(center.x + rx * c0, center.y + ry * s0);
        let p3 = Point::new(center.x + rx * c1, center.y + ry * s1);
        let control1 = Point::new(p0.x - k * rx * s0, p0.y + k * ry * c0);
        let control2 = Point::new(p3.x + k * rx * s1, p3.y - k * ry * c1);

        commands.push(PathCommand::CubicTo {
            control1,
            control2,
            end: p3,
        });
    }
}
