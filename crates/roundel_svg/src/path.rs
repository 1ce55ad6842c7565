//! SVG path conversion to Roundel Path

use roundel_core::{Path, PathCommand, Point};

/// Convert usvg path data to a Roundel Path
pub fn usvg_path_to_core(path_data: &usvg::tiny_skia_path::Path) -> Path {
    use usvg::tiny_skia_path::PathSegment;

    let commands = path_data
        .segments()
        .map(|segment| match segment {
            PathSegment::MoveTo(p) => PathCommand::MoveTo(Point::new(p.x, p.y)),
            PathSegment::LineTo(p) => PathCommand::LineTo(Point::new(p.x, p.y)),
            PathSegment::QuadTo(c, e) => PathCommand::QuadTo {
                control: Point::new(c.x, c.y),
                end: Point::new(e.x, e.y),
            },
            PathSegment::CubicTo(c1, c2, e) => PathCommand::CubicTo {
                control1: Point::new(c1.x, c1.y),
                control2: Point::new(c2.x, c2.y),
                end: Point::new(e.x, e.y),
            },
            PathSegment::Close => PathCommand::Close,
        })
        .collect();

    Path::from_commands(commands)
}

/// Build a tiny-skia path; `None` when the path has no drawable segments
pub fn core_path_to_skia(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = tiny_skia::PathBuilder::new();
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
            PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            PathCommand::QuadTo { control, end } => {
                builder.quad_to(control.x, control.y, end.x, end.y)
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => builder.cubic_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y),
            PathCommand::Close => builder.close(),
        }
    }
    builder.finish()
}
