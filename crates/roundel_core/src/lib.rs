//! Roundel Core
//!
//! Foundational types shared by every Roundel crate:
//!
//! - **Geometry**: points, sizes, rectangles and edge insets in logical pixels
//! - **Color**: RGBA colors, gradients and brushes
//! - **Draw Context**: the drawing surface controls paint into, plus a
//!   recording implementation for tests and deferred execution
//!
//! # Example
//!
//! ```rust
//! use roundel_core::{Color, DrawContext, Path, Rect, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 100.0));
//! ctx.fill_path(&Path::rect(Rect::new(0.0, 0.0, 50.0, 20.0)), Color::WHITE.into());
//! assert_eq!(ctx.commands().len(), 1);
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Brush, Color, Gradient, GradientStop};
pub use draw::{
    Bitmap, DrawCommand, DrawContext, DrawContextExt, FontWeight, ImageOptions, LineCap, LineJoin,
    Path, PathCommand, RecordingContext, Stroke, TextAlign, TextBaseline, TextStyle,
};
pub use geometry::{EdgeInsets, Point, Rect, Size};
