//! Paint context - Canvas-like drawing API implementing DrawContext
//!
//! PaintContext provides a small Canvas-style API on top of the unified
//! DrawContext trait, and `ContourExt` lets any DrawContext draw contours
//! directly while skipping degenerate ones.

use std::sync::Arc;

use roundel_core::{
    Bitmap, Brush, Color, DrawCommand, DrawContext, ImageOptions, Path, Point, Rect,
    RecordingContext, Size, Stroke, TextStyle,
};

use crate::geometry::{ellipse_path, Contour};

/// The paint context used for custom 2D drawing
///
/// PaintContext wraps a RecordingContext to record draw commands,
/// while providing a Canvas-like API for convenience.
pub struct PaintContext {
    recording: RecordingContext,
}

impl PaintContext {
    /// Create a new paint context with the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            recording: RecordingContext::new(Size::new(width, height)),
        }
    }

    /// Create from a Size
    pub fn from_size(size: Size) -> Self {
        Self {
            recording: RecordingContext::new(size),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recording.take_commands()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Canvas-like convenience API
    // ═══════════════════════════════════════════════════════════════════════════

    /// Fill a rectangle at (x, y) with width/height and a brush
    pub fn fill_rect_xywh(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        brush: impl Into<Brush>,
    ) {
        self.fill_path(&Path::rect(Rect::new(x, y, width, height)), brush.into());
    }

    /// Stroke a rectangle at (x, y) with width/height
    pub fn stroke_rect_xywh(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: &Stroke,
        brush: impl Into<Brush>,
    ) {
        self.stroke_path(
            &Path::rect(Rect::new(x, y, width, height)),
            stroke,
            brush.into(),
        );
    }

    /// Fill a circle at (cx, cy) with radius
    pub fn fill_circle_xyr(&mut self, cx: f32, cy: f32, radius: f32, brush: impl Into<Brush>) {
        let contour = ellipse_path(Rect::from_center(
            Point::new(cx, cy),
            Size::new(radius * 2.0, radius * 2.0),
        ));
        self.fill_contour(&contour, brush.into());
    }

    /// Draw text at (x, y) with size and color
    pub fn draw_text_simple(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    ) {
        self.draw_text(
            &text.into(),
            Point::new(x, y),
            &TextStyle::new(size).with_color(color),
        );
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DrawContext Implementation - delegates to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl DrawContext for PaintContext {
    fn push_opacity(&mut self, opacity: f32) {
        self.recording.push_opacity(opacity);
    }

    fn pop_opacity(&mut self) {
        self.recording.pop_opacity();
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.recording.fill_path(path, brush);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.recording.stroke_path(path, stroke, brush);
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.recording.draw_text(text, origin, style);
    }

    fn draw_bitmap(&mut self, bitmap: &Arc<Bitmap>, rect: Rect, options: &ImageOptions) {
        self.recording.draw_bitmap(bitmap, rect, options);
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }

    fn current_opacity(&self) -> f32 {
        self.recording.current_opacity()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Contour drawing
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw contours on any DrawContext
///
/// Degenerate contours are skipped; the return value reports whether anything
/// was emitted.
pub trait ContourExt: DrawContext {
    fn fill_contour(&mut self, contour: &Contour, brush: Brush) -> bool {
        if contour.is_degenerate() {
            tracing::trace!(bounds = ?contour.bounds(), "skipping degenerate contour");
            return false;
        }
        self.fill_path(&contour.to_path(), brush);
        true
    }

    fn stroke_contour(&mut self, contour: &Contour, stroke: &Stroke, brush: Brush) -> bool {
        if contour.is_degenerate() || stroke.width <= 0.0 {
            return false;
        }
        self.stroke_path(&contour.to_path(), stroke, brush);
        true
    }
}

impl<T: DrawContext + ?Sized> ContourExt for T {}
