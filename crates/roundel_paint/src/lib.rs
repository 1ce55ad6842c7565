//! Roundel Paint API
//!
//! Rounded geometry for custom-painted controls. All core types are unified
//! with roundel_core so contours turn straight into `Path`s for any
//! `DrawContext`.
//!
//! # Features
//!
//! - Rounded rectangle and ellipse contours with radius clamping
//! - Inset/expand derivation for borders, shadows, glows and focus outlines
//! - Open arcs for spinners
//! - A recording `PaintContext` with a Canvas-like API
//!
//! # Example
//!
//! ```ignore
//! use roundel_paint::{rounded_rect_path, ContourExt, PaintContext};
//!
//! let mut ctx = PaintContext::new(200.0, 100.0);
//! let body = rounded_rect_path(Rect::new(10.0, 10.0, 120.0, 36.0), 12.0);
//! ctx.fill_contour(&body, Color::WHITE.into());
//!
//! let commands = ctx.take_commands();
//! ```

pub mod context;
pub mod geometry;

pub use context::{ContourExt, PaintContext};
pub use geometry::{
    arc_path, ellipse_path, expand_contour, inset_contour, rounded_rect_path, Contour,
    ContourShape, Segment, QUARTER_ARC_KAPPA,
};

// ─────────────────────────────────────────────────────────────────────────────
// Core type re-exports from roundel_core (unified type system)
// ─────────────────────────────────────────────────────────────────────────────

pub use roundel_core::{
    Brush, Color, DrawCommand, DrawContext, DrawContextExt, Gradient, GradientStop, LineCap,
    LineJoin, Path, PathCommand, Point, Rect, Size, Stroke, TextStyle,
};
