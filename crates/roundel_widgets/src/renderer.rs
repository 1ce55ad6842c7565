//! Layered control painting
//!
//! Every control paints in four fixed phases:
//!
//! 1. **Shadow** - soft outer layers below the body
//! 2. **Body** - fill and border from the resolved style
//! 3. **Content** - icon and text
//! 4. **Overlays** - loading dim layer, spinner, focus indication
//!
//! A failing phase is logged and skipped; the remaining phases still paint.
//!
//! # Example
//!
//! ```ignore
//! let measurer = FixedAdvanceMeasurer::default();
//! let frame = PaintFrame::new(button.bounds(), 1.5, &measurer);
//! let report = ControlRenderer::paint(&mut button, &mut ctx, &frame);
//! assert!(report.is_clean());
//! ```

use std::fmt;

use roundel_core::{Color, DrawContext, LineCap, LineJoin, Point, Rect, Stroke};
use roundel_paint::{arc_path, expand_contour, inset_contour, rounded_rect_path, Contour, ContourExt};

use crate::error::RenderError;
use crate::resolver::ResolvedStyle;
use crate::text::TextMeasurer;

/// Shadow layers are clamped to this many
pub const MAX_SHADOW_SOFTNESS: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Phases
// ─────────────────────────────────────────────────────────────────────────────

/// One painting pass, in paint order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Shadow,
    Body,
    Content,
    Overlays,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Shadow, Phase::Body, Phase::Content, Phase::Overlays];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Shadow => "shadow",
            Phase::Body => "body",
            Phase::Content => "content",
            Phase::Overlays => "overlays",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-paint inputs shared by all phases
pub struct PaintFrame<'a> {
    /// Control bounds in logical pixels
    pub bounds: Rect,
    /// Device pixels per logical pixel
    pub scale: f32,
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> PaintFrame<'a> {
    pub fn new(bounds: Rect, scale: f32, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            bounds,
            scale,
            measurer,
        }
    }

    /// The scale, or a geometry error when it is unusable
    pub fn checked_scale(&self) -> Result<f32, RenderError> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(self.scale)
        } else {
            Err(RenderError::Geometry(format!(
                "invalid resolution scale {}",
                self.scale
            )))
        }
    }
}

/// A custom-painted control
pub trait Control {
    /// Paint one phase; phases a control has no layer for return `Ok(())`
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError>;
}

/// Outcome of one paint
#[derive(Debug, Default)]
pub struct PaintReport {
    /// Nothing was painted because the bounds were degenerate
    pub skipped: bool,
    pub failed: Vec<(Phase, String)>,
}

impl PaintReport {
    pub fn is_clean(&self) -> bool {
        !self.skipped && self.failed.is_empty()
    }

    pub fn failed_phases(&self) -> Vec<Phase> {
        self.failed.iter().map(|(phase, _)| *phase).collect()
    }
}

/// Runs the four phases of a control in order
pub struct ControlRenderer;

impl ControlRenderer {
    pub fn paint<C: Control + ?Sized>(
        control: &mut C,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> PaintReport {
        let mut report = PaintReport::default();
        if frame.bounds.is_degenerate() {
            tracing::trace!(bounds = ?frame.bounds, "skipping paint of degenerate control");
            report.skipped = true;
            return report;
        }

        for phase in Phase::ALL {
            if let Err(err) = control.paint_phase(phase, ctx, frame) {
                tracing::warn!(%phase, error = %err, "paint phase failed, continuing");
                report.failed.push((phase, err.to_string()));
            }
        }
        report
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shadow
// ─────────────────────────────────────────────────────────────────────────────

/// Soft drop shadow drawn as concentric strokes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    pub enabled: bool,
    pub color: Color,
    pub offset: Point,
    /// Number of layers, clamped to `0..=20`
    pub softness: u32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Color::BLACK.with_alpha8(90),
            offset: Point::new(0.0, 3.0),
            softness: 6,
        }
    }
}

impl ShadowStyle {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Draw shadow layers from the outermost inward
///
/// Layer `i` is a 2px round-join stroke of the offset body expanded by `i`,
/// at alpha `base * i / (layers + 1) * 0.5`.
pub fn draw_shadow(ctx: &mut dyn DrawContext, bounds: Rect, radius: f32, shadow: &ShadowStyle) {
    if !shadow.enabled {
        return;
    }
    let layers = shadow.softness.min(MAX_SHADOW_SOFTNESS);
    if layers == 0 {
        return;
    }

    let base = rounded_rect_path(bounds.offset(shadow.offset.x, shadow.offset.y), radius);
    let base_alpha = (shadow.color.a.clamp(0.0, 1.0) * 255.0).round();
    let stroke = Stroke::new(2.0).with_join(LineJoin::Round);

    for i in (1..=layers).rev() {
        let t = i as f32 / (layers + 1) as f32;
        let alpha = (base_alpha * t * 0.5) as u8;
        let layer = expand_contour(&base, i as f32, (radius + i as f32).max(0.0));
        ctx.stroke_contour(&layer, &stroke, shadow.color.with_alpha8(alpha).into());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Body
// ─────────────────────────────────────────────────────────────────────────────

/// Fill the body with the resolved brush, then stroke the border when it has a width
pub fn draw_body(ctx: &mut dyn DrawContext, body: &Contour, style: &ResolvedStyle) {
    ctx.fill_contour(body, style.fill_brush(body.bounds()));
    if style.stroke_width > 0.0 {
        ctx.stroke_contour(body, &Stroke::new(style.stroke_width), style.border.into());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlays
// ─────────────────────────────────────────────────────────────────────────────

/// White dim layer over the body while loading
pub fn draw_loading_overlay(ctx: &mut dyn DrawContext, body: &Contour, opacity: u8) {
    ctx.fill_contour(body, Color::WHITE.with_alpha8(opacity).into());
}

/// Loading spinner appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinnerStyle {
    pub color: Color,
    pub thickness: f32,
    /// Preferred radius, at least 4
    pub radius: f32,
    /// Degrees per second, clamped by the animation to `30..=720`
    pub speed: f32,
}

impl Default for SpinnerStyle {
    fn default() -> Self {
        Self {
            color: Color::DODGER_BLUE,
            thickness: 3.0,
            radius: 10.0,
            speed: 180.0,
        }
    }
}

/// Effective spinner radius: `min(radius, max(8, min(w, h) / 2 - 6))`
pub fn spinner_radius(bounds: Rect, style: &SpinnerStyle) -> f32 {
    let fit = (bounds.width().min(bounds.height()) / 2.0 - 6.0).max(8.0);
    style.radius.max(4.0).min(fit)
}

/// Background ring at alpha 50 plus a 270° arc starting at `angle`
pub fn draw_spinner(ctx: &mut dyn DrawContext, bounds: Rect, style: &SpinnerStyle, angle: f32) {
    let center = bounds.center();
    let radius = spinner_radius(bounds, style);
    let stroke = Stroke::new(style.thickness.max(1.0)).with_cap(LineCap::Round);

    ctx.stroke_path(
        &arc_path(center, radius, 0.0, 360.0),
        &stroke,
        style.color.with_alpha8(50).into(),
    );
    ctx.stroke_path(
        &arc_path(center, radius, angle, 270.0),
        &stroke,
        style.color.into(),
    );
}

/// Dashed 1px outline inset into the body
pub fn draw_focus_outline(
    ctx: &mut dyn DrawContext,
    body: &Contour,
    inset: f32,
    color: Color,
) {
    let outline = inset_contour(body, inset, (body.radius() - inset).max(0.0));
    ctx.stroke_contour(&outline, &Stroke::new(1.0).dashed(), color.into());
}
