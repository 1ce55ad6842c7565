//! Rounded text-field frame with a focus glow
//!
//! The frame paints the body, border and glow. Editing is left to the host,
//! which places its editor inside `text_bounds()`.

use roundel_core::{Color, DrawContext, EdgeInsets, Point, Rect, Stroke};
use roundel_paint::{inset_contour, rounded_rect_path, Contour, ContourExt};

use crate::error::RenderError;
use crate::palette::Palette;
use crate::renderer::{draw_body, Control, ControlRenderer, PaintFrame, PaintReport, Phase};
use crate::resolver::resolve;
use crate::state::{PointerButton, VisualState};
use crate::text::TextMeasurer;
use crate::theme::Theme;

/// Smallest editor rect handed to the host
pub const MIN_TEXT_EXTENT: f32 = 10.0;

/// Frame colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextFieldColors {
    pub fill: Color,
    pub border: Color,
    pub hover_border: Color,
    pub focus_border: Color,
    pub glow: Color,
}

impl Default for TextFieldColors {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            border: Color::SILVER,
            hover_border: Color::STEEL_BLUE,
            focus_border: Color::DODGER_BLUE,
            glow: Color::DODGER_BLUE,
        }
    }
}

/// Text-field frame configuration
#[derive(Clone, Copy, Debug)]
pub struct TextFieldConfig {
    pub colors: TextFieldColors,
    pub corner_radius: f32,
    pub border_width: f32,
    /// Number of glow rings
    pub glow_size: u32,
    pub glow_on_focus: bool,
    pub glow_on_hover: bool,
    pub inner_padding: EdgeInsets,
    pub show_border: bool,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            colors: TextFieldColors::default(),
            corner_radius: 12.0,
            border_width: 1.0,
            glow_size: 6,
            glow_on_focus: true,
            glow_on_hover: false,
            inner_padding: EdgeInsets::new(10.0, 6.0, 10.0, 6.0),
            show_border: true,
        }
    }
}

impl TextFieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            colors: theme.text_field,
            ..Self::default()
        }
    }

    pub fn colors(mut self, colors: TextFieldColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    pub fn glow_size(mut self, rings: u32) -> Self {
        self.glow_size = rings;
        self
    }

    pub fn glow_on_focus(mut self, glow: bool) -> Self {
        self.glow_on_focus = glow;
        self
    }

    pub fn glow_on_hover(mut self, glow: bool) -> Self {
        self.glow_on_hover = glow;
        self
    }

    pub fn inner_padding(mut self, padding: EdgeInsets) -> Self {
        self.inner_padding = padding;
        self
    }

    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    fn palette(&self) -> Palette {
        let c = &self.colors;
        let width = if self.show_border {
            self.border_width
        } else {
            0.0
        };
        Palette::new()
            .fills(c.fill, c.fill, c.fill)
            .borders(c.border, c.hover_border, c.hover_border)
            .border_width(width)
            .focus(c.focus_border)
    }
}

/// Text-field frame
pub struct GlowTextField {
    config: TextFieldConfig,
    bounds: Rect,
    state: VisualState,
}

impl GlowTextField {
    pub fn new() -> Self {
        Self::with_config(TextFieldConfig::default())
    }

    pub fn with_config(config: TextFieldConfig) -> Self {
        Self {
            config,
            bounds: Rect::new(0.0, 0.0, 200.0, 36.0),
            state: VisualState::default(),
        }
    }

    pub fn config(&self) -> &TextFieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn visual_state(&self) -> VisualState {
        self.state
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        if !enabled {
            self.state.focused = false;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focused = focused && self.state.enabled;
    }

    pub fn pointer_enter(&mut self) {
        self.state.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.state.hovered = false;
    }

    /// Focus on a primary press inside the frame
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        if button == PointerButton::Primary && self.bounds.contains(point) {
            self.set_focused(true);
        }
    }

    /// Rect the host editor occupies, inside padding and border
    pub fn text_bounds(&self) -> Rect {
        let inset = self.config.border_width + 1.0;
        let padding = self.config.inner_padding;
        Rect::new(
            self.bounds.x() + padding.left + inset,
            self.bounds.y() + padding.top + inset,
            (self.bounds.width() - padding.horizontal() - 2.0 * inset).max(MIN_TEXT_EXTENT),
            (self.bounds.height() - padding.vertical() - 2.0 * inset).max(MIN_TEXT_EXTENT),
        )
    }

    pub fn paint(
        &mut self,
        ctx: &mut dyn DrawContext,
        measurer: &dyn TextMeasurer,
        scale: f32,
    ) -> PaintReport {
        let frame = PaintFrame::new(self.bounds, scale, measurer);
        ControlRenderer::paint(self, ctx, &frame)
    }

    fn glows(&self) -> bool {
        if !self.state.enabled {
            return false;
        }
        (self.state.focused && self.config.glow_on_focus)
            || (self.state.hovered && self.config.glow_on_hover)
    }

    /// Inner rings from the deepest outward
    fn paint_glow(&self, ctx: &mut dyn DrawContext, body: &Contour) {
        let rings = self.config.glow_size;
        if rings == 0 {
            return;
        }
        let border = self.config.border_width;
        for i in (1..=rings).rev() {
            let step = i as f32;
            let inset = border + step * 1.5;
            let radius = (self.config.corner_radius - inset * 0.6).round().max(0.0);
            let alpha = (60.0 * step / rings as f32) as u8;
            let ring = inset_contour(body, inset, radius);
            ctx.stroke_contour(
                &ring,
                &Stroke::new((border + step).max(1.0)),
                self.config.colors.glow.with_alpha8(alpha).into(),
            );
        }
    }
}

impl Default for GlowTextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for GlowTextField {
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        match phase {
            Phase::Shadow | Phase::Content => Ok(()),
            Phase::Body => {
                let body = rounded_rect_path(frame.bounds, self.config.corner_radius);
                draw_body(ctx, &body, &resolve(&self.state, &self.config.palette()));
                Ok(())
            }
            Phase::Overlays => {
                let body = rounded_rect_path(frame.bounds, self.config.corner_radius);
                if self.glows() {
                    self.paint_glow(ctx, &body);
                }
                let style = resolve(&self.state, &self.config.palette());
                if let Some(focus) = style.focus {
                    let width = self.config.border_width.max(1.0);
                    ctx.stroke_contour(&body, &Stroke::new(width), focus.color.into());
                }
                Ok(())
            }
        }
    }
}
