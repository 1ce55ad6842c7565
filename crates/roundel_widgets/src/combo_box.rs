//! Rounded combo box frame with a focus glow
//!
//! The GlowComboBox provides:
//! - A rounded body with an inset border that turns green on focus
//! - A radial glow from the center of the body while focused
//! - The selected item, ellipsized to fit, and a drop-down chevron
//! - Keyboard and pointer selection over a list of string items
//!
//! The drop-down list itself belongs to the host. The combo box only tracks
//! whether it is open and which item is selected.
//!
//! # Example
//!
//! ```ignore
//! let mut fruit = GlowComboBox::new()
//!     .on_selection_changed(|index| tracing::info!(?index, "fruit picked"));
//! fruit.set_items(["Apple", "Banana", "Cherry"]);
//! fruit.set_selected_item("Banana");
//! fruit.paint(&mut ctx, &measurer, 1.0);
//! ```

use roundel_core::{
    Color, DrawContext, Gradient, GradientStop, Path, Point, Rect, Size, Stroke, TextStyle,
};
use roundel_paint::{inset_contour, rounded_rect_path, ContourExt};

use crate::error::RenderError;
use crate::layout::{align_within, ContentAlignment};
use crate::renderer::{Control, ControlRenderer, PaintFrame, PaintReport, Phase};
use crate::resolver::resolve_text_color;
use crate::state::{Key, PointerButton, VisualState};
use crate::text::{ellipsize, TextMeasurer};
use crate::theme::Theme;

/// Share of the glow radius painted in the solid glow color
pub const GLOW_FOCUS_SCALE: f32 = 0.4;

/// Combo box colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComboBoxColors {
    pub back: Color,
    pub border: Color,
    pub focused_border: Color,
    pub glow: Color,
    pub text: Color,
    pub arrow: Color,
}

impl Default for ComboBoxColors {
    fn default() -> Self {
        Self {
            back: Color::CONTROL,
            border: Color::WHITE,
            focused_border: Color::LIME_GREEN,
            glow: Color::LIME_GREEN,
            text: Color::BLACK,
            arrow: Color::DIM_GRAY,
        }
    }
}

/// Combo box configuration
#[derive(Clone, Debug)]
pub struct ComboBoxConfig {
    pub colors: ComboBoxColors,
    pub corner_radius: f32,
    pub border_width: f32,
    pub show_border: bool,
    /// Gap between the border and the text
    pub inner_padding: f32,
    pub glow: bool,
    /// Width of the chevron area on the right
    pub arrow_width: f32,
    pub text_style: TextStyle,
}

impl Default for ComboBoxConfig {
    fn default() -> Self {
        Self {
            colors: ComboBoxColors::default(),
            corner_radius: 10.0,
            border_width: 2.0,
            show_border: true,
            inner_padding: 2.0,
            glow: true,
            arrow_width: 16.0,
            text_style: TextStyle::new(12.0),
        }
    }
}

impl ComboBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            colors: theme.combo_box,
            ..Self::default()
        }
    }

    pub fn colors(mut self, colors: ComboBoxColors) -> Self {
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

    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    pub fn inner_padding(mut self, padding: f32) -> Self {
        self.inner_padding = padding.max(0.0);
        self
    }

    pub fn glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Border width that is actually painted
    fn effective_border(&self) -> f32 {
        if self.show_border {
            self.border_width
        } else {
            0.0
        }
    }
}

/// Combo box frame over a list of string items
pub struct GlowComboBox {
    config: ComboBoxConfig,
    bounds: Rect,
    state: VisualState,
    items: Vec<String>,
    selected: Option<usize>,
    dropped_down: bool,
    on_selection_changed: Option<Box<dyn FnMut(Option<usize>)>>,
}

impl GlowComboBox {
    pub fn new() -> Self {
        Self::with_config(ComboBoxConfig::default())
    }

    pub fn with_config(config: ComboBoxConfig) -> Self {
        Self {
            config,
            bounds: Rect::new(0.0, 0.0, 160.0, 28.0),
            state: VisualState::default(),
            items: Vec::new(),
            selected: None,
            dropped_down: false,
            on_selection_changed: None,
        }
    }

    /// Set the selection callback
    pub fn on_selection_changed<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<usize>) + 'static,
    {
        self.on_selection_changed = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ComboBoxConfig {
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

    // ─────────────────────────────────────────────────────────────────────────
    // Items
    // ─────────────────────────────────────────────────────────────────────────

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the items; the selection follows its text or is cleared
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let previous = self.selected_item().map(str::to_string);
        self.items = items.into_iter().map(Into::into).collect();
        let selected = previous.and_then(|text| self.items.iter().position(|i| *i == text));
        self.apply_selection(selected);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Select by index; out-of-range indices are ignored
    pub fn set_selected_index(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.items.len() => false,
            _ => {
                self.apply_selection(index);
                true
            }
        }
    }

    /// Select the first item equal to `text`
    pub fn set_selected_item(&mut self, text: &str) -> bool {
        match self.items.iter().position(|item| item == text) {
            Some(index) => {
                self.apply_selection(Some(index));
                true
            }
            None => false,
        }
    }

    fn apply_selection(&mut self, selected: Option<usize>) {
        if selected == self.selected {
            return;
        }
        self.selected = selected;
        tracing::debug!(index = ?selected, "combo box selection changed");
        if let Some(callback) = self.on_selection_changed.as_mut() {
            callback(selected);
        }
    }

    /// Move the selection by `step`, stopping at either end
    fn step_selection(&mut self, step: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let next = match self.selected {
            None => 0,
            Some(i) => i.saturating_add_signed(step).min(last),
        };
        self.apply_selection(Some(next));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_dropped_down(&self) -> bool {
        self.dropped_down
    }

    /// Open or close the host list; only an enabled box opens
    pub fn set_dropped_down(&mut self, open: bool) {
        self.dropped_down = open && self.state.enabled;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        if !enabled {
            self.state.focused = false;
            self.dropped_down = false;
        }
    }

    /// Losing focus closes the list
    pub fn set_focused(&mut self, focused: bool) {
        self.state.focused = focused && self.state.enabled;
        if !self.state.focused {
            self.dropped_down = false;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// A primary press focuses and toggles the list
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        if button != PointerButton::Primary
            || !self.state.enabled
            || !self.bounds.contains(point)
        {
            return;
        }
        self.state.focused = true;
        self.dropped_down = !self.dropped_down;
    }

    /// Up/Left select the previous item, Down/Right the next, Space/Enter
    /// toggle the list
    pub fn key_down(&mut self, key: Key) {
        if !self.state.enabled {
            return;
        }
        match key {
            Key::Up | Key::Left => self.step_selection(-1),
            Key::Down | Key::Right => self.step_selection(1),
            Key::Space | Key::Enter => self.dropped_down = !self.dropped_down,
            Key::Other => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// Area inside the border and padding
    pub fn content_bounds(&self) -> Rect {
        let inset = self.config.effective_border() + self.config.inner_padding;
        self.bounds.inset(inset, inset)
    }

    /// Chevron area at the right of the content
    pub fn arrow_bounds(&self) -> Rect {
        let content = self.content_bounds();
        let width = self.config.arrow_width.min(content.width());
        Rect::new(content.right() - width, content.y(), width, content.height())
    }

    /// Area the selected item is drawn in
    pub fn text_bounds(&self) -> Rect {
        let content = self.content_bounds();
        let width = (content.width() - self.arrow_bounds().width()).max(0.0);
        Rect::new(content.x(), content.y(), width, content.height())
    }

    /// Size that fits the widest item, the chevron, padding and border
    pub fn preferred_size(&self, measurer: &dyn TextMeasurer) -> Result<Size, RenderError> {
        let style = &self.config.text_style;
        let mut text = measurer.measure("", style)?;
        for item in &self.items {
            let size = measurer.measure(item, style)?;
            text.width = text.width.max(size.width);
            text.height = text.height.max(size.height);
        }
        let chrome = 2.0 * (self.config.effective_border() + self.config.inner_padding);
        Ok(Size::new(
            text.width + self.config.arrow_width + chrome,
            text.height + chrome,
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

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
        self.config.glow && self.state.enabled && self.state.focused
    }

    fn back_color(&self) -> Color {
        let back = self.config.colors.back;
        if self.state.enabled {
            back
        } else {
            back.blend(Color::CONTROL, 0.5)
        }
    }

    fn border_color(&self) -> Color {
        let colors = &self.config.colors;
        if !self.state.enabled {
            colors.border.blend(Color::GRAY_TEXT, 0.5)
        } else if self.state.focused {
            colors.focused_border
        } else {
            colors.border
        }
    }

    /// Solid glow in the middle fading to the back color at the edge
    fn glow_gradient(&self, bounds: Rect) -> Gradient {
        let glow = self.config.colors.glow;
        Gradient::radial_with_stops(
            bounds.center(),
            bounds.width().max(bounds.height()) / 2.0,
            vec![
                GradientStop::new(0.0, glow),
                GradientStop::new(GLOW_FOCUS_SCALE, glow),
                GradientStop::new(1.0, self.config.colors.back),
            ],
        )
    }

    fn paint_text(
        &self,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        let Some(item) = self.selected_item() else {
            return Ok(());
        };
        let rect = self.text_bounds();
        let style = &self.config.text_style;
        let text = ellipsize(frame.measurer, item, style, rect.width())?;
        if text.is_empty() {
            return Ok(());
        }
        let size = frame.measurer.measure(&text, style)?;
        let origin = align_within(rect, size, ContentAlignment::MiddleLeft).origin;
        let color = resolve_text_color(&self.state, self.config.colors.text, false);
        ctx.draw_text(&text, origin, &style.clone().with_color(color));
        Ok(())
    }

    fn paint_arrow(&self, ctx: &mut dyn DrawContext) {
        let area = self.arrow_bounds();
        let half = (area.width() / 4.0).min(4.0);
        if half <= 0.0 {
            return;
        }
        let c = area.center();
        let chevron = Path::new()
            .move_to(c.x - half, c.y - half / 2.0)
            .line_to(c.x + half, c.y - half / 2.0)
            .line_to(c.x, c.y + half / 2.0)
            .close();
        let color = if self.state.enabled {
            self.config.colors.arrow
        } else {
            self.config.colors.arrow.blend(Color::GRAY_TEXT, 0.5)
        };
        ctx.fill_path(&chevron, color.into());
    }
}

impl Default for GlowComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for GlowComboBox {
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        match phase {
            Phase::Shadow | Phase::Overlays => Ok(()),
            Phase::Body => {
                let body = rounded_rect_path(frame.bounds, self.config.corner_radius);
                ctx.fill_contour(&body, self.back_color().into());
                if self.glows() {
                    ctx.fill_contour(&body, self.glow_gradient(frame.bounds).into());
                }
                let width = self.config.effective_border();
                if width > 0.0 {
                    let half = width / 2.0;
                    let edge = inset_contour(&body, half, (body.radius() - half).max(0.0));
                    ctx.stroke_contour(&edge, &Stroke::new(width), self.border_color().into());
                }
                Ok(())
            }
            Phase::Content => {
                self.paint_arrow(ctx);
                self.paint_text(ctx, frame)
            }
        }
    }
}
