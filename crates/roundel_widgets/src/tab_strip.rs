//! Owner-drawn tab strip
//!
//! Fixed-size tabs laid out left to right, each with a rounded background,
//! optional icon, ellipsized title and optional close glyph, followed by a
//! round "+" button. All metrics scale with the DPI scale of the last paint.
//!
//! # Example
//!
//! ```ignore
//! let mut tabs = TabStrip::with_config(TabStripConfig::new().show_close_buttons(true))
//!     .on_tab_closing(|_, item| item.title != "Home");
//! tabs.push_tab(TabItem::new("Home"));
//! tabs.set_bounds(Rect::new(0.0, 0.0, 800.0, 42.0));
//!
//! match tabs.pointer_down(point, PointerButton::Primary) {
//!     TabAction::Added(index) => show_page(index),
//!     _ => {}
//! }
//! ```

use std::sync::Arc;

use roundel_core::{
    Bitmap, Color, DrawContext, EdgeInsets, ImageOptions, LineCap, Path, Point, Rect, Size,
    Stroke, TextStyle,
};
use roundel_paint::{ellipse_path, rounded_rect_path, ContourExt};

use crate::error::RenderError;
use crate::renderer::{Control, ControlRenderer, PaintFrame, PaintReport, Phase};
use crate::state::PointerButton;
use crate::text::{ellipsize, TextMeasurer};
use crate::theme::Theme;

/// Tab strip colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabColors {
    pub back: Color,
    pub hover_back: Color,
    pub selected_back: Color,
    pub border: Color,
    pub selected_border: Color,
    pub close_hover_back: Color,
    pub close_hover_fore: Color,
    pub close_fore: Color,
    pub add_back: Color,
    pub add_hover_back: Color,
    pub add_fore: Color,
}

impl Default for TabColors {
    fn default() -> Self {
        Self {
            back: Color::from_rgba8(245, 246, 248, 255),
            hover_back: Color::from_rgba8(235, 238, 242, 255),
            selected_back: Color::WHITE,
            border: Color::from_rgba8(210, 214, 220, 255),
            selected_border: Color::from_rgba8(60, 120, 255, 255),
            close_hover_back: Color::from_rgba8(230, 80, 80, 255),
            close_hover_fore: Color::WHITE,
            close_fore: Color::DIM_GRAY,
            add_back: Color::from_rgba8(246, 248, 251, 255),
            add_hover_back: Color::from_rgba8(224, 236, 255, 255),
            add_fore: Color::from_rgba8(60, 120, 255, 255),
        }
    }
}

/// What the hosting window draws around the strip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCapabilities {
    /// The host hides its native scroll arrows, so no space is reserved
    pub suppresses_native_scroll_buttons: bool,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            suppresses_native_scroll_buttons: true,
        }
    }
}

/// Tab strip configuration; sizes are at 1x and scaled when painting
#[derive(Clone, Debug)]
pub struct TabStripConfig {
    pub colors: TabColors,
    pub item_size: Size,
    pub corner_radius: f32,
    pub tab_padding: EdgeInsets,
    pub close_size: f32,
    pub show_add_button: bool,
    pub add_button_size: f32,
    pub add_button_margin: f32,
    pub show_close_buttons: bool,
    pub show_tab_border: bool,
    /// Space kept free for native scroll arrows
    pub scroll_button_reserve: f32,
    pub icon_size: f32,
    pub text_style: TextStyle,
}

impl Default for TabStripConfig {
    fn default() -> Self {
        Self {
            colors: TabColors::default(),
            item_size: Size::new(140.0, 42.0),
            corner_radius: 10.0,
            tab_padding: EdgeInsets::new(12.0, 4.0, 22.0, 4.0),
            close_size: 12.0,
            show_add_button: true,
            add_button_size: 18.0,
            add_button_margin: 8.0,
            show_close_buttons: false,
            show_tab_border: false,
            scroll_button_reserve: 40.0,
            icon_size: 16.0,
            text_style: TextStyle::new(12.0),
        }
    }
}

impl TabStripConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            colors: theme.tabs,
            ..Self::default()
        }
    }

    pub fn colors(mut self, colors: TabColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn item_size(mut self, size: Size) -> Self {
        self.item_size = size;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn tab_padding(mut self, padding: EdgeInsets) -> Self {
        self.tab_padding = padding;
        self
    }

    /// Close glyph size, at least 10
    pub fn close_size(mut self, size: f32) -> Self {
        self.close_size = size.max(10.0);
        self
    }

    pub fn show_add_button(mut self, show: bool) -> Self {
        self.show_add_button = show;
        self
    }

    /// Add button size (at least 12) and right margin (at least 0)
    pub fn add_button(mut self, size: f32, margin: f32) -> Self {
        self.add_button_size = size.max(12.0);
        self.add_button_margin = margin.max(0.0);
        self
    }

    pub fn show_close_buttons(mut self, show: bool) -> Self {
        self.show_close_buttons = show;
        self
    }

    pub fn show_tab_border(mut self, show: bool) -> Self {
        self.show_tab_border = show;
        self
    }

    pub fn scroll_button_reserve(mut self, reserve: f32) -> Self {
        self.scroll_button_reserve = reserve.max(0.0);
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// One tab
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    pub title: String,
    pub icon: Option<Arc<Bitmap>>,
}

impl TabItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Arc<Bitmap>) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Hit-test result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabHit {
    Add,
    Close(usize),
    Tab(usize),
    None,
}

/// Outcome of a press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabAction {
    None,
    Selected(usize),
    Closed(usize),
    CloseCancelled(usize),
    Added(usize),
}

/// Per-tab rects at the current scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabGeometry {
    /// Full slot
    pub rect: Rect,
    /// Rounded background
    pub background: Rect,
    /// Icon and title area
    pub content: Rect,
    /// Close glyph, when close buttons are shown
    pub close: Option<Rect>,
}

/// Closing veto: return false to keep the tab
type ClosingCallback = Box<dyn FnMut(usize, &TabItem) -> bool>;
/// Builds the tab for the n-th add
type TabFactory = Box<dyn FnMut(u32) -> TabItem>;

/// Owner-drawn tab strip
pub struct TabStrip {
    config: TabStripConfig,
    host: HostCapabilities,
    bounds: Rect,
    scale: f32,
    tabs: Vec<TabItem>,
    selected: Option<usize>,
    hover: Option<usize>,
    hover_close: Option<usize>,
    hover_add: bool,
    /// Number used by the next default title
    next_tab_number: u32,
    on_tab_closing: Option<ClosingCallback>,
    tab_factory: Option<TabFactory>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::with_config(TabStripConfig::default())
    }

    pub fn with_config(config: TabStripConfig) -> Self {
        Self {
            config,
            host: HostCapabilities::default(),
            bounds: Rect::new(0.0, 0.0, 600.0, 42.0),
            scale: 1.0,
            tabs: Vec::new(),
            selected: None,
            hover: None,
            hover_close: None,
            hover_add: false,
            next_tab_number: 1,
            on_tab_closing: None,
            tab_factory: None,
        }
    }

    /// Veto tab closes; the callback returns false to keep the tab
    pub fn on_tab_closing<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, &TabItem) -> bool + 'static,
    {
        self.on_tab_closing = Some(Box::new(callback));
        self
    }

    /// Build added tabs instead of the default "New tab {n}"
    pub fn tab_factory<F>(mut self, factory: F) -> Self
    where
        F: FnMut(u32) -> TabItem + 'static,
    {
        self.tab_factory = Some(Box::new(factory));
        self
    }

    pub fn host_capabilities(mut self, host: HostCapabilities) -> Self {
        self.host = host;
        self
    }

    pub fn config(&self) -> &TabStripConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// DPI scale for geometry; invalid values are ignored
    pub fn set_scale(&mut self, scale: f32) {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tabs(&self) -> &[TabItem] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Append a tab; the first tab becomes selected
    pub fn push_tab(&mut self, item: TabItem) -> usize {
        self.tabs.push(item);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.tabs.len() - 1
    }

    /// Select a tab; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Add a tab from the factory or with a default title, and select it
    pub fn add_tab(&mut self) -> usize {
        let number = self.next_tab_number;
        self.next_tab_number += 1;
        let item = match self.tab_factory.as_mut() {
            Some(factory) => factory(number),
            None => TabItem::new(format!("New tab {number}")),
        };
        tracing::debug!(title = %item.title, "tab added");
        self.tabs.push(item);
        let index = self.tabs.len() - 1;
        self.selected = Some(index);
        index
    }

    /// Close a tab unless the closing callback vetoes it
    pub fn close_tab(&mut self, index: usize) -> TabAction {
        let Some(item) = self.tabs.get(index) else {
            return TabAction::None;
        };
        if let Some(callback) = self.on_tab_closing.as_mut() {
            if !callback(index, item) {
                tracing::debug!(index, "tab close cancelled");
                return TabAction::CloseCancelled(index);
            }
        }

        let item = self.tabs.remove(index);
        tracing::debug!(index, title = %item.title, "tab closed");

        self.selected = match self.selected {
            _ if self.tabs.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) if selected == index => Some(index.min(self.tabs.len() - 1)),
            other => other,
        };
        self.hover = None;
        self.hover_close = None;
        TabAction::Closed(index)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// `round(v * scale)`
    pub fn scale_i(&self, value: f32) -> f32 {
        (value * self.scale).round()
    }

    pub fn tab_rect(&self, index: usize) -> Rect {
        let width = self.scale_i(self.config.item_size.width);
        let height = self.scale_i(self.config.item_size.height);
        Rect::new(
            self.bounds.x() + index as f32 * width,
            self.bounds.y(),
            width,
            height,
        )
    }

    pub fn tab_geometry(&self, index: usize) -> TabGeometry {
        let rect = self.tab_rect(index);
        let inner = self.scale_i(4.0);
        let background = rect.inset(2.0, 2.0).inset(inner, inner);

        let pad = self.config.tab_padding;
        let (left, top) = (self.scale_i(pad.left), self.scale_i(pad.top));
        let (right, bottom) = (self.scale_i(pad.right), self.scale_i(pad.bottom));
        let mut content = Rect::new(
            background.x() + left,
            background.y() + top + 1.0,
            background.width() - 2.0 * left - right,
            (background.height() - 2.0 * top - bottom - 2.0).max(0.0),
        );

        let close = self.config.show_close_buttons.then(|| {
            let size = self.scale_i(self.config.close_size);
            content.size.width -= size + self.scale_i(10.0);
            Rect::new(
                background.right() - self.scale_i(8.0) - size,
                background.y() + ((background.height() - size) / 2.0).floor(),
                size,
                size,
            )
        });

        TabGeometry {
            rect,
            background,
            content,
            close,
        }
    }

    /// Add button rect, or `None` when hidden or the strip is empty
    pub fn add_button_rect(&self) -> Option<Rect> {
        if !self.config.show_add_button || self.bounds.is_degenerate() {
            return None;
        }
        let size = self.scale_i(self.config.add_button_size);
        let margin = self.scale_i(self.config.add_button_margin);
        let reserve = if self.host.suppresses_native_scroll_buttons {
            0.0
        } else {
            self.scale_i(self.config.scroll_button_reserve)
        };

        let mut x = self.bounds.right() - reserve - margin - size;
        let y = self.bounds.y() + ((self.bounds.height() - size) / 2.0).floor();
        if let Some(last) = self.tabs.len().checked_sub(1) {
            let min_x = self.tab_rect(last).right() + self.scale_i(6.0);
            if x < min_x {
                x = (self.bounds.x() + self.scale_i(4.0)).max(min_x);
            }
        }
        Some(Rect::new(x, y, size, size))
    }

    pub fn hit_test(&self, point: Point) -> TabHit {
        if self
            .add_button_rect()
            .is_some_and(|rect| rect.contains(point))
        {
            return TabHit::Add;
        }
        let Some(index) = (0..self.tabs.len()).find(|&i| self.tab_rect(i).contains(point)) else {
            return TabHit::None;
        };
        match self.tab_geometry(index).close {
            Some(close) if close.contains(point) => TabHit::Close(index),
            _ => TabHit::Tab(index),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    pub fn pointer_move(&mut self, point: Point) {
        let hit = self.hit_test(point);
        self.hover_add = hit == TabHit::Add;
        (self.hover, self.hover_close) = match hit {
            TabHit::Tab(i) => (Some(i), None),
            TabHit::Close(i) => (Some(i), Some(i)),
            TabHit::Add | TabHit::None => (None, None),
        };
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
        self.hover_close = None;
        self.hover_add = false;
    }

    /// Primary selects, adds or closes; middle closes when close buttons show
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) -> TabAction {
        let hit = self.hit_test(point);
        match button {
            PointerButton::Primary => match hit {
                TabHit::Add => TabAction::Added(self.add_tab()),
                TabHit::Close(i) => self.close_tab(i),
                TabHit::Tab(i) => {
                    self.select(i);
                    TabAction::Selected(i)
                }
                TabHit::None => TabAction::None,
            },
            PointerButton::Middle if self.config.show_close_buttons => match hit {
                TabHit::Tab(i) | TabHit::Close(i) => self.close_tab(i),
                _ => TabAction::None,
            },
            _ => TabAction::None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    /// Paint at `scale`, which also becomes the scale used for hit testing
    pub fn paint(
        &mut self,
        ctx: &mut dyn DrawContext,
        measurer: &dyn TextMeasurer,
        scale: f32,
    ) -> PaintReport {
        self.set_scale(scale);
        let frame = PaintFrame::new(self.bounds, scale, measurer);
        ControlRenderer::paint(self, ctx, &frame)
    }

    fn paint_backgrounds(&self, ctx: &mut dyn DrawContext) {
        let colors = &self.config.colors;
        let radius = self.scale_i(self.config.corner_radius);
        for index in 0..self.tabs.len() {
            let selected = self.selected == Some(index);
            let back = if selected {
                colors.selected_back
            } else if self.hover == Some(index) {
                colors.hover_back
            } else {
                colors.back
            };
            let background = rounded_rect_path(self.tab_geometry(index).background, radius);
            ctx.fill_contour(&background, back.into());
            if self.config.show_tab_border {
                let border = if selected {
                    colors.selected_border
                } else {
                    colors.border
                };
                ctx.stroke_contour(&background, &Stroke::new(1.0), border.into());
            }
        }
    }

    fn paint_tab_content(
        &self,
        ctx: &mut dyn DrawContext,
        measurer: &dyn TextMeasurer,
        index: usize,
        item: &TabItem,
    ) -> Result<(), RenderError> {
        let geometry = self.tab_geometry(index);
        let content = geometry.content;

        let mut gap = 0.0;
        if let Some(icon) = &item.icon {
            let size = self.scale_i(self.config.icon_size);
            let y = content.y() + ((content.height() - size) / 2.0).floor();
            ctx.draw_bitmap(
                icon,
                Rect::new(content.x(), y, size, size),
                &ImageOptions::new(),
            );
            gap = size + self.scale_i(6.0);
        }

        let text_width = content.width() - gap;
        let style = &self.config.text_style;
        let title = ellipsize(measurer, &item.title, style, text_width)?;
        if !title.is_empty() {
            let size = measurer.measure(&title, style)?;
            let origin = Point::new(
                content.x() + gap,
                content.y() + (content.height() - size.height) / 2.0,
            );
            ctx.draw_text(&title, origin, style);
        }

        if let Some(close) = geometry.close {
            self.paint_close_glyph(ctx, close, self.hover_close == Some(index));
        }
        Ok(())
    }

    fn paint_close_glyph(&self, ctx: &mut dyn DrawContext, rect: Rect, hover: bool) {
        let colors = &self.config.colors;
        if hover {
            ctx.fill_contour(&ellipse_path(rect), colors.close_hover_back.into());
        }
        let pad = (rect.width() / 4.0).floor().max(2.0);
        let stroke = Stroke::new((rect.width() / 10.0).max(1.5)).with_cap(LineCap::Round);
        let color = if hover {
            colors.close_hover_fore
        } else {
            colors.close_fore
        };
        let (left, top) = (rect.x() + pad, rect.y() + pad);
        let (right, bottom) = (rect.right() - pad, rect.bottom() - pad);
        ctx.stroke_path(
            &Path::line(Point::new(left, top), Point::new(right, bottom)),
            &stroke,
            color.into(),
        );
        ctx.stroke_path(
            &Path::line(Point::new(left, bottom), Point::new(right, top)),
            &stroke,
            color.into(),
        );
    }

    fn paint_add_button(&self, ctx: &mut dyn DrawContext) {
        let Some(rect) = self.add_button_rect() else {
            return;
        };
        let colors = &self.config.colors;
        let back = if self.hover_add {
            colors.add_hover_back
        } else {
            colors.add_back
        };
        let inner = rect.inset(1.0, 1.0);
        ctx.fill_contour(&ellipse_path(inner), back.into());

        let pad = (inner.width() / 4.0).floor().max(2.0);
        let cx = inner.x() + (inner.width() / 2.0).floor();
        let cy = inner.y() + (inner.height() / 2.0).floor();
        let stroke = Stroke::new((rect.width() / 10.0).max(1.5));
        ctx.stroke_path(
            &Path::line(Point::new(cx - pad, cy), Point::new(cx + pad, cy)),
            &stroke,
            colors.add_fore.into(),
        );
        ctx.stroke_path(
            &Path::line(Point::new(cx, cy - pad), Point::new(cx, cy + pad)),
            &stroke,
            colors.add_fore.into(),
        );
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for TabStrip {
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        match phase {
            Phase::Shadow => Ok(()),
            Phase::Body => {
                frame.checked_scale()?;
                self.paint_backgrounds(ctx);
                Ok(())
            }
            Phase::Content => {
                frame.checked_scale()?;
                for (index, item) in self.tabs.iter().enumerate() {
                    if let Err(err) = self.paint_tab_content(ctx, frame.measurer, index, item) {
                        tracing::warn!(index, error = %err, "tab content failed, drawing outline");
                        ctx.stroke_path(
                            &Path::rect(self.tab_rect(index)),
                            &Stroke::new(1.0),
                            Color::DARK_GRAY.into(),
                        );
                    }
                }
                Ok(())
            }
            Phase::Overlays => {
                frame.checked_scale()?;
                self.paint_add_button(ctx);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvanceMeasurer;
    use roundel_core::{DrawCommand, RecordingContext};

    fn strip(titles: &[&str]) -> TabStrip {
        let mut strip = TabStrip::new();
        for title in titles {
            strip.push_tab(TabItem::new(*title));
        }
        strip
    }

    fn record(strip: &mut TabStrip, measurer: &dyn TextMeasurer) -> Vec<DrawCommand> {
        let mut ctx = RecordingContext::new(Size::new(800.0, 100.0));
        let report = strip.paint(&mut ctx, measurer, 1.0);
        assert!(report.is_clean(), "{report:?}");
        ctx.take_commands()
    }

    #[test]
    fn test_tab_geometry() {
        let tabs = strip(&["One", "Two"]);
        let geometry = tabs.tab_geometry(1);
        assert_eq!(geometry.rect, Rect::new(140.0, 0.0, 140.0, 42.0));
        assert_eq!(geometry.background, Rect::new(146.0, 6.0, 128.0, 30.0));
        assert_eq!(geometry.content, Rect::new(158.0, 11.0, 82.0, 16.0));
        assert!(geometry.close.is_none());
    }

    #[test]
    fn test_close_rect_shrinks_content() {
        let tabs = TabStrip::with_config(TabStripConfig::new().show_close_buttons(true));
        let geometry = tabs.tab_geometry(0);
        assert_eq!(geometry.close, Some(Rect::new(114.0, 15.0, 12.0, 12.0)));
        assert_eq!(geometry.content.width(), 60.0);
    }

    #[test]
    fn test_metrics_scale() {
        let mut tabs = strip(&["One"]);
        tabs.set_scale(1.5);
        assert_eq!(tabs.tab_rect(0), Rect::new(0.0, 0.0, 210.0, 63.0));
        assert_eq!(tabs.scale_i(4.0), 6.0);
        let add = tabs.add_button_rect().unwrap();
        assert_eq!(add.size, Size::new(27.0, 27.0));
        assert_eq!(add.x(), 600.0 - 12.0 - 27.0);

        tabs.set_scale(f32::NAN);
        assert_eq!(tabs.scale(), 1.5);
    }

    #[test]
    fn test_add_button_placement() {
        let tabs = strip(&["One", "Two"]);
        assert_eq!(
            tabs.add_button_rect(),
            Some(Rect::new(574.0, 12.0, 18.0, 18.0))
        );

        let arrows = strip(&["One", "Two"]).host_capabilities(HostCapabilities {
            suppresses_native_scroll_buttons: false,
        });
        assert_eq!(arrows.add_button_rect().map(|r| r.x()), Some(534.0));

        // Never left of the last tab
        let crowded = strip(&["1", "2", "3", "4", "5"]);
        assert_eq!(crowded.add_button_rect().map(|r| r.x()), Some(706.0));

        let hidden = TabStrip::with_config(TabStripConfig::new().show_add_button(false));
        assert!(hidden.add_button_rect().is_none());
    }

    #[test]
    fn test_hit_test() {
        let tabs = TabStrip::with_config(TabStripConfig::new().show_close_buttons(true));
        let mut tabs = tabs;
        tabs.push_tab(TabItem::new("One"));
        tabs.push_tab(TabItem::new("Two"));

        assert_eq!(tabs.hit_test(Point::new(580.0, 20.0)), TabHit::Add);
        assert_eq!(tabs.hit_test(Point::new(50.0, 20.0)), TabHit::Tab(0));
        assert_eq!(tabs.hit_test(Point::new(120.0, 21.0)), TabHit::Close(0));
        assert_eq!(tabs.hit_test(Point::new(200.0, 20.0)), TabHit::Tab(1));
        assert_eq!(tabs.hit_test(Point::new(400.0, 20.0)), TabHit::None);
    }

    #[test]
    fn test_add_tab_default_titles() {
        let mut tabs = TabStrip::new();
        assert_eq!(
            tabs.pointer_down(Point::new(580.0, 20.0), PointerButton::Primary),
            TabAction::Added(0)
        );
        tabs.add_tab();
        let titles: Vec<_> = tabs.tabs().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["New tab 1", "New tab 2"]);
        assert_eq!(tabs.selected(), Some(1));
    }

    #[test]
    fn test_tab_factory() {
        let mut tabs = TabStrip::new().tab_factory(|n| TabItem::new(format!("Doc {n}")));
        tabs.add_tab();
        assert_eq!(tabs.tabs()[0].title, "Doc 1");
    }

    #[test]
    fn test_close_adjusts_selection() {
        let mut tabs = strip(&["a", "b", "c"]);
        tabs.select(2);
        assert_eq!(tabs.close_tab(2), TabAction::Closed(2));
        assert_eq!(tabs.selected(), Some(1));

        tabs.select(0);
        tabs.close_tab(1);
        assert_eq!(tabs.selected(), Some(0));

        let mut tabs = strip(&["a", "b", "c"]);
        tabs.select(1);
        tabs.close_tab(1);
        // The tab that took the slot
        assert_eq!(tabs.selected(), Some(1));
        assert_eq!(tabs.tabs()[1].title, "c");

        tabs.select(1);
        tabs.close_tab(0);
        assert_eq!(tabs.selected(), Some(0));

        tabs.close_tab(0);
        assert_eq!(tabs.selected(), None);
        assert_eq!(tabs.close_tab(0), TabAction::None);
    }

    #[test]
    fn test_closing_veto() {
        let mut tabs = TabStrip::new().on_tab_closing(|_, item| item.title != "Home");
        tabs.push_tab(TabItem::new("Home"));
        tabs.push_tab(TabItem::new("Other"));
        assert_eq!(tabs.close_tab(0), TabAction::CloseCancelled(0));
        assert_eq!(tabs.close_tab(1), TabAction::Closed(1));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_pointer_actions() {
        let mut tabs = TabStrip::with_config(TabStripConfig::new().show_close_buttons(true));
        tabs.push_tab(TabItem::new("One"));
        tabs.push_tab(TabItem::new("Two"));

        assert_eq!(
            tabs.pointer_down(Point::new(200.0, 20.0), PointerButton::Primary),
            TabAction::Selected(1)
        );
        assert_eq!(
            tabs.pointer_down(Point::new(120.0, 21.0), PointerButton::Primary),
            TabAction::Closed(0)
        );
        assert_eq!(
            tabs.pointer_down(Point::new(50.0, 20.0), PointerButton::Middle),
            TabAction::Closed(0)
        );
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_middle_click_needs_close_buttons() {
        let mut tabs = strip(&["One"]);
        assert_eq!(
            tabs.pointer_down(Point::new(50.0, 20.0), PointerButton::Middle),
            TabAction::None
        );
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn test_paint_order() {
        let mut tabs = strip(&["One", "Two"]);
        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        let kinds: Vec<_> = commands
            .iter()
            .map(|c| match c {
                DrawCommand::FillPath { .. } => "fill",
                DrawCommand::StrokePath { .. } => "stroke",
                DrawCommand::DrawText { .. } => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(
            kinds,
            vec!["fill", "fill", "text", "text", "fill", "stroke", "stroke"]
        );
        match &commands[0] {
            DrawCommand::FillPath { brush, .. } => {
                assert_eq!(brush.primary_color(), Color::WHITE);
            }
            other => panic!("expected selected background, got {other:?}"),
        }
        match &commands[2] {
            DrawCommand::DrawText { origin, .. } => {
                // 15px line box centered in the 16px content
                assert_eq!(*origin, Point::new(18.0, 11.5));
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn test_long_title_is_ellipsized() {
        let mut tabs = strip(&["A very long document title"]);
        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        let title = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .unwrap();
        assert!(title.ends_with('…'));
        let width = FixedAdvanceMeasurer::default()
            .measure(&title, &TextStyle::new(12.0))
            .unwrap()
            .width;
        assert!(width <= 82.0);
    }

    #[test]
    fn test_hover_colors() {
        let mut tabs = TabStrip::with_config(TabStripConfig::new().show_close_buttons(true));
        tabs.push_tab(TabItem::new("One"));
        tabs.push_tab(TabItem::new("Two"));
        tabs.pointer_move(Point::new(254.0, 21.0));

        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        let fills: Vec<Color> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPath { brush, .. } => Some(brush.primary_color()),
                _ => None,
            })
            .collect();
        let colors = TabColors::default();
        // selected tab, hovered tab, close hover circle, add button
        assert_eq!(
            fills,
            vec![
                colors.selected_back,
                colors.hover_back,
                colors.close_hover_back,
                colors.add_back
            ]
        );

        tabs.pointer_move(Point::new(580.0, 20.0));
        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        let last_fill = commands
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::FillPath { brush, .. } => Some(brush.primary_color()),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_fill, colors.add_hover_back);
    }

    #[test]
    fn test_content_failure_draws_outline() {
        struct Broken;
        impl TextMeasurer for Broken {
            fn measure(&self, _: &str, _: &TextStyle) -> Result<Size, RenderError> {
                Err(RenderError::Measure("no font".into()))
            }
        }

        let mut tabs = strip(&["One"]);
        let commands = record(&mut tabs, &Broken);
        let outline = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokePath { path, brush, .. }
                    if brush.primary_color() == Color::DARK_GRAY =>
                {
                    Some(path.bounds())
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(outline, Rect::new(0.0, 0.0, 140.0, 42.0));
    }

    #[test]
    fn test_tab_border_option() {
        let mut tabs = TabStrip::with_config(
            TabStripConfig::new()
                .show_tab_border(true)
                .show_add_button(false),
        );
        tabs.push_tab(TabItem::new("One"));
        tabs.push_tab(TabItem::new("Two"));
        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        let borders: Vec<Color> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokePath { brush, .. } => Some(brush.primary_color()),
                _ => None,
            })
            .collect();
        let colors = TabColors::default();
        assert_eq!(borders, vec![colors.selected_border, colors.border]);
    }

    #[test]
    fn test_icon_shifts_title() {
        let mut tabs = TabStrip::new();
        tabs.push_tab(TabItem::new("One").with_icon(Arc::new(Bitmap::transparent(16, 16))));
        let commands = record(&mut tabs, &FixedAdvanceMeasurer::default());
        match (&commands[1], &commands[2]) {
            (DrawCommand::DrawBitmap { rect, .. }, DrawCommand::DrawText { origin, .. }) => {
                assert_eq!(*rect, Rect::new(18.0, 11.0, 16.0, 16.0));
                assert_eq!(origin.x, 18.0 + 16.0 + 6.0);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
