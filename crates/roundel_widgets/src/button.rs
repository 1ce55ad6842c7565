//! Rounded icon button
//!
//! The IconButton provides:
//! - Rounded body with hover/pressed/disabled colors and a soft drop shadow
//! - An SVG or bitmap icon, rasterized per size, scale and color override
//! - Icon and text arranged by `TextImageRelation`
//! - A loading mode with a dim layer and a spinning arc
//! - A dashed focus outline for focused or default buttons
//!
//! # Example
//!
//! ```ignore
//! let scheduler = AnimationScheduler::new();
//! let mut save = IconButton::with_config(
//!     scheduler.handle(),
//!     IconButtonConfig::new().text("Save").corner_radius(10.0),
//! );
//! save.load_svg("icons/save.svg")?;
//! save.set_bounds(Rect::new(20.0, 20.0, 120.0, 36.0));
//!
//! save.set_loading(true);
//! while scheduler.tick() {
//!     save.paint(&mut ctx, &measurer, 1.0);
//! }
//! ```

use std::path::Path as FilePath;
use std::sync::Arc;

use roundel_animation::{AnimatedSpin, SchedulerHandle};
use roundel_core::{
    Color, DrawContext, EdgeInsets, FontWeight, ImageOptions, Point, Rect, Size, TextStyle,
};
use roundel_paint::rounded_rect_path;
use roundel_svg::{IconRasterCache, IconSource, SvgDocument};

use crate::error::RenderError;
use crate::layout::{layout_content, ContentAlignment, ContentOptions, TextImageRelation};
use crate::palette::{FillGradient, IconTints, Palette};
use crate::renderer::{
    draw_body, draw_focus_outline, draw_loading_overlay, draw_shadow, draw_spinner, Control,
    ControlRenderer, PaintFrame, PaintReport, Phase, ShadowStyle, SpinnerStyle,
};
use crate::resolver::{resolve, resolve_icon_tint, resolve_text_color};
use crate::state::{Key, PointerButton, VisualState};
use crate::text::TextMeasurer;
use crate::theme::Theme;

/// Opacity of an untinted icon on an effectively disabled button
pub const DISABLED_ICON_OPACITY: f32 = 0.4;

/// Icon button configuration
#[derive(Clone, Debug)]
pub struct IconButtonConfig {
    /// Label text; empty for an icon-only button
    pub text: String,
    pub text_style: TextStyle,
    pub corner_radius: f32,
    pub palette: Palette,
    pub icon_tints: IconTints,
    pub shadow: ShadowStyle,
    /// Logical icon size
    pub image_size: Size,
    pub content: ContentOptions,
    pub padding: EdgeInsets,
    /// Ignore input while loading
    pub disable_while_loading: bool,
    /// Dim the button while loading
    pub overlay_while_loading: bool,
    /// Alpha of the white dim layer
    pub overlay_opacity: u8,
    pub spinner: SpinnerStyle,
    pub focus_inset: f32,
    pub show_focus_outline: bool,
    /// Rasterize icons at the device scale instead of 1x
    pub auto_scale_icon: bool,
    /// Replacement fill for every filled path of a vector icon
    pub icon_fill_override: Option<Color>,
    /// Replacement stroke for every stroked path of a vector icon
    pub icon_stroke_override: Option<Color>,
}

impl Default for IconButtonConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_style: TextStyle::new(12.0),
            corner_radius: 12.0,
            palette: Palette::default(),
            icon_tints: IconTints::default(),
            shadow: ShadowStyle::default(),
            image_size: Size::new(18.0, 18.0),
            content: ContentOptions::default(),
            padding: EdgeInsets::new(12.0, 8.0, 12.0, 8.0),
            disable_while_loading: true,
            overlay_while_loading: true,
            overlay_opacity: 90,
            spinner: SpinnerStyle::default(),
            focus_inset: 2.0,
            show_focus_outline: true,
            auto_scale_icon: true,
            icon_fill_override: None,
            icon_stroke_override: None,
        }
    }
}

impl IconButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the button colors of a theme
    pub fn from_theme(theme: &Theme) -> Self {
        let mut config = Self::default();
        config.palette = theme.button;
        config.spinner.color = theme.spinner;
        config
    }

    /// Borderless green pill with per-state vertical gradients and bold
    /// white text
    pub fn gradient() -> Self {
        let palette = Palette::default()
            .gradients(
                FillGradient::new(Color::LIME_GREEN, Color::LIGHT_GREEN),
                FillGradient::new(Color::FOREST_GREEN, Color::MEDIUM_SEA_GREEN),
                FillGradient::new(Color::SEA_GREEN, Color::DARK_OLIVE_GREEN),
            )
            .border_width(0.0)
            .focus(Color::LIME_GREEN.with_alpha8(120));
        Self {
            text_style: TextStyle::new(10.0)
                .with_family("Arial")
                .with_weight(FontWeight::Bold)
                .with_color(Color::WHITE),
            corner_radius: 30.0,
            palette,
            shadow: ShadowStyle::disabled(),
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn icon_tints(mut self, tints: IconTints) -> Self {
        self.icon_tints = tints;
        self
    }

    pub fn shadow(mut self, shadow: ShadowStyle) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn image_size(mut self, size: Size) -> Self {
        self.image_size = size;
        self
    }

    pub fn relation(mut self, relation: TextImageRelation) -> Self {
        self.content.relation = relation;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.content.spacing = spacing.max(0.0);
        self
    }

    pub fn image_align(mut self, align: ContentAlignment) -> Self {
        self.content.image_align = align;
        self
    }

    pub fn text_align(mut self, align: ContentAlignment) -> Self {
        self.content.text_align = align;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn disable_while_loading(mut self, disable: bool) -> Self {
        self.disable_while_loading = disable;
        self
    }

    pub fn overlay_while_loading(mut self, overlay: bool) -> Self {
        self.overlay_while_loading = overlay;
        self
    }

    pub fn overlay_opacity(mut self, opacity: u8) -> Self {
        self.overlay_opacity = opacity;
        self
    }

    pub fn spinner(mut self, spinner: SpinnerStyle) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn focus_inset(mut self, inset: f32) -> Self {
        self.focus_inset = inset.max(0.0);
        self
    }

    pub fn show_focus_outline(mut self, show: bool) -> Self {
        self.show_focus_outline = show;
        self
    }

    pub fn auto_scale_icon(mut self, auto_scale: bool) -> Self {
        self.auto_scale_icon = auto_scale;
        self
    }

    pub fn icon_overrides(mut self, fill: Option<Color>, stroke: Option<Color>) -> Self {
        self.icon_fill_override = fill;
        self.icon_stroke_override = stroke;
        self
    }
}

/// Rounded button with an optional icon, label and loading spinner
pub struct IconButton {
    config: IconButtonConfig,
    bounds: Rect,
    state: VisualState,
    /// Default button of its window; shows the focus outline
    is_default: bool,
    icon: Option<IconSource>,
    icon_cache: IconRasterCache,
    spinner: AnimatedSpin,
    on_click: Option<Box<dyn FnMut()>>,
}

impl IconButton {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_config(handle, IconButtonConfig::default())
    }

    pub fn with_config(handle: SchedulerHandle, config: IconButtonConfig) -> Self {
        let spinner = AnimatedSpin::new(handle, config.spinner.speed);
        Self {
            config,
            bounds: Rect::new(0.0, 0.0, 120.0, 36.0),
            state: VisualState::default(),
            is_default: false,
            icon: None,
            icon_cache: IconRasterCache::new(),
            spinner,
            on_click: None,
        }
    }

    /// Set the click callback
    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &IconButtonConfig {
        &self.config
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = text.into();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// State snapshot used for the next paint
    pub fn visual_state(&self) -> VisualState {
        self.state
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Icon
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_icon(&mut self, icon: IconSource) {
        self.icon = Some(icon);
    }

    /// Load a vector icon from a file
    pub fn load_svg(&mut self, path: impl AsRef<FilePath>) -> Result<(), RenderError> {
        let document = SvgDocument::from_file(path)?;
        self.icon = Some(IconSource::Vector(Arc::new(document)));
        Ok(())
    }

    pub fn clear_icon(&mut self) {
        self.icon = None;
        self.icon_cache.reset();
    }

    /// Replace every fill and stroke color of a vector icon
    pub fn set_icon_overrides(&mut self, fill: Option<Color>, stroke: Option<Color>) {
        self.config.icon_fill_override = fill;
        self.config.icon_stroke_override = stroke;
    }

    /// Number of icon rasterizations so far
    pub fn icon_rebuild_count(&self) -> u64 {
        self.icon_cache.rebuild_count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether presses and clicks are accepted
    pub fn can_interact(&self) -> bool {
        self.state.enabled && !(self.state.loading && self.config.disable_while_loading)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        if enabled {
            if self.state.loading {
                self.spinner.start();
            }
        } else {
            self.state.pressed = false;
            self.state.focused = false;
            self.spinner.stop();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Enter or leave loading mode; the spinner runs only while enabled
    pub fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        if loading && self.state.enabled {
            self.spinner.start();
        } else {
            self.spinner.stop();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focused = focused && self.state.enabled;
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.is_spinning()
    }

    pub fn spinner_angle(&self) -> f32 {
        self.spinner.angle()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    pub fn pointer_enter(&mut self) {
        self.state.hovered = true;
    }

    /// Leaving cancels a press
    pub fn pointer_leave(&mut self) {
        self.state.hovered = false;
        self.state.pressed = false;
    }

    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        if button != PointerButton::Primary || !self.can_interact() {
            return;
        }
        if self.bounds.contains(point) {
            self.state.pressed = true;
            self.state.focused = true;
        }
    }

    /// Returns true when the release produced a click
    pub fn pointer_up(&mut self, point: Point, button: PointerButton) -> bool {
        if button != PointerButton::Primary || !self.state.pressed {
            return false;
        }
        self.state.pressed = false;
        self.bounds.contains(point) && self.perform_click()
    }

    pub fn key_down(&mut self, key: Key) {
        if key.is_activation() && self.can_interact() {
            self.state.pressed = true;
        }
    }

    /// Returns true when the release produced a click
    pub fn key_up(&mut self, key: Key) -> bool {
        if !key.is_activation() || !self.can_interact() {
            return false;
        }
        self.state.pressed = false;
        self.perform_click()
    }

    /// Fire the click callback if the button accepts input
    pub fn perform_click(&mut self) -> bool {
        if !self.can_interact() {
            return false;
        }
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    /// Paint all phases into `ctx`
    pub fn paint(
        &mut self,
        ctx: &mut dyn DrawContext,
        measurer: &dyn TextMeasurer,
        scale: f32,
    ) -> PaintReport {
        let frame = PaintFrame::new(self.bounds, scale, measurer);
        ControlRenderer::paint(self, ctx, &frame)
    }

    fn paint_content(
        &mut self,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        let scale = frame.checked_scale()?;
        let border = self.config.palette.border_width;
        let content = frame
            .bounds
            .inset(border, border)
            .deflate(self.config.padding);

        let image_size = self
            .icon
            .as_ref()
            .map(|_| self.config.image_size)
            .filter(|size| size.is_positive());

        // A failed measurement drops the label but keeps the icon
        let mut measure_error = None;
        let text_size = if self.config.text.is_empty() {
            None
        } else {
            match frame
                .measurer
                .measure(&self.config.text, &self.config.text_style)
            {
                Ok(size) => Some(size),
                Err(err) => {
                    measure_error = Some(err);
                    None
                }
            }
        };

        let layout = layout_content(content, image_size, text_size, &self.config.content);

        if let (Some(rect), Some(source)) = (layout.image, self.icon.as_ref()) {
            let raster_scale = if self.config.auto_scale_icon { scale } else { 1.0 };
            let bitmap = self.icon_cache.get_raster(
                source,
                self.config.image_size,
                raster_scale,
                self.config.icon_fill_override,
                self.config.icon_stroke_override,
            );
            if let Some(bitmap) = bitmap {
                ctx.draw_bitmap(&bitmap, rect, &self.icon_options());
            }
        }

        if let Some(rect) = layout.text {
            let color = resolve_text_color(
                &self.state,
                self.config.text_style.color,
                self.config.overlay_while_loading,
            );
            let style = self.config.text_style.clone().with_color(color);
            ctx.draw_text(&self.config.text, rect.origin, &style);
        }

        match measure_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn icon_options(&self) -> ImageOptions {
        let effective_enabled =
            self.state.enabled && !(self.state.loading && self.config.overlay_while_loading);
        match resolve_icon_tint(&self.state, &self.config.icon_tints) {
            Some(tint) => ImageOptions::new().with_tint(tint),
            None if !effective_enabled => ImageOptions::new().with_opacity(DISABLED_ICON_OPACITY),
            None => ImageOptions::new(),
        }
    }

    fn paint_overlays(&mut self, ctx: &mut dyn DrawContext, frame: &PaintFrame<'_>) {
        let body = rounded_rect_path(frame.bounds, self.config.corner_radius);
        let style = resolve(&self.state, &self.config.palette);

        if style.loading_overlay {
            if self.config.overlay_while_loading {
                draw_loading_overlay(ctx, &body, self.config.overlay_opacity);
            }
            draw_spinner(ctx, frame.bounds, &self.config.spinner, self.spinner.angle());
        }

        if !self.config.show_focus_outline {
            return;
        }
        let focus_color = style
            .focus
            .map(|layer| layer.color)
            .or_else(|| self.is_default.then_some(self.config.palette.focus));
        if let Some(color) = focus_color {
            draw_focus_outline(ctx, &body, self.config.focus_inset, color);
        }
    }
}

impl Control for IconButton {
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        match phase {
            Phase::Shadow => {
                draw_shadow(ctx, frame.bounds, self.config.corner_radius, &self.config.shadow);
                Ok(())
            }
            Phase::Body => {
                let body = rounded_rect_path(frame.bounds, self.config.corner_radius);
                draw_body(ctx, &body, &resolve(&self.state, &self.config.palette));
                Ok(())
            }
            Phase::Content => self.paint_content(ctx, frame),
            Phase::Overlays => {
                self.paint_overlays(ctx, frame);
                Ok(())
            }
        }
    }
}
