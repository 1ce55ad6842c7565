//! Sliding on/off switch
//!
//! A pill-shaped track with a round thumb. The thumb position is a travel
//! value in `0.0..=1.0` driven by an `AnimatedSlide`, so reversing mid-flight
//! continues from wherever the thumb currently is.
//!
//! `ToggleConfig::framed()` gives the bordered variant: a black frame, a
//! darker track while hovered and a pale yellow thumb under the pointer.
//!
//! # Example
//!
//! ```ignore
//! let mut wifi = ToggleSwitch::new(scheduler.handle())
//!     .on_change(|on| tracing::info!(on, "wifi toggled"));
//! wifi.set_bounds(Rect::new(10.0, 10.0, 60.0, 30.0));
//! wifi.toggle();
//! ```

use roundel_animation::{AnimatedSlide, Easing, SchedulerHandle};
use roundel_core::{Color, DrawContext, Gradient, Point, Rect, Size, Stroke, TextStyle};
use roundel_paint::{
    ellipse_path, expand_contour, inset_contour, rounded_rect_path, ContourExt,
};

use crate::error::RenderError;
use crate::layout::{align_within, ContentAlignment};
use crate::renderer::{Control, ControlRenderer, PaintFrame, PaintReport, Phase};
use crate::resolver::resolve_text_color;
use crate::state::{Key, PointerButton, VisualState};
use crate::text::TextMeasurer;
use crate::theme::Theme;

/// Switch colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleColors {
    pub on_track: Color,
    pub off_track: Color,
    pub on_thumb: Color,
    pub off_thumb: Color,
    /// Top of the hovered-thumb gradient
    pub thumb_hover_start: Color,
    /// Bottom of the hovered-thumb gradient
    pub thumb_hover_end: Color,
    /// Solid thumb while the pointer is over the switch
    pub thumb_hover: Option<Color>,
    /// Track while the pointer is over the switch, checked or not
    pub hover_track: Option<Color>,
    /// Frame color, drawn when the config has a border width
    pub border: Color,
    pub focus_glow: Color,
}

impl Default for ToggleColors {
    fn default() -> Self {
        Self {
            on_track: Color::MEDIUM_SEA_GREEN,
            off_track: Color::GRAY,
            on_thumb: Color::WHITE,
            off_thumb: Color::WHITE_SMOKE,
            thumb_hover_start: Color::WHITE,
            thumb_hover_end: Color::GAINSBORO,
            thumb_hover: None,
            hover_track: None,
            border: Color::BLACK,
            focus_glow: Color::DEEP_SKY_BLUE,
        }
    }
}

/// Toggle switch configuration
#[derive(Clone, Debug)]
pub struct ToggleConfig {
    pub colors: ToggleColors,
    pub thumb_hover_gradient: bool,
    pub show_focus_glow: bool,
    pub glow_spread: f32,
    pub glow_layers: u32,
    /// Frame width; no frame at 0
    pub border_width: f32,
    /// Slide the thumb instead of jumping
    pub animate: bool,
    pub animation_ticks: u32,
    pub easing: Easing,
    /// Draw the on/off labels on the free side of the track
    pub show_text: bool,
    pub on_text: String,
    pub off_text: String,
    pub text_style: TextStyle,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            colors: ToggleColors::default(),
            thumb_hover_gradient: true,
            show_focus_glow: true,
            glow_spread: 10.0,
            glow_layers: 8,
            border_width: 0.0,
            animate: true,
            animation_ticks: 10,
            easing: Easing::EaseOut,
            show_text: false,
            on_text: "ON".to_string(),
            off_text: "OFF".to_string(),
            text_style: TextStyle::new(10.0).with_color(Color::WHITE),
        }
    }
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            colors: theme.toggle,
            ..Self::default()
        }
    }

    /// Framed switch: gray and green tracks, dark gray on hover, a 2px black
    /// border and a light yellow thumb under the pointer
    pub fn framed() -> Self {
        Self {
            colors: ToggleColors {
                on_track: Color::GREEN,
                off_track: Color::GRAY,
                on_thumb: Color::WHITE,
                off_thumb: Color::WHITE,
                thumb_hover: Some(Color::LIGHT_YELLOW),
                hover_track: Some(Color::DARK_GRAY),
                border: Color::BLACK,
                ..ToggleColors::default()
            },
            thumb_hover_gradient: false,
            border_width: 2.0,
            ..Self::default()
        }
    }

    pub fn colors(mut self, colors: ToggleColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn thumb_hover_gradient(mut self, enabled: bool) -> Self {
        self.thumb_hover_gradient = enabled;
        self
    }

    pub fn focus_glow(mut self, show: bool, spread: f32, layers: u32) -> Self {
        self.show_focus_glow = show;
        self.glow_spread = spread.max(0.0);
        self.glow_layers = layers;
        self
    }

    /// Frame width, at least 1 when set; 0 removes the frame
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = if width > 0.0 { width.max(1.0) } else { 0.0 };
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Transition length; at least one tick
    pub fn animation_ticks(mut self, ticks: u32) -> Self {
        self.animation_ticks = ticks.max(1);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn labels(mut self, on: impl Into<String>, off: impl Into<String>) -> Self {
        self.show_text = true;
        self.on_text = on.into();
        self.off_text = off.into();
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// Horizontal thumb padding: `max(2, floor(w / 30))`
pub fn thumb_padding(bounds: Rect) -> f32 {
    (bounds.width() / 30.0).floor().max(2.0)
}

/// On/off switch with an animated thumb
pub struct ToggleSwitch {
    config: ToggleConfig,
    bounds: Rect,
    state: VisualState,
    checked: bool,
    thumb_hovered: bool,
    travel: AnimatedSlide,
    on_change: Option<Box<dyn FnMut(bool)>>,
}

impl ToggleSwitch {
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_config(handle, ToggleConfig::default())
    }

    pub fn with_config(handle: SchedulerHandle, config: ToggleConfig) -> Self {
        let travel = AnimatedSlide::new(handle, 0.0).with_easing(config.easing);
        Self {
            config,
            bounds: Rect::new(0.0, 0.0, 60.0, 30.0),
            state: VisualState::default(),
            checked: false,
            thumb_hovered: false,
            travel,
            on_change: None,
        }
    }

    /// Set the change callback
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ToggleConfig {
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

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Current thumb travel, 0 off and 1 on
    pub fn travel(&self) -> f32 {
        self.travel.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.travel.is_animating()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    /// Change the checked state, animating from the current travel
    pub fn set_checked(&mut self, checked: bool) {
        if checked == self.checked {
            return;
        }
        self.checked = checked;
        let target = if checked { 1.0 } else { 0.0 };
        if self.config.animate && self.state.enabled {
            self.travel.retarget(target, self.config.animation_ticks.max(1));
        } else {
            self.travel.snap_to(target);
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(checked);
        }
    }

    pub fn toggle(&mut self) {
        self.set_checked(!self.checked);
    }

    /// Disabling finishes any running transition
    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        if !enabled {
            self.state.focused = false;
            self.state.pressed = false;
            self.thumb_hovered = false;
            let target = if self.checked { 1.0 } else { 0.0 };
            self.travel.snap_to(target);
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.state.focused = focused && self.state.enabled;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Space/Enter toggle, Left forces off, Right forces on
    pub fn key_down(&mut self, key: Key) {
        if !self.state.enabled {
            return;
        }
        match key {
            Key::Space | Key::Enter => self.toggle(),
            Key::Left => self.set_checked(false),
            Key::Right => self.set_checked(true),
            Key::Up | Key::Down | Key::Other => {}
        }
    }

    /// A press on the left half turns off, on the right half turns on
    pub fn pointer_down(&mut self, point: Point, button: PointerButton) {
        if button != PointerButton::Primary
            || !self.state.enabled
            || !self.bounds.contains(point)
        {
            return;
        }
        self.state.focused = true;
        self.set_checked(point.x >= self.bounds.center().x);
    }

    pub fn pointer_move(&mut self, point: Point) {
        if !self.state.enabled {
            return;
        }
        self.state.hovered = self.bounds.contains(point);
        self.thumb_hovered = self.thumb_rect().contains(point);
    }

    pub fn pointer_leave(&mut self) {
        self.state.hovered = false;
        self.thumb_hovered = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────────

    /// Thumb rect at the current travel
    pub fn thumb_rect(&self) -> Rect {
        let pad = thumb_padding(self.bounds);
        let diameter = self.bounds.height() - 2.0 * pad;
        let span = self.bounds.width() - 2.0 * pad - diameter;
        Rect::new(
            self.bounds.x() + pad + self.travel() * span,
            self.bounds.y() + pad,
            diameter,
            diameter,
        )
    }

    fn track_color(&self) -> Color {
        let colors = &self.config.colors;
        let hover = colors.hover_track.filter(|_| self.state.hovered && self.state.enabled);
        let color = if let Some(hover) = hover {
            hover
        } else if self.checked {
            colors.on_track
        } else {
            colors.off_track
        };
        self.dim_if_disabled(color)
    }

    fn thumb_color(&self) -> Color {
        let colors = &self.config.colors;
        let hover = colors.thumb_hover.filter(|_| self.state.hovered && self.state.enabled);
        let color = if let Some(hover) = hover {
            hover
        } else if self.checked {
            colors.on_thumb
        } else {
            colors.off_thumb
        };
        self.dim_if_disabled(color)
    }

    fn dim_if_disabled(&self, color: Color) -> Color {
        if self.state.enabled {
            color
        } else {
            color.blend(Color::CONTROL, 0.5)
        }
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

    fn paint_thumb(&self, ctx: &mut dyn DrawContext) {
        let thumb = self.thumb_rect();
        let contour = ellipse_path(thumb);
        if self.thumb_hovered && self.config.thumb_hover_gradient && self.state.enabled {
            let gradient = Gradient::vertical(
                thumb,
                self.config.colors.thumb_hover_start,
                self.config.colors.thumb_hover_end,
            );
            ctx.fill_contour(&contour, gradient.into());
        } else {
            ctx.fill_contour(&contour, self.thumb_color().into());
        }
    }

    /// Label centered in the part of the track the thumb does not cover
    fn paint_label(
        &self,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        let text = if self.checked {
            &self.config.on_text
        } else {
            &self.config.off_text
        };
        if text.is_empty() {
            return Ok(());
        }
        let size = frame.measurer.measure(text, &self.config.text_style)?;
        let thumb = self.thumb_rect();
        let free = if self.checked {
            Rect::new(
                frame.bounds.x(),
                frame.bounds.y(),
                thumb.x() - frame.bounds.x(),
                frame.bounds.height(),
            )
        } else {
            Rect::new(
                thumb.right(),
                frame.bounds.y(),
                frame.bounds.right() - thumb.right(),
                frame.bounds.height(),
            )
        };
        let rect = align_within(free, size, ContentAlignment::MiddleCenter);
        let color = resolve_text_color(&self.state, self.config.text_style.color, false);
        let style = self.config.text_style.clone().with_color(color);
        ctx.draw_text(text, rect.origin, &style);
        Ok(())
    }

    /// Glow rings around the track, outermost first
    fn paint_focus_glow(&self, ctx: &mut dyn DrawContext, bounds: Rect) {
        let layers = self.config.glow_layers;
        if layers == 0 {
            return;
        }
        let radius = bounds.height() / 2.0;
        let track = rounded_rect_path(bounds, radius);
        for i in (1..=layers).rev() {
            let t = i as f32 / layers as f32;
            let alpha = (80.0 * t) as u8;
            let grow = (self.config.glow_spread * t).round();
            let width = (2.0 * t).round().max(1.0);
            let ring = expand_contour(&track, grow, radius + grow);
            ctx.stroke_contour(
                &ring,
                &Stroke::new(width),
                self.config.colors.focus_glow.with_alpha8(alpha).into(),
            );
        }
    }
}

impl Control for ToggleSwitch {
    fn paint_phase(
        &mut self,
        phase: Phase,
        ctx: &mut dyn DrawContext,
        frame: &PaintFrame<'_>,
    ) -> Result<(), RenderError> {
        match phase {
            Phase::Shadow => Ok(()),
            Phase::Body => {
                let track = rounded_rect_path(frame.bounds, frame.bounds.height() / 2.0);
                ctx.fill_contour(&track, self.track_color().into());
                let width = self.config.border_width;
                if width > 0.0 {
                    let half = width / 2.0;
                    let frame_edge = inset_contour(&track, half, track.radius() - half);
                    let color = self.dim_if_disabled(self.config.colors.border);
                    ctx.stroke_contour(&frame_edge, &Stroke::new(width), color.into());
                }
                Ok(())
            }
            Phase::Content => {
                self.paint_thumb(ctx);
                if self.config.show_text {
                    self.paint_label(ctx, frame)?;
                }
                Ok(())
            }
            Phase::Overlays => {
                if self.config.show_focus_glow && self.state.enabled && self.state.focused {
                    self.paint_focus_glow(ctx, frame.bounds);
                }
                Ok(())
            }
        }
    }
}

/// Natural size of a switch for a given height
pub fn preferred_size(height: f32) -> Size {
    Size::new(height * 2.0, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::FixedAdvanceMeasurer;
    use roundel_animation::AnimationScheduler;
    use roundel_core::{Brush, DrawCommand, RecordingContext};
    use std::cell::RefCell;
    use std::rc::Rc;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 60.0, 30.0);

    fn switch(scheduler: &AnimationScheduler, config: ToggleConfig) -> ToggleSwitch {
        let mut toggle = ToggleSwitch::with_config(scheduler.handle(), config);
        toggle.set_bounds(BOUNDS);
        toggle
    }

    fn record(toggle: &mut ToggleSwitch) -> Vec<DrawCommand> {
        let mut ctx = RecordingContext::new(Size::new(100.0, 60.0));
        let report = toggle.paint(&mut ctx, &FixedAdvanceMeasurer::default(), 1.0);
        assert!(report.is_clean(), "{report:?}");
        ctx.take_commands()
    }

    #[test]
    fn test_thumb_geometry() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::new().animate(false));
        assert_eq!(thumb_padding(BOUNDS), 2.0);
        assert_eq!(toggle.thumb_rect(), Rect::new(2.0, 2.0, 26.0, 26.0));

        toggle.set_checked(true);
        assert_eq!(toggle.thumb_rect(), Rect::new(32.0, 2.0, 26.0, 26.0));

        // Wide switch pads by w / 30
        toggle.set_bounds(Rect::new(0.0, 0.0, 120.0, 40.0));
        assert_eq!(toggle.thumb_rect(), Rect::new(84.0, 4.0, 32.0, 32.0));
    }

    #[test]
    fn test_animated_toggle_reaches_target() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.toggle();
        assert!(toggle.is_checked());
        assert!(toggle.is_animating());
        assert_eq!(toggle.travel(), 0.0);

        for _ in 0..10 {
            scheduler.tick();
        }
        assert_eq!(toggle.travel(), 1.0);
        assert!(!toggle.is_animating());
    }

    #[test]
    fn test_reversal_is_continuous() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.toggle();
        for _ in 0..4 {
            scheduler.tick();
        }
        let midway = toggle.travel();
        assert!(midway > 0.0 && midway < 1.0);

        toggle.toggle();
        assert!(!toggle.is_checked());
        assert_eq!(toggle.travel(), midway);

        scheduler.tick();
        let after = toggle.travel();
        assert!(after < midway);
        assert!(midway - after < 0.5);
    }

    #[test]
    fn test_keys() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::new().animate(false));
        toggle.key_down(Key::Right);
        assert!(toggle.is_checked());
        toggle.key_down(Key::Right);
        assert!(toggle.is_checked());
        toggle.key_down(Key::Left);
        assert!(!toggle.is_checked());
        toggle.key_down(Key::Space);
        assert!(toggle.is_checked());
        toggle.key_down(Key::Enter);
        assert!(!toggle.is_checked());
    }

    #[test]
    fn test_pointer_halves() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::new().animate(false));
        toggle.pointer_down(Point::new(45.0, 15.0), PointerButton::Primary);
        assert!(toggle.is_checked());
        assert!(toggle.visual_state().focused);
        toggle.pointer_down(Point::new(50.0, 15.0), PointerButton::Primary);
        assert!(toggle.is_checked());
        toggle.pointer_down(Point::new(5.0, 15.0), PointerButton::Primary);
        assert!(!toggle.is_checked());
    }

    #[test]
    fn test_disabled_ignores_input() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.set_enabled(false);
        toggle.key_down(Key::Space);
        toggle.pointer_down(Point::new(45.0, 15.0), PointerButton::Primary);
        assert!(!toggle.is_checked());
    }

    #[test]
    fn test_disable_finishes_transition() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.toggle();
        scheduler.tick();
        toggle.set_enabled(false);
        assert_eq!(toggle.travel(), 1.0);
        assert!(!scheduler.has_active_animations());
        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_change_callback() {
        let scheduler = AnimationScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut toggle = switch(&scheduler, ToggleConfig::default())
            .on_change(move |on| sink.borrow_mut().push(on));

        toggle.set_checked(true);
        toggle.set_checked(true);
        toggle.toggle();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_dead_scheduler_jumps() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        drop(scheduler);
        toggle.toggle();
        assert_eq!(toggle.travel(), 1.0);
        assert!(!toggle.is_animating());
    }

    #[test]
    fn test_paint_track_and_thumb() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::new().animate(false));
        toggle.set_checked(true);
        let commands = record(&mut toggle);
        assert_eq!(commands.len(), 2);
        match (&commands[0], &commands[1]) {
            (
                DrawCommand::FillPath { brush: track, .. },
                DrawCommand::FillPath { brush: thumb, path },
            ) => {
                assert_eq!(track.primary_color(), Color::MEDIUM_SEA_GREEN);
                assert_eq!(thumb.primary_color(), Color::WHITE);
                assert_eq!(path.bounds(), Rect::new(32.0, 2.0, 26.0, 26.0));
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_hovered_thumb_uses_gradient() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.pointer_move(Point::new(10.0, 15.0));
        let commands = record(&mut toggle);
        match &commands[1] {
            DrawCommand::FillPath { brush, .. } => {
                assert!(matches!(brush, Brush::Gradient(_)));
                assert_eq!(brush.primary_color(), Color::WHITE);
            }
            other => panic!("expected thumb fill, got {other:?}"),
        }

        // Track hover alone keeps the solid thumb
        toggle.pointer_move(Point::new(45.0, 15.0));
        let commands = record(&mut toggle);
        assert!(matches!(
            &commands[1],
            DrawCommand::FillPath {
                brush: Brush::Solid(_),
                ..
            }
        ));
    }

    #[test]
    fn test_focus_glow_layers() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.set_focused(true);
        let commands = record(&mut toggle);
        assert_eq!(commands.len(), 2 + 8);

        let rings: Vec<(u8, f32, Rect)> = commands[2..]
            .iter()
            .map(|c| match c {
                DrawCommand::StrokePath {
                    path,
                    stroke,
                    brush,
                } => (brush.primary_color().to_rgba8()[3], stroke.width, path.bounds()),
                other => panic!("expected glow ring, got {other:?}"),
            })
            .collect();

        // Outermost: t = 1
        assert_eq!(rings[0].0, 80);
        assert_eq!(rings[0].1, 2.0);
        assert_eq!(rings[0].2, Rect::new(-10.0, -10.0, 80.0, 50.0));
        // Innermost: t = 1/8
        assert_eq!(rings[7].0, 10);
        assert_eq!(rings[7].1, 1.0);
        assert_eq!(rings[7].2, Rect::new(-1.0, -1.0, 62.0, 32.0));
    }

    #[test]
    fn test_disabled_colors_are_dimmed() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::default());
        toggle.set_enabled(false);
        let commands = record(&mut toggle);
        match &commands[0] {
            DrawCommand::FillPath { brush, .. } => {
                assert_eq!(
                    brush.primary_color(),
                    Color::GRAY.blend(Color::CONTROL, 0.5)
                );
            }
            other => panic!("expected track fill, got {other:?}"),
        }
    }

    #[test]
    fn test_label_on_free_side() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(
            &scheduler,
            ToggleConfig::new().animate(false).labels("ON", "OFF"),
        );
        let commands = record(&mut toggle);
        match &commands[2] {
            DrawCommand::DrawText { text, origin, .. } => {
                assert_eq!(text, "OFF");
                // Right of the thumb
                assert!(origin.x >= 28.0);
            }
            other => panic!("expected label, got {other:?}"),
        }

        toggle.set_checked(true);
        let commands = record(&mut toggle);
        match &commands[2] {
            DrawCommand::DrawText { text, origin, .. } => {
                assert_eq!(text, "ON");
                assert!(origin.x < 32.0);
            }
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn test_preferred_size() {
        assert_eq!(preferred_size(24.0), Size::new(48.0, 24.0));
    }

    #[test]
    fn test_framed_switch() {
        let scheduler = AnimationScheduler::new();
        let mut toggle = switch(&scheduler, ToggleConfig::framed().animate(false));
        toggle.set_bounds(Rect::new(0.0, 0.0, 100.0, 50.0));

        let commands = record(&mut toggle);
        assert_eq!(commands.len(), 3);
        match (&commands[0], &commands[1]) {
            (
                DrawCommand::FillPath { brush: track, .. },
                DrawCommand::StrokePath {
                    path,
                    stroke,
                    brush,
                },
            ) => {
                assert_eq!(track.primary_color(), Color::GRAY);
                assert_eq!(stroke.width, 2.0);
                assert_eq!(brush.primary_color(), Color::BLACK);
                assert_eq!(path.bounds(), Rect::new(1.0, 1.0, 98.0, 48.0));
            }
            other => panic!("unexpected commands {other:?}"),
        }

        toggle.set_checked(true);
        let commands = record(&mut toggle);
        match &commands[0] {
            DrawCommand::FillPath { brush, .. } => {
                assert_eq!(brush.primary_color(), Color::GREEN)
            }
            other => panic!("expected track fill, got {other:?}"),
        }

        // Hover wins over the checked track and recolors the thumb
        toggle.pointer_move(Point::new(10.0, 25.0));
        let commands = record(&mut toggle);
        match (&commands[0], &commands[2]) {
            (
                DrawCommand::FillPath { brush: track, .. },
                DrawCommand::FillPath { brush: thumb, .. },
            ) => {
                assert_eq!(track.primary_color(), Color::DARK_GRAY);
                assert_eq!(*thumb, Brush::Solid(Color::LIGHT_YELLOW));
            }
            other => panic!("unexpected commands {other:?}"),
        }

        toggle.pointer_leave();
        let commands = record(&mut toggle);
        match &commands[2] {
            DrawCommand::FillPath { brush, .. } => assert_eq!(*brush, Brush::Solid(Color::WHITE)),
            other => panic!("expected thumb fill, got {other:?}"),
        }
    }

    #[test]
    fn test_border_width_floor() {
        assert_eq!(ToggleConfig::new().border_width(0.5).border_width, 1.0);
        assert_eq!(ToggleConfig::new().border_width(-2.0).border_width, 0.0);
        assert_eq!(ToggleConfig::new().border_width, 0.0);
    }
}
