//! Visual state resolution
//!
//! Maps a `VisualState` and a `Palette` to the colors a control paints with.
//! Precedence is `disabled > pressed > hovered > normal`; focus and loading
//! only add layers on top of the base style.

use roundel_core::{Brush, Color, Gradient, Rect};

use crate::palette::{FillGradient, IconTints, Palette};
use crate::state::VisualState;

/// Additive focus indication drawn in the overlay phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusLayer {
    pub color: Color,
}

/// Colors and widths for one paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub fill: Color,
    /// Vertical gradient painted instead of `fill` when set
    pub fill_gradient: Option<FillGradient>,
    pub border: Color,
    pub stroke_width: f32,
    pub focus: Option<FocusLayer>,
    pub loading_overlay: bool,
}

/// Resolve the base style for a state
pub fn resolve(state: &VisualState, palette: &Palette) -> ResolvedStyle {
    let (fill, border) = if !state.enabled {
        (
            palette.effective_disabled_fill(),
            palette.effective_disabled_border(),
        )
    } else if state.pressed {
        (palette.pressed_fill, palette.pressed_border)
    } else if state.hovered {
        (palette.hover_fill, palette.hover_border)
    } else {
        (palette.fill, palette.border)
    };

    let fill_gradient = if !state.enabled {
        palette.effective_disabled_gradient()
    } else {
        palette.gradients.map(|g| {
            if state.pressed {
                g.pressed
            } else if state.hovered {
                g.hover
            } else {
                g.normal
            }
        })
    };

    ResolvedStyle {
        fill,
        fill_gradient,
        border,
        stroke_width: palette.border_width,
        focus: (state.enabled && state.focused).then_some(FocusLayer {
            color: palette.focus,
        }),
        loading_overlay: state.loading,
    }
}

impl ResolvedStyle {
    /// Brush for the body fill spanning `rect`
    pub fn fill_brush(&self, rect: Rect) -> Brush {
        match self.fill_gradient {
            Some(g) => Gradient::vertical(rect, g.start, g.end).into(),
            None => self.fill.into(),
        }
    }
}

/// Resolve the icon tint; `None` means draw the icon untinted
pub fn resolve_icon_tint(state: &VisualState, tints: &IconTints) -> Option<Color> {
    if !state.enabled {
        return tints.disabled;
    }
    if state.pressed {
        if let Some(color) = tints.pressed {
            return Some(color);
        }
    }
    if state.hovered {
        if let Some(color) = tints.hover {
            return Some(color);
        }
    }
    tints.normal
}

/// Text color for a state
///
/// Disabled text is blended halfway toward gray; text under the loading dim
/// layer is drawn at alpha 180/255.
pub fn resolve_text_color(state: &VisualState, base: Color, dimmed: bool) -> Color {
    let color = if state.enabled {
        base
    } else {
        base.blend(Color::GRAY_TEXT, 0.5)
    };
    if state.loading && dimmed {
        color.with_alpha8(180)
    } else {
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::default()
    }

    #[test]
    fn test_normal_state() {
        let style = resolve(&VisualState::new(), &palette());
        assert_eq!(style.fill, palette().fill);
        assert_eq!(style.border, palette().border);
        assert_eq!(style.stroke_width, 1.0);
        assert!(style.focus.is_none());
        assert!(!style.loading_overlay);
    }

    #[test]
    fn test_pressed_wins_over_hovered() {
        let state = VisualState::new().with_hovered(true).with_pressed(true);
        let style = resolve(&state, &palette());
        assert_eq!(style.fill, palette().pressed_fill);
        assert_eq!(style.border, palette().pressed_border);
    }

    fn gradient_palette() -> Palette {
        Palette::default().gradients(
            FillGradient::new(Color::LIME_GREEN, Color::LIGHT_GREEN),
            FillGradient::new(Color::FOREST_GREEN, Color::MEDIUM_SEA_GREEN),
            FillGradient::new(Color::SEA_GREEN, Color::DARK_OLIVE_GREEN),
        )
    }

    #[test]
    fn test_pressed_gradient_wins_over_hovered() {
        let palette = gradient_palette();
        let state = VisualState::new().with_hovered(true).with_pressed(true);
        let style = resolve(&state, &palette);
        assert_eq!(
            style.fill_gradient,
            Some(FillGradient::new(Color::SEA_GREEN, Color::DARK_OLIVE_GREEN))
        );

        let rect = Rect::new(0.0, 10.0, 100.0, 40.0);
        match style.fill_brush(rect) {
            Brush::Gradient(Gradient::Linear { start, end, stops }) => {
                assert_eq!((start.y, end.y), (10.0, 50.0));
                assert_eq!(stops[0].color, Color::SEA_GREEN);
                assert_eq!(stops[1].color, Color::DARK_OLIVE_GREEN);
            }
            other => panic!("expected a linear gradient, got {:?}", other),
        }

        let hovered = resolve(&VisualState::new().with_hovered(true), &palette);
        assert_eq!(
            hovered.fill_gradient.map(|g| g.start),
            Some(Color::FOREST_GREEN)
        );
        let normal = resolve(&VisualState::new(), &palette);
        assert_eq!(normal.fill_gradient.map(|g| g.end), Some(Color::LIGHT_GREEN));
    }

    #[test]
    fn test_disabled_gradient_wins_over_pressed() {
        let palette = gradient_palette();
        let state = VisualState::new()
            .with_enabled(false)
            .with_hovered(true)
            .with_pressed(true);
        let style = resolve(&state, &palette);
        assert_eq!(style.fill_gradient, palette.effective_disabled_gradient());

        let solid = resolve(&state, &palette.disabled_fill(Color::GRAY));
        assert!(solid.fill_gradient.is_none());
        assert_eq!(
            solid.fill_brush(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Brush::Solid(Color::GRAY)
        );
    }

    #[test]
    fn test_solid_palette_has_no_gradient() {
        let style = resolve(&VisualState::new().with_pressed(true), &palette());
        assert!(style.fill_gradient.is_none());
        assert_eq!(
            style.fill_brush(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Brush::Solid(palette().pressed_fill)
        );
    }

    #[test]
    fn test_hovered() {
        let style = resolve(&VisualState::new().with_hovered(true), &palette());
        assert_eq!(style.fill, palette().hover_fill);
        assert_eq!(style.border, palette().hover_border);
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let state = VisualState::new()
            .with_enabled(false)
            .with_hovered(true)
            .with_pressed(true)
            .with_focused(true);
        let style = resolve(&state, &palette());
        assert_eq!(style.fill, palette().effective_disabled_fill());
        assert_eq!(style.border, palette().effective_disabled_border());
        assert!(style.focus.is_none());
    }

    #[test]
    fn test_focus_is_additive() {
        let unfocused = resolve(&VisualState::new().with_hovered(true), &palette());
        let focused = resolve(
            &VisualState::new().with_hovered(true).with_focused(true),
            &palette(),
        );
        assert_eq!(unfocused.fill, focused.fill);
        assert_eq!(unfocused.border, focused.border);
        assert_eq!(
            focused.focus,
            Some(FocusLayer {
                color: palette().focus
            })
        );
    }

    #[test]
    fn test_loading_keeps_base_style() {
        let idle = resolve(&VisualState::new().with_pressed(true), &palette());
        let loading = resolve(
            &VisualState::new().with_pressed(true).with_loading(true),
            &palette(),
        );
        assert!(loading.loading_overlay);
        assert_eq!(idle.fill, loading.fill);
        assert_eq!(idle.border, loading.border);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let state = VisualState::new().with_hovered(true).with_focused(true);
        assert_eq!(resolve(&state, &palette()), resolve(&state, &palette()));
    }

    #[test]
    fn test_icon_tint_precedence() {
        let tints = IconTints::new()
            .normal(Color::BLACK)
            .hover(Color::DODGER_BLUE)
            .pressed(Color::ROYAL_BLUE);

        assert_eq!(
            resolve_icon_tint(&VisualState::new(), &tints),
            Some(Color::BLACK)
        );
        assert_eq!(
            resolve_icon_tint(&VisualState::new().with_hovered(true), &tints),
            Some(Color::DODGER_BLUE)
        );
        assert_eq!(
            resolve_icon_tint(
                &VisualState::new().with_hovered(true).with_pressed(true),
                &tints
            ),
            Some(Color::ROYAL_BLUE)
        );
        assert_eq!(
            resolve_icon_tint(
                &VisualState::new().with_enabled(false).with_pressed(true),
                &tints
            ),
            Some(Color::GRAY)
        );
    }

    #[test]
    fn test_icon_tint_unset_entries_fall_through() {
        let tints = IconTints::new().normal(Color::BLACK);
        let pressed = VisualState::new().with_hovered(true).with_pressed(true);
        assert_eq!(resolve_icon_tint(&pressed, &tints), Some(Color::BLACK));

        let untinted = IconTints::new();
        assert_eq!(resolve_icon_tint(&pressed, &untinted), None);
        assert_eq!(
            resolve_icon_tint(
                &VisualState::new().with_enabled(false),
                &untinted.disabled(None)
            ),
            None
        );
    }

    #[test]
    fn test_text_color() {
        let base = Color::BLACK;
        assert_eq!(resolve_text_color(&VisualState::new(), base, true), base);

        let disabled = resolve_text_color(&VisualState::new().with_enabled(false), base, true);
        assert!((disabled.r - 0.4275 / 2.0).abs() < 1e-4);

        let loading = resolve_text_color(&VisualState::new().with_loading(true), base, true);
        assert!((loading.a - 180.0 / 255.0).abs() < 1e-6);

        let undimmed = resolve_text_color(&VisualState::new().with_loading(true), base, false);
        assert_eq!(undimmed.a, 1.0);
    }
}
