//! Per-state colors
//!
//! A `Palette` holds the fill and border for each interaction state. Disabled
//! colors are derived from the normal ones unless set explicitly. Fills may
//! optionally be top-to-bottom gradients per state.

use roundel_core::Color;

/// Fill and border colors per interaction state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub fill: Color,
    pub hover_fill: Color,
    pub pressed_fill: Color,
    /// Derived as `fill` blended halfway toward `Color::CONTROL` when unset
    pub disabled_fill: Option<Color>,
    pub border: Color,
    pub hover_border: Color,
    pub pressed_border: Color,
    /// Derived as `border` blended halfway toward `Color::GRAY_TEXT` when unset
    pub disabled_border: Option<Color>,
    pub border_width: f32,
    /// Color of the additive focus layer
    pub focus: Color,
    /// Vertical gradient fills; replace the solid fills when set
    pub gradients: Option<StateGradients>,
}

/// Top and bottom colors of a vertical fill
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillGradient {
    pub start: Color,
    pub end: Color,
}

impl FillGradient {
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Both ends blended toward `target`
    pub fn blend(&self, target: Color, t: f32) -> Self {
        Self::new(self.start.blend(target, t), self.end.blend(target, t))
    }
}

/// Gradient fill for each enabled interaction state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateGradients {
    pub normal: FillGradient,
    pub hover: FillGradient,
    pub pressed: FillGradient,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            hover_fill: Color::from_rgba8(250, 250, 255, 255),
            pressed_fill: Color::from_rgba8(235, 240, 255, 255),
            disabled_fill: None,
            border: Color::SILVER,
            hover_border: Color::DODGER_BLUE,
            pressed_border: Color::ROYAL_BLUE,
            disabled_border: None,
            border_width: 1.0,
            focus: Color::DODGER_BLUE.with_alpha8(120),
            gradients: None,
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normal, hover and pressed fills
    pub fn fills(mut self, normal: Color, hover: Color, pressed: Color) -> Self {
        self.fill = normal;
        self.hover_fill = hover;
        self.pressed_fill = pressed;
        self
    }

    /// Set normal, hover and pressed borders
    pub fn borders(mut self, normal: Color, hover: Color, pressed: Color) -> Self {
        self.border = normal;
        self.hover_border = hover;
        self.pressed_border = pressed;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }

    pub fn focus(mut self, color: Color) -> Self {
        self.focus = color;
        self
    }

    /// Fill each state with a vertical gradient
    ///
    /// The solid fills take the start colors so single-color consumers stay
    /// in step.
    pub fn gradients(
        mut self,
        normal: FillGradient,
        hover: FillGradient,
        pressed: FillGradient,
    ) -> Self {
        self.fill = normal.start;
        self.hover_fill = hover.start;
        self.pressed_fill = pressed.start;
        self.gradients = Some(StateGradients {
            normal,
            hover,
            pressed,
        });
        self
    }

    pub fn disabled_fill(mut self, color: Color) -> Self {
        self.disabled_fill = Some(color);
        self
    }

    pub fn disabled_border(mut self, color: Color) -> Self {
        self.disabled_border = Some(color);
        self
    }

    pub fn effective_disabled_fill(&self) -> Color {
        self.disabled_fill
            .unwrap_or_else(|| self.fill.blend(Color::CONTROL, 0.5))
    }

    /// Disabled gradient: the normal gradient blended halfway toward
    /// `Color::CONTROL`, unless an explicit disabled fill forces a solid one
    pub fn effective_disabled_gradient(&self) -> Option<FillGradient> {
        if self.disabled_fill.is_some() {
            return None;
        }
        self.gradients.map(|g| g.normal.blend(Color::CONTROL, 0.5))
    }

    pub fn effective_disabled_border(&self) -> Color {
        self.disabled_border
            .unwrap_or_else(|| self.border.blend(Color::GRAY_TEXT, 0.5))
    }
}

/// Icon tint per interaction state; `None` entries fall through
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconTints {
    pub normal: Option<Color>,
    pub hover: Option<Color>,
    pub pressed: Option<Color>,
    pub disabled: Option<Color>,
}

impl Default for IconTints {
    fn default() -> Self {
        Self {
            normal: None,
            hover: None,
            pressed: None,
            disabled: Some(Color::GRAY),
        }
    }
}

impl IconTints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normal(mut self, color: Color) -> Self {
        self.normal = Some(color);
        self
    }

    pub fn hover(mut self, color: Color) -> Self {
        self.hover = Some(color);
        self
    }

    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    pub fn disabled(mut self, color: Option<Color>) -> Self {
        self.disabled = color;
        self
    }
}
