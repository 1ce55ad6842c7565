//! Color, gradient and brush types

use crate::geometry::{Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5020, 0.5020, 0.5020);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    // Named control colors (8-bit sources noted for reference)
    /// (192, 192, 192)
    pub const SILVER: Color = Color::rgb(0.7529, 0.7529, 0.7529);
    /// (220, 220, 220)
    pub const GAINSBORO: Color = Color::rgb(0.8627, 0.8627, 0.8627);
    /// (245, 245, 245)
    pub const WHITE_SMOKE: Color = Color::rgb(0.9608, 0.9608, 0.9608);
    /// (169, 169, 169)
    pub const DARK_GRAY: Color = Color::rgb(0.6627, 0.6627, 0.6627);
    /// (105, 105, 105)
    pub const DIM_GRAY: Color = Color::rgb(0.4118, 0.4118, 0.4118);
    /// (30, 144, 255)
    pub const DODGER_BLUE: Color = Color::rgb(0.1176, 0.5647, 1.0);
    /// (65, 105, 225)
    pub const ROYAL_BLUE: Color = Color::rgb(0.2549, 0.4118, 0.8824);
    /// (0, 191, 255)
    pub const DEEP_SKY_BLUE: Color = Color::rgb(0.0, 0.7490, 1.0);
    /// (70, 130, 180)
    pub const STEEL_BLUE: Color = Color::rgb(0.2745, 0.5098, 0.7059);
    /// (60, 179, 113)
    pub const MEDIUM_SEA_GREEN: Color = Color::rgb(0.2353, 0.7020, 0.4431);
    /// (50, 205, 50)
    pub const LIME_GREEN: Color = Color::rgb(0.1961, 0.8039, 0.1961);
    /// (144, 238, 144)
    pub const LIGHT_GREEN: Color = Color::rgb(0.5647, 0.9333, 0.5647);
    /// (34, 139, 34)
    pub const FOREST_GREEN: Color = Color::rgb(0.1333, 0.5451, 0.1333);
    /// (46, 139, 87)
    pub const SEA_GREEN: Color = Color::rgb(0.1804, 0.5451, 0.3412);
    /// (85, 107, 47)
    pub const DARK_OLIVE_GREEN: Color = Color::rgb(0.3333, 0.4196, 0.1843);
    /// (0, 128, 0)
    pub const GREEN: Color = Color::rgb(0.0, 0.5020, 0.0);
    /// (255, 255, 224)
    pub const LIGHT_YELLOW: Color = Color::rgb(1.0, 1.0, 0.8784);
    /// Host control face (240, 240, 240)
    pub const CONTROL: Color = Color::rgb(0.9412, 0.9412, 0.9412);
    /// Host disabled text (109, 109, 109)
    pub const GRAY_TEXT: Color = Color::rgb(0.4275, 0.4275, 0.4275);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::from_rgba8(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Replace alpha with an 8-bit value
    pub fn with_alpha8(self, alpha: u8) -> Self {
        self.with_alpha(alpha as f32 / 255.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Quantize to 8-bit channels
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Mix this color toward `other` by `amount`, keeping this color's alpha
    pub fn blend(&self, other: Color, amount: f32) -> Color {
        Color::lerp(self, &other, amount).with_alpha(self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gradients
// ─────────────────────────────────────────────────────────────────────────────

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        start: Point,
        end: Point,
        /// Color stops (sorted by offset)
        stops: Vec<GradientStop>,
    },
    /// Radial gradient from center outward
    Radial {
        center: Point,
        radius: f32,
        /// Color stops (sorted by offset)
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Create a simple linear gradient with two colors
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Create a linear gradient with multiple stops
    pub fn linear_with_stops(start: Point, end: Point, stops: Vec<GradientStop>) -> Self {
        Gradient::Linear { start, end, stops }
    }

    /// Top-to-bottom gradient spanning `rect`
    pub fn vertical(rect: Rect, from: Color, to: Color) -> Self {
        Self::linear(
            Point::new(rect.x(), rect.y()),
            Point::new(rect.x(), rect.bottom()),
            from,
            to,
        )
    }

    /// Create a radial gradient with multiple stops
    pub fn radial_with_stops(center: Point, radius: f32, stops: Vec<GradientStop>) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops,
        }
    }

    /// Get the gradient stops
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        }
    }

    /// Get the first color in the gradient (or BLACK if no stops)
    pub fn first_color(&self) -> Color {
        self.stops()
            .first()
            .map(|s| s.color)
            .unwrap_or(Color::BLACK)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Brush
// ─────────────────────────────────────────────────────────────────────────────

/// Brush for filling and stroking shapes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
}

impl Brush {
    /// The solid color, or the first gradient stop
    pub fn primary_color(&self) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::Gradient(gradient) => gradient.first_color(),
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}
